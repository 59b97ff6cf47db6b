use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use kanban_session::Intent;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Title { title } => {
            ctx.dispatch(Intent::SetBoardTitle { title }).await?;
            output::output_success(serde_json::json!({
                "title": ctx.session.board().title,
            }));
        }
    }
    Ok(())
}

pub fn show(ctx: &CliContext) {
    output::output_success(ctx.session.view());
}
