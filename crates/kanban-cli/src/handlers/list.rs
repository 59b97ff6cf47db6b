use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;
use kanban_domain::ListId;
use kanban_session::Intent;

pub async fn handle(ctx: &mut CliContext, action: ListAction) -> anyhow::Result<()> {
    let list_id = match action {
        ListAction::Add { title } => {
            ctx.dispatch(Intent::AddList { title }).await?;
            ctx.session
                .board()
                .lists
                .last()
                .map(|l| l.id.clone())
                .ok_or_else(|| anyhow::anyhow!("list was not added"))?
        }
        ListAction::Rename { id, title } => {
            let list_id = ListId::from(id);
            ctx.dispatch(Intent::RenameList {
                list_id: list_id.clone(),
                title,
            })
            .await?;
            list_id
        }
    };

    match ctx.session.view().list(&list_id) {
        Some(list) => output::output_success(list),
        None => output::output_error(&format!("List not found: {}", list_id)),
    }
    Ok(())
}
