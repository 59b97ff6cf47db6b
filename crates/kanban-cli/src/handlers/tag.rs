use crate::cli::TagAction;
use crate::context::CliContext;
use crate::handlers::card::print_card;
use crate::output;
use kanban_session::Intent;

pub async fn handle(ctx: &mut CliContext, action: TagAction) -> anyhow::Result<()> {
    match action {
        TagAction::Add { name, color } => {
            ctx.dispatch(Intent::RegisterTag { name, color }).await?;
            output::output_list(ctx.session.view().tags);
        }
        TagAction::Remove { tag } => {
            let tag_id = ctx.resolve_tag(tag)?;
            ctx.dispatch(Intent::RemoveTag { tag_id }).await?;
            output::output_list(ctx.session.view().tags);
        }
        TagAction::Apply { card, tag } => {
            let card_id = ctx.resolve_card(&card)?;
            let tag_id = ctx.resolve_tag(tag)?;
            ctx.dispatch(Intent::ApplyTag { card_id, tag_id }).await?;
            print_card(ctx, card_id);
        }
        TagAction::Unapply { card, name } => {
            let card_id = ctx.resolve_card(&card)?;
            ctx.dispatch(Intent::RemoveCardTag { card_id, name }).await?;
            print_card(ctx, card_id);
        }
    }
    Ok(())
}
