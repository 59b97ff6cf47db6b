use crate::cli::ChecklistAction;
use crate::context::CliContext;
use crate::output;
use kanban_session::Intent;

/// Checklist rows are edited through the detail view, one card at a time
pub async fn handle(ctx: &mut CliContext, action: ChecklistAction) -> anyhow::Result<()> {
    let (card, intent) = match action {
        ChecklistAction::Add { card, text } => (card, Intent::AddChecklistItem { text }),
        ChecklistAction::Edit { card, item, text } => (
            card,
            Intent::EditChecklistItem { index: item, text },
        ),
        ChecklistAction::Toggle { card, item } => {
            (card, Intent::ToggleChecklistItem { index: item })
        }
        ChecklistAction::Remove { card, item } => {
            (card, Intent::RemoveChecklistItem { index: item })
        }
    };

    let card_id = ctx.resolve_card(&card)?;
    ctx.dispatch(Intent::OpenDetail { card_id }).await?;
    ctx.dispatch(intent).await?;
    ctx.dispatch(Intent::CloseDetail).await?;

    output::output_list(ctx.card(card_id)?.checklist.clone());
    Ok(())
}
