use crate::cli::CardAction;
use crate::context::CliContext;
use crate::output;
use kanban_domain::{CardId, ListId};
use kanban_session::Intent;

pub async fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Add {
            list,
            text,
            description,
        } => {
            let list_id = ListId::from(list);
            ctx.dispatch(Intent::AddCard {
                list_id: list_id.clone(),
                text,
                description,
            })
            .await?;
            let card_id = ctx
                .session
                .board()
                .list(&list_id)
                .and_then(|l| l.cards.last())
                .map(|c| c.id)
                .ok_or_else(|| anyhow::anyhow!("card was not added"))?;
            print_card(ctx, card_id);
        }
        CardAction::Rename { card, text } => {
            let card_id = ctx.resolve_card(&card)?;
            ctx.dispatch(Intent::RenameCard { card_id, text }).await?;
            print_card(ctx, card_id);
        }
        CardAction::Describe { card, description } => {
            let card_id = ctx.resolve_card(&card)?;
            ctx.dispatch(Intent::SetCardDescription {
                card_id,
                description,
            })
            .await?;
            print_card(ctx, card_id);
        }
        CardAction::Delete { card } => {
            let card_id = ctx.resolve_card(&card)?;
            ctx.dispatch(Intent::DeleteCard {
                list_id: ListId::from(card.list.as_str()),
                card_id,
            })
            .await?;
            output::output_success(serde_json::json!({
                "deleted": card_id.to_string(),
                "list": card.list,
            }));
        }
        CardAction::Move {
            card,
            to_list,
            position,
        } => {
            let card_id = ctx.resolve_card(&card)?;
            ctx.dispatch(Intent::MoveCard {
                card_id,
                list_id: ListId::from(to_list),
                index: position,
            })
            .await?;
            print_card(ctx, card_id);
        }
    }
    Ok(())
}

/// Prints the projected card together with its list id
pub fn print_card(ctx: &CliContext, card_id: CardId) {
    let view = ctx.session.view();
    let found = view.lists.iter().find_map(|list| {
        list.cards
            .iter()
            .position(|c| c.id == card_id)
            .map(|index| (list, index))
    });
    match found {
        Some((list, index)) => output::output_success(serde_json::json!({
            "list": list.id,
            "index": index,
            "card": list.cards[index],
        })),
        None => output::output_error(&format!("Card not found: {}", card_id)),
    }
}
