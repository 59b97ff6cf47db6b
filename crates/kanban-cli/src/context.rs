use kanban_core::{AppConfig, KanbanError, KanbanResult};
use kanban_domain::{Card, CardId, ListId, TagId};
use kanban_persistence::{DocumentSlot, JsonFileStore};
use kanban_session::{Intent, Outcome, Session};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::CardRef;

pub struct CliContext {
    pub session: Session,
}

impl CliContext {
    /// Open the saved board; `data_dir` overrides the configured directory
    pub async fn load(data_dir: Option<PathBuf>) -> KanbanResult<Self> {
        let config = AppConfig::load();
        let dir = data_dir.unwrap_or_else(|| config.effective_data_dir());
        tracing::debug!("Using data directory {}", dir.display());

        let store = JsonFileStore::new(&dir);
        // Fail early on a bad key instead of on the first write
        store.path_for(config.effective_storage_key())?;
        let slot = DocumentSlot::new(Arc::new(store), config.effective_storage_key());

        Ok(Self {
            session: Session::load(slot, config).await,
        })
    }

    /// Dispatch an intent, turning a failed outcome into an error
    /// The user-facing notice wins over the diagnostic when both exist
    pub async fn dispatch(&mut self, intent: Intent) -> anyhow::Result<Outcome> {
        let outcome = self.session.dispatch(intent).await;
        if let Some(error) = &outcome.error {
            let message = match &outcome.notice {
                Some(notice) => notice.message().to_string(),
                None => error.clone(),
            };
            anyhow::bail!(message);
        }
        Ok(outcome)
    }

    pub fn resolve_card(&self, card: &CardRef) -> KanbanResult<CardId> {
        let list_id = ListId::from(card.list.as_str());
        let list = self
            .session
            .board()
            .list(&list_id)
            .ok_or_else(|| KanbanError::missing_list(&list_id))?;
        list.cards
            .get(card.index)
            .map(|c| c.id)
            .ok_or_else(|| {
                KanbanError::MissingTarget(format!(
                    "card {} in list {}",
                    card.index, list_id
                ))
            })
    }

    pub fn resolve_tag(&self, index: usize) -> KanbanResult<TagId> {
        self.session
            .board()
            .tags
            .as_slice()
            .get(index)
            .map(|t| t.id)
            .ok_or_else(|| KanbanError::MissingTarget(format!("tag {}", index)))
    }

    pub fn card(&self, card_id: CardId) -> KanbanResult<&Card> {
        self.session
            .board()
            .card(card_id)
            .ok_or_else(|| KanbanError::missing_card(card_id))
    }
}
