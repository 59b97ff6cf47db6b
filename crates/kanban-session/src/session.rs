use std::path::Path;

use kanban_core::{AppConfig, KanbanError, KanbanResult, LogEntry, Loggable};
use kanban_domain::codec::{self, BoardExporter, BoardImporter};
use kanban_domain::commands::{
    AddList, ApplyTag, Command, CommandContext, CreateCard, DeleteCard, MoveCard,
    MoveCardBefore, RegisterTag, RemoveCardTag, RemoveTag, RenameCard, RenameList,
    SetBoardTitle, SetCardDescription,
};
use kanban_domain::{Board, DetailView, DragReorder};
use kanban_persistence::{DocumentSlot, JsonSerializer, Serializer};

use crate::intent::{Intent, Notice, Outcome, IMPORT_FAILED, IMPORT_SUCCEEDED};
use crate::projection::BoardView;

/// What a dispatch does to the persisted slot after the model changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Persist,
    Clear,
    Transient,
}

struct Applied {
    effect: Effect,
    notice: Option<Notice>,
}

impl Applied {
    fn persist() -> Self {
        Self {
            effect: Effect::Persist,
            notice: None,
        }
    }

    fn transient() -> Self {
        Self {
            effect: Effect::Transient,
            notice: None,
        }
    }

    fn persist_if(changed: bool) -> Self {
        if changed {
            Self::persist()
        } else {
            Self::transient()
        }
    }
}

/// Export text and the suggested file name for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// One editing session over a single board
///
/// # Save Behavior
///
/// Every dispatch that changes the board writes the whole document to the
/// slot before returning. Drag-over ticks and pending detail-view edits are
/// the exceptions: they change the in-memory board (or draft) only, and are
/// saved by the drag-end or commit that follows.
pub struct Session {
    board: Board,
    detail: DetailView,
    drag: DragReorder,
    logs: Vec<LogEntry>,
    slot: DocumentSlot,
    config: AppConfig,
}

impl Session {
    /// Load the board from `slot`
    ///
    /// Never fails: an empty slot gives the default board, an unreadable one
    /// gives the default board plus a diagnostic entry.
    pub async fn load(slot: DocumentSlot, config: AppConfig) -> Self {
        let mut session = Self {
            board: Board::from_config(&config),
            detail: DetailView::new(),
            drag: DragReorder::with_anchor(config.effective_drag_anchor().into()),
            logs: Vec::new(),
            slot,
            config,
        };

        match session.slot.load().await {
            Ok(Some(document)) => {
                session.board = codec::decode(document, session.config.effective_board_title());
                tracing::info!(
                    "Loaded board '{}' ({} lists, {} cards)",
                    session.board.title,
                    session.board.lists.len(),
                    session.board.card_count()
                );
            }
            Ok(None) => {
                tracing::info!(
                    "Nothing stored under '{}', starting from the default board",
                    session.slot.key()
                );
            }
            Err(err) => session.record_failure(&err),
        }

        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn drag(&self) -> &DragReorder {
        &self.drag
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn slot(&self) -> &DocumentSlot {
        &self.slot
    }

    /// Render-ready snapshot of the whole session
    pub fn view(&self) -> BoardView {
        BoardView::project(&self.board, &self.detail, &self.drag, &self.logs)
    }

    /// Apply one intent, then write through to the slot
    ///
    /// Failures never escape: they are logged, and user-facing ones come
    /// back as a [`Notice::Failure`].
    pub async fn dispatch(&mut self, intent: Intent) -> Outcome {
        tracing::debug!("Dispatching {}", intent.name());
        let is_import = matches!(intent, Intent::Import { .. });

        match self.apply(intent) {
            Ok(applied) => {
                let mut outcome = Outcome {
                    persisted: false,
                    notice: applied.notice,
                    error: None,
                };
                let written = match applied.effect {
                    Effect::Persist => self.persist().await,
                    Effect::Clear => self.clear_slot().await,
                    Effect::Transient => return outcome,
                };
                match written {
                    Ok(()) => outcome.persisted = true,
                    Err(err) => {
                        self.record_failure(&err);
                        outcome.error = Some(err.to_string());
                    }
                }
                outcome
            }
            Err(err) => {
                self.record_failure(&err);
                Outcome {
                    persisted: false,
                    notice: failure_notice(&err, is_import),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Read an import file and dispatch its contents
    /// A failed read leaves the board untouched
    pub async fn import_file(&mut self, path: &Path) -> Outcome {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => self.dispatch(Intent::Import { contents }).await,
            Err(err) => {
                let err = KanbanError::from(err);
                self.record_failure(&err);
                Outcome {
                    persisted: false,
                    notice: Some(Notice::Failure(IMPORT_FAILED.to_string())),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Pretty export of the current board
    pub fn export(&self) -> KanbanResult<ExportFile> {
        let document = BoardExporter::encode(&self.board);
        Ok(ExportFile {
            file_name: BoardExporter::export_file_name(&self.board.title),
            contents: String::from_utf8(JsonSerializer::pretty().serialize(&document)?)
                .map_err(|e| KanbanError::Serialization(e.to_string()))?,
        })
    }

    /// Write the export to `path`
    pub async fn export_to(&self, path: &Path) -> KanbanResult<ExportFile> {
        let export = self.export()?;
        tokio::fs::write(path, export.contents.as_bytes()).await?;
        tracing::info!("Exported board to {}", path.display());
        Ok(export)
    }

    fn apply(&mut self, intent: Intent) -> KanbanResult<Applied> {
        match intent {
            Intent::SetBoardTitle { title } => self.execute(Box::new(SetBoardTitle { title })),
            Intent::AddList { title } => self.execute(Box::new(AddList::new(title))),
            Intent::RenameList { list_id, title } => {
                self.execute(Box::new(RenameList { list_id, title }))
            }

            Intent::AddCard {
                list_id,
                text,
                description,
            } => self.execute(Box::new(CreateCard::new(list_id, text, description))),
            Intent::RenameCard { card_id, text } => {
                self.execute(Box::new(RenameCard { card_id, text }))
            }
            Intent::SetCardDescription {
                card_id,
                description,
            } => self.execute(Box::new(SetCardDescription {
                card_id,
                description: Some(description),
            })),
            Intent::DeleteCard { list_id, card_id } => {
                let applied = self.execute(Box::new(DeleteCard { list_id, card_id }))?;
                if self.detail.current() == Some(card_id) {
                    tracing::debug!("Open card {} was deleted, discarding detail view", card_id);
                    self.detail.discard();
                }
                if self.drag.dragged() == Some(card_id) {
                    self.drag.end();
                }
                Ok(applied)
            }
            Intent::MoveCard {
                card_id,
                list_id,
                index,
            } => self.execute(Box::new(MoveCard {
                card_id,
                list_id,
                index,
            })),

            Intent::RegisterTag { name, color } => {
                self.execute(Box::new(RegisterTag { name, color }))
            }
            Intent::RemoveTag { tag_id } => self.execute(Box::new(RemoveTag { tag_id })),
            Intent::ApplyTag { card_id, tag_id } => {
                let tag = self
                    .board
                    .tags
                    .get(tag_id)
                    .ok_or_else(|| KanbanError::MissingTarget(format!("tag {}", tag_id)))?
                    .to_copy();
                self.execute(Box::new(ApplyTag { card_id, tag }))
            }
            Intent::RemoveCardTag { card_id, name } => {
                self.execute(Box::new(RemoveCardTag { card_id, name }))
            }

            Intent::OpenDetail { card_id } => {
                let flushed = self.detail.open(&mut self.board, card_id)?;
                Ok(Applied::persist_if(flushed))
            }
            Intent::EditDetailName { name } => {
                self.detail.set_name(name)?;
                Ok(Applied::transient())
            }
            Intent::EditDetailDescription { description } => {
                self.detail.set_description(description)?;
                Ok(Applied::transient())
            }
            Intent::CommitDetail => {
                let flushed = self.detail.flush(&mut self.board)?;
                Ok(Applied::persist_if(flushed))
            }
            Intent::CloseDetail => {
                let flushed = self.detail.close(&mut self.board)?;
                Ok(Applied::persist_if(flushed))
            }
            Intent::AddChecklistItem { text } => {
                self.detail.add_checklist_item(text)?;
                self.flush_detail()
            }
            Intent::EditChecklistItem { index, text } => {
                self.detail.set_checklist_text(index, text)?;
                self.flush_detail()
            }
            Intent::ToggleChecklistItem { index } => {
                self.detail.toggle_checklist_item(index)?;
                self.flush_detail()
            }
            Intent::RemoveChecklistItem { index } => {
                self.detail.remove_checklist_item(index)?;
                self.flush_detail()
            }

            Intent::DragStart { card_id } => {
                if self.board.card(card_id).is_none() {
                    return Err(KanbanError::missing_card(card_id));
                }
                self.drag.start(card_id);
                Ok(Applied::transient())
            }
            Intent::DragOver { pointer, layout } => {
                let (Some(card_id), Some(placement)) =
                    (self.drag.dragged(), self.drag.target(&layout, pointer))
                else {
                    return Ok(Applied::transient());
                };
                self.execute(Box::new(MoveCardBefore {
                    card_id,
                    list_id: placement.list_id,
                    before: placement.before,
                }))?;
                Ok(Applied::transient())
            }
            Intent::DragEnd => Ok(Applied::persist_if(self.drag.end().is_some())),

            Intent::Import { contents } => self.import(&contents),
            Intent::Reset { confirmed } => {
                if !confirmed {
                    tracing::debug!("Reset not confirmed, keeping board");
                    return Ok(Applied::transient());
                }
                self.board = Board::from_config(&self.config);
                self.detail.discard();
                self.drag.end();
                tracing::info!("Board reset to defaults");
                Ok(Applied {
                    effect: Effect::Clear,
                    notice: None,
                })
            }
        }
    }

    fn execute(&mut self, command: Box<dyn Command>) -> KanbanResult<Applied> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut context = CommandContext {
            board: &mut self.board,
        };
        command.execute(&mut context)?;

        Ok(Applied::persist())
    }

    fn flush_detail(&mut self) -> KanbanResult<Applied> {
        self.detail.flush(&mut self.board)?;
        Ok(Applied::persist())
    }

    /// Replaces the board only once the whole document has parsed
    fn import(&mut self, contents: &str) -> KanbanResult<Applied> {
        let board = BoardImporter::import_from_json(contents, &self.board.title)?;
        self.board = board;
        self.detail.discard();
        self.drag.end();

        tracing::info!(
            "Imported board '{}' ({} lists, {} cards)",
            self.board.title,
            self.board.lists.len(),
            self.board.card_count()
        );
        Ok(Applied {
            effect: Effect::Persist,
            notice: Some(Notice::Info(IMPORT_SUCCEEDED.to_string())),
        })
    }

    async fn persist(&self) -> KanbanResult<()> {
        let document = codec::encode(&self.board);
        self.slot.save(&document).await
    }

    async fn clear_slot(&self) -> KanbanResult<()> {
        self.slot.clear().await
    }

    fn record_failure(&mut self, err: &KanbanError) {
        tracing::warn!("{}", err);
        self.add_log(err.to_string());
    }
}

impl Loggable for Session {
    fn add_log(&mut self, message: String) {
        self.logs.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}

fn failure_notice(err: &KanbanError, is_import: bool) -> Option<Notice> {
    match err {
        KanbanError::Validation(message) => Some(Notice::Failure(message.clone())),
        KanbanError::MalformedDocument(_) if is_import => {
            Some(Notice::Failure(IMPORT_FAILED.to_string()))
        }
        err if err.is_user_facing() => Some(Notice::Failure(err.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_notice_carries_message() {
        let err = KanbanError::Validation("Please enter a tag name and select a color.".into());
        assert_eq!(
            failure_notice(&err, false),
            Some(Notice::Failure(
                "Please enter a tag name and select a color.".to_string()
            ))
        );
    }

    #[test]
    fn test_import_parse_failure_uses_fixed_notice() {
        let err = KanbanError::MalformedDocument("expected value".into());
        assert_eq!(
            failure_notice(&err, true),
            Some(Notice::Failure(IMPORT_FAILED.to_string()))
        );
    }

    #[test]
    fn test_missing_target_is_silent() {
        assert_eq!(failure_notice(&KanbanError::missing_card("c1"), false), None);
    }
}
