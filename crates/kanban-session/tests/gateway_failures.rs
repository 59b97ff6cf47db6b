use async_trait::async_trait;
use kanban_core::{AppConfig, KanbanError, KanbanResult, Loggable};
use kanban_domain::ListId;
use kanban_persistence::{DocumentSlot, KeyValueStore};
use kanban_session::{Intent, Session};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Store {}

    #[async_trait]
    impl KeyValueStore for Store {
        async fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>>;
        async fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()>;
        async fn remove(&self, key: &str) -> KanbanResult<()>;
    }
}

#[tokio::test]
async fn test_failed_write_is_logged_and_model_kept() {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| Ok(None));
    store
        .expect_set()
        .times(1)
        .returning(|_, _| Err(KanbanError::Internal("quota exceeded".to_string())));

    let slot = DocumentSlot::new(Arc::new(store), "trelloBoard");
    let mut session = Session::load(slot, AppConfig::default()).await;

    let outcome = session
        .dispatch(Intent::AddCard {
            list_id: ListId::from("todo"),
            text: "Unsaved".to_string(),
            description: None,
        })
        .await;

    assert!(!outcome.persisted);
    assert!(outcome.failed());
    assert_eq!(outcome.notice, None);
    assert_eq!(session.board().card_count(), 1);
    assert_eq!(
        session.get_logs()[0].message,
        "Internal error: quota exceeded"
    );
}

#[tokio::test]
async fn test_failed_read_falls_back_to_defaults() {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| {
        Err(KanbanError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )))
    });

    let slot = DocumentSlot::new(Arc::new(store), "trelloBoard");
    let session = Session::load(slot, AppConfig::default()).await;

    assert_eq!(session.board().title, "Kanban Board");
    assert_eq!(session.get_logs().len(), 1);
}

#[tokio::test]
async fn test_transient_intents_never_touch_the_store() {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| Ok(None));
    store.expect_set().never();
    store.expect_remove().never();

    let slot = DocumentSlot::new(Arc::new(store), "trelloBoard");
    let mut session = Session::load(slot, AppConfig::default()).await;

    session.dispatch(Intent::Reset { confirmed: false }).await;
    session.dispatch(Intent::DragEnd).await;
    session.dispatch(Intent::CloseDetail).await;
}
