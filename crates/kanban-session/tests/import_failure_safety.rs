use kanban_core::AppConfig;
use kanban_domain::{ListId, DESCRIPTION_PLACEHOLDER};
use kanban_persistence::{DocumentSlot, MemoryStore};
use kanban_session::{Intent, Notice, Session, IMPORT_FAILED, IMPORT_SUCCEEDED};
use std::sync::Arc;
use tempfile::tempdir;

const KEY: &str = "trelloBoard";

async fn open(store: &MemoryStore) -> Session {
    let slot = DocumentSlot::new(Arc::new(store.clone()), KEY);
    Session::load(slot, AppConfig::default()).await
}

#[tokio::test]
async fn test_import_minimal_document() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;

    let outcome = session
        .dispatch(Intent::Import {
            contents: r#"{"boardTitle":"X","lists":[{"id":"L1","title":"T","cards":[{"text":"hi"}]}]}"#
                .to_string(),
        })
        .await;

    assert!(outcome.persisted);
    assert_eq!(outcome.notice, Some(Notice::Info(IMPORT_SUCCEEDED.to_string())));

    let view = session.view();
    assert_eq!(view.title, "X");
    let card = &view.list(&ListId::from("L1")).unwrap().cards[0];
    assert_eq!(card.text, "hi");
    assert!(!card.has_description);
    assert_eq!(card.description, DESCRIPTION_PLACEHOLDER);
    assert_eq!(card.checklist_total, 0);
}

#[tokio::test]
async fn test_import_non_json_leaves_persisted_document_unchanged() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    session
        .dispatch(Intent::AddCard {
            list_id: ListId::from("todo"),
            text: "Survivor".to_string(),
            description: None,
        })
        .await;
    let before = store.snapshot(KEY);
    assert!(before.is_some());

    let outcome = session
        .dispatch(Intent::Import {
            contents: "this is not json".to_string(),
        })
        .await;

    assert!(!outcome.persisted);
    assert_eq!(outcome.notice, Some(Notice::Failure(IMPORT_FAILED.to_string())));
    assert_eq!(store.snapshot(KEY), before);
    assert_eq!(session.board().card_count(), 1);

    let reloaded = open(&store).await;
    assert_eq!(
        reloaded.board().list(&ListId::from("todo")).unwrap().cards[0].text,
        "Survivor"
    );
}

#[tokio::test]
async fn test_import_json_null_is_rejected() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;

    let outcome = session
        .dispatch(Intent::Import {
            contents: "null".to_string(),
        })
        .await;

    assert!(outcome.failed());
    assert_eq!(session.board().lists.len(), 3);
}

#[tokio::test]
async fn test_import_keeps_title_when_document_has_none() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    session
        .dispatch(Intent::SetBoardTitle {
            title: "Mine".to_string(),
        })
        .await;

    session
        .dispatch(Intent::Import {
            contents: r#"{"lists":[]}"#.to_string(),
        })
        .await;

    assert_eq!(session.board().title, "Mine");
    assert!(session.board().lists.is_empty());
}

#[tokio::test]
async fn test_import_discards_open_detail_view() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    session
        .dispatch(Intent::AddCard {
            list_id: ListId::from("todo"),
            text: "Open me".to_string(),
            description: None,
        })
        .await;
    let card_id = session.board().lists[0].cards[0].id;
    session.dispatch(Intent::OpenDetail { card_id }).await;

    session
        .dispatch(Intent::Import {
            contents: r#"{"boardTitle":"Fresh","lists":[]}"#.to_string(),
        })
        .await;

    assert!(!session.detail().is_open());
    assert!(session.view().detail.is_none());
}

#[tokio::test]
async fn test_corrupt_slot_loads_defaults_with_diagnostic() {
    let store = MemoryStore::new();
    store.insert(KEY, "{broken");

    let session = open(&store).await;

    assert_eq!(session.board().title, "Kanban Board");
    assert_eq!(session.view().diagnostics.len(), 1);
}

#[tokio::test]
async fn test_export_then_import_file() {
    let dir = tempdir().unwrap();
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    session
        .dispatch(Intent::SetBoardTitle {
            title: "Q3 Plan".to_string(),
        })
        .await;
    session
        .dispatch(Intent::AddCard {
            list_id: ListId::from("in-progress"),
            text: "Hiring".to_string(),
            description: None,
        })
        .await;

    let export = session.export().unwrap();
    assert_eq!(export.file_name, "Q3_Plan-export.json");
    assert!(export.contents.contains('\n'));

    let path = dir.path().join(&export.file_name);
    session.export_to(&path).await.unwrap();

    let other_store = MemoryStore::new();
    let mut other = open(&other_store).await;
    let outcome = other.import_file(&path).await;

    assert!(outcome.persisted);
    assert_eq!(other.board().title, "Q3 Plan");
    assert_eq!(
        other.board().list(&ListId::from("in-progress")).unwrap().cards[0].text,
        "Hiring"
    );
}

#[tokio::test]
async fn test_import_missing_file_keeps_board() {
    let dir = tempdir().unwrap();
    let store = MemoryStore::new();
    let mut session = open(&store).await;

    let outcome = session.import_file(&dir.path().join("absent.json")).await;

    assert_eq!(outcome.notice, Some(Notice::Failure(IMPORT_FAILED.to_string())));
    assert_eq!(session.board().title, "Kanban Board");
    assert!(!store.contains(KEY));
}
