use kanban_core::{AppConfig, DragAnchor};
use kanban_domain::drag::{CardLayout, ListLayout};
use kanban_domain::{CardAnchor, CardId, LayoutSnapshot, ListId, Point, Rect};
use kanban_persistence::{DocumentSlot, MemoryStore};
use kanban_session::{Intent, Session};
use std::sync::Arc;

const KEY: &str = "trelloBoard";

async fn open(store: &MemoryStore) -> Session {
    let slot = DocumentSlot::new(Arc::new(store.clone()), KEY);
    Session::load(slot, AppConfig::default()).await
}

async fn add(session: &mut Session, list: &str, text: &str) -> CardId {
    let list_id = ListId::from(list);
    session
        .dispatch(Intent::AddCard {
            list_id: list_id.clone(),
            text: text.to_string(),
            description: None,
        })
        .await;
    session.board().list(&list_id).unwrap().cards.last().unwrap().id
}

fn column(id: &str, left: f64, cards: &[CardId]) -> ListLayout {
    ListLayout {
        list_id: ListId::from(id),
        bounds: Rect::new(left, 0.0, 200.0, 400.0),
        cards: cards
            .iter()
            .enumerate()
            .map(|(i, card_id)| CardLayout {
                card_id: *card_id,
                bounds: Rect::new(left, i as f64 * 50.0, 200.0, 50.0),
            })
            .collect(),
    }
}

fn texts(session: &Session, list: &str) -> Vec<String> {
    session
        .board()
        .list(&ListId::from(list))
        .unwrap()
        .cards
        .iter()
        .map(|c| c.text.clone())
        .collect()
}

#[tokio::test]
async fn test_drag_over_inserts_before_nearest_card_below_pointer() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    let c1 = add(&mut session, "todo", "C1").await;
    let c2 = add(&mut session, "todo", "C2").await;
    let c3 = add(&mut session, "todo", "C3").await;
    let c4 = add(&mut session, "done", "C4").await;

    let layout = LayoutSnapshot {
        lists: vec![column("todo", 0.0, &[c1, c2, c3]), column("done", 220.0, &[c4])],
    };
    let saved_before_drag = store.snapshot(KEY);

    session.dispatch(Intent::DragStart { card_id: c4 }).await;
    let outcome = session
        .dispatch(Intent::DragOver {
            pointer: Point::new(50.0, 60.0),
            layout,
        })
        .await;

    assert!(!outcome.persisted);
    assert_eq!(texts(&session, "todo"), vec!["C1", "C4", "C2", "C3"]);
    assert!(texts(&session, "done").is_empty());
    assert_eq!(store.snapshot(KEY), saved_before_drag);

    let outcome = session.dispatch(Intent::DragEnd).await;
    assert!(outcome.persisted);
    assert!(!session.drag().is_dragging());

    let reloaded = open(&store).await;
    assert_eq!(texts(&reloaded, "todo"), vec!["C1", "C4", "C2", "C3"]);
}

#[tokio::test]
async fn test_top_anchor_from_config_compares_against_card_tops() {
    let store = MemoryStore::new();
    let slot = DocumentSlot::new(Arc::new(store.clone()), KEY);
    let config = AppConfig {
        drag_anchor: Some(DragAnchor::Top),
        ..Default::default()
    };
    let mut session = Session::load(slot, config).await;
    assert_eq!(session.drag().anchor(), CardAnchor::Top);

    let c1 = add(&mut session, "todo", "C1").await;
    let c2 = add(&mut session, "todo", "C2").await;
    let c3 = add(&mut session, "done", "C3").await;

    session.dispatch(Intent::DragStart { card_id: c3 }).await;
    // y=10 is past the top of C1 but above its midpoint
    session
        .dispatch(Intent::DragOver {
            pointer: Point::new(50.0, 10.0),
            layout: LayoutSnapshot {
                lists: vec![column("todo", 0.0, &[c1, c2]), column("done", 220.0, &[c3])],
            },
        })
        .await;

    assert_eq!(texts(&session, "todo"), vec!["C1", "C3", "C2"]);
}

#[tokio::test]
async fn test_default_anchor_compares_against_card_midpoints() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    assert_eq!(session.drag().anchor(), CardAnchor::Midpoint);

    let c1 = add(&mut session, "todo", "C1").await;
    let c2 = add(&mut session, "todo", "C2").await;
    let c3 = add(&mut session, "done", "C3").await;

    session.dispatch(Intent::DragStart { card_id: c3 }).await;
    session
        .dispatch(Intent::DragOver {
            pointer: Point::new(50.0, 10.0),
            layout: LayoutSnapshot {
                lists: vec![column("todo", 0.0, &[c1, c2]), column("done", 220.0, &[c3])],
            },
        })
        .await;

    assert_eq!(texts(&session, "todo"), vec!["C3", "C1", "C2"]);
}

#[tokio::test]
async fn test_drag_below_last_card_appends() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    let c1 = add(&mut session, "todo", "C1").await;
    let c2 = add(&mut session, "todo", "C2").await;

    session.dispatch(Intent::DragStart { card_id: c1 }).await;
    session
        .dispatch(Intent::DragOver {
            pointer: Point::new(50.0, 300.0),
            layout: LayoutSnapshot {
                lists: vec![column("todo", 0.0, &[c1, c2])],
            },
        })
        .await;

    assert_eq!(texts(&session, "todo"), vec!["C2", "C1"]);
}

#[tokio::test]
async fn test_drag_over_without_qualifying_list_is_ignored() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    let c1 = add(&mut session, "todo", "C1").await;
    let c2 = add(&mut session, "todo", "C2").await;

    session.dispatch(Intent::DragStart { card_id: c2 }).await;
    // Right of every list center: no list qualifies
    let outcome = session
        .dispatch(Intent::DragOver {
            pointer: Point::new(500.0, 10.0),
            layout: LayoutSnapshot {
                lists: vec![column("todo", 0.0, &[c1, c2])],
            },
        })
        .await;

    assert!(!outcome.failed());
    assert_eq!(texts(&session, "todo"), vec!["C1", "C2"]);
}

#[tokio::test]
async fn test_drag_over_without_drag_start_does_nothing() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;
    let c1 = add(&mut session, "todo", "C1").await;

    let outcome = session
        .dispatch(Intent::DragOver {
            pointer: Point::new(50.0, 10.0),
            layout: LayoutSnapshot {
                lists: vec![column("todo", 0.0, &[c1])],
            },
        })
        .await;
    assert!(!outcome.failed());

    let outcome = session.dispatch(Intent::DragEnd).await;
    assert!(!outcome.persisted);
}

#[tokio::test]
async fn test_drag_start_on_unknown_card_is_logged() {
    let store = MemoryStore::new();
    let mut session = open(&store).await;

    let outcome = session
        .dispatch(Intent::DragStart {
            card_id: uuid::Uuid::new_v4(),
        })
        .await;

    assert!(outcome.failed());
    assert!(!session.drag().is_dragging());
}
