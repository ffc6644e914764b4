//! Section view models driven against the in-memory store

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use site_server::core::BackgroundTasks;
use site_server::view::placeholder;
use site_server::view::{
    EventsView, GalleryView, KanaiyazhiView, Render, RosterLayout, TeamView, TeamYears,
};
use site_server::{AppState, Config};
use store_client::{MemoryStore, UnconfiguredStore};
use tokio::sync::mpsc;

fn member(id: &str, order: i32, office_bearer: bool, year: i32) -> Value {
    json!({
        "id": id,
        "name": format!("Member {id}"),
        "role": "Coordinator",
        "position_order": order,
        "is_office_bearer": office_bearer,
        "is_faculty": false,
        "year": year,
        "created_at": "2024-06-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    })
}

fn team_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed_rows(
        "team_members",
        vec![
            member("pres25", 1, true, 2025),
            member("cc25", 2, false, 2025),
            member("pres24", 1, true, 2024),
            member("pres23", 1, true, 2023),
        ],
    );
    store
}

#[tokio::test(start_paused = true)]
async fn slow_response_for_abandoned_year_never_wins() {
    let slow = team_store();
    slow.set_latency(Some(Duration::from_secs(2)));
    let fast = team_store();

    let mut view = TeamView::new(TeamYears::new([2023, 2024, 2025]).unwrap());
    let (tx, mut rx) = mpsc::unbounded_channel();

    let t2024 = view.select_year(2024).unwrap();
    let sender = tx.clone();
    tokio::spawn(async move {
        let result = TeamView::load_roster(&slow, 2024).await;
        let _ = sender.send((t2024, result));
    });

    let t2023 = view.select_year(2023).unwrap();
    tokio::spawn(async move {
        let result = TeamView::load_roster(&fast, 2023).await;
        let _ = tx.send((t2023, result));
    });

    let mut applied = Vec::new();
    while let Some((ticket, result)) = rx.recv().await {
        applied.push((ticket.seq(), view.commit_roster(ticket, result)));
    }

    assert_eq!(applied, vec![(t2023.seq(), true), (t2024.seq(), false)]);
    let ids: Vec<&str> = view.roster().items().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["pres23"]);
    assert_eq!(view.badge(), "Team of 2023");
    assert!(matches!(view.layout(), Some(RosterLayout::Merged(_))));
}

#[tokio::test]
async fn sections_without_store_credentials_show_empty_states() {
    let store = UnconfiguredStore;

    let mut gallery = GalleryView::new();
    gallery.refresh(&store).await;
    assert_eq!(
        gallery.images.render(),
        Render::EmptyState(&placeholder::GALLERY_EMPTY)
    );

    let mut events = EventsView::new();
    events.refresh(&store, chrono::Utc::now()).await;
    assert_eq!(
        events.upcoming.render(),
        Render::EmptyState(&placeholder::UPCOMING_EVENTS_EMPTY)
    );
    assert_eq!(
        events.past.render(),
        Render::EmptyState(&placeholder::PAST_EVENTS_EMPTY)
    );

    let mut kanaiyazhi = KanaiyazhiView::new();
    kanaiyazhi.refresh(&store).await;
    assert!(kanaiyazhi.featured().is_none());
    assert_eq!(
        kanaiyazhi.editions.render(),
        Render::EmptyState(&placeholder::KANAIYAZHI_EMPTY)
    );
}

#[tokio::test(start_paused = true)]
async fn scheduled_keepalive_pings_until_shutdown() {
    let store = MemoryStore::new();
    let mut config = Config::with_overrides(0, None);
    config.keepalive_interval_secs = 60;
    let state = AppState::new(config, Arc::new(store.clone()));

    let mut tasks = BackgroundTasks::new();
    state.start_background_tasks(&mut tasks);
    assert_eq!(tasks.len(), 1);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(store.call_count(), 2);
    assert_eq!(store.rows("keepalive").len(), 1);

    tasks.shutdown().await;
    let calls = store.call_count();
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(store.call_count(), calls);
}
