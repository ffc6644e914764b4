//! Section view models
//!
//! Every section starts loading, and `refresh` runs begin, fetch and commit
//! in one step. Callers that interleave requests use the controller's
//! ticket API directly.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use shared::models::{Achievement, Event, GalleryImage, KanaiyazhiEdition};
use store_client::TableStore;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::carousel::{Carousel, run_auto_advance};
use super::fetch::{FetchController, Ticket};
use super::icon::{Icon, category_icon};
use super::lightbox::{Key, Lightbox};
use super::placeholder;
use crate::db::{FailSoftOption, achievements, events, gallery, kanaiyazhi};

/// Upcoming and past events
#[derive(Debug)]
pub struct EventsView {
    pub upcoming: FetchController<Event>,
    pub past: FetchController<Event>,
    past_limit: usize,
}

impl EventsView {
    pub fn new() -> Self {
        Self::with_past_limit(events::DEFAULT_PAST_LIMIT)
    }

    pub fn with_past_limit(past_limit: usize) -> Self {
        Self {
            upcoming: FetchController::new(
                "events.upcoming",
                placeholder::EVENTS,
                &placeholder::UPCOMING_EVENTS_EMPTY,
            ),
            past: FetchController::new(
                "events.past",
                placeholder::EVENTS,
                &placeholder::PAST_EVENTS_EMPTY,
            ),
            past_limit,
        }
    }

    pub async fn refresh(&mut self, store: &dyn TableStore, now: DateTime<Utc>) {
        let upcoming_ticket = self.upcoming.begin();
        let past_ticket = self.past.begin();
        let (upcoming, past) = tokio::join!(
            events::upcoming(store, now),
            events::past(store, now, self.past_limit)
        );
        self.upcoming.commit(upcoming_ticket, upcoming);
        self.past.commit(past_ticket, past);
    }

    /// Upcoming events with their category icons
    pub fn upcoming_cards(&self) -> Vec<(&Event, Icon)> {
        with_icons(self.upcoming.items(), |e| e.category.as_deref())
    }

    /// Past events with their category icons
    pub fn past_cards(&self) -> Vec<(&Event, Icon)> {
        with_icons(self.past.items(), |e| e.category.as_deref())
    }
}

fn with_icons<'a, T>(
    items: &'a [T],
    category: impl Fn(&'a T) -> Option<&'a str>,
) -> Vec<(&'a T, Icon)> {
    items
        .iter()
        .map(|item| (item, category_icon(category(item))))
        .collect()
}

impl Default for EventsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Gallery grid with a lightbox over it
#[derive(Debug)]
pub struct GalleryView {
    pub images: FetchController<GalleryImage>,
    lightbox: Lightbox,
}

impl GalleryView {
    pub fn new() -> Self {
        Self {
            images: FetchController::new(
                "gallery",
                placeholder::GALLERY,
                &placeholder::GALLERY_EMPTY,
            ),
            lightbox: Lightbox::new(),
        }
    }

    pub async fn refresh(&mut self, store: &dyn TableStore) {
        let ticket = self.images.begin();
        let result = gallery::gallery_images(store).await;
        self.commit(ticket, result);
    }

    pub fn commit(
        &mut self,
        ticket: Ticket,
        result: store_client::StoreResult<Vec<GalleryImage>>,
    ) -> bool {
        let applied = self.images.commit(ticket, result);
        self.lightbox.clamp(self.images.items().len());
        applied
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn open(&mut self, index: usize) {
        self.lightbox.open(index, self.images.items().len());
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        self.lightbox.handle_key(key, self.images.items().len())
    }

    /// Image shown in the lightbox
    pub fn selected_image(&self) -> Option<&GalleryImage> {
        self.lightbox
            .selected()
            .and_then(|i| self.images.items().get(i))
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

/// Pongal photo carousel
///
/// The carousel is shared with its auto-advance driver.
#[derive(Debug)]
pub struct PongalView {
    pub images: FetchController<GalleryImage>,
    carousel: Arc<Mutex<Carousel>>,
}

impl PongalView {
    pub fn new(now: Instant) -> Self {
        Self {
            images: FetchController::new(
                "gallery.pongal",
                placeholder::PONGAL,
                &placeholder::PONGAL_EMPTY,
            ),
            carousel: Arc::new(Mutex::new(Carousel::new(0, now))),
        }
    }

    pub async fn refresh(&mut self, store: &dyn TableStore) {
        let ticket = self.images.begin();
        let result = gallery::pongal_images(store).await;
        if self.images.commit(ticket, result) {
            self.carousel
                .lock()
                .set_len(self.images.items().len(), Instant::now());
        }
    }

    pub fn carousel(&self) -> MutexGuard<'_, Carousel> {
        self.carousel.lock()
    }

    /// Advance slides in the background until `shutdown` fires
    pub fn start_auto_advance(&self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(run_auto_advance(self.carousel.clone(), shutdown))
    }

    pub fn current_image(&self) -> Option<&GalleryImage> {
        let current = self.carousel.lock().current();
        self.images.items().get(current)
    }
}

/// Achievements, optionally narrowed to one category
#[derive(Debug)]
pub struct AchievementsView {
    pub items: FetchController<Achievement>,
    category: Option<String>,
}

impl AchievementsView {
    pub fn new() -> Self {
        Self {
            items: FetchController::new(
                "achievements",
                placeholder::ACHIEVEMENTS,
                &placeholder::ACHIEVEMENTS_EMPTY,
            ),
            category: None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Change the filter; the caller fetches with the returned ticket
    pub fn set_category(&mut self, category: Option<String>) -> Ticket {
        self.category = category.filter(|c| !c.is_empty());
        self.items.begin()
    }

    pub async fn refresh(&mut self, store: &dyn TableStore) {
        let ticket = self.items.begin();
        let result = match self.category.as_deref() {
            Some(category) => achievements::by_category(store, category).await,
            None => achievements::all(store).await,
        };
        self.items.commit(ticket, result);
    }

    /// Achievements with their category icons
    pub fn cards(&self) -> Vec<(&Achievement, Icon)> {
        with_icons(self.items.items(), |a| a.category.as_deref())
    }
}

impl Default for AchievementsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Magazine editions and the featured issue
#[derive(Debug)]
pub struct KanaiyazhiView {
    pub editions: FetchController<KanaiyazhiEdition>,
    featured: Option<KanaiyazhiEdition>,
}

impl KanaiyazhiView {
    pub fn new() -> Self {
        Self {
            editions: FetchController::new(
                "kanaiyazhi",
                placeholder::KANAIYAZHI,
                &placeholder::KANAIYAZHI_EMPTY,
            ),
            featured: None,
        }
    }

    pub async fn refresh(&mut self, store: &dyn TableStore) {
        let ticket = self.editions.begin();
        let (editions, featured) =
            tokio::join!(kanaiyazhi::editions(store), kanaiyazhi::featured(store));
        if self.editions.commit(ticket, editions) {
            self.featured = featured.or_none("kanaiyazhi.featured");
        }
    }

    pub fn featured(&self) -> Option<&KanaiyazhiEdition> {
        self.featured.as_ref()
    }
}

impl Default for KanaiyazhiView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;
    use crate::view::state::{Render, ViewState};
    use shared::Record;
    use store_client::MemoryStore;

    #[tokio::test]
    async fn test_gallery_failure_shows_empty_state() {
        let store = MemoryStore::new();
        store.fail_with("network down");
        let mut view = GalleryView::new();
        assert!(matches!(view.images.render(), Render::Skeleton(p) if p.count == 12));

        view.refresh(&store).await;
        assert_eq!(
            view.images.render(),
            Render::EmptyState(&placeholder::GALLERY_EMPTY)
        );
    }

    #[tokio::test]
    async fn test_gallery_lightbox_follows_list() {
        let store = MemoryStore::new();
        store.seed_rows(
            GalleryImage::TABLE,
            vec![
                fixtures::image("a", Some(1), "2025-01-01T00:00:00Z", true, false),
                fixtures::image("b", Some(2), "2025-01-01T00:00:00Z", true, false),
            ],
        );
        let mut view = GalleryView::new();
        view.open(0);
        assert!(!view.lightbox().is_open(), "nothing loaded yet");

        view.refresh(&store).await;
        view.open(1);
        assert!(view.handle_key(Key::Right));
        assert_eq!(view.selected_image().map(|i| i.id.as_str()), Some("a"));
        assert!(view.handle_key(Key::Escape));
        assert!(view.selected_image().is_none());
    }

    #[tokio::test]
    async fn test_events_view_splits_on_now() {
        let store = MemoryStore::new();
        store.seed_rows(
            Event::TABLE,
            vec![
                fixtures::event("next", "2025-03-01T10:00:00Z", false, None),
                fixtures::event("last", "2025-01-01T10:00:00Z", false, None),
            ],
        );
        let now = DateTime::parse_from_rfc3339("2025-02-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut view = EventsView::new();
        view.refresh(&store, now).await;
        assert_eq!(view.upcoming.items()[0].id, "next");
        assert_eq!(view.past.items()[0].id, "last");
    }

    #[tokio::test]
    async fn test_kanaiyazhi_empty_table() {
        let store = MemoryStore::new();
        let mut view = KanaiyazhiView::new();
        assert!(matches!(view.editions.render(), Render::Skeleton(p) if p.count == 3));
        view.refresh(&store).await;
        assert_eq!(view.editions.state(), &ViewState::Empty);
        assert_eq!(
            view.editions.render(),
            Render::EmptyState(&placeholder::KANAIYAZHI_EMPTY)
        );
        assert!(view.featured().is_none());
    }

    #[tokio::test]
    async fn test_achievements_category_switch() {
        let store = MemoryStore::new();
        store.seed_rows(
            Achievement::TABLE,
            vec![
                fixtures::achievement("a", 2024, Some("Cultural")),
                fixtures::achievement("b", 2023, Some("Literary")),
            ],
        );
        let mut view = AchievementsView::new();
        view.refresh(&store).await;
        assert_eq!(view.items.items().len(), 2);

        let ticket = view.set_category(Some("Literary".into()));
        assert!(view.items.state().is_loading());
        let result = achievements::by_category(&store, "Literary").await;
        assert!(view.items.commit(ticket, result));
        assert_eq!(view.items.items()[0].id, "b");
        assert_eq!(view.category(), Some("Literary"));
    }

    #[tokio::test]
    async fn test_pongal_carousel_sized_to_images() {
        let store = MemoryStore::new();
        store.seed_rows(
            GalleryImage::TABLE,
            vec![
                fixtures::image("p1", Some(1), "2025-01-01T00:00:00Z", false, true),
                fixtures::image("p2", Some(2), "2025-01-01T00:00:00Z", false, true),
            ],
        );
        let mut view = PongalView::new(Instant::now());
        view.refresh(&store).await;
        assert_eq!(view.carousel().len(), 2);
        view.carousel().next(Instant::now());
        assert_eq!(view.current_image().map(|i| i.id.as_str()), Some("p2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pongal_auto_advance_until_shutdown() {
        let store = MemoryStore::new();
        store.seed_rows(
            GalleryImage::TABLE,
            vec![
                fixtures::image("p1", Some(1), "2025-01-01T00:00:00Z", false, true),
                fixtures::image("p2", Some(2), "2025-01-01T00:00:00Z", false, true),
                fixtures::image("p3", Some(3), "2025-01-01T00:00:00Z", false, true),
            ],
        );
        let mut view = PongalView::new(Instant::now());
        view.refresh(&store).await;

        let shutdown = CancellationToken::new();
        let driver = view.start_auto_advance(shutdown.clone());

        tokio::time::sleep(std::time::Duration::from_millis(5_500)).await;
        assert_eq!(view.current_image().map(|i| i.id.as_str()), Some("p2"));

        shutdown.cancel();
        driver.await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        assert_eq!(view.current_image().map(|i| i.id.as_str()), Some("p2"));
    }

    #[tokio::test]
    async fn test_cards_carry_category_icons() {
        let store = MemoryStore::new();
        store.seed_rows(
            Achievement::TABLE,
            vec![
                fixtures::achievement("a", 2024, Some("Competition")),
                fixtures::achievement("b", 2023, None),
            ],
        );
        let mut view = AchievementsView::new();
        view.refresh(&store).await;
        let icons: Vec<Icon> = view.cards().into_iter().map(|(_, icon)| icon).collect();
        assert_eq!(icons, vec![Icon::Trophy, Icon::Sparkles]);

        store.seed_rows(
            Event::TABLE,
            vec![fixtures::event("kolam", "2099-01-10T09:00:00Z", false, Some("Kolam"))],
        );
        let mut events = EventsView::new();
        events.refresh(&store, Utc::now()).await;
        assert_eq!(events.upcoming_cards()[0].1, Icon::Palette);
        assert!(events.past_cards().is_empty());
    }
}
