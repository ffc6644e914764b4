//! View models
//!
//! Headless state for each section of the site: what to draw while a list
//! loads, once it arrives, or when there is nothing to show, plus the
//! interaction state of the lightbox, carousel and team year tabs.
//!
//! ```text
//! Loading ──fetch ok, rows──▶ Populated
//!    │    ──fetch ok, none──▶ Empty
//!    └────fetch failed─────▶ Failed (drawn as Empty unless a banner is wanted)
//! ```

pub mod carousel;
pub mod fetch;
pub mod icon;
pub mod lightbox;
pub mod placeholder;
pub mod sections;
pub mod state;
pub mod team;

pub use carousel::{Carousel, run_auto_advance};
pub use fetch::{FetchController, Ticket};
pub use icon::{Icon, category_icon};
pub use lightbox::{Key, Lightbox};
pub use placeholder::{EmptyState, Placeholder, PlaceholderShape};
pub use sections::{AchievementsView, EventsView, GalleryView, KanaiyazhiView, PongalView};
pub use state::{ErrorDisplay, Render, ViewState};
pub use team::{RosterLayout, TeamView, TeamYears, badge_label, roster_layout};
