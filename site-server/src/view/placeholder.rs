//! Loading and empty placeholders

use super::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderShape {
    GridTile,
    Card,
    Portrait,
    Slide,
}

/// Skeleton drawn while a list loads, sized like the final layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub shape: PlaceholderShape,
    pub count: usize,
}

impl Placeholder {
    pub const fn new(shape: PlaceholderShape, count: usize) -> Self {
        Self { shape, count }
    }
}

pub const GALLERY: Placeholder = Placeholder::new(PlaceholderShape::GridTile, 12);
pub const KANAIYAZHI: Placeholder = Placeholder::new(PlaceholderShape::Card, 3);
pub const EVENTS: Placeholder = Placeholder::new(PlaceholderShape::Card, 3);
pub const TEAM: Placeholder = Placeholder::new(PlaceholderShape::Portrait, 4);
pub const ACHIEVEMENTS: Placeholder = Placeholder::new(PlaceholderShape::Card, 4);
pub const PONGAL: Placeholder = Placeholder::new(PlaceholderShape::Slide, 1);

/// Shown when a list has nothing to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static GALLERY_EMPTY: EmptyState = EmptyState {
    icon: Icon::Image,
    title: "No Gallery Images",
    description: "Check back soon for photos from our events and celebrations!",
};

pub static KANAIYAZHI_EMPTY: EmptyState = EmptyState {
    icon: Icon::BookOpen,
    title: "No Editions Available",
    description: "Stay tuned for upcoming editions of Kanaiyazhi!",
};

pub static UPCOMING_EVENTS_EMPTY: EmptyState = EmptyState {
    icon: Icon::Calendar,
    title: "No Upcoming Events",
    description: "New events are announced regularly. Check back soon!",
};

pub static PAST_EVENTS_EMPTY: EmptyState = EmptyState {
    icon: Icon::Calendar,
    title: "No Past Events",
    description: "Our event history will appear here.",
};

pub static TEAM_EMPTY: EmptyState = EmptyState {
    icon: Icon::Users,
    title: "No Team Members",
    description: "The team for this year has not been announced yet.",
};

pub static ACHIEVEMENTS_EMPTY: EmptyState = EmptyState {
    icon: Icon::Trophy,
    title: "No Achievements Yet",
    description: "Our milestones and awards will be listed here.",
};

pub static PONGAL_EMPTY: EmptyState = EmptyState {
    icon: Icon::Camera,
    title: "No Pongal Photos",
    description: "Photos from Pongal celebrations will appear here.",
};
