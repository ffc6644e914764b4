//! Category icons

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    BookOpen,
    Calendar,
    Camera,
    Image,
    Mic,
    Music,
    Palette,
    Sparkles,
    Star,
    Trophy,
    Users,
}

/// Icon for an event, gallery or achievement category
///
/// Matching ignores case and surrounding whitespace. Unknown or missing
/// categories get [`Icon::Sparkles`].
pub fn category_icon(category: Option<&str>) -> Icon {
    let Some(category) = category else {
        return Icon::Sparkles;
    };
    match category.trim().to_ascii_lowercase().as_str() {
        "workshop" | "literary" => Icon::BookOpen,
        "competition" => Icon::Trophy,
        "festival" | "celebration" => Icon::Star,
        "performances" | "performance" | "music" | "dance" => Icon::Music,
        "art" | "kolam" => Icon::Palette,
        "community" => Icon::Users,
        "events" | "event" => Icon::Calendar,
        "award" | "awards" => Icon::Award,
        "speech" | "debate" => Icon::Mic,
        "photography" => Icon::Camera,
        _ => Icon::Sparkles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(category_icon(Some("Workshop")), Icon::BookOpen);
        assert_eq!(category_icon(Some(" Competition ")), Icon::Trophy);
        assert_eq!(category_icon(Some("Dance")), Icon::Music);
        assert_eq!(category_icon(Some("ART")), Icon::Palette);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(category_icon(Some("Silambam")), Icon::Sparkles);
        assert_eq!(category_icon(Some("")), Icon::Sparkles);
        assert_eq!(category_icon(None), Icon::Sparkles);
    }
}
