//! Built-in mock catalogs shown on the Home and Library views.

use std::sync::LazyLock;

use super::{OrderedCatalog, SongDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogName {
    Trending,
    RecentlyPlayed,
}

impl CatalogName {
    pub fn title(self) -> &'static str {
        match self {
            CatalogName::Trending => "Trending Now",
            CatalogName::RecentlyPlayed => "Recently Played",
        }
    }
}

static TRENDING: LazyLock<Vec<SongDescriptor>> = LazyLock::new(|| {
    vec![
        SongDescriptor::new("1", "Midnight City", "M83", "Hurry Up, We're Dreaming", 243, "https://picsum.photos/seed/m83/300/300").with_genre("Synth-pop"),
        SongDescriptor::new("2", "Blinding Lights", "The Weeknd", "After Hours", 200, "https://picsum.photos/seed/weeknd/300/300").with_genre("Pop"),
        SongDescriptor::new("3", "Heat Waves", "Glass Animals", "Dreamland", 238, "https://picsum.photos/seed/glass/300/300").with_genre("Indie"),
        SongDescriptor::new("4", "Levitating", "Dua Lipa", "Future Nostalgia", 203, "https://picsum.photos/seed/dua/300/300").with_genre("Pop"),
        SongDescriptor::new("5", "Stay", "Kid LAROI & Justin Bieber", "F*ck Love 3", 141, "https://picsum.photos/seed/kid/300/300").with_genre("Pop"),
    ]
});

static RECENTLY_PLAYED: LazyLock<Vec<SongDescriptor>> = LazyLock::new(|| {
    vec![
        SongDescriptor::new("6", "Dreams", "Fleetwood Mac", "Rumours", 257, "https://picsum.photos/seed/fleetwood/300/300").with_genre("Rock"),
        SongDescriptor::new("7", "As It Was", "Harry Styles", "Harry's House", 167, "https://picsum.photos/seed/harry/300/300").with_genre("Pop"),
    ]
});

pub fn static_catalog(name: CatalogName) -> &'static [SongDescriptor] {
    match name {
        CatalogName::Trending => &TRENDING,
        CatalogName::RecentlyPlayed => &RECENTLY_PLAYED,
    }
}

/// Trending followed by Recently Played: what next/previous step over.
pub fn default_ordered_catalog() -> OrderedCatalog {
    OrderedCatalog::concat([
        static_catalog(CatalogName::Trending),
        static_catalog(CatalogName::RecentlyPlayed),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_static_catalog_sizes() {
        assert_eq!(static_catalog(CatalogName::Trending).len(), 5);
        assert_eq!(static_catalog(CatalogName::RecentlyPlayed).len(), 2);
    }

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = default_ordered_catalog();
        let ids: HashSet<_> = catalog.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.first().map(|s| s.title.as_str()), Some("Midnight City"));
        assert_eq!(catalog.get(6).map(|s| s.title.as_str()), Some("As It Was"));
    }
}
