use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use crate::catalog::{OrderedCatalog, SongDescriptor};

const MAX_RESULTS: usize = 50;

/// Rank catalog entries against `query` over title, artist and album.
pub fn fuzzy_search(catalog: &OrderedCatalog, query: &str) -> Vec<SongDescriptor> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut matched: Vec<(i64, &SongDescriptor)> = catalog
        .songs()
        .iter()
        .filter_map(|s| {
            let haystack = format!("{} {} {}", s.title, s.artist, s.album);
            matcher.fuzzy_match(&haystack, query).map(|score| (score, s))
        })
        .collect();

    // Sort by score (descending); ties keep catalog order
    matched.sort_by(|a, b| b.0.cmp(&a.0));

    matched
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(_, s)| s.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_ordered_catalog;

    #[test]
    fn test_artist_match_ranks_first() {
        let results = fuzzy_search(&default_ordered_catalog(), "weeknd");
        assert_eq!(results.first().map(|s| s.title.as_str()), Some("Blinding Lights"));
    }

    #[test]
    fn test_album_is_searchable() {
        let results = fuzzy_search(&default_ordered_catalog(), "rumours");
        assert_eq!(results.first().map(|s| s.artist.as_str()), Some("Fleetwood Mac"));
    }

    #[test]
    fn test_blank_and_unmatched_queries() {
        let catalog = default_ordered_catalog();
        assert!(fuzzy_search(&catalog, "  ").is_empty());
        assert!(fuzzy_search(&catalog, "zzzzqqq").is_empty());
    }
}
