use super::SongDescriptor;

/// A flat, ordered view over one or more catalogs.
///
/// Only used to answer "what comes after/before this track". Ids are
/// expected to be unique; when they are not, the first match wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCatalog {
    songs: Vec<SongDescriptor>,
}

impl OrderedCatalog {
    pub fn new(songs: Vec<SongDescriptor>) -> Self {
        Self { songs }
    }

    /// Concatenate catalogs in the given order.
    pub fn concat<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a [SongDescriptor]>,
    {
        let songs = parts
            .into_iter()
            .flat_map(|part| part.iter().cloned())
            .collect();
        Self { songs }
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&SongDescriptor> {
        self.songs.get(index)
    }

    pub fn first(&self) -> Option<&SongDescriptor> {
        self.songs.first()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> &[SongDescriptor] {
        &self.songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> SongDescriptor {
        SongDescriptor::new(id, id, "artist", "album", 200, "")
    }

    #[test]
    fn test_concat_keeps_part_order() {
        let a = vec![song("1"), song("2")];
        let b = vec![song("3")];
        let catalog = OrderedCatalog::concat([a.as_slice(), b.as_slice()]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of("1"), Some(0));
        assert_eq!(catalog.position_of("3"), Some(2));
        assert_eq!(catalog.position_of("missing"), None);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let catalog = OrderedCatalog::new(vec![song("a"), song("b"), song("a")]);
        assert_eq!(catalog.position_of("a"), Some(0));
    }

    #[test]
    fn test_empty() {
        let catalog = OrderedCatalog::concat(std::iter::empty());
        assert!(catalog.is_empty());
        assert!(catalog.first().is_none());
    }
}
