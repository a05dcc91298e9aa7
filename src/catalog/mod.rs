pub mod library;
pub mod ordered;
pub mod song;

pub use library::{default_ordered_catalog, static_catalog, CatalogName};
pub use ordered::OrderedCatalog;
pub use song::{format_time, SongDescriptor};
