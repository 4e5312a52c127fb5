//! Services for loading, aggregating and exporting site content

pub mod aggregator;
pub mod builder;
pub mod normalizer;
pub mod store;

pub use aggregator::Aggregator;
pub use builder::{BuildReport, Rendered, Route, SiteBuilder};
pub use store::{ContentSource, ContentStore, DirSource, HttpSource};
