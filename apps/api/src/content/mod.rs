// Portfolio content: typed records, load-time validation, and the read-only store
// the HTTP handlers serve from.

pub mod handlers;
pub mod models;
pub mod source;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use models::PortfolioData;
pub use source::{load_store, ContentSource, SourceError};
pub use store::{ContentStore, NotFound, ProjectFilter};
pub use validation::{ValidationError, Violation};
