use std::sync::Arc;

use crate::content::{ContentSource, ContentStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once before the server starts; never written afterwards.
    pub store: Arc<ContentStore>,
    pub source: ContentSource,
}

impl AppState {
    pub fn new(store: ContentStore, source: ContentSource) -> Self {
        Self {
            store: Arc::new(store),
            source,
        }
    }
}
