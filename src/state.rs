//! Shared handler state

use crate::upstream::GameLogSource;
use std::sync::Arc;

/// State handed to every handler. Holds the upstream source only; all
/// per-request data stays on the request path.
pub struct AppState {
    pub source: Arc<dyn GameLogSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn GameLogSource>) -> Self {
        Self { source }
    }
}
