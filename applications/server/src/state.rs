/// Shared application state
use crate::config::RunMode;
use rollcall_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub mode: RunMode,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, mode: RunMode) -> Self {
        Self { store, mode }
    }
}
