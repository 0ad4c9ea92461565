//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::UserStore;
use crate::user_service::UserService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// State backed by a fresh, empty store
    pub fn in_memory() -> Self {
        let store = Arc::new(UserStore::new());
        Self::new(Arc::new(UserService::new(store)))
    }
}

impl FromRef<AppState> for Arc<UserService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_service.clone()
    }
}
