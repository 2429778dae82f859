//! Application state.
//!
//! Both issuers are stateless request/response calls: state holds only the
//! immutable configuration and handles to the two external collaborators.
//! No shared mutable state, no locks.

use crate::auth::AuthState;
use clipstore_core::Config;
use clipstore_db::VideoStore;
use clipstore_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Session verification, shared with the auth middleware
    pub auth: Arc<AuthState>,
    /// Metadata store collaborator (Postgres in production, fake in tests)
    pub videos: Arc<dyn VideoStore>,
    /// Object storage collaborator (S3-compatible in production, fake in tests)
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, videos: Arc<dyn VideoStore>, storage: Arc<dyn Storage>) -> Self {
        let auth = Arc::new(AuthState::new(&config.jwt_secret));
        AppState {
            config,
            auth,
            videos,
            storage,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
