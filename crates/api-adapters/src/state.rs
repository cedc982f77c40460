use std::sync::Arc;

use domains::AuthenticationTokenManager;
use services::{ForumServices, Ports};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ForumServices>,
    /// Used by the bearer extractor to check access tokens.
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl AppState {
    pub fn new(ports: Ports) -> Self {
        let token_manager = ports.token_manager.clone();
        Self {
            services: Arc::new(ForumServices::new(ports)),
            token_manager,
        }
    }
}
