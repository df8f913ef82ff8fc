use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    config::Config,
    error::{gateway::GatewayError, Error},
    gateway::Gateway,
    session::{BrowserStorage, SessionStore},
};

pub type SessionState = SessionStore<BrowserStorage>;

/// Copyable handle onto the configuration and session contexts.
#[derive(Clone, Copy, PartialEq)]
pub struct ApiContext {
    config: Signal<Config>,
    session: Signal<SessionState>,
}

impl ApiContext {
    /// Gateway carrying the current session token, if any.
    ///
    /// Reading the token subscribes the calling scope or resource to session
    /// changes, so data fetched with it is refetched after login or logout.
    pub fn gateway(&self) -> Gateway {
        let token = self.session.read().token().map(str::to_string);

        Gateway::new(self.config.read().api_base_url.clone(), token)
    }

    pub fn session(&self) -> Signal<SessionState> {
        self.session
    }

    pub fn page_size(&self) -> usize {
        self.config.read().page_size
    }

    /// Drop the session when the API says the token is no longer valid.
    pub fn handle_error(&self, err: &Error) {
        if let Error::GatewayError(GatewayError::Status { status: 401, .. }) = err {
            tracing::debug!("API returned 401, invalidating session");

            let mut session = self.session;
            session.write().invalidate();
        }
    }
}

pub fn use_api() -> ApiContext {
    ApiContext {
        config: use_context::<Signal<Config>>(),
        session: use_context::<Signal<SessionState>>(),
    }
}
