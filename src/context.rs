//! Application Context
//!
//! The API client and every store, built once at startup and shared via
//! the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::config::{ApiConfig, LOGIN_ROUTE};
use crate::error::ApiError;
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::{restore_session, session_expiry_handler, AuthStore, FavoritesStore, RecipeStore, SurveyStore};

#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub auth: AuthStore,
    pub favorites: FavoritesStore,
    pub recipes: RecipeStore,
    pub survey: SurveyStore,
}

impl AppContext {
    /// Wire the stores together. `redirect` runs after a 401 has already
    /// cleared the session.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStorage>,
        redirect: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let session = ArcRwSignal::new(restore_session(&*storage));
        let on_unauthorized = session_expiry_handler(session.clone(), storage.clone(), redirect);
        let api = ApiClient::new(transport, storage.clone()).with_unauthorized_handler(on_unauthorized);

        Self {
            auth: AuthStore::new(api.clone(), storage.clone(), session),
            favorites: FavoritesStore::new(storage),
            recipes: RecipeStore::new(api.clone()),
            survey: SurveyStore::new(api.clone()),
            api,
        }
    }

    /// Browser wiring: fetch transport, `localStorage`, and a hard
    /// navigation to the login page on session expiry
    pub fn browser() -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(ApiConfig::from_env())?;
        Ok(Self::new(Arc::new(transport), Arc::new(BrowserStorage), redirect_to_login))
    }
}

/// Full reload onto the login route, unless already there
fn redirect_to_login() {
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        return;
    };
    if location.pathname().ok().as_deref() == Some(LOGIN_ROUTE) {
        return;
    }
    if let Err(e) = location.set_href(LOGIN_ROUTE) {
        log::error!("[APP] Failed to redirect to login: {:?}", e);
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
