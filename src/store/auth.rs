//! Auth Store
//!
//! Owns the session. The session is persisted under `auth-storage` and the
//! raw token under `token`, which is what the API client reads.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, UnauthorizedHandler};
use crate::config::{AUTH_STORAGE_KEY, TOKEN_KEY};
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, ProfileUpdate, RegisterRequest, Session, UserProfile};
use crate::storage::{load_state, save_state, KeyValueStorage};

#[derive(Clone)]
pub struct AuthStore {
    session: ArcRwSignal<Session>,
    api: ApiClient,
    storage: Arc<dyn KeyValueStorage>,
}

/// Load the persisted session, keeping the raw token entry in step with it
pub fn restore_session(storage: &dyn KeyValueStorage) -> Session {
    let session = load_state::<Session>(storage, AUTH_STORAGE_KEY)
        .map(Session::normalized)
        .unwrap_or_default();
    match session.token() {
        Some(token) => storage.set(TOKEN_KEY, token),
        None => storage.remove(TOKEN_KEY),
    }
    session
}

/// Reset the session and wipe both durable entries
fn clear_session(session: &ArcRwSignal<Session>, storage: &dyn KeyValueStorage) {
    storage.remove(TOKEN_KEY);
    save_state(storage, AUTH_STORAGE_KEY, &Session::default());
    session.set(Session::default());
}

/// Handler for the API client's 401 path: tear the session down, then
/// hand control to `redirect`
pub fn session_expiry_handler(
    session: ArcRwSignal<Session>,
    storage: Arc<dyn KeyValueStorage>,
    redirect: impl Fn() + Send + Sync + 'static,
) -> UnauthorizedHandler {
    Arc::new(move || {
        clear_session(&session, &*storage);
        redirect();
    })
}

impl AuthStore {
    pub fn new(api: ApiClient, storage: Arc<dyn KeyValueStorage>, session: ArcRwSignal<Session>) -> Self {
        Self { session, api, storage }
    }

    /// Reactive view of the session for components
    pub fn session_signal(&self) -> Signal<Session> {
        self.session.clone().into()
    }

    pub fn session(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(Session::is_authenticated)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.with_untracked(|s| s.user().cloned())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&credentials).await {
            Ok(response) => {
                log::info!("[AUTH] Signed in as {}", response.user.email);
                self.establish(response);
                Ok(())
            }
            Err(e) => {
                log::error!("[AUTH] Login error: {}", e);
                Err(e)
            }
        }
    }

    /// Registration signs the new account in immediately
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        match self.api.register(request).await {
            Ok(response) => {
                log::info!("[AUTH] Registered {}", response.user.email);
                self.establish(response);
                Ok(())
            }
            Err(e) => {
                log::error!("[AUTH] Registration error: {}", e);
                Err(e)
            }
        }
    }

    /// Safe to call when already signed out
    pub fn logout(&self) {
        clear_session(&self.session, &*self.storage);
    }

    /// Local shallow merge; nothing is sent to the backend
    pub fn update_profile(&self, update: &ProfileUpdate) {
        self.session.update(|session| session.merge_profile(update));
        self.persist();
    }

    /// Send the edit to the backend and adopt the returned profile
    pub async fn save_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let user = self.api.update_profile(update).await.map_err(|e| {
            log::error!("[AUTH] Profile update error: {}", e);
            e
        })?;
        self.session.update(|session| {
            if let Some(token) = session.token().map(str::to_string) {
                *session = Session::authenticated(user, token);
            }
        });
        self.persist();
        Ok(())
    }

    fn establish(&self, response: AuthResponse) {
        self.storage.set(TOKEN_KEY, &response.token);
        self.session.set(Session::authenticated(response.user, response.token));
        self.persist();
    }

    fn persist(&self) {
        self.session
            .with_untracked(|session| save_state(&*self.storage, AUTH_STORAGE_KEY, session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{always, client};
    use crate::api::{ApiResponse, Method, MockHttpTransport};
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn store_with(transport: MockHttpTransport) -> (AuthStore, Arc<MemoryStorage>) {
        let (api, storage) = client(transport);
        let session = ArcRwSignal::new(restore_session(&*storage));
        (AuthStore::new(api, storage.clone(), session), storage)
    }

    fn signed_in(storage: &MemoryStorage) {
        let user = serde_json::from_value(json!({ "id": "1", "email": "test@example.com", "name": "Y" })).unwrap();
        save_state(storage, AUTH_STORAGE_KEY, &Session::authenticated(user, "test-token".to_string()));
    }

    #[test]
    fn test_initial_state_is_signed_out() {
        let (store, _) = store_with(MockHttpTransport::new());
        let session = store.session();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_login_persists_server_token() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == Method::Post && request.path == "/auth/login")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::json(200, json!({
                    "user": { "id": "1", "email": "test@example.com", "name": "Test" },
                    "token": "mock-jwt-token"
                })))
            });
        let (store, storage) = store_with(transport);

        store.login("test@example.com", "password123").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.session().token(), Some("mock-jwt-token"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("mock-jwt-token"));
        let persisted = load_state::<Session>(&*storage, AUTH_STORAGE_KEY).unwrap();
        assert!(persisted.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_propagates_and_stays_signed_out() {
        let (store, storage) = store_with(always(400, json!({ "message": "잘못된 비밀번호" })));

        let err = store.login("test@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.user_message("로그인에 실패했습니다."), "잘못된 비밀번호");
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_register_signs_in() {
        let (store, storage) = store_with(always(200, json!({
            "user": { "id": "2", "email": "new@example.com" },
            "access_token": "fresh"
        })));
        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
            name: "New".to_string(),
            ..Default::default()
        };

        store.register(&request).await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("fresh"));
    }

    #[test]
    fn test_logout_clears_everything_and_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        signed_in(&storage);
        let (api, _) = client(MockHttpTransport::new());
        let session = ArcRwSignal::new(restore_session(&*storage));
        let store = AuthStore::new(api, storage.clone(), session);
        assert!(store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("test-token"));

        for _ in 0..2 {
            store.logout();
            let session = store.session();
            assert!(!session.is_authenticated());
            assert_eq!(session.user(), None);
            assert_eq!(session.token(), None);
            assert_eq!(storage.get(TOKEN_KEY), None);
        }
        let persisted = load_state::<Session>(&*storage, AUTH_STORAGE_KEY).unwrap();
        assert!(!persisted.is_authenticated());
    }

    #[test]
    fn test_update_profile_merges_locally() {
        let storage = Arc::new(MemoryStorage::new());
        signed_in(&storage);
        let transport = MockHttpTransport::new();
        let (api, _) = client(transport);
        let session = ArcRwSignal::new(restore_session(&*storage));
        let store = AuthStore::new(api, storage.clone(), session);

        store.update_profile(&ProfileUpdate {
            name: Some("X".to_string()),
            age: Some(30),
            gender: None,
        });

        let user = store.user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, "X");
        assert_eq!(user.age, Some(30));
        let persisted = load_state::<Session>(&*storage, AUTH_STORAGE_KEY).unwrap();
        assert_eq!(persisted.user().unwrap().name, "X");
    }

    #[test]
    fn test_update_profile_without_user_is_noop() {
        let (store, _) = store_with(MockHttpTransport::new());
        store.update_profile(&ProfileUpdate { name: Some("X".to_string()), ..Default::default() });
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_persisted_session_survives_restart() {
        let storage = Arc::new(MemoryStorage::new());
        signed_in(&storage);

        let restored = restore_session(&*storage);

        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("test-token"));
    }

    #[tokio::test]
    async fn test_save_profile_adopts_server_copy() {
        let storage = Arc::new(MemoryStorage::new());
        signed_in(&storage);
        let transport = always(200, json!({ "id": "1", "email": "test@example.com", "name": "Server", "age": 41 }));
        let api = ApiClient::new(Arc::new(transport), storage.clone());
        let session = ArcRwSignal::new(restore_session(&*storage));
        let store = AuthStore::new(api, storage.clone(), session);

        store
            .save_profile(&ProfileUpdate { name: Some("Server".to_string()), ..Default::default() })
            .await
            .unwrap();

        let user = store.user().unwrap();
        assert_eq!(user.name, "Server");
        assert_eq!(user.age, Some(41));
        assert_eq!(store.session().token(), Some("test-token"));
    }

    #[tokio::test]
    async fn test_expired_session_is_torn_down_from_any_request() {
        let storage = Arc::new(MemoryStorage::new());
        signed_in(&storage);
        let session = ArcRwSignal::new(restore_session(&*storage));
        let redirected = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let handler = session_expiry_handler(session.clone(), storage.clone(), {
            let redirected = redirected.clone();
            move || redirected.store(true, std::sync::atomic::Ordering::SeqCst)
        });
        let api = ApiClient::new(Arc::new(always(401, json!({}))), storage.clone())
            .with_unauthorized_handler(handler);
        let store = AuthStore::new(api.clone(), storage.clone(), session);

        let result = api.get_recipe("1").await;

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert!(redirected.load(std::sync::atomic::Ordering::SeqCst));
    }
}
