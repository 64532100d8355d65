//! Session context, bootstrap and sign-in/sign-out routines.
//!
//! [`SessionProvider`] owns the context values shared by every view:
//! the [`ShopConfig`], the [`SessionState`], the [`AuthModal`] and the
//! [`PurchaseState`]. On mount it validates the stored token against
//! `GET /api/user/me`.

use api::{ApiError, LoginResponse, ShopApi};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore, ShopConfig, User};

use crate::auth_modal::AuthModal;
use crate::purchase::PurchaseState;
use crate::Page;

const SHOP_TOML: &str = include_str!("../shop.toml");

/// Signed-in user plus bootstrap progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    /// Page the shell should move to next; the shell clears it once handled.
    pub landing: Option<Page>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            landing: None,
        }
    }
}

impl SessionState {
    pub fn signed_in(user: User) -> Self {
        Self {
            landing: Some(Page::landing_for(&user)),
            user: Some(user),
            loading: false,
        }
    }

    /// State after logout or a rejected token: anonymous, back on home.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
            landing: Some(Page::Home),
        }
    }

    /// A visitor without a stored token; stays wherever they are.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
            landing: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Result of validating the stored session against the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The token is valid; carries the fresh profile.
    SignedIn(User),
    /// The token was rejected (or the check failed); storage has been cleared.
    Rejected,
    /// No token stored.
    Anonymous,
}

impl SessionOutcome {
    /// Session and modal state this outcome leads to.
    pub fn into_state(self) -> (SessionState, AuthModal) {
        match self {
            SessionOutcome::SignedIn(user) => (SessionState::signed_in(user), AuthModal::closed()),
            SessionOutcome::Rejected => (SessionState::signed_out(), AuthModal::prompt()),
            SessionOutcome::Anonymous => (SessionState::anonymous(), AuthModal::prompt()),
        }
    }

    /// Like [`SessionOutcome::into_state`], keeping the inline line of the
    /// form that triggered a successful sign-in.
    pub fn resolve(self, current: &AuthModal) -> (SessionState, AuthModal) {
        let signed_in = matches!(self, SessionOutcome::SignedIn(_));
        let (state, mut modal) = self.into_state();
        if signed_in {
            modal.notice = current.notice.clone();
        }
        (state, modal)
    }
}

/// Validate the stored token by fetching the current user.
///
/// Success refreshes the cached user record. Any failure clears the stored
/// session, so the next attempt starts from a clean login.
pub async fn restore_session<S: KeyValueStore>(
    store: &SessionStore<S>,
    api: &ShopApi,
) -> SessionOutcome {
    let Some(token) = store.token() else {
        return SessionOutcome::Anonymous;
    };

    match api.clone().with_token(Some(token)).current_user().await {
        Ok(user) => {
            store.save_user(&user);
            tracing::info!("Session restored for {}", user.email);
            SessionOutcome::SignedIn(user)
        }
        Err(e) => {
            tracing::warn!("Stored token rejected, signing out: {}", e);
            store.clear();
            SessionOutcome::Rejected
        }
    }
}

/// Persist a login (or OTP verification) response, then run the same refresh
/// as the on-load bootstrap.
pub async fn sign_in<S: KeyValueStore>(
    store: &SessionStore<S>,
    api: &ShopApi,
    response: LoginResponse,
) -> SessionOutcome {
    store.save_login(&response.access_token, &response.user);
    restore_session(store, api).await
}

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Native**: files under `<data_dir>/shoptft/`
pub fn session_store() -> SessionStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        #[cfg(not(target_arch = "wasm32"))]
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("shoptft");
        #[cfg(target_arch = "wasm32")]
        let base = std::path::PathBuf::from("shoptft");
        SessionStore::new(store::FileStore::new(base))
    }
}

/// API client for `config`, carrying the currently stored token.
pub fn make_api(config: &ShopConfig) -> ShopApi {
    ShopApi::new(&config.api.base_url).with_token(session_store().token())
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_config() -> Signal<ShopConfig> {
    use_context::<Signal<ShopConfig>>()
}

pub fn use_auth_modal() -> Signal<AuthModal> {
    use_context::<Signal<AuthModal>>()
}

pub fn use_purchases() -> Signal<PurchaseState> {
    use_context::<Signal<PurchaseState>>()
}

/// Apply a [`SessionOutcome`] to the shared signals.
pub fn apply_outcome(
    outcome: SessionOutcome,
    mut session: Signal<SessionState>,
    mut modal: Signal<AuthModal>,
) {
    let (state, next_modal) = outcome.resolve(&modal.peek());
    session.set(state);
    modal.set(next_modal);
}

/// Finish a login or OTP verification started from the auth modal.
pub async fn complete_sign_in(
    response: LoginResponse,
    config: Signal<ShopConfig>,
    session: Signal<SessionState>,
    modal: Signal<AuthModal>,
) {
    let api = ShopApi::new(&config.peek().api.base_url);
    let outcome = sign_in(&session_store(), &api, response).await;
    apply_outcome(outcome, session, modal);
}

/// Clear `store` and return the anonymous landing state.
pub fn end_session<S: KeyValueStore>(store: &SessionStore<S>) -> (SessionState, AuthModal) {
    store.clear();
    (SessionState::signed_out(), AuthModal::prompt())
}

/// End the session when the backend rejected the stored token, re-prompting
/// for a login. `None` for any other failure.
pub fn expire_session<S: KeyValueStore>(
    err: &ApiError,
    store: &SessionStore<S>,
) -> Option<(SessionState, AuthModal)> {
    if !err.is_unauthorized() {
        return None;
    }
    let (state, mut modal) = end_session(store);
    modal.require_login("Your session has expired. Please log in again.");
    Some((state, modal))
}

/// Clear the stored session and return to the anonymous landing state.
pub fn logout(mut session: Signal<SessionState>, mut modal: Signal<AuthModal>) {
    let (state, next_modal) = end_session(&session_store());
    session.set(state);
    modal.set(next_modal);
    tracing::info!("Signed out");
}

/// Force a logout and re-prompt when the backend rejected the stored token.
/// Returns whether the session was ended.
pub fn expire_if_unauthorized(
    err: &ApiError,
    mut session: Signal<SessionState>,
    mut modal: Signal<AuthModal>,
) -> bool {
    let Some((state, next_modal)) = expire_session(err, &session_store()) else {
        return false;
    };
    tracing::warn!("Token rejected mid-session, signing out");
    session.set(state);
    modal.set(next_modal);
    true
}

/// Provider component that owns config, session and auth-modal state.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context_provider(|| Signal::new(ShopConfig::load(SHOP_TOML)));
    let session = use_context_provider(|| Signal::new(SessionState::default()));
    let modal = use_context_provider(|| Signal::new(AuthModal::closed()));
    use_context_provider(|| Signal::new(PurchaseState::default()));

    // Validate the stored token on mount
    let _ = use_resource(move || async move {
        let api = ShopApi::new(&config.peek().api.base_url);
        let outcome = restore_session(&session_store(), &api).await;
        apply_outcome(outcome, session, modal);
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_modal::AuthView;
    use crate::notice::Notice;
    use serde_json::json;
    use store::{MemoryStore, Role};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "An".into(),
            email: "an@example.com".into(),
            role,
            balance: 10_000,
            avatar: None,
        }
    }

    async fn mount_me(server: &MockServer, token: &str, role: &str, balance: i64) {
        Mock::given(method("GET"))
            .and(path("/api/user/me"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "u1", "name": "An", "email": "an@example.com",
                "role": role, "balance": balance
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous() {
        let store = SessionStore::new(MemoryStore::new());
        let api = ShopApi::new("http://127.0.0.1:9");
        assert_eq!(restore_session(&store, &api).await, SessionOutcome::Anonymous);

        let (state, modal) = SessionOutcome::Anonymous.into_state();
        assert!(!state.is_logged_in());
        assert!(modal.open);
        assert_eq!(modal.view, AuthView::Initial);
    }

    #[tokio::test]
    async fn test_valid_token_refreshes_cached_user() {
        let server = MockServer::start().await;
        mount_me(&server, "good", "customer", 99_000).await;

        let store = SessionStore::new(MemoryStore::new());
        store.save_login("good", &user(Role::Customer));

        let outcome = restore_session(&store, &ShopApi::new(&server.uri())).await;
        let SessionOutcome::SignedIn(fresh) = outcome.clone() else {
            panic!("expected sign-in, got {outcome:?}");
        };
        assert_eq!(fresh.balance, 99_000);
        assert_eq!(store.cached_user().map(|u| u.balance), Some(99_000));

        let (state, modal) = outcome.into_state();
        assert_eq!(state.landing, Some(Page::Home));
        assert!(!modal.open);
    }

    #[tokio::test]
    async fn test_rejected_token_clears_storage() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
            .mount(&server)
            .await;

        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.save_login("expired", &user(Role::Customer));

        let outcome = restore_session(&store, &ShopApi::new(&server.uri())).await;
        assert_eq!(outcome, SessionOutcome::Rejected);
        assert!(backend.is_empty());

        let (state, modal) = outcome.into_state();
        assert!(state.user.is_none());
        assert_eq!(state.landing, Some(Page::Home));
        assert!(modal.open);
    }

    #[tokio::test]
    async fn test_admin_sign_in_lands_on_dashboard() {
        let server = MockServer::start().await;
        mount_me(&server, "admin-token", "admin", 0).await;

        let store = SessionStore::new(MemoryStore::new());
        let response = LoginResponse {
            access_token: "admin-token".into(),
            user: user(Role::Admin),
        };
        let outcome = sign_in(&store, &ShopApi::new(&server.uri()), response).await;
        assert_eq!(store.token().as_deref(), Some("admin-token"));

        let (state, _) = outcome.into_state();
        assert!(state.is_admin());
        assert_eq!(state.landing, Some(Page::Admin));
    }

    #[tokio::test]
    async fn test_customer_sign_in_lands_on_home() {
        let server = MockServer::start().await;
        mount_me(&server, "cust", "customer", 5_000).await;

        let store = SessionStore::new(MemoryStore::new());
        let response = LoginResponse {
            access_token: "cust".into(),
            user: user(Role::Customer),
        };
        let (state, modal) = sign_in(&store, &ShopApi::new(&server.uri()), response)
            .await
            .into_state();
        assert_eq!(state.user.map(|u| u.role), Some(Role::Customer));
        assert_eq!(state.landing, Some(Page::Home));
        assert!(!modal.open);
    }

    #[test]
    fn test_signed_out_state() {
        let state = SessionState::signed_out();
        assert!(!state.is_logged_in());
        assert!(!state.loading);
        assert_eq!(state.landing, Some(Page::Home));
    }

    #[test]
    fn test_logout_clears_storage_and_resets_state() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.save_login("tok", &user(Role::Customer));

        let (state, modal) = end_session(&store);
        assert!(backend.is_empty());
        assert!(store.token().is_none());
        assert!(!state.is_logged_in());
        assert_eq!(state.landing, Some(Page::Home));
        assert!(modal.open);
        assert_eq!(modal.view, AuthView::Initial);
    }

    #[test]
    fn test_unauthorized_error_expires_session() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.save_login("stale", &user(Role::Customer));

        let err = ApiError::Api {
            status: 401,
            message: "Unauthorized".into(),
        };
        let (state, modal) = expire_session(&err, &store).unwrap();
        assert!(backend.is_empty());
        assert!(state.user.is_none());
        assert_eq!(modal.view, AuthView::Login);
        assert!(modal.notice.is_some_and(|n| n.text().contains("expired")));
    }

    #[test]
    fn test_other_errors_keep_session() {
        let store = SessionStore::new(MemoryStore::new());
        store.save_login("tok", &user(Role::Customer));

        let err = ApiError::Api {
            status: 400,
            message: "Product already sold".into(),
        };
        assert!(expire_session(&err, &store).is_none());
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_sign_in_notice_kept_only_on_success() {
        let mut current = AuthModal::show(AuthView::Login);
        current.notice = Some(Notice::success("Signed in."));

        let (_, modal) = SessionOutcome::SignedIn(user(Role::Customer)).resolve(&current);
        assert_eq!(modal.notice, current.notice);

        let (state, modal) = SessionOutcome::Rejected.resolve(&current);
        assert!(state.user.is_none());
        assert_eq!(modal.view, AuthView::Initial);
        assert!(modal.notice.is_none());
    }
}
