use contracts::system::auth::StoredSession;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<StoredSession>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn email(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.email.clone())
            .unwrap_or_default()
    }
}

/// Auth context provider component
///
/// The stored session is trusted as-is; an expired token surfaces as a
/// backend error on the first request.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::get_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::sign_in(email, password).await?;
    let session = StoredSession::from(response);

    storage::save_session(&session);
    log::info!("Signed in as {}", session.email);
    set_auth_state.set(AuthState {
        session: Some(session),
    });

    Ok(())
}

/// Helper: Perform logout; the local session is dropped even if revoking fails
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        if let Err(e) = api::sign_out(&token).await {
            log::warn!("Sign-out request failed: {}", e);
        }
    }

    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
