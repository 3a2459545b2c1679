use contracts::enums::Role;
use contracts::system::auth::{LoginResponse, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::ApiClient;
use crate::shared::config::use_config;

/// Signed-in user plus the bearer token. View-models receive this value in
/// their constructors instead of reading storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_admin_level(&self) -> bool {
        self.user.role.is_admin_level()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.user.scoped_client_id()
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        session: storage::load_session(),
    });
    let config = use_config();

    // Revalidate a restored session once
    if let Some(session) = auth_state.get_untracked().session {
        let client = ApiClient::for_session(&config, &session);
        spawn_local(async move {
            match api::current_user(&client).await {
                Ok(user) => {
                    let refreshed = Session {
                        token: session.token,
                        user,
                    };
                    storage::save_session(&refreshed);
                    auth_state.set(AuthState {
                        session: Some(refreshed),
                    });
                }
                Err(e) if e.is_auth_failure() => {
                    log::info!("stored session rejected: {}", e);
                    storage::clear_session();
                    auth_state.set(AuthState::default());
                }
                Err(e) => log::warn!("could not revalidate session: {}", e),
            }
        });
    }

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Current session, `None` when signed out. Only notifies when the session
/// actually changes, so a revalidation returning the same user is silent.
pub fn use_session() -> Memo<Option<Session>> {
    let auth_state = use_auth();
    Memo::new(move |_| auth_state.with(|s| s.session.clone()))
}

/// Store a fresh login and switch the shell to the signed-in layout
pub fn sign_in(auth_state: RwSignal<AuthState>, response: LoginResponse) {
    let session = Session::from(response);
    storage::save_session(&session);
    log::info!("signed in as {} ({})", session.user.email, session.role().code());
    auth_state.set(AuthState {
        session: Some(session),
    });
}

/// Clear `token` and `user` and return to the login page
pub fn sign_out(auth_state: RwSignal<AuthState>) {
    storage::clear_session();
    auth_state.set(AuthState::default());
}

#[cfg(test)]
pub(crate) fn test_session(role: Role, client_id: Option<&str>) -> Session {
    Session {
        token: "t".into(),
        user: SessionUser {
            id: "u1".into(),
            name: "Test User".into(),
            email: "user@example.com".into(),
            role,
            client_id: client_id.map(str::to_string),
            organization_id: None,
        },
    }
}
