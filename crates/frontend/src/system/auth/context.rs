use contracts::system::access::{can_access, Module};
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, claims, storage};
use crate::shared::api_error::ApiError;
use crate::shared::http;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Идёт восстановление сессии при загрузке
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn can_access(&self, module: Module) -> bool {
        self.user_info
            .as_ref()
            .is_some_and(|u| can_access(&u.role, &u.permissions, module))
    }

    pub fn username(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Восстановление сессии: живой токен → `/auth/me`, иначе один refresh
async fn restore_session() -> Option<AuthState> {
    let token = storage::get_access_token()?;

    if claims::is_token_usable(&token, now_unix()) {
        match api::get_current_user().await {
            Ok(user) => {
                return Some(AuthState {
                    access_token: Some(token),
                    user_info: Some(user),
                    restoring: false,
                })
            }
            Err(e) => log::info!("session check failed: {}", e),
        }
    }

    let refresh = storage::get_refresh_token()?;
    let response = match api::refresh_token(refresh).await {
        Ok(r) => r,
        Err(e) => {
            log::info!("token refresh failed: {}", e);
            return None;
        }
    };
    storage::save_access_token(&response.access_token);
    match api::get_current_user().await {
        Ok(user) => Some(AuthState {
            access_token: Some(response.access_token),
            user_info: Some(user),
            restoring: false,
        }),
        Err(e) => {
            log::info!("profile after refresh failed: {}", e);
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..AuthState::default()
    });

    // 401 на любом запросе: принудительный выход, только если сессия активна
    http::set_unauthorized_handler(move || {
        let logged_in = auth_state.with_untracked(|s| s.access_token.is_some());
        if logged_in {
            log::warn!("401 received, forcing logout");
            storage::clear_tokens();
            auth_state.set(AuthState::default());
        }
    });

    if auth_state.get_untracked().restoring {
        spawn_local(async move {
            match restore_session().await {
                Some(state) => {
                    log::info!("session restored for {}", state.username());
                    auth_state.set(state);
                }
                None => {
                    storage::clear_tokens();
                    auth_state.set(AuthState::default());
                }
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

pub async fn do_login(
    auth_state: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    match response.refresh_token.as_deref() {
        Some(refresh) => storage::save_refresh_token(refresh),
        None => log::debug!("login response without refresh token"),
    }

    log::info!("logged in as {}", response.user.username);
    auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });
    Ok(())
}

/// Выход: отзыв токена (best effort) и очистка состояния
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    let refresh = storage::get_refresh_token();
    spawn_local(async move {
        if let Err(e) = api::logout(refresh).await {
            log::debug!("logout request ignored: {}", e);
        }
    });
    storage::clear_tokens();
    auth_state.set(AuthState::default());
}
