use contracts::system::auth::{AdminUser, LoginRequest};
use leptos::prelude::*;

use super::api;
use super::storage::SessionStore;
use crate::shared::error::AppError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<AdminUser>,
}

/// The operator session, provided at the root of the app.
///
/// Tokens live only in the [`SessionStore`]; the reactive state holds what the
/// UI renders.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Restores a persisted session without a network round trip; the first
    /// authorized request validates it.
    pub fn restore() -> Self {
        let user = SessionStore::browser().restore().map(|(_, user)| user);
        match &user {
            Some(user) => log::info!("Session restored for {}", user.email),
            None => log::debug!("No persisted session"),
        }
        Self {
            state: RwSignal::new(SessionState { user }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn user(&self) -> Option<AdminUser> {
        self.state.with(|s| s.user.clone())
    }

    pub async fn login(&self, request: LoginRequest) -> Result<(), AppError> {
        request.validate()?;
        let response = api::login(&request).await?;
        SessionStore::browser().save_login(&response.access, &response.refresh, &response.user);
        log::info!("Logged in as {}", response.user.email);
        self.state.set(SessionState {
            user: Some(response.user),
        });
        Ok(())
    }

    /// Replaces the cached profile after an update.
    pub fn set_user(&self, user: AdminUser) {
        SessionStore::browser().save_user(&user);
        self.state.update(|s| s.user = Some(user));
    }

    /// Best-effort server logout, then local cleanup.
    pub async fn logout(&self) {
        let store = SessionStore::browser();
        if let Some(refresh) = store.refresh_token() {
            if let Err(e) = api::logout(refresh).await {
                log::warn!("Server logout failed: {}", e);
            }
        }
        store.clear();
        self.state.set(SessionState::default());
        log::info!("Logged out");
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(Session::restore());
    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
