use contracts::shared::error::ApiError;
use contracts::system::auth::{Bearer, Session, SessionState, StoredSession};
use futures::lock::Mutex;
use leptos::prelude::*;
use leptos::task::spawn_local;
use once_cell::sync::{Lazy, OnceCell};

use super::{api, storage};

static ACTIVE: OnceCell<SessionContext> = OnceCell::new();
static REFRESH_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Current authenticated identity, provided once at the application root.
///
/// Created by [`SessionContext::init`], which restores the persisted session;
/// ended by [`SessionContext::teardown`].
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Provide the context and start restoring the persisted session
    pub fn init() -> Self {
        let ctx = Self {
            state: RwSignal::new(SessionState::Restoring),
        };
        provide_context(ctx);
        if ACTIVE.set(ctx).is_err() {
            log::warn!("session context already initialised");
        }

        spawn_local(async move {
            let restored = restore().await;
            match &restored {
                Some(stored) => log::info!("session restored for {}", stored.session.email),
                None => log::debug!("no session to restore"),
            }
            ctx.state.set(match restored {
                Some(stored) => SessionState::SignedIn(stored.session),
                None => SessionState::SignedOut,
            });
        });

        ctx
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session().cloned())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.with(|s| s.user_id().map(str::to_string))
    }

    pub fn email(&self) -> String {
        self.state
            .with(|s| s.session().map(|s| s.email.clone()))
            .unwrap_or_default()
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<(), ApiError> {
        let response = api::sign_in(email, password).await?;
        let stored = response.into_stored(now_secs());
        storage::save_session(&stored);
        log::info!("signed in as {}", stored.session.email);
        self.state.set(SessionState::SignedIn(stored.session));
        Ok(())
    }

    /// Sign out: revoke on the backend (best effort), drop the tokens and the identity
    pub async fn teardown(&self) {
        if let Some(stored) = storage::load_session() {
            if let Err(e) = api::sign_out(&stored.access_token).await {
                log::warn!("sign-out request failed: {}", e);
            }
        }
        end_session();
        log::info!("signed out");
    }
}

/// Drop the stored tokens and the identity; the route guard then redirects to sign-in
fn end_session() {
    storage::clear_session();
    if let Some(ctx) = ACTIVE.get() {
        ctx.state.set(SessionState::SignedOut);
    }
}

/// Access token for the next backend request, refreshed first when it has expired.
///
/// `None` means the anon key. A failed refresh ends the session.
pub async fn access_token() -> Option<String> {
    // concurrent callers wait for one refresh instead of racing
    let _guard = REFRESH_LOCK.lock().await;
    let stored = storage::load_session();
    match Bearer::for_session(stored.as_ref(), now_secs()) {
        Bearer::Anon => None,
        Bearer::Access(token) => Some(token),
        Bearer::Refresh(refresh_token) => match api::refresh_token(refresh_token).await {
            Ok(response) => {
                let refreshed = response.into_stored(now_secs());
                storage::save_session(&refreshed);
                log::debug!("access token refreshed for {}", refreshed.session.email);
                Some(refreshed.access_token)
            }
            Err(e) => {
                log::warn!("token refresh failed, signing out: {}", e);
                end_session();
                None
            }
        },
    }
}

/// Validate the stored session, refreshing the token when it was rejected or expired
async fn restore() -> Option<StoredSession> {
    let stored = storage::load_session()?;

    if !stored.is_expired(now_secs()) {
        match api::get_current_user(&stored.access_token).await {
            Ok(user) => {
                let restored = StoredSession {
                    session: user.into(),
                    ..stored
                };
                storage::save_session(&restored);
                return Some(restored);
            }
            Err(e) => log::debug!("stored access token rejected: {}", e),
        }
    }

    match api::refresh_token(stored.refresh_token.clone()).await {
        Ok(response) => {
            let refreshed = response.into_stored(now_secs());
            storage::save_session(&refreshed);
            Some(refreshed)
        }
        Err(e) => {
            log::warn!("session refresh failed: {}", e);
            storage::clear_session();
            None
        }
    }
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
