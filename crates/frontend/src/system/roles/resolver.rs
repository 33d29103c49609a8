use contracts::shared::cache::keys;
use contracts::system::roles::{resolve_role, role_answer_applies, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::query_client::QueryClient;
use crate::system::auth::context::SessionContext;

/// Role of the signed-in user; `None` while the lookup is in flight
#[derive(Clone, Copy)]
pub struct RoleContext {
    pub role: RwSignal<Option<Role>>,
}

impl RoleContext {
    /// Resolved role, `Unassigned` until known
    pub fn current(&self) -> Role {
        self.role.get().unwrap_or_default()
    }

    pub fn is_resolved(&self) -> bool {
        self.role.with(|r| r.is_some())
    }
}

/// Provide the role of the current session.
///
/// Re-resolves when the user changes or `user-role:{id}` is invalidated.
/// A failed lookup resolves to `Unassigned` and is only logged.
pub fn provide_role_resolver(session: SessionContext, queries: QueryClient) -> RoleContext {
    let ctx = RoleContext {
        role: RwSignal::new(None),
    };
    provide_context(ctx);

    Effect::new(move |previous_user: Option<Option<String>>| {
        let Some(user_id) = session.user_id() else {
            ctx.role.set(None);
            return None;
        };
        queries.watch(&keys::user_role(&user_id));

        // a re-check for the same user keeps showing the known role
        if previous_user.flatten().as_deref() != Some(user_id.as_str()) {
            ctx.role.set(None);
        }
        let requested_for = user_id.clone();
        spawn_local(async move {
            let rows = api::fetch_user_role(&user_id).await;
            if let Err(e) = &rows {
                log::warn!("role lookup for {} failed, treating as unassigned: {}", user_id, e);
            }
            let role = resolve_role(rows);
            let applies = session
                .state
                .with_untracked(|s| role_answer_applies(&user_id, s.user_id()));
            if applies {
                log::debug!("resolved role {:?} for {}", role, user_id);
                ctx.role.set(Some(role));
            } else {
                log::debug!("dropping role answer for previous user {}", user_id);
            }
        });
        Some(requested_for)
    });

    ctx
}

pub fn use_role() -> RoleContext {
    use_context::<RoleContext>().expect("RoleContext not found in component tree")
}
