use super::auth::SessionState;
use super::navigation::{paths, RouteAccess};
use super::roles::Role;

pub const LOGIN_PATH: &str = paths::AUTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    /// Only while the persisted session is still being restored
    Pending,
}

/// Route guard: a missing session is the unauthenticated state, not an error
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Restoring => GuardDecision::Pending,
        SessionState::SignedOut => GuardDecision::RedirectToLogin,
        SessionState::SignedIn(_) => GuardDecision::Render,
    }
}

/// UI gate of role-restricted screens (the backend enforces the real rules)
pub fn role_gate(access: RouteAccess, role: Role) -> bool {
    access.allows(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Session;

    #[test]
    fn test_signed_in_renders() {
        let state = SessionState::SignedIn(Session {
            user_id: "u1".into(),
            email: String::new(),
        });
        assert_eq!(guard_decision(&state), GuardDecision::Render);
    }

    #[test]
    fn test_signed_out_redirects() {
        assert_eq!(
            guard_decision(&SessionState::SignedOut),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(LOGIN_PATH, "/auth");
    }

    #[test]
    fn test_pending_only_while_restoring() {
        assert_eq!(guard_decision(&SessionState::Restoring), GuardDecision::Pending);
    }

    #[test]
    fn test_role_gate() {
        assert!(role_gate(RouteAccess::AdminOrManager, Role::Admin));
        assert!(!role_gate(RouteAccess::ManagerOnly, Role::Admin));
        assert!(role_gate(RouteAccess::ManagerOnly, Role::Manager));
        assert!(!role_gate(RouteAccess::AdminOrManager, Role::Unassigned));
    }
}
