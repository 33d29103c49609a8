//! Route guards. UI gating only: the backend's row-level rules decide what
//! a user can actually read or change.

use contracts::system::guard::{guard_decision, role_gate, GuardDecision, LOGIN_PATH};
use contracts::system::navigation::RouteAccess;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_session;
use crate::system::roles::resolver::use_role;

/// Renders children only with a session; redirects to the login page otherwise
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| session.state.with(guard_decision));

    Effect::new(move |_| {
        if decision.get() == GuardDecision::RedirectToLogin {
            navigate(LOGIN_PATH, Default::default());
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Pending => view! { <div class="page-loading">"加载中..."</div> }.into_any(),
            GuardDecision::RedirectToLogin => view! { <></> }.into_any(),
        }}
    }
}

/// Shows children only when the resolved role satisfies `access`
#[component]
pub fn RequireRole(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let role = use_role();

    view! {
        {move || {
            if !role.is_resolved() {
                view! { <div class="page-loading">"加载中..."</div> }.into_any()
            } else if role_gate(access, role.current()) {
                children().into_any()
            } else {
                view! {
                    <div class="alert alert--error">"无权访问此页面"</div>
                }.into_any()
            }
        }}
    }
}
