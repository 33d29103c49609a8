use crate::layout::toast_service::{ToastService, Toaster};
use crate::routes::routes::AppRoutes;
use crate::shared::query_client::QueryClient;
use crate::system::auth::context::SessionContext;
use crate::system::roles::resolver::provide_role_resolver;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notifications and the query cache are used by every screen
    provide_context(ToastService::new());
    let queries = QueryClient::new();
    provide_context(queries);

    let session = SessionContext::init();
    provide_role_resolver(session, queries);

    view! {
        <AppRoutes />
        <Toaster />
    }
}
