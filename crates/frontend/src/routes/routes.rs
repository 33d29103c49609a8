use contracts::system::navigation::{descriptor_for, paths, RouteAccess};
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::DashboardPage;
use crate::domain::a001_product::ui::list::ProductsPage;
use crate::domain::a002_supplier::ui::list::SuppliersPage;
use crate::layout::Shell;
use crate::system::auth::guard::{ProtectedRoute, RequireRole};
use crate::system::pages::login::AuthPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::placeholder::{InventoryPage, PurchasePage, SalesPage};
use crate::system::roles::ui::RolesPage;
use crate::system::users::ui::AdminPanel;

fn access_of(path: &str) -> RouteAccess {
    descriptor_for(path)
        .map(|d| d.access)
        .unwrap_or(RouteAccess::Everyone)
}

/// Signed-in frame: guard, shell, then the matched child route
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Shell>
                <Outlet />
            </Shell>
        </ProtectedRoute>
    }
}

#[component]
fn RolesRoute() -> impl IntoView {
    view! {
        <RequireRole access=access_of(paths::ROLES)>
            <RolesPage />
        </RequireRole>
    }
}

#[component]
fn AdminRoute() -> impl IntoView {
    view! {
        <RequireRole access=access_of(paths::ADMIN)>
            <AdminPanel />
        </RequireRole>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/auth") view=AuthPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/inventory") view=InventoryPage />
                    <Route path=path!("/purchase") view=PurchasePage />
                    <Route path=path!("/sales") view=SalesPage />
                    <Route path=path!("/suppliers") view=SuppliersPage />
                    <Route path=path!("/roles") view=RolesRoute />
                    <Route path=path!("/admin") view=AdminRoute />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
