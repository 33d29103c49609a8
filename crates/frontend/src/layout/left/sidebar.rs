//! Sidebar navigation: the route list filtered by the resolved role

use contracts::system::navigation::{compose_navigation, is_active, ROUTES};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::roles::resolver::use_role;

#[component]
pub fn Sidebar() -> impl IntoView {
    let role = use_role();
    let location = use_location();

    // Recomputed when the role resolves or changes
    let items = Memo::new(move |_| {
        compose_navigation(ROUTES, role.current())
            .into_iter()
            .copied()
            .collect::<Vec<_>>()
    });

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || items.get()
                key=|item| item.path
                children=move |item| {
                    let path = item.path;
                    view! {
                        <A href=path>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || is_active(path, &location.pathname.get())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                }
            />
        </nav>
    }
}
