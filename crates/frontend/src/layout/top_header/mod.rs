//! TopHeader component - application title, signed-in user and sign-out

use contracts::system::guard::LOGIN_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::shared::query_client::use_query_client;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let queries = use_query_client();
    let toast = use_toast();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.teardown().await;
            queries.invalidate_roles();
            toast.success("已退出登录");
            navigate(LOGIN_PATH, Default::default());
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"进销存管理系统"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{move || format!("欢迎，{}", session.email())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="退出">
                    {icon("log-out")}
                    <span>"退出"</span>
                </button>
            </div>
        </div>
    }
}
