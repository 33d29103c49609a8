use contracts::system::navigation::paths;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // A signed-in user has nothing to do here
    let navigate_home = navigate.clone();
    Effect::new(move |_| {
        if session.state.with(|s| s.session().is_some()) {
            navigate_home(paths::HOME, Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.sign_in(email_val, password_val).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate(paths::HOME, Default::default());
                }
                Err(e) => {
                    log::warn!("sign-in failed: {}", e);
                    set_error_message.set(Some(format!("登录失败: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"进销存管理系统"</h1>
                <h2>"登录"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"邮箱"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="请输入邮箱"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"密码"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="请输入密码"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
