use contracts::shared::cache::keys;
use contracts::system::roles::Role;
use contracts::system::users::{EditUserForm, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::modal::Modal;
use crate::shared::query_client::use_query_client;
use crate::system::users::api;

/// Profile and role editor of the admin panel
#[component]
pub fn EditUserDialog<F>(user: UserProfile, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let queries = use_query_client();
    let toast = use_toast();

    let initial = EditUserForm::from_profile(&user);
    let full_name = RwSignal::new(initial.full_name);
    let email = RwSignal::new(initial.email);
    let role = RwSignal::new(initial.role);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let user_id = StoredValue::new(user.id.clone());

    let on_save = move |_: leptos::ev::MouseEvent| {
        let form = EditUserForm {
            full_name: full_name.get(),
            email: email.get(),
            role: role.get(),
        };
        if let Err(errors) = form.validate() {
            set_error.set(Some(errors.to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let user_id = user_id.get_value();

        spawn_local(async move {
            let result = async {
                if let Some(patch) = form.profile_patch() {
                    api::update_profile(&user_id, &patch).await?;
                }
                if let Some(role) = form.role_replacement() {
                    api::replace_role(&user_id, role).await?;
                }
                Ok::<(), contracts::shared::error::ApiError>(())
            }
            .await;

            match result {
                Ok(()) => {
                    queries.invalidate(keys::ADMIN_USERS);
                    if form.role_replacement().is_some() {
                        queries.invalidate_roles();
                    }
                    toast.success("用户信息更新成功");
                    on_close();
                }
                Err(e) => {
                    toast.error("更新用户信息失败", &e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal
            title="编辑用户信息"
            on_close=Callback::new(move |_| on_close())
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                    disabled=Signal::derive(move || saving.get())
                >
                    "取消"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "更新中..." } else { "保存" }}
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"用户名"</Label>
                <Input
                    value=full_name
                    placeholder="请输入用户名"
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"邮箱"</Label>
                <Input
                    value=email
                    input_type=InputType::Email
                    placeholder="请输入邮箱"
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>"角色"</Label>
                <select
                    class="form__select"
                    prop:value=move || role.get()
                    on:change=move |ev| role.set(event_target_value(&ev))
                >
                    <option value="">"选择角色"</option>
                    {Role::ASSIGNABLE.iter().map(|r| {
                        let value = r.as_db().unwrap_or_default();
                        view! { <option value=value>{r.label()}</option> }
                    }).collect_view()}
                </select>
            </div>
        </Modal>
    }
}
