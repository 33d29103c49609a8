use contracts::shared::cache::keys;
use contracts::system::roles::{AssignRoleDto, Role, UserRoleRecord};
use contracts::system::users::ProfileOption;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::RoleBadge;
use crate::shared::date_utils::format_cn_date;
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::query_client::use_query_client;
use crate::system::roles::api;

/// Role assignment screen (`/roles`)
#[component]
pub fn RolesPage() -> impl IntoView {
    let queries = use_query_client();
    let toast = use_toast();

    let assignments: RwSignal<Vec<UserRoleRecord>> = RwSignal::new(Vec::new());
    let profiles: RwSignal<Vec<ProfileOption>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (assigning, set_assigning) = signal(false);
    let selected_user = RwSignal::new(String::new());
    let selected_role = RwSignal::new(String::new());

    Effect::new(move |_| {
        queries.watch(keys::USER_ROLES);
        spawn_local(async move {
            match api::fetch_user_roles().await {
                Ok(data) => assignments.set(data),
                Err(e) => toast.error("加载角色失败", e),
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        queries.watch(keys::ALL_USERS);
        spawn_local(async move {
            match api::fetch_profile_options().await {
                Ok(data) => profiles.set(data),
                Err(e) => toast.error("加载用户失败", e),
            }
        });
    });

    let assign = move |_: leptos::ev::MouseEvent| {
        let dto = match AssignRoleDto::from_selection(&selected_user.get(), &selected_role.get()) {
            Ok(dto) => dto,
            Err(errors) => {
                toast.error(errors.to_string(), "");
                return;
            }
        };

        set_assigning.set(true);
        spawn_local(async move {
            match api::assign_role(&dto).await {
                Ok(()) => {
                    queries.invalidate_roles();
                    selected_user.set(String::new());
                    selected_role.set(String::new());
                    toast.success("角色分配成功");
                }
                Err(e) => toast.error("角色分配失败", e),
            }
            set_assigning.set(false);
        });
    };

    let remove = move |id: String| {
        if !confirm("确定要删除此角色吗？") {
            return;
        }
        spawn_local(async move {
            match api::remove_role(&id).await {
                Ok(()) => {
                    queries.invalidate_roles();
                    toast.success("角色删除成功");
                }
                Err(e) => toast.error("角色删除失败", e),
            }
        });
    };

    view! {
        <PageFrame page_id="sys_roles--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="用户角色管理" />

            <div class="page__content">
                <div class="card">
                    <h3 class="card__title">"分配用户角色"</h3>
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="form__group">
                            <Label>"选择用户"</Label>
                            <select
                                class="form__select"
                                prop:value=move || selected_user.get()
                                on:change=move |ev| selected_user.set(event_target_value(&ev))
                            >
                                <option value="">"选择用户"</option>
                                <For
                                    each=move || profiles.get()
                                    key=|p| p.id.clone()
                                    children=move |p| {
                                        view! { <option value=p.id.clone()>{p.display_name()}</option> }
                                    }
                                />
                            </select>
                        </div>

                        <div class="form__group">
                            <Label>"选择角色"</Label>
                            <select
                                class="form__select"
                                prop:value=move || selected_role.get()
                                on:change=move |ev| selected_role.set(event_target_value(&ev))
                            >
                                <option value="">"选择角色"</option>
                                {Role::ASSIGNABLE.iter().map(|r| {
                                    let value = r.as_db().unwrap_or_default();
                                    view! { <option value=value>{r.label()}</option> }
                                }).collect_view()}
                            </select>
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=assign
                            disabled=Signal::derive(move || assigning.get())
                        >
                            {move || if assigning.get() { "分配中..." } else { "分配角色" }}
                        </Button>
                    </Flex>
                </div>

                <div class="card">
                    <h3 class="card__title">"当前用户角色"</h3>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="page-loading">"加载中..."</div> }
                    >
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"用户"</TableHeaderCell>
                                    <TableHeaderCell>"邮箱"</TableHeaderCell>
                                    <TableHeaderCell>"角色"</TableHeaderCell>
                                    <TableHeaderCell>"分配时间"</TableHeaderCell>
                                    <TableHeaderCell>"操作"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || assignments.get().into_iter().map(|record| {
                                    let id = record.id.clone();
                                    let user_name = record.user_name().to_string();
                                    let user_email = record.user_email().to_string();
                                    let role = record.role;
                                    let assigned_at = format_cn_date(&record.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user_email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <RoleBadge role=role />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{assigned_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| remove(id.clone())
                                                >
                                                    {icon("trash")}
                                                    " 删除"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
