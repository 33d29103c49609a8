mod edit;

use contracts::shared::cache::keys;
use contracts::system::users::UserProfile;
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
use crate::system::users::api;
use edit::EditUserDialog;

/// Admin panel (`/admin`): every user profile with its role
#[component]
pub fn AdminPanel() -> impl IntoView {
    let queries = use_query_client();
    let toast = use_toast();

    let users: RwSignal<Vec<UserProfile>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing_user: RwSignal<Option<UserProfile>> = RwSignal::new(None);

    Effect::new(move |_| {
        queries.watch(keys::ADMIN_USERS);
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    users.set(data);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("加载用户失败: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let delete_user = move |user_id: String| {
        if !confirm("确定要删除此用户吗？此操作不可逆！") {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&user_id).await {
                Ok(()) => {
                    queries.invalidate(keys::ADMIN_USERS);
                    queries.invalidate(keys::USER_ROLES);
                    queries.invalidate(&keys::user_role(&user_id));
                    toast.success("用户删除成功");
                }
                Err(e) => toast.error("删除用户失败", e),
            }
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="管理面板" subtitle="查看和管理所有用户账号信息".to_string()>
                <Badge>{move || users.with(|u| u.len()).to_string()}</Badge>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show
                    when=move || !loading.get() || !users.with(|u| u.is_empty())
                    fallback=|| view! { <div class="page-loading">"加载中..."</div> }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"用户名"</TableHeaderCell>
                                    <TableHeaderCell>"邮箱"</TableHeaderCell>
                                    <TableHeaderCell>"角色"</TableHeaderCell>
                                    <TableHeaderCell>"注册时间"</TableHeaderCell>
                                    <TableHeaderCell>"操作"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || users.get().into_iter().map(|user| {
                                    let user_id = user.id.clone();
                                    let user_for_edit = user.clone();
                                    let registered = format_cn_date(&user.created_at);
                                    let full_name = user.full_name.clone().unwrap_or_else(|| "未设置".to_string());
                                    let email = user.email.clone().unwrap_or_else(|| "未设置".to_string());
                                    let role = user.primary_role();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {full_name}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match role {
                                                        Some(role) => view! { <RoleBadge role=role /> }.into_any(),
                                                        None => view! {
                                                            <span class="badge badge--outline">"无角色"</span>
                                                        }.into_any(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{registered}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing_user.set(Some(user_for_edit.clone()))
                                                        attr:title="编辑"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_user(user_id.clone())
                                                        attr:title="删除"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </Show>

                {move || editing_user.get().map(|user| view! {
                    <EditUserDialog
                        user=user
                        on_close=move || editing_user.set(None)
                    />
                })}
            </div>
        </PageFrame>
    }
}
