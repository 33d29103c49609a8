use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::common::TableRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_supplier::api;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal::{confirm, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_client::use_query_client;

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Suppliers screen (`/suppliers`)
#[component]
pub fn SuppliersPage() -> impl IntoView {
    let queries = use_query_client();
    let toast = use_toast();

    let suppliers: RwSignal<Vec<Supplier>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    // Some(None) = new supplier, Some(Some(_)) = editing
    let form_target: RwSignal<Option<Option<Supplier>>> = RwSignal::new(None);

    Effect::new(move |_| {
        queries.watch(Supplier::cache_key());
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(data) => {
                    suppliers.set(data);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("加载{}失败: {}", Supplier::list_name(), e))),
            }
            set_loading.set(false);
        });
    });

    let delete_supplier = move |id: String| {
        if !confirm(&format!("确定要删除此{}吗？", Supplier::element_name())) {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(&id).await {
                Ok(()) => {
                    queries.invalidate(Supplier::cache_key());
                    toast.success("供应商删除成功");
                }
                Err(e) => toast.error("操作失败", e),
            }
        });
    };

    let close_form = Callback::new(move |_| form_target.set(None));

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="供应商管理">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form_target.set(Some(None))
                >
                    {icon("plus")}
                    " 添加供应商"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="card">
                    <h3 class="card__title">{Supplier::list_name()}</h3>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="page-loading">"加载中..."</div> }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"供应商名称"</TableHeaderCell>
                                        <TableHeaderCell>"联系人"</TableHeaderCell>
                                        <TableHeaderCell>"电话"</TableHeaderCell>
                                        <TableHeaderCell>"邮箱"</TableHeaderCell>
                                        <TableHeaderCell>"地址"</TableHeaderCell>
                                        <TableHeaderCell>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || suppliers.get().into_iter().map(|supplier| {
                                        let id = supplier.id.clone();
                                        let name = supplier.name.clone();
                                        let contact_person = or_dash(&supplier.contact_person);
                                        let phone = or_dash(&supplier.phone);
                                        let email = or_dash(&supplier.email);
                                        let address = or_dash(&supplier.address);
                                        let for_edit = supplier;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{name}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{contact_person}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{phone}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{address}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| form_target.set(Some(Some(for_edit.clone())))
                                                            attr:title="编辑"
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| delete_supplier(id.clone())
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
                        <Show when=move || suppliers.with(|s| s.is_empty())>
                            <div class="empty-state">"暂无供应商数据"</div>
                        </Show>
                    </Show>
                </div>
            </div>

            {move || form_target.get().map(|supplier| {
                let title = if supplier.is_some() { "编辑供应商" } else { "添加供应商" };
                view! {
                    <Modal title=title on_close=close_form>
                        <SupplierDetails supplier=supplier on_saved=close_form on_cancel=close_form />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
