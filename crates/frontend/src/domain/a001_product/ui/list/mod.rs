use contracts::domain::a001_product::aggregate::{format_price, Product};
use contracts::domain::common::TableRecord;
use contracts::shared::cache::keys;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::preview::ProductPreview;
use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal::{confirm, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_client::use_query_client;

/// Which form is open over the list
#[derive(Clone, Debug, PartialEq)]
enum FormTarget {
    New,
    Edit(Product),
}

/// Products screen (`/products`): list, detail card, create/edit form
#[component]
pub fn ProductsPage() -> impl IntoView {
    let queries = use_query_client();
    let toast = use_toast();

    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let form_target: RwSignal<Option<FormTarget>> = RwSignal::new(None);
    let viewing: RwSignal<Option<Product>> = RwSignal::new(None);

    Effect::new(move |_| {
        queries.watch(Product::cache_key());
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    products.set(data);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("加载{}失败: {}", Product::list_name(), e))),
            }
            set_loading.set(false);
        });
    });

    let delete_product = move |id: String| {
        if !confirm(&format!("确定要删除此{}吗？", Product::element_name())) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    queries.invalidate(Product::cache_key());
                    queries.invalidate(keys::DASHBOARD_STATS);
                    toast.success("商品删除成功");
                }
                Err(e) => toast.error("操作失败", e),
            }
        });
    };

    let close_form = Callback::new(move |_| form_target.set(None));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="商品管理">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form_target.set(Some(FormTarget::New))
                >
                    {icon("plus")}
                    " 添加商品"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="card">
                    <h3 class="card__title">{Product::list_name()}</h3>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="page-loading">"加载中..."</div> }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"商品名称"</TableHeaderCell>
                                        <TableHeaderCell>"SKU"</TableHeaderCell>
                                        <TableHeaderCell>"分类"</TableHeaderCell>
                                        <TableHeaderCell>"供应商"</TableHeaderCell>
                                        <TableHeaderCell>"售价"</TableHeaderCell>
                                        <TableHeaderCell>"成本价"</TableHeaderCell>
                                        <TableHeaderCell>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || products.get().into_iter().map(|product| {
                                        let id = product.id.clone();
                                        let name = product.name.clone();
                                        let sku = product.sku.clone();
                                        let category = product.category_name().to_string();
                                        let supplier = product.supplier_name().to_string();
                                        let unit_price = format_price(product.unit_price);
                                        let cost_price = format_price(product.cost_price);
                                        let for_view = product.clone();
                                        let for_edit = product;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{name}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{sku}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{category}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{supplier}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{unit_price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{cost_price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| viewing.set(Some(for_view.clone()))
                                                            attr:title="查看"
                                                        >
                                                            {icon("eye")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| form_target.set(Some(FormTarget::Edit(for_edit.clone())))
                                                            attr:title="编辑"
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| delete_product(id.clone())
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
                </div>
            </div>

            {move || viewing.get().map(|product| view! {
                <ProductPreview product=product on_close=Callback::new(move |_| viewing.set(None)) />
            })}

            {move || form_target.get().map(|target| {
                let (title, product) = match target {
                    FormTarget::New => ("添加商品", None),
                    FormTarget::Edit(product) => ("编辑商品", Some(product)),
                };
                view! {
                    <Modal title=title on_close=close_form>
                        <ProductDetails product=product on_saved=close_form on_cancel=close_form />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
