use super::view_model::ProductDetailsViewModel;
use contracts::domain::a001_product::aggregate::{Product, ProductForm};
use contracts::domain::a002_supplier::aggregate::SupplierOption;
use contracts::domain::a003_category::aggregate::Category;
use contracts::shared::cache::keys;
use contracts::shared::validation::parse_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_supplier::api::fetch_supplier_options;
use crate::domain::a003_category::api::fetch_categories;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::shared::query_client::use_query_client;
use crate::system::auth::context::use_session;

type Getter = fn(&ProductForm) -> String;
type Setter = fn(&mut ProductForm, String);

/// Plain text input bound to one form field, with its inline error
fn text_field(
    vm: ProductDetailsViewModel,
    label: &'static str,
    field: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <input
                type="text"
                id=field
                class="form__input"
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
                disabled=move || vm.saving.get()
            />
            {move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

fn price_field(
    vm: ProductDetailsViewModel,
    label: &'static str,
    field: &'static str,
    get: fn(&ProductForm) -> f64,
    set: fn(&mut ProductForm, f64),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=field>{label}</label>
            <input
                type="number"
                step="0.01"
                id=field
                class="form__input"
                prop:value=move || vm.form.with(get).to_string()
                on:change=move |ev| {
                    let value = parse_amount(&event_target_value(&ev));
                    vm.form.update(|f| set(f, value));
                }
                disabled=move || vm.saving.get()
            />
            {move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Create/edit form of a product. Saving uploads the picked image first.
#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let queries = use_query_client();
    let session = use_session();
    let vm = ProductDetailsViewModel::new(product.as_ref(), toast, queries);

    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let suppliers: RwSignal<Vec<SupplierOption>> = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        queries.watch(keys::CATEGORIES);
        spawn_local(async move {
            match fetch_categories().await {
                Ok(data) => categories.set(data),
                Err(e) => log::warn!("categories not loaded: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        queries.watch(keys::SUPPLIERS);
        spawn_local(async move {
            match fetch_supplier_options().await {
                Ok(data) => suppliers.set(data),
                Err(e) => log::warn!("suppliers not loaded: {}", e),
            }
        });
    });

    let on_file = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.select_image(file);
        }
        input.set_value("");
    };

    let save = move |_: leptos::ev::MouseEvent| {
        vm.save_command(session.user_id(), on_saved);
    };

    view! {
        <div class="details-container product-details">
            <div class="details-form details-form--two-columns">
                <div class="details-form__column">
                    {text_field(vm, "商品名称 *", "name", |f| f.name.clone(), |f, v| f.name = v)}
                    {text_field(vm, "SKU *", "sku", |f| f.sku.clone(), |f, v| f.sku = v)}
                    {text_field(vm, "商品描述", "description", |f| f.description.clone(), |f, v| f.description = v)}
                    <div class="form__row">
                        {price_field(vm, "售价 *", "unit_price", |f| f.unit_price, |f, v| f.unit_price = v)}
                        {price_field(vm, "成本价 *", "cost_price", |f| f.cost_price, |f, v| f.cost_price = v)}
                    </div>
                </div>

                <div class="details-form__column">
                    <div class="form__group">
                        <label class="form__label">"商品图片"</label>
                        <div class="image-drop">
                            {move || match vm.preview.get() {
                                Some(url) => view! {
                                    <div class="image-drop__preview">
                                        <img src=url alt="商品图片预览" />
                                        <button
                                            type="button"
                                            class="button button--icon image-drop__clear"
                                            on:click=move |_| vm.clear_image()
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="image-drop__hint">
                                        {icon("upload")}
                                        <p>"点击或拖拽图片上传"</p>
                                        <p class="image-drop__note">"PNG, JPG, GIF 文件 (最大 5MB)"</p>
                                    </div>
                                }.into_any(),
                            }}
                            <input
                                type="file"
                                accept="image/*"
                                class="image-drop__input"
                                on:change=on_file
                                disabled=move || vm.saving.get()
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"商品分类"</label>
                        <select
                            class="form__select"
                            prop:value=move || vm.form.with(|f| f.category_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.category_id = value);
                            }
                        >
                            <option value="">"选择分类"</option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id.clone()
                                children=|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"供应商"</label>
                        <select
                            class="form__select"
                            prop:value=move || vm.form.with(|f| f.supplier_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.supplier_id = value);
                            }
                        >
                            <option value="">"选择供应商"</option>
                            <For
                                each=move || suppliers.get()
                                key=|s| s.id.clone()
                                children=|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> }
                            />
                        </select>
                    </div>

                    {text_field(vm, "条形码", "barcode", |f| f.barcode.clone(), |f, v| f.barcode = v)}
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || {
                        if vm.saving.get() {
                            "提交中..."
                        } else if vm.is_edit_mode() {
                            "更新"
                        } else {
                            "创建"
                        }
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "取消"
                </Button>
            </div>
        </div>
    }
}
