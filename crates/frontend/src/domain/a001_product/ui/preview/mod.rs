use contracts::domain::a001_product::aggregate::{format_price, Product};
use leptos::prelude::*;

use crate::shared::date_utils::format_cn_date;
use crate::shared::modal::Modal;

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value}</span>
        </div>
    }
}

/// Read-only product card opened from the list
#[component]
pub fn ProductPreview(product: Product, on_close: Callback<()>) -> impl IntoView {
    let created = format_cn_date(&product.created_at);
    let category = product.category_name().to_string();
    let supplier = product.supplier_name().to_string();
    let title = format!("{} 详情", product.name);
    let Product {
        name,
        sku,
        barcode,
        description,
        image_url,
        unit_price,
        cost_price,
        ..
    } = product;

    view! {
        <Modal title=title on_close=on_close>
            <div class="product-preview">
                <div class="product-preview__image">
                    {match image_url {
                        Some(url) => view! { <img src=url alt=name.clone() /> }.into_any(),
                        None => view! { <div class="image-placeholder">"暂无图片"</div> }.into_any(),
                    }}
                </div>

                <div class="product-preview__info">
                    <div class="card">
                        {info_row("商品名称：", name)}
                        {info_row("SKU：", sku)}
                        {barcode.map(|b| info_row("条形码：", b))}
                        {info_row("售价：", format_price(unit_price))}
                        {info_row("成本价：", format_price(cost_price))}
                        {info_row("分类：", category)}
                        {info_row("供应商：", supplier)}
                        {info_row("创建日期：", created)}
                    </div>

                    {description.filter(|d| !d.is_empty()).map(|d| view! {
                        <div class="product-preview__description">
                            <h3>"商品描述"</h3>
                            <p>{d}</p>
                        </div>
                    })}
                </div>
            </div>
        </Modal>
    }
}
