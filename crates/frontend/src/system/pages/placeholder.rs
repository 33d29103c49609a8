use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PLACEHOLDER;

/// Screen that is not built yet: title and a notice
#[component]
pub fn PlaceholderPage(page_id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_PLACEHOLDER>
            <PageHeader title=title />
            <div class="page__content">
                <p class="placeholder-text">{format!("{}功能正在开发中...", title)}</p>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    view! { <PlaceholderPage page_id="inventory--placeholder" title="库存管理" /> }
}

#[component]
pub fn PurchasePage() -> impl IntoView {
    view! { <PlaceholderPage page_id="purchase--placeholder" title="采购管理" /> }
}

#[component]
pub fn SalesPage() -> impl IntoView {
    view! { <PlaceholderPage page_id="sales--placeholder" title="销售管理" /> }
}
