use contracts::dashboards::d001_overview::{DashboardStats, StatKind};
use contracts::shared::cache::keys;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d001_overview::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::query_client::use_query_client;

/// Home screen (`/`): four counters
#[component]
pub fn DashboardPage() -> impl IntoView {
    let queries = use_query_client();
    let stats: RwSignal<Option<DashboardStats>> = RwSignal::new(None);

    Effect::new(move |_| {
        queries.watch(keys::DASHBOARD_STATS);
        spawn_local(async move {
            stats.set(Some(api::fetch_dashboard_stats().await));
        });
    });

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="仪表盘" />

            <div class="page__content">
                <div class="stat-grid">
                    {StatKind::ALL.into_iter().map(|kind| view! {
                        <StatCard
                            label=kind.title().to_string()
                            icon_name=kind.icon().to_string()
                            value=Signal::derive(move || stats.get().map(|s| s.value(kind)))
                            warn_when_positive=kind == StatKind::LowStockItems
                        />
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
