use contracts::dashboards::d001_overview::{DashboardStats, StatKind};
use futures::future::join4;

use crate::shared::rest;

/// The four head counts, issued concurrently; a failed count reads as 0
pub async fn fetch_dashboard_stats() -> DashboardStats {
    let [products, low_stock, purchases, sales] = StatKind::ALL.map(|kind| kind.count_query());
    let (products, low_stock, purchases, sales) = join4(
        rest::count(&products),
        rest::count(&low_stock),
        rest::count(&purchases),
        rest::count(&sales),
    )
    .await;

    let counts = [products, low_stock, purchases, sales];
    for (kind, count) in StatKind::ALL.iter().zip(&counts) {
        if let Err(e) = count {
            log::warn!("count for {} failed: {}", kind.title(), e);
        }
    }
    DashboardStats::from_counts(counts)
}
