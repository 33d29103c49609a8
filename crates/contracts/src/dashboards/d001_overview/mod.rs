use serde::{Deserialize, Serialize};

use crate::shared::query::TableQuery;

/// Stock below this level counts as low
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: u64,
    pub low_stock_items: u64,
    pub pending_purchases: u64,
    pub pending_sales: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    TotalProducts,
    LowStockItems,
    PendingPurchases,
    PendingSales,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::TotalProducts,
        StatKind::LowStockItems,
        StatKind::PendingPurchases,
        StatKind::PendingSales,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatKind::TotalProducts => "商品总数",
            StatKind::LowStockItems => "低库存商品",
            StatKind::PendingPurchases => "待处理采购",
            StatKind::PendingSales => "待处理销售",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatKind::TotalProducts => "package",
            StatKind::LowStockItems => "alert-triangle",
            StatKind::PendingPurchases => "shopping-cart",
            StatKind::PendingSales => "trending-up",
        }
    }

    /// Head-count query behind the card
    pub fn count_query(&self) -> TableQuery {
        match self {
            StatKind::TotalProducts => TableQuery::from("products").select("*"),
            StatKind::LowStockItems => TableQuery::from("inventory")
                .select("*")
                .lt("current_stock", LOW_STOCK_THRESHOLD),
            StatKind::PendingPurchases => TableQuery::from("purchase_orders")
                .select("*")
                .eq("status", "pending"),
            StatKind::PendingSales => TableQuery::from("sales_orders")
                .select("*")
                .eq("status", "pending"),
        }
    }
}

impl DashboardStats {
    /// Assemble from per-card counts; a failed count shows as 0
    pub fn from_counts<E>(counts: [Result<u64, E>; 4]) -> Self {
        let [products, low_stock, purchases, sales] = counts;
        Self {
            total_products: products.unwrap_or(0),
            low_stock_items: low_stock.unwrap_or(0),
            pending_purchases: purchases.unwrap_or(0),
            pending_sales: sales.unwrap_or(0),
        }
    }

    pub fn value(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::TotalProducts => self.total_products,
            StatKind::LowStockItems => self.low_stock_items,
            StatKind::PendingPurchases => self.pending_purchases,
            StatKind::PendingSales => self.pending_sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_queries() {
        assert_eq!(
            StatKind::LowStockItems.count_query().path(),
            "/rest/v1/inventory?select=*&current_stock=lt.10"
        );
        assert_eq!(
            StatKind::PendingSales.count_query().path(),
            "/rest/v1/sales_orders?select=*&status=eq.pending"
        );
        assert!(!StatKind::TotalProducts.count_query().has_filters());
    }

    #[test]
    fn test_missing_counts_are_zero() {
        let stats = DashboardStats::from_counts([Ok(12), Err("timeout"), Ok(3), Err("401")]);
        assert_eq!(stats.value(StatKind::TotalProducts), 12);
        assert_eq!(stats.low_stock_items, 0);
        assert_eq!(stats.value(StatKind::PendingPurchases), 3);
        assert_eq!(stats.pending_sales, 0);
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = StatKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles, ["商品总数", "低库存商品", "待处理采购", "待处理销售"]);
    }
}
