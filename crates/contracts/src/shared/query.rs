//! Query strings for the backend's auto-generated table API
//!
//! The table API takes its whole request description in the URL:
//! `select=` projection, `column=op.value` filters, `order=column.dir`,
//! `limit=` and, for upserts, `on_conflict=`.
//!
//! # Example
//! ```rust
//! use contracts::shared::query::{Order, TableQuery};
//!
//! let q = TableQuery::from("suppliers")
//!     .select("*")
//!     .order("created_at", Order::Desc);
//! assert_eq!(q.to_query_string(), "select=*&order=created_at.desc");
//! ```

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Row filter operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Lt,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Lt => "lt",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Filter {
    column: String,
    op: FilterOp,
    value: String,
}

/// Description of one request against a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    table: String,
    select: Option<String>,
    filters: Vec<Filter>,
    order: Option<(String, Order)>,
    limit: Option<usize>,
    on_conflict: Option<String>,
}

impl TableQuery {
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
            on_conflict: None,
        }
    }

    /// Column projection; whitespace is stripped so multi-line lists can be used
    pub fn select(mut self, columns: &str) -> Self {
        let compact: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.select = Some(compact);
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op: FilterOp::Eq,
            value: value.to_string(),
        });
        self
    }

    pub fn lt(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op: FilterOp::Lt,
            value: value.to_string(),
        });
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Conflict target for upserts
    pub fn on_conflict(mut self, column: &str) -> Self {
        self.on_conflict = Some(column.to_string());
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(select) = &self.select {
            parts.push(format!("select={}", select));
        }
        for f in &self.filters {
            parts.push(format!(
                "{}={}.{}",
                urlencoding::encode(&f.column),
                f.op.as_str(),
                urlencoding::encode(&f.value)
            ));
        }
        if let Some((column, order)) = &self.order {
            parts.push(format!("order={}.{}", column, order.as_str()));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        if let Some(column) = &self.on_conflict {
            parts.push(format!("on_conflict={}", column));
        }
        parts.join("&")
    }

    /// Path below the backend URL, e.g. `/rest/v1/products?select=*`
    pub fn path(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            format!("/rest/v1/{}", self.table)
        } else {
            format!("/rest/v1/{}?{}", self.table, qs)
        }
    }
}

/// Total row count from a `Content-Range` header (`0-9/42`, `*/42`)
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup_query() {
        let q = TableQuery::from("user_roles")
            .select("role")
            .eq("user_id", "7f0c")
            .limit(1);
        assert_eq!(q.path(), "/rest/v1/user_roles?select=role&user_id=eq.7f0c&limit=1");
    }

    #[test]
    fn test_multiline_projection_is_compacted() {
        let q = TableQuery::from("profiles").select(
            "
            id,
            full_name,
            user_roles ( id, role )
            ",
        );
        assert_eq!(q.to_query_string(), "select=id,full_name,user_roles(id,role)");
    }

    #[test]
    fn test_filter_values_are_encoded() {
        let q = TableQuery::from("sales_orders").eq("status", "on hold&x");
        assert_eq!(q.to_query_string(), "status=eq.on%20hold%26x");
    }

    #[test]
    fn test_lt_order_and_conflict() {
        let q = TableQuery::from("inventory")
            .lt("current_stock", 10)
            .order("created_at", Order::Asc)
            .on_conflict("user_id");
        assert_eq!(
            q.to_query_string(),
            "current_stock=lt.10&order=created_at.asc&on_conflict=user_id"
        );
        assert!(q.has_filters());
    }

    #[test]
    fn test_bare_table_path() {
        assert_eq!(TableQuery::from("products").path(), "/rest/v1/products");
    }

    #[test]
    fn test_content_range() {
        assert_eq!(parse_content_range_total("0-9/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("*/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
