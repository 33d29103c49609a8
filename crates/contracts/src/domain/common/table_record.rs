use serde::{Deserialize, Serialize};

/// A record mirrored from one backend table.
///
/// The client holds no authoritative copy; these are the static names a
/// screen needs to query, cache and label the rows.
pub trait TableRecord {
    /// Primary key of the row
    fn id(&self) -> &str;

    /// Table name in the backend (e.g. "products")
    fn table_name() -> &'static str;

    /// Element name for the UI, singular (e.g. "商品")
    fn element_name() -> &'static str;

    /// List name for the UI (e.g. "商品列表")
    fn list_name() -> &'static str;

    /// Cache key of the list query; defaults to the table name
    fn cache_key() -> &'static str {
        Self::table_name()
    }
}

/// `{ name }` object embedded through a foreign key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}
