use serde::{Deserialize, Serialize};

use crate::domain::common::TableRecord;

/// Категория товара (商品分类); read-only here, feeds the product form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl TableRecord for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn table_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "商品分类"
    }

    fn list_name() -> &'static str {
        "商品分类"
    }
}
