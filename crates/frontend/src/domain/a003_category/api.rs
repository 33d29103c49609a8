use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::common::TableRecord;
use contracts::shared::error::ApiError;
use contracts::shared::query::{Order, TableQuery};

use crate::shared::rest;

/// Categories for the product form, by name
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let query = TableQuery::from(Category::table_name())
        .select("id,name")
        .order("name", Order::Asc);
    rest::select(&query).await
}
