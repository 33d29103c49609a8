use contracts::domain::a001_product::aggregate::{Product, ProductPayload};
use contracts::domain::common::TableRecord;
use contracts::shared::error::ApiError;
use contracts::shared::query::{Order, TableQuery};

use crate::shared::rest;

/// Product list, newest first, with category and supplier names
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let query = TableQuery::from(Product::table_name())
        .select(Product::LIST_COLUMNS)
        .order("created_at", Order::Desc);
    rest::select(&query).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<(), ApiError> {
    rest::insert(Product::table_name(), payload).await
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<(), ApiError> {
    rest::update_eq(Product::table_name(), "id", id, payload).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    rest::delete_eq(Product::table_name(), "id", id).await
}
