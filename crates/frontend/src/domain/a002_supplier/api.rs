use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierOption, SupplierPayload};
use contracts::domain::common::TableRecord;
use contracts::shared::error::ApiError;
use contracts::shared::query::{Order, TableQuery};

use crate::shared::rest;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    let query = TableQuery::from(Supplier::table_name()).order("created_at", Order::Desc);
    rest::select(&query).await
}

/// Supplier select of the product form, by name
pub async fn fetch_supplier_options() -> Result<Vec<SupplierOption>, ApiError> {
    let query = TableQuery::from(Supplier::table_name())
        .select("id,name")
        .order("name", Order::Asc);
    rest::select(&query).await
}

pub async fn create_supplier(payload: &SupplierPayload) -> Result<(), ApiError> {
    rest::insert(Supplier::table_name(), payload).await
}

pub async fn update_supplier(id: &str, payload: &SupplierPayload) -> Result<(), ApiError> {
    rest::update_eq(Supplier::table_name(), "id", id, payload).await
}

pub async fn delete_supplier(id: &str) -> Result<(), ApiError> {
    rest::delete_eq(Supplier::table_name(), "id", id).await
}
