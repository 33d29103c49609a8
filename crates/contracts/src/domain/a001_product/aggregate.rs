use serde::{Deserialize, Serialize};

use crate::domain::common::{NameRef, TableRecord};
use crate::shared::error::ApiError;
use crate::shared::validation::{none_if_blank, ValidationErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Товарная позиция (商品), mirrored from `products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<String>,
    pub unit_price: f64,
    pub cost_price: f64,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub categories: Option<NameRef>,
    #[serde(default)]
    pub suppliers: Option<NameRef>,
}

impl Product {
    /// Projection of the list query, with category and supplier names embedded
    pub const LIST_COLUMNS: &'static str = "
        id,
        name,
        sku,
        unit_price,
        cost_price,
        description,
        barcode,
        image_url,
        created_at,
        category_id,
        supplier_id,
        categories (name),
        suppliers (name)
    ";

    pub fn category_name(&self) -> &str {
        self.categories.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn supplier_name(&self) -> &str {
        self.suppliers.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }
}

impl TableRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn table_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "商品"
    }

    fn list_name() -> &'static str {
        "商品列表"
    }
}

/// Prices are shown in yuan without rounding, as entered
pub fn format_price(value: f64) -> String {
    format!("¥{}", value)
}

// ============================================================================
// Form
// ============================================================================

/// Create/edit form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category_id: String,
    pub supplier_id: String,
    pub unit_price: f64,
    pub cost_price: f64,
    pub barcode: String,
    /// Already-stored image; replaced when a new file is uploaded
    pub image_url: String,
}

/// Row body sent on insert and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub supplier_id: Option<String>,
    pub unit_price: f64,
    pub cost_price: f64,
    pub barcode: Option<String>,
    pub image_url: Option<String>,
    pub created_by: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            sku: product.sku.clone(),
            description: product.description.clone().unwrap_or_default(),
            category_id: product.category_id.clone().unwrap_or_default(),
            supplier_id: product.supplier_id.clone().unwrap_or_default(),
            unit_price: product.unit_price,
            cost_price: product.cost_price,
            barcode: product.barcode.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            ValidationRules::required().validate_string(&self.name, "商品名称"),
        );
        errors.check(
            "sku",
            ValidationRules::required().validate_string(&self.sku, "SKU"),
        );
        errors.check(
            "unit_price",
            ValidationRules::non_negative().validate_number(self.unit_price, "售价"),
        );
        errors.check(
            "cost_price",
            ValidationRules::non_negative().validate_number(self.cost_price, "成本价"),
        );
        errors.into_result()
    }

    /// Turn the form into a row body.
    ///
    /// Validation runs first; a form that fails it never reaches the backend.
    /// `image_url` is the freshly uploaded URL, if any, and otherwise the stored one is kept.
    pub fn into_payload(
        self,
        created_by: Option<&str>,
        image_url: Option<String>,
    ) -> Result<ProductPayload, ApiError> {
        self.validate()?;
        let created_by = created_by.ok_or(ApiError::NotAuthenticated)?;
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            description: none_if_blank(&self.description),
            category_id: none_if_blank(&self.category_id),
            supplier_id: none_if_blank(&self.supplier_id),
            unit_price: self.unit_price,
            cost_price: self.cost_price,
            barcode: none_if_blank(&self.barcode),
            image_url: image_url.or_else(|| none_if_blank(&self.image_url)),
            created_by: created_by.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "绿茶".into(),
            sku: "TEA-001".into(),
            unit_price: 12.5,
            cost_price: 8.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_negative_price_fails_before_submission() {
        let form = ProductForm {
            unit_price: -1.0,
            ..valid_form()
        };
        let err = form.clone().validate().unwrap_err();
        assert_eq!(err.get("unit_price"), Some("售价不能为负"));

        match form.into_payload(Some("u1"), None) {
            Err(ApiError::Validation(errors)) => assert!(errors.get("unit_price").is_some()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_required_fields() {
        let err = ProductForm::default().validate().unwrap_err();
        assert_eq!(err.get("name"), Some("商品名称不能为空"));
        assert_eq!(err.get("sku"), Some("SKU不能为空"));
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_payload_requires_session() {
        assert_eq!(
            valid_form().into_payload(None, None),
            Err(ApiError::NotAuthenticated)
        );
    }

    #[test]
    fn test_payload_blank_optionals_become_null() {
        let payload = ProductForm {
            description: "  ".into(),
            image_url: "https://cdn/x.png".into(),
            ..valid_form()
        }
        .into_payload(Some("u1"), None)
        .unwrap();
        assert_eq!(payload.description, None);
        assert_eq!(payload.category_id, None);
        assert_eq!(payload.image_url.as_deref(), Some("https://cdn/x.png"));
        assert_eq!(payload.created_by, "u1");
    }

    #[test]
    fn test_uploaded_image_wins() {
        let payload = ProductForm {
            image_url: "https://cdn/old.png".into(),
            ..valid_form()
        }
        .into_payload(Some("u1"), Some("https://cdn/new.png".into()))
        .unwrap();
        assert_eq!(payload.image_url.as_deref(), Some("https://cdn/new.png"));
    }

    #[test]
    fn test_list_row_parses() {
        let json = r#"{"id":"p1","name":"绿茶","sku":"TEA-001","unit_price":12.5,"cost_price":8,"description":null,"barcode":null,"image_url":null,"created_at":"2024-03-15T10:00:00Z","category_id":null,"supplier_id":"s1","categories":null,"suppliers":{"name":"茶叶公司"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_name(), "-");
        assert_eq!(product.supplier_name(), "茶叶公司");
        assert_eq!(format_price(product.unit_price), "¥12.5");
        assert_eq!(ProductForm::from_product(&product).supplier_id, "s1");
    }
}
