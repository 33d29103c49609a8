use serde::{Deserialize, Serialize};

use crate::domain::common::TableRecord;
use crate::shared::validation::{none_if_blank, ValidationErrors, ValidationRules};

/// Поставщик (供应商)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: String,
}

impl TableRecord for Supplier {
    fn id(&self) -> &str {
        &self.id
    }

    fn table_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "供应商"
    }

    fn list_name() -> &'static str {
        "供应商列表"
    }
}

/// Supplier reference for the product form select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierForm {
    pub id: Option<String>,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl SupplierForm {
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            id: Some(supplier.id.clone()),
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone().unwrap_or_default(),
            phone: supplier.phone.clone().unwrap_or_default(),
            email: supplier.email.clone().unwrap_or_default(),
            address: supplier.address.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            ValidationRules::required().validate_string(&self.name, "供应商名称"),
        );
        errors.check(
            "email",
            ValidationRules::optional_email().validate_string(&self.email, "邮箱"),
        );
        errors.into_result()
    }

    pub fn into_payload(self) -> Result<SupplierPayload, ValidationErrors> {
        self.validate()?;
        Ok(SupplierPayload {
            name: self.name.trim().to_string(),
            contact_person: none_if_blank(&self.contact_person),
            phone: none_if_blank(&self.phone),
            email: none_if_blank(&self.email),
            address: none_if_blank(&self.address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let err = SupplierForm::default().validate().unwrap_err();
        assert_eq!(err.get("name"), Some("供应商名称不能为空"));
        assert_eq!(err.get("email"), None);
    }

    #[test]
    fn test_email_checked_only_when_present() {
        let form = SupplierForm {
            name: "华东茶业".into(),
            email: "sales@".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("email"),
            Some("请输入有效的邮箱地址")
        );

        let payload = SupplierForm {
            email: String::new(),
            phone: "021-1234".into(),
            ..form
        }
        .into_payload()
        .unwrap();
        assert_eq!(payload.email, None);
        assert_eq!(payload.phone.as_deref(), Some("021-1234"));
    }

    #[test]
    fn test_from_supplier() {
        let supplier = Supplier {
            id: "s1".into(),
            name: "华东茶业".into(),
            contact_person: Some("李四".into()),
            phone: None,
            email: Some("li@example.com".into()),
            address: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let form = SupplierForm::from_supplier(&supplier);
        assert!(form.is_edit_mode());
        assert_eq!(form.contact_person, "李四");
        assert_eq!(form.phone, "");
    }
}
