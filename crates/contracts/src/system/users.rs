use serde::{Deserialize, Serialize};

use super::roles::Role;
use crate::shared::validation::{none_if_blank, ValidationErrors, ValidationRules};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRef {
    pub id: String,
    #[serde(default)]
    pub role: Role,
}

/// Row of `profiles` with the user's role assignments embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub user_roles: Vec<UserRoleRef>,
}

impl UserProfile {
    pub const COLUMNS: &'static str = "id, full_name, email, created_at, user_roles(id, role)";

    /// The first embedded assignment is the user's role
    pub fn primary_role(&self) -> Option<Role> {
        self.user_roles.first().map(|r| r.role)
    }
}

/// Entry of the user select box on the role assignment screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOption {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl ProfileOption {
    pub const COLUMNS: &'static str = "id, email, full_name";

    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
            .to_string()
    }
}

/// PATCH body for `profiles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Edit dialog of the admin panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditUserForm {
    pub full_name: String,
    pub email: String,
    /// Empty string means "leave roles untouched"
    pub role: String,
}

impl EditUserForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            role: profile
                .primary_role()
                .and_then(|r| r.as_db())
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "email",
            ValidationRules::optional_email().validate_string(&self.email, "邮箱"),
        );
        errors.into_result()
    }

    /// Profile update, only when a name or e-mail was entered
    pub fn profile_patch(&self) -> Option<UpdateProfileDto> {
        let full_name = none_if_blank(&self.full_name);
        let email = none_if_blank(&self.email);
        if full_name.is_none() && email.is_none() {
            return None;
        }
        Some(UpdateProfileDto { full_name, email })
    }

    /// Role to put in place of the current assignments, if one was chosen
    pub fn role_replacement(&self) -> Option<Role> {
        Role::parse_assignable(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(roles: &[&str]) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            full_name: Some("王五".into()),
            email: Some("wang@example.com".into()),
            created_at: "2024-03-15T10:00:00Z".into(),
            user_roles: roles
                .iter()
                .enumerate()
                .map(|(i, r)| UserRoleRef {
                    id: format!("r{}", i),
                    role: Role::from_db(Some(r)),
                })
                .collect(),
        }
    }

    #[test]
    fn test_primary_role() {
        assert_eq!(profile(&[]).primary_role(), None);
        assert_eq!(profile(&["manager", "admin"]).primary_role(), Some(Role::Manager));
    }

    #[test]
    fn test_edit_form_round() {
        let form = EditUserForm::from_profile(&profile(&["purchaser"]));
        assert_eq!(form.role, "purchaser");
        assert_eq!(form.role_replacement(), Some(Role::Purchaser));
        assert_eq!(
            form.profile_patch(),
            Some(UpdateProfileDto {
                full_name: Some("王五".into()),
                email: Some("wang@example.com".into()),
            })
        );
    }

    #[test]
    fn test_blank_form_changes_nothing() {
        let form = EditUserForm::default();
        assert_eq!(form.profile_patch(), None);
        assert_eq!(form.role_replacement(), None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let form = EditUserForm {
            email: "nope".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("email"),
            Some("请输入有效的邮箱地址")
        );
    }

    #[test]
    fn test_option_display_name() {
        let option = ProfileOption {
            id: "u9".into(),
            email: Some("a@b.co".into()),
            full_name: Some(String::new()),
        };
        assert_eq!(option.display_name(), "a@b.co");
    }
}
