use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::validation::ValidationErrors;

/// Coarse permission label used to filter navigation and screens.
///
/// The backend stores `admin`, `manager` or `purchaser`; any other or
/// missing value is read as [`Role::Unassigned`], which is never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Manager,
    Purchaser,
    #[default]
    Unassigned,
}

impl Role {
    /// Roles that can be stored in `user_roles`
    pub const ASSIGNABLE: [Role; 3] = [Role::Admin, Role::Manager, Role::Purchaser];

    pub fn from_db(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("admin") => Role::Admin,
            Some("manager") => Role::Manager,
            Some("purchaser") => Role::Purchaser,
            _ => Role::Unassigned,
        }
    }

    pub fn as_db(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("admin"),
            Role::Manager => Some("manager"),
            Role::Purchaser => Some("purchaser"),
            Role::Unassigned => None,
        }
    }

    /// Parse a select-box value; only assignable roles are accepted
    pub fn parse_assignable(value: &str) -> Option<Self> {
        match Role::from_db(Some(value)) {
            Role::Unassigned => None,
            role => Some(role),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "管理员",
            Role::Manager => "管理者",
            Role::Purchaser => "采购员",
            Role::Unassigned => "未分配",
        }
    }

    /// Badge variant for tables
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Role::Admin => "error",
            Role::Manager => "primary",
            Role::Purchaser => "neutral",
            Role::Unassigned => "outline",
        }
    }

    pub fn is_admin_or_manager(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_db().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Role::from_db(value.as_deref()))
    }
}

/// Single-column row of the role lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRow {
    #[serde(default)]
    pub role: Role,
}

/// Role resolution: the first row wins, a failed read or no row means unassigned
pub fn resolve_role<E>(rows: Result<Vec<RoleRow>, E>) -> Role {
    rows.ok()
        .and_then(|rows| rows.into_iter().next())
        .map(|row| row.role)
        .unwrap_or_default()
}

/// A role lookup answers for `requested_for`; it only applies while that user is still signed in
pub fn role_answer_applies(requested_for: &str, current_user: Option<&str>) -> bool {
    current_user == Some(requested_for)
}

/// Profile columns embedded into a role assignment row
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileRef {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Row of `user_roles` joined with the owner's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: String,
    #[serde(default)]
    pub profiles: Option<ProfileRef>,
}

impl UserRoleRecord {
    pub const COLUMNS: &'static str = "id, user_id, role, created_at, profiles!inner(email, full_name)";

    pub fn user_name(&self) -> &str {
        self.profiles
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("未知用户")
    }

    pub fn user_email(&self) -> &str {
        self.profiles
            .as_ref()
            .and_then(|p| p.email.as_deref())
            .unwrap_or("")
    }
}

/// Body of a role upsert / insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignRoleDto {
    pub user_id: String,
    pub role: Role,
}

impl AssignRoleDto {
    /// Build from the two select boxes of the assignment form
    pub fn from_selection(user_id: &str, role: &str) -> Result<Self, ValidationErrors> {
        let role = Role::parse_assignable(role);
        match (user_id.trim(), role) {
            (user, Some(role)) if !user.is_empty() => Ok(Self {
                user_id: user.to_string(),
                role,
            }),
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add("selection", "请选择用户和角色");
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_role_answer_for_previous_user_is_dropped() {
        assert!(role_answer_applies("u1", Some("u1")));
        assert!(!role_answer_applies("u1", Some("u2")));
        assert!(!role_answer_applies("u1", None));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::from_db(Some("admin")).label(), "管理员");
        assert_eq!(Role::from_db(Some("manager")).label(), "管理者");
        assert_eq!(Role::from_db(Some("purchaser")).label(), "采购员");
        assert_eq!(Role::from_db(Some("auditor")).label(), "未分配");
        assert_eq!(Role::from_db(None).label(), "未分配");
    }

    #[test]
    fn test_serde_round_values() {
        let row: RoleRow = serde_json::from_str(r#"{"role":"manager"}"#).unwrap();
        assert_eq!(row.role, Role::Manager);
        let row: RoleRow = serde_json::from_str(r#"{"role":null}"#).unwrap();
        assert_eq!(row.role, Role::Unassigned);
        let dto = AssignRoleDto {
            user_id: "u1".into(),
            role: Role::Purchaser,
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"user_id":"u1","role":"purchaser"}"#
        );
    }

    #[test]
    fn test_resolve_role_degrades_to_unassigned() {
        assert_eq!(resolve_role::<()>(Ok(vec![])), Role::Unassigned);
        assert_eq!(resolve_role(Err("timeout")), Role::Unassigned);
        assert_eq!(
            resolve_role::<()>(Ok(vec![RoleRow { role: Role::Admin }, RoleRow { role: Role::Manager }])),
            Role::Admin
        );
    }

    #[test]
    fn test_assignment_requires_both_selections() {
        assert!(AssignRoleDto::from_selection("", "admin").is_err());
        assert!(AssignRoleDto::from_selection("u1", "").is_err());
        let err = AssignRoleDto::from_selection("u1", "root").unwrap_err();
        assert_eq!(err.get("selection"), Some("请选择用户和角色"));
        assert_eq!(
            AssignRoleDto::from_selection("u1", "manager").unwrap().role,
            Role::Manager
        );
    }

    #[test]
    fn test_user_role_record_display() {
        let record: UserRoleRecord = serde_json::from_str(
            r#"{"id":"r1","user_id":"u1","role":"admin","created_at":"2024-03-15T10:00:00Z","profiles":{"email":"a@b.co","full_name":null}}"#,
        )
        .unwrap();
        assert_eq!(record.user_name(), "未知用户");
        assert_eq!(record.user_email(), "a@b.co");
    }
}
