use contracts::shared::error::ApiError;
use contracts::shared::query::{Order, TableQuery};
use contracts::system::roles::{AssignRoleDto, Role};
use contracts::system::users::{UpdateProfileDto, UserProfile};

use crate::shared::rest;

/// Profiles with their role assignments, newest first (key `admin-users`)
pub async fn fetch_users() -> Result<Vec<UserProfile>, ApiError> {
    let query = TableQuery::from("profiles")
        .select(UserProfile::COLUMNS)
        .order("created_at", Order::Desc);
    rest::select(&query).await
}

pub async fn update_profile(user_id: &str, dto: &UpdateProfileDto) -> Result<(), ApiError> {
    rest::update_eq("profiles", "id", user_id, dto).await
}

/// Replace every assignment of the user with `role`
pub async fn replace_role(user_id: &str, role: Role) -> Result<(), ApiError> {
    rest::delete_eq("user_roles", "user_id", user_id).await?;
    let dto = AssignRoleDto {
        user_id: user_id.to_string(),
        role,
    };
    rest::insert("user_roles", &dto).await
}

/// Remove the user's roles, then the profile itself
pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    rest::delete_eq("user_roles", "user_id", user_id).await?;
    rest::delete_eq("profiles", "id", user_id).await
}
