use contracts::shared::error::ApiError;
use contracts::shared::query::{Order, TableQuery};
use contracts::system::roles::{AssignRoleDto, RoleRow, UserRoleRecord};
use contracts::system::users::ProfileOption;

use crate::shared::rest;

const TABLE: &str = "user_roles";

/// Role row of one user (at most one is read)
pub async fn fetch_user_role(user_id: &str) -> Result<Vec<RoleRow>, ApiError> {
    let query = TableQuery::from(TABLE)
        .select("role")
        .eq("user_id", user_id)
        .limit(1);
    rest::select(&query).await
}

/// All assignments with the owner's profile, newest first (key `user-roles`)
pub async fn fetch_user_roles() -> Result<Vec<UserRoleRecord>, ApiError> {
    let query = TableQuery::from(TABLE)
        .select(UserRoleRecord::COLUMNS)
        .order("created_at", Order::Desc);
    rest::select(&query).await
}

/// Users for the assignment select box (key `all-users`)
pub async fn fetch_profile_options() -> Result<Vec<ProfileOption>, ApiError> {
    let query = TableQuery::from("profiles").select(ProfileOption::COLUMNS);
    rest::select(&query).await
}

/// Give the user this role, replacing an existing assignment
pub async fn assign_role(dto: &AssignRoleDto) -> Result<(), ApiError> {
    rest::upsert(TABLE, "user_id", dto).await
}

pub async fn remove_role(id: &str) -> Result<(), ApiError> {
    rest::delete_eq(TABLE, "id", id).await
}
