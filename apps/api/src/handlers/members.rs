use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};

use guildhall_domain::{RoleId, UserId};

use crate::dto::{
    AssignMemberRoleRequest, RoleAssignmentResponse, RoleManagementResponse, RoleResponse,
};
use crate::error::ApiResult;
use crate::middleware::ActingMember;
use crate::state::AppState;

#[cfg(test)]
mod tests;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_management_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn assignable_roles_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let user_id = UserId::from_str(user_id.as_str())?;
    let roles = state
        .role_management_service
        .get_assignable_roles(user_id)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn role_management_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<RoleManagementResponse>> {
    let user_id = UserId::from_str(user_id.as_str())?;
    let can_manage_roles = state
        .role_management_service
        .can_manage_roles(user_id)
        .await;

    Ok(Json(RoleManagementResponse { can_manage_roles }))
}

pub async fn assign_member_role_handler(
    State(state): State<AppState>,
    Extension(ActingMember(editor_id)): Extension<ActingMember>,
    Path(user_id): Path<String>,
    payload: Result<Json<AssignMemberRoleRequest>, JsonRejection>,
) -> ApiResult<Json<RoleAssignmentResponse>> {
    let Json(payload) = payload?;
    let target_id = UserId::from_str(user_id.as_str())?;
    let role_id = RoleId::from_str(payload.role_id.as_str())?;

    let result = state
        .role_management_service
        .assign_role(editor_id, target_id, role_id)
        .await?;

    Ok(Json(RoleAssignmentResponse::from(result)))
}
