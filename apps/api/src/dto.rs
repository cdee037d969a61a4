use guildhall_application::RoleAssignmentResult;
use guildhall_domain::{Role, UserWithRole};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../packages/api-types/src/generated/health-response.ts")]
pub struct HealthResponse {
    pub status: &'static str,
}

/// API representation of a catalog role.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../packages/api-types/src/generated/role-response.ts")]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().as_str().to_owned(),
            description: value.description().to_owned(),
        }
    }
}

/// Incoming payload for changing a member's role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-member-role-request.ts"
)]
pub struct AssignMemberRoleRequest {
    pub role_id: String,
}

/// API representation of a member with its role and groups.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../../packages/api-types/src/generated/member-response.ts")]
pub struct MemberResponse {
    pub id: String,
    pub role: RoleResponse,
    pub division_ids: Vec<String>,
    pub club_ids: Vec<String>,
}

impl From<UserWithRole> for MemberResponse {
    fn from(value: UserWithRole) -> Self {
        Self {
            id: value.id().to_string(),
            division_ids: value
                .division_ids()
                .iter()
                .map(ToString::to_string)
                .collect(),
            club_ids: value.club_ids().iter().map(ToString::to_string).collect(),
            role: RoleResponse::from(value.role().clone()),
        }
    }
}

/// API representation of a completed role change.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-response.ts"
)]
pub struct RoleAssignmentResponse {
    pub user: MemberResponse,
    pub previous_role: String,
    pub new_role: String,
    pub message: String,
}

impl From<RoleAssignmentResult> for RoleAssignmentResponse {
    fn from(value: RoleAssignmentResult) -> Self {
        Self {
            user: MemberResponse::from(value.user),
            previous_role: value.previous_role.as_str().to_owned(),
            new_role: value.new_role.as_str().to_owned(),
            message: value.message,
        }
    }
}

/// Whether a member may open the role-management surface.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-management-response.ts"
)]
pub struct RoleManagementResponse {
    pub can_manage_roles: bool,
}
