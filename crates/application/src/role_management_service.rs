use std::sync::Arc;

use guildhall_core::{AppError, AppResult};
use guildhall_domain::{CapabilityMatrix, Role, RoleId, RoleName, UserId, UserWithRole};

use crate::member_ports::{AuditRepository, RoleDirectory, UserDirectory};

mod assignment;
mod queries;


/// Outcome of a successful role assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignmentResult {
    /// Target member as re-read after the update.
    pub user: UserWithRole,
    /// Role name held before the update.
    pub previous_role: RoleName,
    /// Role name held after the update.
    pub new_role: RoleName,
    /// Human-readable summary of the change.
    pub message: String,
}

/// Application service for organizational role management.
#[derive(Clone)]
pub struct RoleManagementService {
    matrix: Arc<CapabilityMatrix>,
    user_directory: Arc<dyn UserDirectory>,
    role_directory: Arc<dyn RoleDirectory>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl RoleManagementService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        matrix: Arc<CapabilityMatrix>,
        user_directory: Arc<dyn UserDirectory>,
        role_directory: Arc<dyn RoleDirectory>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            matrix,
            user_directory,
            role_directory,
            audit_repository,
        }
    }

    async fn require_user(&self, user_id: UserId, label: &str) -> AppResult<UserWithRole> {
        self.user_directory
            .find_user_with_role(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{label} '{user_id}' was not found")))
    }

    async fn require_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.role_directory
            .find_role_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' was not found")))
    }
}

fn sort_by_authority(roles: &mut [Role]) {
    roles.sort_by(|left, right| {
        left.name()
            .authority_level()
            .cmp(&right.name().authority_level())
            .then_with(|| left.name().cmp(&right.name()))
    });
}
