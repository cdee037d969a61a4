use async_trait::async_trait;

use guildhall_core::AppResult;
use guildhall_domain::{Role, RoleId, UserId, UserWithRole};

/// Repository port for member lookups and role mutation.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a member together with its role and group memberships.
    async fn find_user_with_role(&self, user_id: UserId) -> AppResult<Option<UserWithRole>>;

    /// Replaces the member's role.
    async fn set_user_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()>;
}

/// Repository port for role reference data.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Finds a role by identifier.
    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Lists every role row in the catalog.
    async fn list_all_roles(&self) -> AppResult<Vec<Role>>;
}
