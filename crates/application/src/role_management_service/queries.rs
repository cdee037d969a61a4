use tracing::warn;

use super::*;

impl RoleManagementService {
    /// Returns every catalog role the member's role may assign.
    ///
    /// No scope filtering is applied: this answers which roles the member
    /// could ever assign, not to whom.
    pub async fn get_assignable_roles(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let user = self.require_user(user_id, "member").await?;
        let capability = self.matrix.capability(user.role().name());

        if !capability.has_edit_rights() {
            return Ok(Vec::new());
        }

        let mut roles: Vec<Role> = self
            .role_directory
            .list_all_roles()
            .await?
            .into_iter()
            .filter(|role| capability.allows(role.name()))
            .collect();
        sort_by_authority(&mut roles);

        Ok(roles)
    }

    /// Returns whether the member may see role management at all.
    ///
    /// Unknown members and lookup failures yield `false`.
    pub async fn can_manage_roles(&self, user_id: UserId) -> bool {
        match self.user_directory.find_user_with_role(user_id).await {
            Ok(Some(user)) => self
                .matrix
                .capability(user.role().name())
                .has_edit_rights(),
            Ok(None) => false,
            Err(error) => {
                warn!(user = %user_id, %error, "role management check failed closed");
                false
            }
        }
    }

    /// Lists the full role catalog, most senior first.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let mut roles = self.role_directory.list_all_roles().await?;
        sort_by_authority(&mut roles);
        Ok(roles)
    }
}
