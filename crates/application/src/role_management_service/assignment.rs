use guildhall_domain::{AuditAction, RoleEditDecision, evaluate_role_edit};
use tracing::{info, warn};

use crate::member_ports::AuditEvent;

use super::*;

impl RoleManagementService {
    /// Changes `target_id`'s role to `new_role_id` on behalf of `editor_id`.
    ///
    /// Performs exactly one role write when the edit is allowed and none
    /// otherwise. The returned member is re-read after the write. A failed
    /// audit append is logged and does not fail the call.
    pub async fn assign_role(
        &self,
        editor_id: UserId,
        target_id: UserId,
        new_role_id: RoleId,
    ) -> AppResult<RoleAssignmentResult> {
        let (editor, target, new_role) = tokio::try_join!(
            self.require_user(editor_id, "editor"),
            self.require_user(target_id, "member"),
            self.require_role(new_role_id),
        )?;

        if let RoleEditDecision::Denied(denial) =
            evaluate_role_edit(&self.matrix, &editor, &target, &new_role)
        {
            info!(
                editor = %editor_id,
                target = %target_id,
                requested_role = %new_role.name(),
                reason = denial.as_str(),
                "role edit denied"
            );
            return Err(denial.into());
        }

        let previous_role = target.role().name();

        self.user_directory
            .set_user_role(target_id, new_role_id)
            .await?;

        let user = self.require_user(target_id, "member").await?;
        let new_role = user.role().name();

        // Best-effort once the role write has landed.
        if let Err(error) = self
            .audit_repository
            .append_event(AuditEvent {
                subject: editor_id.to_string(),
                action: AuditAction::MemberRoleAssigned,
                resource_type: "member_role".to_owned(),
                resource_id: target_id.to_string(),
                detail: Some(format!(
                    "changed role of '{target_id}' from '{previous_role}' to '{new_role}'"
                )),
            })
            .await
        {
            warn!(
                editor = %editor_id,
                target = %target_id,
                %error,
                "failed to record role assignment audit event"
            );
        }

        info!(
            editor = %editor_id,
            target = %target_id,
            previous_role = %previous_role,
            new_role = %new_role,
            "member role updated"
        );

        Ok(RoleAssignmentResult {
            message: format!(
                "role updated from '{previous_role}' to '{new_role}' successfully."
            ),
            user,
            previous_role,
            new_role,
        })
    }
}
