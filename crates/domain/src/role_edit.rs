//! Decision logic for changing a member's organizational role.

use std::fmt::{Display, Formatter};

use guildhall_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{CapabilityMatrix, Role, Scope, UserWithRole};

/// Reason a role edit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleEditDenial {
    /// The editor's role cannot assign any role.
    NoEditRights,
    /// The requested role is outside the editor's assignable set.
    RoleNotAssignable,
    /// The editor shares no division or club with the target.
    OutOfScope,
    /// The editor tried to give themselves a role with more authority.
    SelfPromotionBlocked,
}

impl RoleEditDenial {
    /// Returns the fixed user-facing message for this denial.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoEditRights => "your role does not allow editing member roles",
            Self::RoleNotAssignable => "your role is not allowed to assign the requested role",
            Self::OutOfScope => "you can only edit members of a division or club you belong to",
            Self::SelfPromotionBlocked => {
                "you cannot promote yourself to a role with more authority"
            }
        }
    }

    /// Returns a stable identifier for logs and audit details.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoEditRights => "no_edit_rights",
            Self::RoleNotAssignable => "role_not_assignable",
            Self::OutOfScope => "out_of_scope",
            Self::SelfPromotionBlocked => "self_promotion_blocked",
        }
    }
}

impl Display for RoleEditDenial {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.message())
    }
}

impl From<RoleEditDenial> for AppError {
    fn from(value: RoleEditDenial) -> Self {
        AppError::Forbidden(value.message().to_owned())
    }
}

/// Outcome of a role edit evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleEditDecision {
    /// The edit may proceed.
    Allowed,
    /// The edit is refused for the given reason.
    Denied(RoleEditDenial),
}

impl RoleEditDecision {
    /// Returns whether the edit may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether `editor` may set `target`'s role to `new_role`.
///
/// Checks run in a fixed order and the first failing check determines the
/// reported reason:
///
/// 1. the editor's role must grant some assign rights,
/// 2. a self-edit must not raise the editor's authority,
/// 3. the requested role must be in the editor's assignable set,
/// 4. same-group editors must share a division or club with the target.
///
/// Self-promotion is checked before assignability because no well-formed
/// matrix row lists a role with more authority than its own.
#[must_use]
pub fn evaluate_role_edit(
    matrix: &CapabilityMatrix,
    editor: &UserWithRole,
    target: &UserWithRole,
    new_role: &Role,
) -> RoleEditDecision {
    let editor_role = editor.role().name();
    let capability = matrix.capability(editor_role);

    if !capability.has_edit_rights() {
        return RoleEditDecision::Denied(RoleEditDenial::NoEditRights);
    }

    if editor.id() == target.id()
        && new_role
            .name()
            .authority_level()
            .outranks(editor_role.authority_level())
    {
        return RoleEditDecision::Denied(RoleEditDenial::SelfPromotionBlocked);
    }

    if !capability.allows(new_role.name()) {
        return RoleEditDecision::Denied(RoleEditDenial::RoleNotAssignable);
    }

    if capability.scope() == Scope::SameGroup && !editor.shares_group_with(target) {
        return RoleEditDecision::Denied(RoleEditDenial::OutOfScope);
    }

    RoleEditDecision::Allowed
}
