//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod capability;
mod ids;
mod member;
mod role;
mod role_edit;
mod security;

pub use capability::{CapabilityMatrix, RoleCapability, Scope};
pub use ids::{ClubId, DivisionId, RoleId, UserId};
pub use member::UserWithRole;
pub use role::{AuthorityLevel, Role, RoleName};
pub use role_edit::{RoleEditDecision, RoleEditDenial, evaluate_role_edit};
pub use security::AuditAction;
