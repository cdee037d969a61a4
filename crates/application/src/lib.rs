//! Application services and ports.

#![forbid(unsafe_code)]

mod member_ports;
mod role_management_service;

pub use member_ports::{AuditEvent, AuditRepository, RoleDirectory, UserDirectory};
pub use role_management_service::{RoleAssignmentResult, RoleManagementService};
