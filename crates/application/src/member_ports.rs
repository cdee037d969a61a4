mod audit;
mod directories;

pub use audit::{AuditEvent, AuditRepository};
pub use directories::{RoleDirectory, UserDirectory};
