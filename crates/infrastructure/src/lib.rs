//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_member_directory;
mod postgres_audit_repository;
mod postgres_role_directory;
mod postgres_user_directory;
mod role_catalog;

pub use in_memory_member_directory::{InMemoryAuditRepository, InMemoryMemberDirectory};
pub use postgres_audit_repository::PostgresAuditRepository;
pub use postgres_role_directory::PostgresRoleDirectory;
pub use postgres_user_directory::PostgresUserDirectory;
