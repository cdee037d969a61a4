use std::sync::Arc;

use guildhall_application::RoleManagementService;
use guildhall_domain::CapabilityMatrix;
use guildhall_infrastructure::{
    InMemoryAuditRepository, InMemoryMemberDirectory, PostgresAuditRepository,
    PostgresRoleDirectory, PostgresUserDirectory,
};
use sqlx::PgPool;

use crate::state::AppState;

pub fn build_postgres_app_state(pool: PgPool, matrix: Arc<CapabilityMatrix>) -> AppState {
    AppState {
        role_management_service: RoleManagementService::new(
            matrix,
            Arc::new(PostgresUserDirectory::new(pool.clone())),
            Arc::new(PostgresRoleDirectory::new(pool.clone())),
            Arc::new(PostgresAuditRepository::new(pool)),
        ),
    }
}

pub fn build_in_memory_app_state(
    directory: Arc<InMemoryMemberDirectory>,
    matrix: Arc<CapabilityMatrix>,
) -> AppState {
    AppState {
        role_management_service: RoleManagementService::new(
            matrix,
            directory.clone(),
            directory,
            Arc::new(InMemoryAuditRepository::new()),
        ),
    }
}
