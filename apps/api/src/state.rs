use guildhall_application::RoleManagementService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_management_service: RoleManagementService,
}
