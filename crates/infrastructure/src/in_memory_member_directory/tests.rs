use std::sync::Arc;

use guildhall_application::{RoleDirectory, RoleManagementService, UserDirectory};
use guildhall_core::AppError;
use guildhall_domain::{CapabilityMatrix, DivisionId, Role, RoleId, RoleName, UserId};

use super::{InMemoryAuditRepository, InMemoryMemberDirectory};
use crate::role_catalog::standard_role_description;

#[tokio::test]
async fn standard_catalog_contains_every_role_once() {
    let directory = InMemoryMemberDirectory::with_standard_catalog();

    let roles = directory.list_all_roles().await.unwrap_or_default();
    let names: Vec<RoleName> = roles.iter().map(Role::name).collect();

    assert_eq!(names, RoleName::all().to_vec());
    for role in &roles {
        assert_eq!(role.description(), standard_role_description(role.name()));
    }
}

#[tokio::test]
async fn member_lookup_joins_role_and_groups() {
    let directory = InMemoryMemberDirectory::with_standard_catalog();
    let Some(leader) = directory.find_role_by_name(RoleName::Leader).await else {
        panic!("leader role should be seeded");
    };
    let user_id = UserId::new();
    let division_id = DivisionId::new();

    let inserted = directory
        .upsert_member(user_id, leader.id(), [division_id], std::iter::empty())
        .await;
    assert!(inserted.is_ok());

    let found = directory.find_user_with_role(user_id).await;
    let Ok(Some(found)) = found else {
        panic!("member should resolve: {found:?}");
    };
    assert_eq!(found.role(), &leader);
    assert!(found.division_ids().contains(&division_id));
    assert!(found.club_ids().is_empty());
}

#[tokio::test]
async fn set_user_role_rejects_unknown_member_and_role() {
    let directory = InMemoryMemberDirectory::with_standard_catalog();
    let Some(member) = directory.find_role_by_name(RoleName::Member).await else {
        panic!("member role should be seeded");
    };

    let unknown_member = directory.set_user_role(UserId::new(), member.id()).await;
    let unknown_role = directory.set_user_role(UserId::new(), RoleId::new()).await;

    assert!(matches!(unknown_member, Err(AppError::NotFound(message)) if message.starts_with("member")));
    assert!(matches!(unknown_role, Err(AppError::NotFound(message)) if message.starts_with("role")));
}

#[tokio::test]
async fn service_assigns_role_through_in_memory_directory() {
    let directory = Arc::new(InMemoryMemberDirectory::with_standard_catalog());
    let audit_repository = Arc::new(InMemoryAuditRepository::new());
    let service = RoleManagementService::new(
        Arc::new(CapabilityMatrix::standard()),
        directory.clone(),
        directory.clone(),
        audit_repository.clone(),
    );

    let (Some(leader), Some(member), Some(co_leader)) = (
        directory.find_role_by_name(RoleName::Leader).await,
        directory.find_role_by_name(RoleName::Member).await,
        directory.find_role_by_name(RoleName::CoLeader).await,
    ) else {
        panic!("catalog should be seeded");
    };
    let division_id = DivisionId::new();
    let editor_id = UserId::new();
    let target_id = UserId::new();
    assert!(
        directory
            .upsert_member(editor_id, leader.id(), [division_id], std::iter::empty())
            .await
            .is_ok()
    );
    assert!(
        directory
            .upsert_member(target_id, member.id(), [division_id], std::iter::empty())
            .await
            .is_ok()
    );

    let result = service
        .assign_role(editor_id, target_id, co_leader.id())
        .await;

    let Ok(result) = result else {
        panic!("assignment should succeed: {result:?}");
    };
    assert_eq!(result.user.role().name(), RoleName::CoLeader);
    assert_eq!(audit_repository.events().await.len(), 1);
}
