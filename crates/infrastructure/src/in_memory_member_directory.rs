use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use guildhall_application::{AuditEvent, AuditRepository, RoleDirectory, UserDirectory};
use guildhall_core::{AppError, AppResult};
use guildhall_domain::{ClubId, DivisionId, Role, RoleId, RoleName, UserId, UserWithRole};
use tokio::sync::RwLock;
use tracing::info;

use crate::role_catalog::standard_role_description;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
struct MemberRecord {
    role_id: RoleId,
    division_ids: BTreeSet<DivisionId>,
    club_ids: BTreeSet<ClubId>,
}

/// In-memory member and role directory.
#[derive(Debug, Default)]
pub struct InMemoryMemberDirectory {
    roles: RwLock<HashMap<RoleId, Role>>,
    members: RwLock<HashMap<UserId, MemberRecord>>,
}

impl InMemoryMemberDirectory {
    /// Creates a directory seeded with one row per catalog role.
    #[must_use]
    pub fn with_standard_catalog() -> Self {
        let roles = RoleName::all()
            .iter()
            .map(|role_name| {
                let role = Role::new(
                    RoleId::new(),
                    *role_name,
                    standard_role_description(*role_name),
                );
                (role.id(), role)
            })
            .collect();

        Self {
            roles: RwLock::new(roles),
            members: RwLock::new(HashMap::new()),
        }
    }

    /// Finds the catalog row for a role name.
    pub async fn find_role_by_name(&self, role_name: RoleName) -> Option<Role> {
        self.roles
            .read()
            .await
            .values()
            .find(|role| role.name() == role_name)
            .cloned()
    }

    /// Adds or replaces a member with the given role and group memberships.
    pub async fn upsert_member(
        &self,
        user_id: UserId,
        role_id: RoleId,
        division_ids: impl IntoIterator<Item = DivisionId>,
        club_ids: impl IntoIterator<Item = ClubId>,
    ) -> AppResult<()> {
        if !self.roles.read().await.contains_key(&role_id) {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        self.members.write().await.insert(
            user_id,
            MemberRecord {
                role_id,
                division_ids: division_ids.into_iter().collect(),
                club_ids: club_ids.into_iter().collect(),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryMemberDirectory {
    async fn find_user_with_role(&self, user_id: UserId) -> AppResult<Option<UserWithRole>> {
        let Some(record) = self.members.read().await.get(&user_id).cloned() else {
            return Ok(None);
        };

        let role = self
            .roles
            .read()
            .await
            .get(&record.role_id)
            .cloned()
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "member '{user_id}' references missing role '{}'",
                    record.role_id
                ))
            })?;

        Ok(Some(UserWithRole::new(
            user_id,
            role,
            record.division_ids,
            record.club_ids,
        )))
    }

    async fn set_user_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        if !self.roles.read().await.contains_key(&role_id) {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        let mut members = self.members.write().await;
        let record = members
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("member '{user_id}' was not found")))?;
        record.role_id = role_id;

        Ok(())
    }
}

#[async_trait]
impl RoleDirectory for InMemoryMemberDirectory {
    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.roles.read().await.get(&role_id).cloned())
    }

    async fn list_all_roles(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.read().await.values().cloned().collect();
        roles.sort_by_key(|role| role.name());
        Ok(roles)
    }
}

/// In-memory audit repository that keeps events for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty audit repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded events, oldest first.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            action = event.action.as_str(),
            subject = %event.subject,
            resource_id = %event.resource_id,
            "audit event recorded"
        );
        self.events.write().await.push(event);
        Ok(())
    }
}
