use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use guildhall_application::RoleDirectory;
use guildhall_core::{AppError, AppResult};
use guildhall_domain::{Role, RoleId, RoleName};

/// PostgreSQL-backed role catalog.
#[derive(Clone)]
pub struct PostgresRoleDirectory {
    pool: PgPool,
}

impl PostgresRoleDirectory {
    /// Creates a directory with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: uuid::Uuid,
    name: String,
    description: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = AppError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        let name = RoleName::from_str(row.name.as_str()).map_err(|_| {
            AppError::Internal(format!(
                "role '{}' has unknown name '{}'",
                row.id, row.name
            ))
        })?;

        Ok(Role::new(RoleId::from_uuid(row.id), name, row.description))
    }
}

#[async_trait]
impl RoleDirectory for PostgresRoleDirectory {
    async fn find_role_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load role: {error}")))?
        .map(Role::try_from)
        .transpose()
    }

    async fn list_all_roles(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description
            FROM roles
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?
        .into_iter()
        .map(Role::try_from)
        .collect()
    }
}
