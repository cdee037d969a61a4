use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use guildhall_application::UserDirectory;
use guildhall_core::{AppError, AppResult};
use guildhall_domain::{ClubId, DivisionId, Role, RoleId, RoleName, UserId, UserWithRole};


/// PostgreSQL-backed member directory.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a directory with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    member_id: uuid::Uuid,
    role_id: uuid::Uuid,
    role_name: String,
    role_description: String,
    division_ids: Vec<uuid::Uuid>,
    club_ids: Vec<uuid::Uuid>,
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_user_with_role(&self, user_id: UserId) -> AppResult<Option<UserWithRole>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT
                members.id AS member_id,
                roles.id AS role_id,
                roles.name AS role_name,
                roles.description AS role_description,
                ARRAY(
                    SELECT member_divisions.division_id
                    FROM member_divisions
                    WHERE member_divisions.member_id = members.id
                ) AS division_ids,
                ARRAY(
                    SELECT member_clubs.club_id
                    FROM member_clubs
                    WHERE member_clubs.member_id = members.id
                ) AS club_ids
            FROM members
            INNER JOIN roles
                ON roles.id = members.role_id
            WHERE members.id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load member: {error}")))?;

        row.map(member_from_row).transpose()
    }

    async fn set_user_role(&self, user_id: UserId, role_id: RoleId) -> AppResult<()> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE members
            SET role_id = $2,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| map_role_reference_error(error, role_id))?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("member '{user_id}' was not found")));
        }

        Ok(())
    }
}

fn member_from_row(row: MemberRow) -> AppResult<UserWithRole> {
    let role_name = RoleName::from_str(row.role_name.as_str()).map_err(|_| {
        AppError::Internal(format!(
            "role '{}' has unknown name '{}'",
            row.role_id, row.role_name
        ))
    })?;

    Ok(UserWithRole::new(
        UserId::from_uuid(row.member_id),
        Role::new(RoleId::from_uuid(row.role_id), role_name, row.role_description),
        row.division_ids.into_iter().map(DivisionId::from_uuid),
        row.club_ids.into_iter().map(ClubId::from_uuid),
    ))
}

fn map_role_reference_error(error: sqlx::Error, role_id: RoleId) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23503")
    {
        return AppError::NotFound(format!("role '{role_id}' was not found"));
    }

    AppError::Internal(format!("failed to update member role: {error}"))
}
