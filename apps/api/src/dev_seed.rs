use std::str::FromStr;

use guildhall_core::{AppError, AppResult};
use guildhall_domain::{ClubId, DivisionId, RoleName, UserId};
use guildhall_infrastructure::InMemoryMemberDirectory;
use tracing::info;

const DEV_SEED_DIVISION_ID: &str = "5d7f1c3a-2f0e-4b8e-9a61-0c4e7b2d9f10";
const DEV_SEED_CLUB_ID: &str = "8e2b6a94-71d3-4c0f-b5a8-3f9d1e6c2a47";

const DEV_SEED_MEMBERS: &[(&str, RoleName, bool)] = &[
    ("a2c8ea5f-4f39-4724-97f5-932f97f54f76", RoleName::President, false),
    ("3b9d4e21-6c7a-4f58-8e0b-5a1c2d3e4f60", RoleName::Committee, false),
    ("c41f7a2e-9b3d-4e65-a817-2d6f0b9c8e13", RoleName::Leader, true),
    ("1f6b8d37-0a4c-4e29-9d5e-b2c7a4f81e06", RoleName::CoLeader, false),
    ("96d11e90-7403-4654-9727-cb1043f8bd31", RoleName::Member, true),
    ("e7a05b3c-1d92-4f8a-b6c4-7e2f9a0d5b81", RoleName::SeniorMember, false),
];

/// Seeds a development organization into the in-memory directory.
pub async fn run(directory: &InMemoryMemberDirectory) -> AppResult<()> {
    let division_id = DivisionId::from_str(DEV_SEED_DIVISION_ID)?;
    let club_id = ClubId::from_str(DEV_SEED_CLUB_ID)?;

    for (user_id, role_name, in_division) in DEV_SEED_MEMBERS {
        let user_id = UserId::from_str(user_id)?;
        let role = directory.find_role_by_name(*role_name).await.ok_or_else(|| {
            AppError::Internal(format!("catalog role '{role_name}' is not seeded"))
        })?;
        let division_ids = in_division.then_some(division_id);

        directory
            .upsert_member(user_id, role.id(), division_ids, [club_id])
            .await?;
        info!(member = %user_id, role = %role_name, "seeded development member");
    }

    Ok(())
}
