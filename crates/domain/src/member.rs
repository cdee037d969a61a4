use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ClubId, DivisionId, Role, UserId};

/// Member projection carrying the current role and group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithRole {
    id: UserId,
    role: Role,
    division_ids: BTreeSet<DivisionId>,
    club_ids: BTreeSet<ClubId>,
}

impl UserWithRole {
    /// Creates a member projection.
    #[must_use]
    pub fn new(
        id: UserId,
        role: Role,
        division_ids: impl IntoIterator<Item = DivisionId>,
        club_ids: impl IntoIterator<Item = ClubId>,
    ) -> Self {
        Self {
            id,
            role,
            division_ids: division_ids.into_iter().collect(),
            club_ids: club_ids.into_iter().collect(),
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the member's current role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns divisions the member belongs to.
    #[must_use]
    pub fn division_ids(&self) -> &BTreeSet<DivisionId> {
        &self.division_ids
    }

    /// Returns clubs the member belongs to.
    #[must_use]
    pub fn club_ids(&self) -> &BTreeSet<ClubId> {
        &self.club_ids
    }

    /// Returns whether both members belong to at least one common division or club.
    #[must_use]
    pub fn shares_group_with(&self, other: &Self) -> bool {
        !self.division_ids.is_disjoint(&other.division_ids)
            || !self.club_ids.is_disjoint(&other.club_ids)
    }
}
