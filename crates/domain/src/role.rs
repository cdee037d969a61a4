//! Closed role catalog and authority ranking.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use guildhall_core::AppError;
use serde::{Deserialize, Serialize};

use crate::RoleId;

/// Organizational role names known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleName {
    /// Head of the organization.
    President,
    /// Organization-wide committee member.
    Committee,
    /// Leader of a division or club.
    Leader,
    /// Co-leader of a division or club, peer of a leader.
    CoLeader,
    /// Regular member.
    Member,
    /// Long-standing member without management rights.
    SeniorMember,
}

impl RoleName {
    /// Returns a stable storage value for this role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::President => "president",
            Self::Committee => "committee",
            Self::Leader => "leader",
            Self::CoLeader => "co-leader",
            Self::Member => "member",
            Self::SeniorMember => "senior-member",
        }
    }

    /// Returns the authority level of this role. Lower values dominate.
    #[must_use]
    pub fn authority_level(&self) -> AuthorityLevel {
        let level = match self {
            Self::President => 1,
            Self::Committee => 2,
            Self::Leader | Self::CoLeader => 3,
            Self::Member | Self::SeniorMember => 4,
        };

        AuthorityLevel(level)
    }

    /// Returns all known role names, most senior first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RoleName] = &[
            RoleName::President,
            RoleName::Committee,
            RoleName::Leader,
            RoleName::CoLeader,
            RoleName::Member,
            RoleName::SeniorMember,
        ];

        ALL
    }
}

impl Display for RoleName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "president" => Ok(Self::President),
            "committee" => Ok(Self::Committee),
            "leader" => Ok(Self::Leader),
            "co-leader" => Ok(Self::CoLeader),
            "member" => Ok(Self::Member),
            "senior-member" => Ok(Self::SeniorMember),
            _ => Err(AppError::Validation(format!(
                "unknown role name '{value}'"
            ))),
        }
    }
}

/// Numeric seniority of a role. A lower value carries more authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorityLevel(u8);

impl AuthorityLevel {
    /// Returns whether this level carries strictly more authority than `other`.
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self.0 < other.0
    }
}

/// Role reference data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: RoleName,
    description: String,
}

impl Role {
    /// Creates a role row.
    #[must_use]
    pub fn new(id: RoleId, name: RoleName, description: impl Into<String>) -> Self {
        Self {
            id,
            name,
            description: description.into(),
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the catalog name.
    #[must_use]
    pub fn name(&self) -> RoleName {
        self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}
