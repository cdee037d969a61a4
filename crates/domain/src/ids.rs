//! Opaque identifiers for members, roles, and organizational groups.

use std::str::FromStr;

use guildhall_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID value.
            #[must_use]
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Returns the underlying UUID value.
            #[must_use]
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(value.trim()).map(Self).map_err(|error| {
                    AppError::Validation(format!("invalid {} '{value}': {error}", $label))
                })
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a member account.
    UserId,
    "user id"
);
uuid_identifier!(
    /// Unique identifier for a role catalog row.
    RoleId,
    "role id"
);
uuid_identifier!(
    /// Unique identifier for a division.
    DivisionId,
    "division id"
);
uuid_identifier!(
    /// Unique identifier for a club.
    ClubId,
    "club id"
);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use guildhall_core::AppError;

    use super::{RoleId, UserId};

    #[test]
    fn user_id_parses_its_display_form() {
        let user_id = UserId::new();
        let parsed = UserId::from_str(user_id.to_string().as_str());
        assert_eq!(parsed, Ok(user_id));
    }

    #[test]
    fn malformed_role_id_is_a_validation_error() {
        let parsed = RoleId::from_str("not-a-uuid");
        assert!(matches!(parsed, Err(AppError::Validation(message)) if message.contains("role id")));
    }
}
