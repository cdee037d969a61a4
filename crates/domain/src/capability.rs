//! Static capability matrix deciding which roles each role may assign.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::RoleName;

/// Reach of a role's editing rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Rights apply across the whole organization.
    All,
    /// Rights apply only to members sharing a division or club with the editor.
    SameGroup,
    /// No editing rights.
    None,
}

/// One matrix row: the roles a role may assign and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCapability {
    can_assign: BTreeSet<RoleName>,
    scope: Scope,
}

impl RoleCapability {
    /// Creates a capability row.
    #[must_use]
    pub fn new(can_assign: impl IntoIterator<Item = RoleName>, scope: Scope) -> Self {
        Self {
            can_assign: can_assign.into_iter().collect(),
            scope,
        }
    }

    /// Creates a row without any assign rights.
    #[must_use]
    pub fn none() -> Self {
        Self::new(std::iter::empty(), Scope::None)
    }

    /// Returns the role names this role may set as someone's new role.
    #[must_use]
    pub fn can_assign(&self) -> &BTreeSet<RoleName> {
        &self.can_assign
    }

    /// Returns whether the given role name may be assigned.
    #[must_use]
    pub fn allows(&self, role_name: RoleName) -> bool {
        self.can_assign.contains(&role_name)
    }

    /// Returns whether this row grants any assign rights.
    #[must_use]
    pub fn has_edit_rights(&self) -> bool {
        !self.can_assign.is_empty()
    }

    /// Returns the scope tag.
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

/// Immutable role capability matrix, one row per role name.
///
/// Built once at process start and shared by reference. No row may list a
/// role with more authority than the row's own role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityMatrix {
    president: RoleCapability,
    committee: RoleCapability,
    leader: RoleCapability,
    co_leader: RoleCapability,
    member: RoleCapability,
    senior_member: RoleCapability,
}

impl CapabilityMatrix {
    /// Returns the organization's standard matrix.
    #[must_use]
    pub fn standard() -> Self {
        use RoleName::{CoLeader, Committee, Leader, Member, President, SeniorMember};

        Self {
            president: RoleCapability::new(
                [President, Committee, Leader, CoLeader, Member, SeniorMember],
                Scope::All,
            ),
            committee: RoleCapability::new(
                [Committee, Leader, CoLeader, Member, SeniorMember],
                Scope::All,
            ),
            leader: RoleCapability::new(
                [Leader, CoLeader, Member, SeniorMember],
                Scope::SameGroup,
            ),
            co_leader: RoleCapability::new([CoLeader, Member, SeniorMember], Scope::SameGroup),
            member: RoleCapability::none(),
            senior_member: RoleCapability::none(),
        }
    }

    /// Returns the capability row for a role name.
    #[must_use]
    pub fn capability(&self, role_name: RoleName) -> &RoleCapability {
        match role_name {
            RoleName::President => &self.president,
            RoleName::Committee => &self.committee,
            RoleName::Leader => &self.leader,
            RoleName::CoLeader => &self.co_leader,
            RoleName::Member => &self.member,
            RoleName::SeniorMember => &self.senior_member,
        }
    }

    /// Returns every (assigner, assignable) pair where the assignable role
    /// outranks the assigner. Empty for a well-formed matrix.
    #[must_use]
    pub fn escalation_paths(&self) -> Vec<(RoleName, RoleName)> {
        RoleName::all()
            .iter()
            .flat_map(|assigner| {
                self.capability(*assigner)
                    .can_assign()
                    .iter()
                    .filter(|assignable| {
                        assignable
                            .authority_level()
                            .outranks(assigner.authority_level())
                    })
                    .map(|assignable| (*assigner, *assignable))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Default for CapabilityMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::{CapabilityMatrix, RoleCapability, Scope};
    use crate::RoleName;

    #[test]
    fn standard_matrix_has_no_escalation_paths() {
        assert!(CapabilityMatrix::standard().escalation_paths().is_empty());
    }

    #[test]
    fn escalation_paths_reports_upward_assignments() {
        let mut matrix = CapabilityMatrix::standard();
        matrix.co_leader = RoleCapability::new([RoleName::President], Scope::SameGroup);

        assert_eq!(
            matrix.escalation_paths(),
            vec![(RoleName::CoLeader, RoleName::President)]
        );
    }

    #[test]
    fn scope_is_none_exactly_when_row_has_no_rights() {
        let matrix = CapabilityMatrix::standard();
        for role_name in RoleName::all() {
            let capability = matrix.capability(*role_name);
            assert_eq!(
                capability.scope() == Scope::None,
                !capability.has_edit_rights(),
                "inconsistent row for {role_name}"
            );
        }
    }

    #[test]
    fn every_editing_role_can_assign_its_own_role() {
        let matrix = CapabilityMatrix::standard();
        for role_name in RoleName::all() {
            let capability = matrix.capability(*role_name);
            if capability.has_edit_rights() {
                assert!(capability.allows(*role_name), "{role_name} cannot keep itself");
            }
        }
    }

    #[test]
    fn committee_cannot_assign_president() {
        let matrix = CapabilityMatrix::standard();
        let committee = matrix.capability(RoleName::Committee);

        assert!(!committee.allows(RoleName::President));
        assert_eq!(committee.can_assign().len(), 5);
        assert_eq!(committee.scope(), Scope::All);
    }

    #[test]
    fn group_leaders_are_scoped_to_shared_groups() {
        let matrix = CapabilityMatrix::standard();
        assert_eq!(matrix.capability(RoleName::Leader).scope(), Scope::SameGroup);
        assert_eq!(
            matrix.capability(RoleName::CoLeader).scope(),
            Scope::SameGroup
        );
    }
}
