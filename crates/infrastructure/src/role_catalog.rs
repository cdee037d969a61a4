use guildhall_domain::RoleName;

/// Returns the seeded description for a catalog role.
#[must_use]
pub(crate) fn standard_role_description(role_name: RoleName) -> &'static str {
    match role_name {
        RoleName::President => "Leads the organization and manages every role",
        RoleName::Committee => "Runs the organization alongside the president",
        RoleName::Leader => "Leads a division or club",
        RoleName::CoLeader => "Shares leadership of a division or club",
        RoleName::Member => "Regular member of the organization",
        RoleName::SeniorMember => "Long-standing member of the organization",
    }
}
