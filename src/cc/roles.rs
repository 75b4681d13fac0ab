//! Domain roles and their wire representations
//!
//! Every role maps to one wire token per scope it is valid in. The table below
//! is the only place role names meet endpoint conventions; the facade never
//! assembles role identifiers from strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CcError, Result};

/// Domain role of a user within an organization or space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Managers,
    BillingManagers,
    Auditors,
    Developers,
    /// Implicit for every organization member
    Users,
}

/// Level at which a role applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Organization,
    Space,
}

struct RoleToken {
    role: Role,
    scope: Scope,
    token: &'static str,
}

const ROLE_TOKENS: &[RoleToken] = &[
    RoleToken {
        role: Role::Users,
        scope: Scope::Organization,
        token: "org_user",
    },
    RoleToken {
        role: Role::Managers,
        scope: Scope::Organization,
        token: "org_manager",
    },
    RoleToken {
        role: Role::Auditors,
        scope: Scope::Organization,
        token: "org_auditor",
    },
    RoleToken {
        role: Role::BillingManagers,
        scope: Scope::Organization,
        token: "billing_manager",
    },
    RoleToken {
        role: Role::Developers,
        scope: Scope::Space,
        token: "space_developer",
    },
    RoleToken {
        role: Role::Managers,
        scope: Scope::Space,
        token: "space_manager",
    },
    RoleToken {
        role: Role::Auditors,
        scope: Scope::Space,
        token: "space_auditor",
    },
];

/// User-centric space listings (`/v2/users/{user}/<segment>`) per role
const USER_SPACE_SEGMENTS: &[(Role, &str)] = &[
    (Role::Managers, "managed_spaces"),
    (Role::Auditors, "audited_spaces"),
    (Role::Developers, "spaces"),
];

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Managers,
        Role::BillingManagers,
        Role::Auditors,
        Role::Developers,
        Role::Users,
    ];

    /// Path segment used by role-parameterized endpoints
    /// (`/v2/organizations/{org}/<segment>/{user}`)
    pub fn path_segment(self) -> &'static str {
        match self {
            Role::Managers => "managers",
            Role::BillingManagers => "billing_managers",
            Role::Auditors => "auditors",
            Role::Developers => "developers",
            Role::Users => "users",
        }
    }

    pub fn is_valid_in(self, scope: Scope) -> bool {
        ROLE_TOKENS
            .iter()
            .any(|entry| entry.role == self && entry.scope == scope)
    }

    /// Wire token of this role in `scope`
    pub fn wire_token(self, scope: Scope) -> Result<&'static str> {
        ROLE_TOKENS
            .iter()
            .find(|entry| entry.role == self && entry.scope == scope)
            .map(|entry| entry.token)
            .ok_or(CcError::InvalidRole { role: self, scope })
    }

    /// Role behind a wire token such as `space_developer`, looked up among `scope`'s tokens
    pub fn from_wire_token(token: &str, scope: Scope) -> Result<Role> {
        ROLE_TOKENS
            .iter()
            .find(|entry| entry.scope == scope && entry.token == token)
            .map(|entry| entry.role)
            .ok_or_else(|| CcError::UnknownRoleToken(token.to_string()))
    }

    /// Path segment for role-parameterized endpoints, checked against `scope`
    pub fn scoped_segment(self, scope: Scope) -> Result<&'static str> {
        if self.is_valid_in(scope) {
            Ok(self.path_segment())
        } else {
            Err(CcError::InvalidRole { role: self, scope })
        }
    }

    /// Segment of the user-centric space listing for this role
    pub fn user_spaces_segment(self) -> Result<&'static str> {
        USER_SPACE_SEGMENTS
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, segment)| *segment)
            .ok_or(CcError::InvalidRole {
                role: self,
                scope: Scope::Space,
            })
    }
}

impl Scope {
    /// Roles valid in this scope
    pub fn roles(self) -> impl Iterator<Item = Role> {
        ROLE_TOKENS
            .iter()
            .filter(move |entry| entry.scope == self)
            .map(|entry| entry.role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Organization => write!(f, "organization"),
            Scope::Space => write!(f, "space"),
        }
    }
}
