//! User data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::roles::{Role, Scope};
use crate::cc::traits::CcResource;
use crate::error::Result;

/// User entity from the Cloud Controller API
///
/// `organization_roles` / `space_roles` are only filled by the `user_roles`
/// endpoints.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserEntity {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub default_space_guid: Option<Uuid>,
    #[serde(default)]
    pub organization_roles: Vec<String>,
    #[serde(default)]
    pub space_roles: Vec<String>,
}

/// User resource as returned by the API
pub type CcUser = Resource<UserEntity>;

impl CcResource for CcUser {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        self.username()
    }
}

impl CcUser {
    /// Get username, empty if the API did not report one
    pub fn username(&self) -> &str {
        self.entity.username.as_deref().unwrap_or("")
    }
}

/// A user together with the roles they hold in one org or space
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub guid: Uuid,
    pub roles: Vec<Role>,
}

impl User {
    /// User holding exactly `role`
    pub fn with_role(user: &CcUser, role: Role) -> Self {
        Self {
            username: user.username().to_string(),
            guid: user.metadata.guid,
            roles: vec![role],
        }
    }

    /// User whose roles come from `scope`'s wire tokens (`org_manager`, `space_developer`, ...)
    pub fn from_tokens(user: &CcUser, tokens: &[String], scope: Scope) -> Result<Self> {
        let roles = tokens
            .iter()
            .map(|token| Role::from_wire_token(token, scope))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            username: user.username().to_string(),
            guid: user.metadata.guid,
            roles,
        })
    }
}

impl CcResource for User {
    fn guid(&self) -> Uuid {
        self.guid
    }

    fn name(&self) -> &str {
        &self.username
    }
}

/// Request body for user creation
#[derive(Serialize, Debug)]
pub(crate) struct NewUser {
    pub guid: Uuid,
}
