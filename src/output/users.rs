//! User output rows

use serde::Serialize;

use super::common::yes_no;
use super::TableRow;
use crate::cc::{CcUser, Role, User};

/// Flattened user
#[derive(Serialize, Debug, Clone)]
pub struct UserRow {
    pub guid: String,
    pub username: String,
    pub admin: bool,
    pub active: bool,
}

impl From<&CcUser> for UserRow {
    fn from(user: &CcUser) -> Self {
        Self {
            guid: user.guid().to_string(),
            username: user.username().to_string(),
            admin: user.entity.admin.unwrap_or(false),
            active: user.entity.active.unwrap_or(false),
        }
    }
}

impl TableRow for UserRow {
    const KIND: &'static str = "users";

    fn headers() -> Vec<&'static str> {
        vec!["Username", "GUID", "Admin", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.guid.clone(),
            yes_no(self.admin).to_string(),
            yes_no(self.active).to_string(),
        ]
    }
}

/// A user with the roles held in one organization or space
#[derive(Serialize, Debug, Clone)]
pub struct RoleRow {
    pub guid: String,
    pub username: String,
    pub roles: Vec<Role>,
}

impl From<&User> for RoleRow {
    fn from(user: &User) -> Self {
        Self {
            guid: user.guid.to_string(),
            username: user.username.clone(),
            roles: user.roles.clone(),
        }
    }
}

impl TableRow for RoleRow {
    const KIND: &'static str = "users";

    fn headers() -> Vec<&'static str> {
        vec!["Username", "GUID", "Roles"]
    }

    fn cells(&self) -> Vec<String> {
        let roles: Vec<String> = self.roles.iter().map(|r| r.to_string()).collect();
        vec![self.username.clone(), self.guid.clone(), roles.join(";")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_role_row_joins_roles() {
        let user = User {
            username: "alice@example.com".to_string(),
            guid: Uuid::nil(),
            roles: vec![Role::Users, Role::Managers],
        };
        let row = RoleRow::from(&user);
        assert_eq!(row.cells()[2], format!("{};{}", Role::Users, Role::Managers));

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["roles"], serde_json::json!(["users", "managers"]));
    }
}
