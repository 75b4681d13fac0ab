//! Organization output rows

use serde::Serialize;

use super::common::yes_no;
use super::TableRow;
use crate::cc::{CcResource, Org, OrgPermission};

/// Flattened organization
#[derive(Serialize, Debug, Clone)]
pub struct OrgRow {
    pub guid: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_definition_guid: Option<String>,
    pub created_at: String,
}

impl From<&Org> for OrgRow {
    fn from(org: &Org) -> Self {
        Self {
            guid: org.guid().to_string(),
            name: org.name().to_string(),
            status: org.status().to_string(),
            quota_definition_guid: org.entity.quota_definition_guid.map(|g| g.to_string()),
            created_at: org.metadata.created_at.clone().unwrap_or_default(),
        }
    }
}

impl TableRow for OrgRow {
    const KIND: &'static str = "organizations";

    fn headers() -> Vec<&'static str> {
        vec!["Name", "GUID", "Status", "Created At"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.guid.clone(),
            self.status.clone(),
            self.created_at.clone(),
        ]
    }
}

/// A user's flags in one organization
#[derive(Serialize, Debug, Clone)]
pub struct PermissionRow {
    pub org_guid: String,
    pub org_name: String,
    pub manager: bool,
    pub auditor: bool,
    pub billing_manager: bool,
}

impl From<&OrgPermission> for PermissionRow {
    fn from(permission: &OrgPermission) -> Self {
        Self {
            org_guid: permission.organization.guid().to_string(),
            org_name: permission.organization.name().to_string(),
            manager: permission.is_manager,
            auditor: permission.is_auditor,
            billing_manager: permission.is_billing_manager,
        }
    }
}

impl TableRow for PermissionRow {
    const KIND: &'static str = "organizations";

    fn headers() -> Vec<&'static str> {
        vec!["Org Name", "Org GUID", "Manager", "Auditor", "Billing Manager"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.org_name.clone(),
            self.org_guid.clone(),
            yes_no(self.manager).to_string(),
            yes_no(self.auditor).to_string(),
            yes_no(self.billing_manager).to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> Org {
        serde_json::from_value(serde_json::json!({
            "metadata": {
                "guid": "a0000000-0000-4000-8000-000000000001",
                "created_at": "2016-03-01T10:00:00Z"
            },
            "entity": {"name": "alpha"}
        }))
        .unwrap()
    }

    #[test]
    fn test_org_row_from_org() {
        let row = OrgRow::from(&org());
        assert_eq!(row.name, "alpha");
        assert_eq!(row.status, "unknown");
        assert_eq!(row.created_at, "2016-03-01T10:00:00Z");
        assert!(row.quota_definition_guid.is_none());
        assert_eq!(row.cells().len(), OrgRow::headers().len());
    }

    #[test]
    fn test_permission_row_cells() {
        let permission = OrgPermission {
            organization: org(),
            is_manager: true,
            is_auditor: false,
            is_billing_manager: false,
        };
        let row = PermissionRow::from(&permission);
        assert_eq!(row.cells()[2..], ["Yes", "No", "No"]);
    }
}
