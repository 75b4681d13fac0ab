//! Space output rows

use serde::Serialize;

use super::TableRow;
use crate::cc::{CcResource, Space};

/// Flattened space
#[derive(Serialize, Debug, Clone)]
pub struct SpaceRow {
    pub guid: String,
    pub name: String,
    pub organization_guid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub organization_name: String,
}

impl From<&Space> for SpaceRow {
    fn from(space: &Space) -> Self {
        Self {
            guid: space.guid().to_string(),
            name: space.name().to_string(),
            organization_guid: space
                .entity
                .organization_guid
                .map(|g| g.to_string())
                .unwrap_or_default(),
            organization_name: space.org_name().to_string(),
        }
    }
}

impl TableRow for SpaceRow {
    const KIND: &'static str = "spaces";

    fn headers() -> Vec<&'static str> {
        vec!["Name", "GUID", "Org GUID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.guid.clone(),
            self.organization_guid.clone(),
        ]
    }
}
