//! Organization data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::traits::CcResource;

/// Organization entity from the Cloud Controller API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrgEntity {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub billing_enabled: Option<bool>,
    #[serde(default)]
    pub quota_definition_guid: Option<Uuid>,
}

/// Organization resource
pub type Org = Resource<OrgEntity>;

impl CcResource for Org {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

impl Org {
    /// Get status, defaulting to "unknown" if not available
    pub fn status(&self) -> &str {
        self.entity.status.as_deref().unwrap_or("unknown")
    }
}

/// Memory currently used by all apps of an organization
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MemoryUsage {
    pub memory_usage_in_mb: u64,
}

/// Organization summary (`/v2/organizations/{org}/summary`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrgSummary {
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub spaces: Vec<OrgSummarySpace>,
}

/// Per-space entry of an organization summary
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrgSummarySpace {
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub app_count: u32,
    #[serde(default)]
    pub service_count: u32,
    #[serde(default)]
    pub mem_dev_total: u64,
    #[serde(default)]
    pub mem_prod_total: u64,
}

/// Roles a user holds in one organization
#[derive(Serialize, Debug, Clone)]
pub struct OrgPermission {
    pub organization: Org,
    pub is_manager: bool,
    pub is_auditor: bool,
    pub is_billing_manager: bool,
}
