//! Space data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::organizations::Org;
use crate::cc::traits::CcResource;

/// Space entity from the Cloud Controller API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
    #[serde(default)]
    pub organization_guid: Option<Uuid>,
    /// Present when listed with `inline-relations-depth=1`
    #[serde(default)]
    pub organization: Option<Org>,
}

/// Space resource
pub type Space = Resource<SpaceEntity>;

impl CcResource for Space {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

impl Space {
    /// Name of the owning organization, if it was inlined
    pub fn org_name(&self) -> &str {
        self.entity
            .organization
            .as_ref()
            .map(|org| org.entity.name.as_str())
            .unwrap_or("")
    }
}

/// Request body for space creation
#[derive(Serialize, Debug)]
pub(crate) struct NewSpace<'a> {
    pub organization_guid: Uuid,
    pub name: &'a str,
}

/// Space summary (`/v2/spaces/{space}/summary`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpaceSummary {
    #[serde(default)]
    pub guid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub apps: Vec<AppBrief>,
    #[serde(default)]
    pub services: Vec<ServiceInstanceBrief>,
}

/// Application entry of a summary
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppBrief {
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instances: u32,
    #[serde(default)]
    pub running_instances: Option<u32>,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub service_names: Vec<String>,
}

/// Service instance entry of a summary
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceInstanceBrief {
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub bound_app_count: u32,
    #[serde(default)]
    pub service_plan: Option<serde_json::Value>,
}
