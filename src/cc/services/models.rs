//! Service, service instance, plan and key data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::traits::CcResource;

/// Service offering entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceEntity {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub bindable: Option<bool>,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Broker-defined JSON document, delivered as a string
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub service_broker_guid: Option<Uuid>,
}

/// Service offering resource
pub type ExtendedService = Resource<ServiceEntity>;

impl CcResource for ExtendedService {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.label
    }
}

/// Service plan entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServicePlanEntity {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub free: Option<bool>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub service_guid: Option<Uuid>,
    #[serde(default)]
    pub unique_id: Option<String>,
}

/// Service plan resource
pub type ExtendedServicePlan = Resource<ServicePlanEntity>;

impl CcResource for ExtendedServicePlan {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

/// Service instance entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceInstanceEntity {
    pub name: String,
    #[serde(default)]
    pub space_guid: Option<Uuid>,
    #[serde(default)]
    pub service_plan_guid: Option<Uuid>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(rename = "type", default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub credentials: Option<serde_json::Value>,
    /// Present when listed with `inline-relations-depth` >= 1
    #[serde(default)]
    pub service_plan: Option<ExtendedServicePlan>,
}

/// Service instance resource
pub type ExtendedServiceInstance = Resource<ServiceInstanceEntity>;

impl CcResource for ExtendedServiceInstance {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

impl ExtendedServiceInstance {
    /// Name of the inlined service plan, if any
    pub fn plan_name(&self) -> &str {
        self.entity
            .service_plan
            .as_ref()
            .map(|plan| plan.entity.name.as_str())
            .unwrap_or("")
    }
}

/// Service key entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceKeyEntity {
    pub name: String,
    #[serde(default)]
    pub service_instance_guid: Option<Uuid>,
    #[serde(default)]
    pub credentials: Option<serde_json::Value>,
}

/// Service key resource
pub type ServiceKey = Resource<ServiceKeyEntity>;

impl CcResource for ServiceKey {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

/// Service plan visibility entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PlanVisibilityEntity {
    pub service_plan_guid: Uuid,
    pub organization_guid: Uuid,
}

/// Service plan visibility resource
pub type PlanVisibility = Resource<PlanVisibilityEntity>;

/// Request body for service instance creation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewServiceInstance {
    pub name: String,
    pub space_guid: Uuid,
    pub service_plan_guid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// Request body for service key creation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewServiceKey {
    pub service_instance_guid: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}
