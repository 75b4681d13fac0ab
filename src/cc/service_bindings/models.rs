//! Service binding data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;

/// Service binding entity
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServiceBindingEntity {
    pub app_guid: Uuid,
    pub service_instance_guid: Uuid,
    #[serde(default)]
    pub credentials: Option<serde_json::Value>,
    #[serde(default)]
    pub syslog_drain_url: Option<String>,
}

/// Service binding resource
pub type ServiceBinding = Resource<ServiceBindingEntity>;

/// Single list response of bindings
///
/// Binding queries are answered with one response; continuation links in it
/// are not followed.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ServiceBindingList {
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub resources: Vec<ServiceBinding>,
}

impl ServiceBindingList {
    /// Guids of the service instances bound by this list
    pub fn service_instance_guids(&self) -> Vec<Uuid> {
        self.resources
            .iter()
            .map(|binding| binding.entity.service_instance_guid)
            .collect()
    }
}

/// Request body for binding creation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewServiceBinding {
    pub app_guid: Uuid,
    pub service_instance_guid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_list_ignores_pagination_fields() {
        let list: ServiceBindingList = serde_json::from_value(serde_json::json!({
            "total_results": 2,
            "total_pages": 2,
            "next_url": "/v2/service_bindings?page=2",
            "resources": [{
                "metadata": {"guid": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d"},
                "entity": {
                    "app_guid": "0e8f2b5c-65a1-4a3b-8a3e-5f7c1d6b9e21",
                    "service_instance_guid": "3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f",
                    "credentials": {"uri": "postgres://"}
                }
            }]
        }))
        .unwrap();

        assert_eq!(list.total_results, 2);
        assert_eq!(list.resources.len(), 1);
        assert_eq!(
            list.service_instance_guids()[0].to_string(),
            "3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f"
        );
    }
}
