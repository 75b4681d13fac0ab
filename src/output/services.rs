//! Service output rows

use serde::Serialize;

use super::common::yes_no;
use super::TableRow;
use crate::cc::{CcResource, ExtendedService, ExtendedServiceInstance, ServiceKey};

/// Flattened marketplace service
#[derive(Serialize, Debug, Clone)]
pub struct ServiceRow {
    pub guid: String,
    pub label: String,
    pub description: String,
    pub active: bool,
    pub bindable: bool,
}

impl From<&ExtendedService> for ServiceRow {
    fn from(service: &ExtendedService) -> Self {
        Self {
            guid: service.guid().to_string(),
            label: service.name().to_string(),
            description: service.entity.description.clone().unwrap_or_default(),
            active: service.entity.active.unwrap_or(false),
            bindable: service.entity.bindable.unwrap_or(false),
        }
    }
}

impl TableRow for ServiceRow {
    const KIND: &'static str = "services";

    fn headers() -> Vec<&'static str> {
        vec!["Label", "GUID", "Active", "Bindable", "Description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.guid.clone(),
            yes_no(self.active).to_string(),
            yes_no(self.bindable).to_string(),
            self.description.clone(),
        ]
    }
}

/// Flattened service instance
#[derive(Serialize, Debug, Clone)]
pub struct ServiceInstanceRow {
    pub guid: String,
    pub name: String,
    pub plan: String,
    pub space_guid: String,
    #[serde(rename = "type")]
    pub instance_type: String,
}

impl From<&ExtendedServiceInstance> for ServiceInstanceRow {
    fn from(instance: &ExtendedServiceInstance) -> Self {
        Self {
            guid: instance.guid().to_string(),
            name: instance.name().to_string(),
            plan: instance.plan_name().to_string(),
            space_guid: instance
                .entity
                .space_guid
                .map(|g| g.to_string())
                .unwrap_or_default(),
            instance_type: instance.entity.instance_type.clone().unwrap_or_default(),
        }
    }
}

impl TableRow for ServiceInstanceRow {
    const KIND: &'static str = "service instances";

    fn headers() -> Vec<&'static str> {
        vec!["Name", "GUID", "Plan", "Space GUID", "Type"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.guid.clone(),
            self.plan.clone(),
            self.space_guid.clone(),
            self.instance_type.clone(),
        ]
    }
}

/// Flattened service key; credentials are never printed
#[derive(Serialize, Debug, Clone)]
pub struct ServiceKeyRow {
    pub guid: String,
    pub name: String,
    pub service_instance_guid: String,
}

impl From<&ServiceKey> for ServiceKeyRow {
    fn from(key: &ServiceKey) -> Self {
        Self {
            guid: key.guid().to_string(),
            name: key.name().to_string(),
            service_instance_guid: key
                .entity
                .service_instance_guid
                .map(|g| g.to_string())
                .unwrap_or_default(),
        }
    }
}

impl TableRow for ServiceKeyRow {
    const KIND: &'static str = "service keys";

    fn headers() -> Vec<&'static str> {
        vec!["Name", "GUID", "Service Instance GUID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.guid.clone(),
            self.service_instance_guid.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_key_row_omits_credentials() {
        let key: ServiceKey = serde_json::from_value(serde_json::json!({
            "metadata": {"guid": "9e0f1a2b-3c4d-4e5f-8a6b-7c8d9e0f1a2b"},
            "entity": {
                "name": "ci-key",
                "service_instance_guid": "3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f",
                "credentials": {"password": "hunter2"}
            }
        }))
        .unwrap();

        let row = ServiceKeyRow::from(&key);
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("ci-key"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_service_instance_row_type_field() {
        let instance: ExtendedServiceInstance = serde_json::from_value(serde_json::json!({
            "metadata": {"guid": "3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f"},
            "entity": {"name": "db", "type": "managed_service_instance"}
        }))
        .unwrap();

        let row = ServiceInstanceRow::from(&instance);
        assert_eq!(row.instance_type, "managed_service_instance");
        assert_eq!(row.plan, "");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], "managed_service_instance");
    }
}
