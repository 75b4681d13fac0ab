//! Application data models

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::spaces::ServiceInstanceBrief;

/// Desired run state of an application
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppStatus {
    Started,
    Stopped,
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppStatus::Started => write!(f, "STARTED"),
            AppStatus::Stopped => write!(f, "STOPPED"),
        }
    }
}

/// Request body for switching the run state
#[derive(Serialize, Debug)]
pub(crate) struct AppStateRequest {
    pub state: AppStatus,
}

/// Application entity (only what counting and listing need)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppEntity {
    pub name: String,
    #[serde(default)]
    pub state: Option<AppStatus>,
    #[serde(default)]
    pub space_guid: Option<Uuid>,
}

/// Application resource
pub type App = Resource<AppEntity>;

/// Application summary (`/v2/apps/{app}/summary`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppSummary {
    pub guid: Uuid,
    pub name: String,
    #[serde(default)]
    pub state: Option<AppStatus>,
    #[serde(default)]
    pub instances: u32,
    #[serde(default)]
    pub running_instances: Option<u32>,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub disk_quota: u64,
    #[serde(default)]
    pub buildpack: Option<String>,
    #[serde(default)]
    pub detected_buildpack: Option<String>,
    #[serde(default)]
    pub space_guid: Option<Uuid>,
    #[serde(default)]
    pub services: Vec<ServiceInstanceBrief>,
}

/// Application environment (`/v2/apps/{app}/env`)
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct AppEnv {
    pub values: serde_json::Map<String, serde_json::Value>,
}

impl AppEnv {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// `VCAP_SERVICES` from the system-provided environment
    pub fn vcap_services(&self) -> Option<&serde_json::Value> {
        self.values
            .get("system_env_json")
            .and_then(|env| env.get("VCAP_SERVICES"))
    }

    /// User-provided environment variables
    pub fn environment(&self) -> Option<&serde_json::Value> {
        self.values.get("environment_json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_status_wire_format() {
        assert_eq!(
            serde_json::to_value(AppStateRequest {
                state: AppStatus::Started
            })
            .unwrap(),
            serde_json::json!({"state": "STARTED"})
        );
        let status: AppStatus = serde_json::from_str("\"STOPPED\"").unwrap();
        assert_eq!(status, AppStatus::Stopped);
    }

    #[test]
    fn test_app_env_accessors() {
        let env: AppEnv = serde_json::from_value(serde_json::json!({
            "staging_env_json": {},
            "running_env_json": {},
            "environment_json": {"LOG_LEVEL": "debug"},
            "system_env_json": {
                "VCAP_SERVICES": {"postgres": [{"name": "db"}]}
            },
            "application_env_json": {}
        }))
        .unwrap();

        assert_eq!(env.environment().unwrap()["LOG_LEVEL"], "debug");
        assert_eq!(env.vcap_services().unwrap()["postgres"][0]["name"], "db");
        assert!(env.get("running_env_json").is_some());
    }

    #[test]
    fn test_app_summary_deserialization() {
        let summary: AppSummary = serde_json::from_value(serde_json::json!({
            "guid": "0e8f2b5c-65a1-4a3b-8a3e-5f7c1d6b9e21",
            "name": "web",
            "state": "STARTED",
            "instances": 2,
            "running_instances": 1,
            "memory": 512,
            "disk_quota": 1024,
            "detected_buildpack": "ruby 1.6.7",
            "routes": [],
            "services": []
        }))
        .unwrap();

        assert_eq!(summary.state, Some(AppStatus::Started));
        assert_eq!(summary.running_instances, Some(1));
        assert!(summary.buildpack.is_none());
    }
}
