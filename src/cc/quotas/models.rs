//! Quota definition data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::traits::CcResource;

/// Organization quota definition
///
/// Limits of `-1` mean unlimited.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuotaEntity {
    pub name: String,
    #[serde(default)]
    pub non_basic_services_allowed: bool,
    #[serde(default)]
    pub total_services: i64,
    #[serde(default)]
    pub total_routes: i64,
    #[serde(default)]
    pub memory_limit: i64,
    #[serde(default)]
    pub instance_memory_limit: i64,
    #[serde(default)]
    pub app_instance_limit: Option<i64>,
}

/// Quota definition resource
pub type Quota = Resource<QuotaEntity>;

impl CcResource for Quota {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

/// Render a quota limit, showing `unlimited` for negative values
pub fn format_limit(value: i64) -> String {
    if value < 0 {
        "unlimited".to_string()
    } else {
        value.to_string()
    }
}
