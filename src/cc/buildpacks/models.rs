//! Buildpack data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cc::models::Resource;
use crate::cc::traits::CcResource;

/// Buildpack entity from the Cloud Controller API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BuildpackEntity {
    pub name: String,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub locked: Option<bool>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
}

/// Buildpack resource
pub type Buildpack = Resource<BuildpackEntity>;

impl CcResource for Buildpack {
    fn guid(&self) -> Uuid {
        self.metadata.guid
    }

    fn name(&self) -> &str {
        &self.entity.name
    }
}

impl Buildpack {
    pub fn is_enabled(&self) -> bool {
        self.entity.enabled.unwrap_or(false)
    }

    pub fn is_locked(&self) -> bool {
        self.entity.locked.unwrap_or(false)
    }
}
