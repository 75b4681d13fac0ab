//! Buildpack and quota output rows

use serde::Serialize;

use super::common::yes_no;
use super::TableRow;
use crate::cc::{format_limit, Buildpack, CcResource, Quota};

/// Flattened buildpack
#[derive(Serialize, Debug, Clone)]
pub struct BuildpackRow {
    pub guid: String,
    pub name: String,
    pub position: Option<u32>,
    pub enabled: bool,
    pub locked: bool,
    pub filename: String,
    pub stack: String,
}

impl From<&Buildpack> for BuildpackRow {
    fn from(buildpack: &Buildpack) -> Self {
        Self {
            guid: buildpack.guid().to_string(),
            name: buildpack.name().to_string(),
            position: buildpack.entity.position,
            enabled: buildpack.is_enabled(),
            locked: buildpack.is_locked(),
            filename: buildpack.entity.filename.clone().unwrap_or_default(),
            stack: buildpack.entity.stack.clone().unwrap_or_default(),
        }
    }
}

impl TableRow for BuildpackRow {
    const KIND: &'static str = "buildpacks";

    fn headers() -> Vec<&'static str> {
        vec!["Position", "Name", "Stack", "Enabled", "Locked", "Filename"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.position.map(|p| p.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.stack.clone(),
            yes_no(self.enabled).to_string(),
            yes_no(self.locked).to_string(),
            self.filename.clone(),
        ]
    }
}

/// Flattened quota definition
#[derive(Serialize, Debug, Clone)]
pub struct QuotaRow {
    pub guid: String,
    pub name: String,
    pub memory_limit: i64,
    pub instance_memory_limit: i64,
    pub total_routes: i64,
    pub total_services: i64,
    pub non_basic_services_allowed: bool,
}

impl From<&Quota> for QuotaRow {
    fn from(quota: &Quota) -> Self {
        Self {
            guid: quota.guid().to_string(),
            name: quota.name().to_string(),
            memory_limit: quota.entity.memory_limit,
            instance_memory_limit: quota.entity.instance_memory_limit,
            total_routes: quota.entity.total_routes,
            total_services: quota.entity.total_services,
            non_basic_services_allowed: quota.entity.non_basic_services_allowed,
        }
    }
}

impl TableRow for QuotaRow {
    const KIND: &'static str = "quotas";

    fn headers() -> Vec<&'static str> {
        vec![
            "Name",
            "Memory MB",
            "Instance Memory MB",
            "Routes",
            "Services",
            "Paid Services",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_limit(self.memory_limit),
            format_limit(self.instance_memory_limit),
            format_limit(self.total_routes),
            format_limit(self.total_services),
            yes_no(self.non_basic_services_allowed).to_string(),
        ]
    }
}
