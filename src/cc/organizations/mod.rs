//! Organizations module - org lifecycle, membership and role endpoints

mod api;
mod models;

pub use models::{MemoryUsage, Org, OrgEntity, OrgPermission, OrgSummary, OrgSummarySpace};
