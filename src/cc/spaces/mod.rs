//! Spaces module - space lifecycle, membership and role endpoints

mod api;
mod models;

pub use models::{AppBrief, ServiceInstanceBrief, Space, SpaceEntity, SpaceSummary};
