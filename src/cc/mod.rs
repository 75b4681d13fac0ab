//! Cloud Controller API client module
//!
//! This module provides a typed facade over the Cloud Foundry Cloud
//! Controller v2 API: one [`CcClient`] for transport, per-resource endpoint
//! groups, lazy page concatenation and the role mapping shared by them.

pub mod applications;
pub mod buildpacks;
mod client;
mod commands;
mod controller;
mod credentials;
mod models;
pub mod organizations;
pub mod pagination;
pub mod query;
pub mod quotas;
pub mod roles;
pub mod service_bindings;
pub mod services;
pub mod spaces;
mod target;
pub mod traits;
pub mod users;

pub use applications::{App, AppEntity, AppEnv, AppStatus, AppSummary};
pub use buildpacks::{Buildpack, BuildpackEntity};
pub use client::{scrub_credentials, CcClient};
pub use commands::{run_count_command, run_get_command, run_permissions_command, run_roles_command};
pub use controller::CloudController;
pub use credentials::TokenResolver;
pub use models::{CcErrorBody, Metadata, Resource, ARTIFICIAL_USER_GUID};
pub use organizations::{MemoryUsage, Org, OrgEntity, OrgPermission, OrgSummary, OrgSummarySpace};
pub use pagination::{concat_pages, ContinuationToken, ItemStream, Page};
pub use query::{FilterOperator, FilterQuery};
pub use quotas::{format_limit, Quota, QuotaEntity};
pub use roles::{Role, Scope};
pub use service_bindings::{
    NewServiceBinding, ServiceBinding, ServiceBindingEntity, ServiceBindingList,
};
pub use services::{
    ExtendedService, ExtendedServiceInstance, ExtendedServicePlan, NewServiceInstance,
    NewServiceKey, PlanVisibility, PlanVisibilityEntity, ServiceEntity, ServiceInstanceEntity,
    ServiceKey, ServiceKeyEntity, ServicePlanEntity,
};
pub use spaces::{AppBrief, ServiceInstanceBrief, Space, SpaceEntity, SpaceSummary};
pub use target::ApiResolver;
pub use traits::CcResource;
pub use users::{CcUser, User, UserEntity};
