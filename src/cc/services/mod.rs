//! Services module - offerings, plans, instances, keys and plan visibility

mod api;
mod models;

pub use models::{
    ExtendedService, ExtendedServiceInstance, ExtendedServicePlan, NewServiceInstance,
    NewServiceKey, PlanVisibility, PlanVisibilityEntity, ServiceEntity, ServiceInstanceEntity,
    ServiceKey, ServiceKeyEntity, ServicePlanEntity,
};
