//! Service API operations

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

use crate::cc::pagination::Page;
use crate::cc::query::{filter_param, with_query, FilterQuery};
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{
    ExtendedService, ExtendedServiceInstance, ExtendedServicePlan, NewServiceInstance,
    NewServiceKey, PlanVisibility, ServiceKey,
};

#[derive(Serialize)]
struct NewPlanVisibility {
    service_plan_guid: Uuid,
    organization_guid: Uuid,
}

impl CcClient {
    pub(crate) async fn get_services_page(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<Page<ExtendedService>> {
        let path = with_query(
            &format!("{}/{}", api::V2, api::SERVICES),
            &filter_param(filter),
        );
        self.fetch_page(&path, "fetch services").await
    }

    pub(crate) async fn get_service(&self, service: Uuid) -> Result<ExtendedService> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICES, service);
        self.get_json(&path, &format!("fetch service '{}'", service))
            .await
    }

    pub(crate) async fn get_service_instances_page(
        &self,
        filter: Option<&FilterQuery>,
        depth: Option<u32>,
    ) -> Result<Page<ExtendedServiceInstance>> {
        let mut params = filter_param(filter);
        if let Some(depth) = depth {
            params.push(("inline-relations-depth", depth.to_string()));
        }
        let path = with_query(
            &format!("{}/{}", api::V2, api::SERVICE_INSTANCES),
            &params,
        );
        self.fetch_page(&path, "fetch service instances").await
    }

    pub(crate) async fn create_service_instance(
        &self,
        instance: &NewServiceInstance,
    ) -> Result<ExtendedServiceInstance> {
        let path = format!("{}/{}", api::V2, api::SERVICE_INSTANCES);
        self.send_json(
            Method::POST,
            &path,
            instance,
            &format!("create service instance '{}'", instance.name),
        )
        .await
    }

    pub(crate) async fn delete_service_instance(&self, instance: Uuid) -> Result<()> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICE_INSTANCES, instance);
        self.send_empty(
            Method::DELETE,
            &path,
            &format!("delete service instance '{}'", instance),
        )
        .await
    }

    pub(crate) async fn get_service_plans_page(
        &self,
        service: Uuid,
    ) -> Result<Page<ExtendedServicePlan>> {
        let path = format!(
            "{}/{}/{}/{}",
            api::V2,
            api::SERVICES,
            service,
            api::SERVICE_PLANS
        );
        self.fetch_page(&path, &format!("fetch plans of service '{}'", service))
            .await
    }

    pub(crate) async fn get_service_keys_page(&self) -> Result<Page<ServiceKey>> {
        let path = format!("{}/{}", api::V2, api::SERVICE_KEYS);
        self.fetch_page(&path, "fetch service keys").await
    }

    pub(crate) async fn create_service_key(&self, key: &NewServiceKey) -> Result<ServiceKey> {
        let path = format!("{}/{}", api::V2, api::SERVICE_KEYS);
        self.send_json(
            Method::POST,
            &path,
            key,
            &format!("create service key '{}'", key.name),
        )
        .await
    }

    pub(crate) async fn delete_service_key(&self, key: Uuid) -> Result<()> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICE_KEYS, key);
        self.send_empty(Method::DELETE, &path, &format!("delete service key '{}'", key))
            .await
    }

    pub(crate) async fn set_service_plan_visibility(
        &self,
        plan: Uuid,
        org: Uuid,
    ) -> Result<PlanVisibility> {
        let path = format!("{}/{}", api::V2, api::SERVICE_PLAN_VISIBILITIES);
        let request = NewPlanVisibility {
            service_plan_guid: plan,
            organization_guid: org,
        };
        self.send_json(
            Method::POST,
            &path,
            &request,
            &format!("make plan '{}' visible in organization '{}'", plan, org),
        )
        .await
    }

    pub(crate) async fn get_service_plan_visibilities_page(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<Page<PlanVisibility>> {
        let path = with_query(
            &format!("{}/{}", api::V2, api::SERVICE_PLAN_VISIBILITIES),
            &filter_param(filter),
        );
        self.fetch_page(&path, "fetch service plan visibilities")
            .await
    }
}
