//! Service binding API operations

use reqwest::Method;
use uuid::Uuid;

use crate::cc::query::{filter_param, with_query, FilterQuery};
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{NewServiceBinding, ServiceBinding, ServiceBindingList};

impl CcClient {
    pub(crate) async fn create_service_binding(
        &self,
        binding: &NewServiceBinding,
    ) -> Result<ServiceBinding> {
        let path = format!("{}/{}", api::V2, api::SERVICE_BINDINGS);
        self.send_json(
            Method::POST,
            &path,
            binding,
            &format!(
                "bind service instance '{}' to app '{}'",
                binding.service_instance_guid, binding.app_guid
            ),
        )
        .await
    }

    pub(crate) async fn delete_service_binding(&self, binding: Uuid) -> Result<()> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICE_BINDINGS, binding);
        self.send_empty(
            Method::DELETE,
            &path,
            &format!("delete service binding '{}'", binding),
        )
        .await
    }

    pub(crate) async fn get_service_bindings(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<ServiceBindingList> {
        let path = with_query(
            &format!("{}/{}", api::V2, api::SERVICE_BINDINGS),
            &filter_param(filter),
        );
        self.get_json(&path, "fetch service bindings").await
    }
}
