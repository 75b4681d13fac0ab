//! Application API operations

use reqwest::Method;
use uuid::Uuid;

use crate::cc::pagination::Page;
use crate::cc::query::{filter_param, with_query, FilterQuery};
use crate::cc::service_bindings::ServiceBindingList;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{App, AppEnv, AppStateRequest, AppStatus, AppSummary};

fn app_path(app: Uuid) -> String {
    format!("{}/{}/{}", api::V2, api::APPS, app)
}

impl CcClient {
    pub(crate) async fn get_applications_page(&self) -> Result<Page<App>> {
        let path = format!("{}/{}", api::V2, api::APPS);
        self.fetch_page(&path, "fetch applications").await
    }

    pub(crate) async fn get_app_summary(&self, app: Uuid) -> Result<AppSummary> {
        let path = format!("{}/summary", app_path(app));
        self.get_json(&path, &format!("fetch summary of app '{}'", app))
            .await
    }

    pub(crate) async fn restage_app(&self, app: Uuid) -> Result<()> {
        let path = format!("{}/restage", app_path(app));
        self.send_empty(Method::POST, &path, &format!("restage app '{}'", app))
            .await
    }

    /// Bindings of an app, answered as a single response
    pub(crate) async fn get_app_bindings(
        &self,
        app: Uuid,
        filter: Option<&FilterQuery>,
    ) -> Result<ServiceBindingList> {
        let path = with_query(
            &format!("{}/{}", app_path(app), api::SERVICE_BINDINGS),
            &filter_param(filter),
        );
        self.get_json(&path, &format!("fetch service bindings of app '{}'", app))
            .await
    }

    pub(crate) async fn delete_app(&self, app: Uuid) -> Result<()> {
        self.send_empty(Method::DELETE, &app_path(app), &format!("delete app '{}'", app))
            .await
    }

    pub(crate) async fn switch_app(&self, app: Uuid, status: AppStatus) -> Result<()> {
        self.send_body(
            Method::PUT,
            &app_path(app),
            &AppStateRequest { state: status },
            &format!("switch app '{}' to {}", app, status),
        )
        .await
    }

    pub(crate) async fn get_app_env(&self, app: Uuid) -> Result<AppEnv> {
        let path = format!("{}/env", app_path(app));
        self.get_json(&path, &format!("fetch environment of app '{}'", app))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const APP: &str = "0e8f2b5c-65a1-4a3b-8a3e-5f7c1d6b9e21";

    fn app_guid() -> Uuid {
        Uuid::parse_str(APP).unwrap()
    }

    #[tokio::test]
    async fn test_switch_app() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/v2/apps/{}", APP)))
            .and(body_json(serde_json::json!({"state": "STOPPED"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "metadata": {"guid": APP},
                "entity": {"name": "web", "state": "STOPPED"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        client
            .switch_app(app_guid(), AppStatus::Stopped)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_restage_app() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/v2/apps/{}/restage", APP)))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        client.restage_app(app_guid()).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_app_bindings_with_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v2/apps/{}/service_bindings", APP)))
            .and(query_param(
                "q",
                "service_instance_guid:3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 0,
                "resources": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let filter = FilterQuery::equals(
            "service_instance_guid",
            "3f3c2d1e-8b7a-4c5d-9e6f-1a2b3c4d5e6f",
        );
        let list = client
            .get_app_bindings(app_guid(), Some(&filter))
            .await
            .unwrap();
        assert!(list.resources.is_empty());
    }

    #[tokio::test]
    async fn test_get_app_summary() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v2/apps/{}/summary", APP)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "guid": APP,
                "name": "web",
                "state": "STARTED",
                "instances": 1,
                "memory": 256
            })))
            .mount(&mock_server)
            .await;

        let client = CcClient::test_client(&mock_server.uri());
        let summary = client.get_app_summary(app_guid()).await.unwrap();
        assert_eq!(summary.name, "web");
        assert_eq!(summary.memory, 256);
    }
}
