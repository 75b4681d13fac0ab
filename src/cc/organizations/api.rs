//! Organization API operations

use reqwest::Method;
use uuid::Uuid;

use crate::cc::models::NameRequest;
use crate::cc::pagination::Page;
use crate::cc::roles::{Role, Scope};
use crate::cc::services::ExtendedService;
use crate::cc::spaces::Space;
use crate::cc::users::CcUser;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{MemoryUsage, Org, OrgSummary};

fn org_path(org: Uuid) -> String {
    format!("{}/{}/{}", api::V2, api::ORGANIZATIONS, org)
}

impl CcClient {
    pub(crate) async fn create_organization(&self, name: &str) -> Result<Org> {
        let path = format!("{}/{}", api::V2, api::ORGANIZATIONS);
        self.send_json(
            Method::POST,
            &path,
            &NameRequest { name },
            &format!("create organization '{}'", name),
        )
        .await
    }

    pub(crate) async fn update_organization(&self, org: Uuid, name: &str) -> Result<()> {
        self.send_body(
            Method::PUT,
            &org_path(org),
            &NameRequest { name },
            &format!("rename organization '{}'", org),
        )
        .await
    }

    pub(crate) async fn delete_organization(&self, org: Uuid) -> Result<()> {
        let path = format!("{}?async=true&recursive=true", org_path(org));
        self.send_empty(Method::DELETE, &path, &format!("delete organization '{}'", org))
            .await
    }

    pub(crate) async fn get_organization(&self, org: Uuid) -> Result<Org> {
        self.get_json(&org_path(org), &format!("fetch organization '{}'", org))
            .await
    }

    pub(crate) async fn get_orgs_page(&self) -> Result<Page<Org>> {
        let path = format!("{}/{}", api::V2, api::ORGANIZATIONS);
        self.fetch_page(&path, "fetch organizations").await
    }

    /// Members of an organization holding `role`
    pub(crate) async fn get_organization_users_page(
        &self,
        org: Uuid,
        role: Role,
    ) -> Result<Page<CcUser>> {
        let segment = role.scoped_segment(Scope::Organization)?;
        let path = format!("{}/{}", org_path(org), segment);
        self.fetch_page(&path, &format!("fetch {} of organization '{}'", segment, org))
            .await
    }

    pub(crate) async fn get_organization_users_with_roles_page(
        &self,
        org: Uuid,
    ) -> Result<Page<CcUser>> {
        let path = format!("{}/{}", org_path(org), api::USER_ROLES);
        self.fetch_page(&path, &format!("fetch user roles of organization '{}'", org))
            .await
    }

    pub(crate) async fn associate_user_with_organization(&self, org: Uuid, user: Uuid) -> Result<()> {
        self.associate_user_with_organization_role(org, user, Role::Users)
            .await
    }

    pub(crate) async fn associate_manager_with_organization(
        &self,
        org: Uuid,
        user: Uuid,
    ) -> Result<()> {
        self.associate_user_with_organization_role(org, user, Role::Managers)
            .await
    }

    pub(crate) async fn associate_user_with_organization_role(
        &self,
        org: Uuid,
        user: Uuid,
        role: Role,
    ) -> Result<()> {
        let segment = role.scoped_segment(Scope::Organization)?;
        let path = format!("{}/{}/{}", org_path(org), segment, user);
        self.send_empty(
            Method::PUT,
            &path,
            &format!("associate user '{}' with {} of organization '{}'", user, segment, org),
        )
        .await
    }

    pub(crate) async fn remove_organization_role_from_user(
        &self,
        org: Uuid,
        user: Uuid,
        role: Role,
    ) -> Result<()> {
        let segment = role.scoped_segment(Scope::Organization)?;
        let path = format!("{}/{}/{}", org_path(org), segment, user);
        self.send_empty(
            Method::DELETE,
            &path,
            &format!("remove user '{}' from {} of organization '{}'", user, segment, org),
        )
        .await
    }

    pub(crate) async fn get_spaces_for_organization_page(&self, org: Uuid) -> Result<Page<Space>> {
        let path = format!("{}/{}?inline-relations-depth=1", org_path(org), api::SPACES);
        self.fetch_page(&path, &format!("fetch spaces of organization '{}'", org))
            .await
    }

    pub(crate) async fn get_memory_usage(&self, org: Uuid) -> Result<MemoryUsage> {
        let path = format!("{}/memory_usage", org_path(org));
        self.get_json(&path, &format!("fetch memory usage of organization '{}'", org))
            .await
    }

    pub(crate) async fn get_organization_summary(&self, org: Uuid) -> Result<OrgSummary> {
        let path = format!("{}/summary", org_path(org));
        self.get_json(&path, &format!("fetch summary of organization '{}'", org))
            .await
    }

    pub(crate) async fn get_organization_services_page(
        &self,
        org: Uuid,
    ) -> Result<Page<ExtendedService>> {
        let path = format!("{}/{}", org_path(org), api::SERVICES);
        self.fetch_page(&path, &format!("fetch services of organization '{}'", org))
            .await
    }
}
