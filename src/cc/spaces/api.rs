//! Space API operations

use reqwest::Method;
use uuid::Uuid;

use crate::cc::pagination::Page;
use crate::cc::roles::{Role, Scope};
use crate::cc::services::ExtendedService;
use crate::cc::users::CcUser;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{NewSpace, Space, SpaceSummary};

fn space_path(space: Uuid) -> String {
    format!("{}/{}/{}", api::V2, api::SPACES, space)
}

impl CcClient {
    pub(crate) async fn create_space(&self, org: Uuid, name: &str) -> Result<Space> {
        let path = format!("{}/{}", api::V2, api::SPACES);
        let request = NewSpace {
            organization_guid: org,
            name,
        };
        self.send_json(
            Method::POST,
            &path,
            &request,
            &format!("create space '{}' in organization '{}'", name, org),
        )
        .await
    }

    pub(crate) async fn remove_space(&self, space: Uuid) -> Result<()> {
        let path = format!("{}?async=true&recursive=true", space_path(space));
        self.send_empty(Method::DELETE, &path, &format!("delete space '{}'", space))
            .await
    }

    pub(crate) async fn get_space(&self, space: Uuid) -> Result<Space> {
        self.get_json(&space_path(space), &format!("fetch space '{}'", space))
            .await
    }

    pub(crate) async fn get_spaces_page(&self) -> Result<Page<Space>> {
        let path = format!("{}/{}", api::V2, api::SPACES);
        self.fetch_page(&path, "fetch spaces").await
    }

    pub(crate) async fn associate_developer_with_space(&self, space: Uuid, user: Uuid) -> Result<()> {
        self.associate_user_with_space_role(space, user, Role::Developers)
            .await
    }

    pub(crate) async fn associate_manager_with_space(&self, space: Uuid, user: Uuid) -> Result<()> {
        self.associate_user_with_space_role(space, user, Role::Managers)
            .await
    }

    pub(crate) async fn associate_user_with_space_role(
        &self,
        space: Uuid,
        user: Uuid,
        role: Role,
    ) -> Result<()> {
        let segment = role.scoped_segment(Scope::Space)?;
        let path = format!("{}/{}/{}", space_path(space), segment, user);
        self.send_empty(
            Method::PUT,
            &path,
            &format!("associate user '{}' with {} of space '{}'", user, segment, space),
        )
        .await
    }

    pub(crate) async fn remove_space_role_from_user(
        &self,
        space: Uuid,
        user: Uuid,
        role: Role,
    ) -> Result<()> {
        let segment = role.scoped_segment(Scope::Space)?;
        let path = format!("{}/{}/{}", space_path(space), segment, user);
        self.send_empty(
            Method::DELETE,
            &path,
            &format!("remove user '{}' from {} of space '{}'", user, segment, space),
        )
        .await
    }

    /// Members of a space holding `role`
    pub(crate) async fn get_space_users_page(&self, space: Uuid, role: Role) -> Result<Page<CcUser>> {
        let segment = role.scoped_segment(Scope::Space)?;
        let path = format!("{}/{}", space_path(space), segment);
        self.fetch_page(&path, &format!("fetch {} of space '{}'", segment, space))
            .await
    }

    pub(crate) async fn get_space_users_with_roles_page(&self, space: Uuid) -> Result<Page<CcUser>> {
        let path = format!("{}/{}", space_path(space), api::USER_ROLES);
        self.fetch_page(&path, &format!("fetch user roles of space '{}'", space))
            .await
    }

    pub(crate) async fn get_space_summary(&self, space: Uuid) -> Result<SpaceSummary> {
        let path = format!("{}/summary", space_path(space));
        self.get_json(&path, &format!("fetch summary of space '{}'", space))
            .await
    }

    pub(crate) async fn get_space_services_page(&self, space: Uuid) -> Result<Page<ExtendedService>> {
        let path = format!("{}/{}", space_path(space), api::SERVICES);
        self.fetch_page(&path, &format!("fetch services of space '{}'", space))
            .await
    }
}
