//! User API operations

use reqwest::Method;
use uuid::Uuid;

use crate::cc::organizations::Org;
use crate::cc::pagination::Page;
use crate::cc::query::{filter_param, with_query, FilterQuery};
use crate::cc::roles::Role;
use crate::cc::spaces::Space;
use crate::cc::CcClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CcUser, NewUser};

fn user_path(user: Uuid) -> String {
    format!("{}/{}/{}", api::V2, api::USERS, user)
}

impl CcClient {
    pub(crate) async fn create_user(&self, user: Uuid) -> Result<()> {
        let path = format!("{}/{}", api::V2, api::USERS);
        self.send_body(
            Method::POST,
            &path,
            &NewUser { guid: user },
            &format!("create user '{}'", user),
        )
        .await
    }

    pub(crate) async fn delete_user(&self, user: Uuid) -> Result<()> {
        let path = format!("{}?async=false", user_path(user));
        self.send_empty(Method::DELETE, &path, &format!("delete user '{}'", user))
            .await
    }

    pub(crate) async fn get_users_page(&self) -> Result<Page<CcUser>> {
        let path = format!("{}/{}", api::V2, api::USERS);
        self.fetch_page(&path, "fetch users").await
    }

    pub(crate) async fn get_user_organizations_page(&self, user: Uuid) -> Result<Page<Org>> {
        self.user_orgs_page(user, "organizations").await
    }

    pub(crate) async fn get_managed_organizations_page(&self, user: Uuid) -> Result<Page<Org>> {
        self.user_orgs_page(user, "managed_organizations").await
    }

    pub(crate) async fn get_audited_organizations_page(&self, user: Uuid) -> Result<Page<Org>> {
        self.user_orgs_page(user, "audited_organizations").await
    }

    pub(crate) async fn get_billing_managed_organizations_page(
        &self,
        user: Uuid,
    ) -> Result<Page<Org>> {
        self.user_orgs_page(user, "billing_managed_organizations")
            .await
    }

    async fn user_orgs_page(&self, user: Uuid, segment: &str) -> Result<Page<Org>> {
        let path = format!("{}/{}", user_path(user), segment);
        self.fetch_page(&path, &format!("fetch {} of user '{}'", segment, user))
            .await
    }

    /// Spaces in which the user holds `role`
    pub(crate) async fn get_user_spaces_page(
        &self,
        user: Uuid,
        role: Role,
        filter: Option<&FilterQuery>,
    ) -> Result<Page<Space>> {
        let segment = role.user_spaces_segment()?;
        let path = with_query(
            &format!("{}/{}", user_path(user), segment),
            &filter_param(filter),
        );
        self.fetch_page(&path, &format!("fetch {} of user '{}'", segment, user))
            .await
    }
}
