//! Domain operations over the Cloud Controller resource endpoints
//!
//! [`CloudController`] composes calls on one [`CcClient`]. Operations that
//! return collections fetch the first page eagerly and hand back an
//! [`ItemStream`] that fetches further pages as it is drained.

use futures::future;
use futures::{StreamExt, TryStreamExt};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use uuid::Uuid;

use crate::cc::applications::{AppEnv, AppStatus, AppSummary};
use crate::cc::buildpacks::Buildpack;
use crate::cc::models::ARTIFICIAL_USER_GUID;
use crate::cc::organizations::{MemoryUsage, Org, OrgPermission, OrgSummary};
use crate::cc::pagination::{concat_pages, ItemStream, Page};
use crate::cc::query::FilterQuery;
use crate::cc::quotas::Quota;
use crate::cc::roles::{Role, Scope};
use crate::cc::service_bindings::{NewServiceBinding, ServiceBinding, ServiceBindingList};
use crate::cc::services::{
    ExtendedService, ExtendedServiceInstance, ExtendedServicePlan, NewServiceInstance,
    NewServiceKey, PlanVisibility, ServiceKey,
};
use crate::cc::spaces::{Space, SpaceSummary};
use crate::cc::users::{CcUser, User};
use crate::cc::CcClient;
use crate::error::Result;

/// Typed facade over the Cloud Controller v2 API
#[derive(Debug, Clone)]
pub struct CloudController {
    client: CcClient,
}

impl CloudController {
    pub fn new(client: CcClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CcClient {
        &self.client
    }

    /// Stream `first` and every page after it
    fn paginate<'a, T>(&'a self, first: Page<T>) -> ItemStream<'a, T>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let client = &self.client;
        concat_pages(first, move |token| client.fetch_next_page(token))
    }

    /// Map a users-with-roles stream onto [`User`], failing items with unknown role tokens
    fn with_roles<'a>(
        users: ItemStream<'a, CcUser>,
        scope: Scope,
    ) -> ItemStream<'a, User> {
        users
            .and_then(move |user| {
                let tokens = match scope {
                    Scope::Organization => &user.entity.organization_roles,
                    Scope::Space => &user.entity.space_roles,
                };
                future::ready(User::from_tokens(&user, tokens, scope))
            })
            .boxed()
    }

    // === Applications ===

    pub async fn get_app_summary(&self, app: Uuid) -> Result<AppSummary> {
        self.client.get_app_summary(app).await
    }

    pub async fn restage_app(&self, app: Uuid) -> Result<()> {
        info!("Restaging app '{}'", app);
        self.client.restage_app(app).await
    }

    /// Bindings of an app; answered in a single response, not paginated
    pub async fn get_app_bindings(
        &self,
        app: Uuid,
        filter: Option<&FilterQuery>,
    ) -> Result<ServiceBindingList> {
        self.client.get_app_bindings(app, filter).await
    }

    pub async fn delete_app(&self, app: Uuid) -> Result<()> {
        info!("Deleting app '{}'", app);
        self.client.delete_app(app).await
    }

    pub async fn switch_app(&self, app: Uuid, status: AppStatus) -> Result<()> {
        info!("Switching app '{}' to {}", app, status);
        self.client.switch_app(app, status).await
    }

    pub async fn get_app_env(&self, app: Uuid) -> Result<AppEnv> {
        self.client.get_app_env(app).await
    }

    pub async fn get_applications_count(&self) -> Result<u32> {
        Ok(self.client.get_applications_page().await?.total_results)
    }

    // === Organizations ===

    /// Create an organization and return its guid
    pub async fn create_organization(&self, name: &str) -> Result<Uuid> {
        info!("Creating organization '{}'", name);
        Ok(self.client.create_organization(name).await?.guid())
    }

    pub async fn rename_org(&self, org: Uuid, name: &str) -> Result<()> {
        info!("Renaming organization '{}' to '{}'", org, name);
        self.client.update_organization(org, name).await
    }

    /// Delete an organization with everything in it (asynchronously on the server)
    pub async fn delete_org(&self, org: Uuid) -> Result<()> {
        info!("Deleting organization '{}'", org);
        self.client.delete_organization(org).await
    }

    pub async fn get_org(&self, org: Uuid) -> Result<Org> {
        self.client.get_organization(org).await
    }

    pub async fn get_orgs(&self) -> Result<ItemStream<'_, Org>> {
        let first = self.client.get_orgs_page().await?;
        Ok(self.paginate(first))
    }

    pub async fn get_orgs_count(&self) -> Result<u32> {
        Ok(self.client.get_orgs_page().await?.total_results)
    }

    pub async fn get_spaces_for_org(&self, org: Uuid) -> Result<ItemStream<'_, Space>> {
        let first = self.client.get_spaces_for_organization_page(org).await?;
        Ok(self.paginate(first))
    }

    pub async fn get_organization_services(
        &self,
        org: Uuid,
    ) -> Result<ItemStream<'_, ExtendedService>> {
        let first = self.client.get_organization_services_page(org).await?;
        Ok(self.paginate(first))
    }

    pub async fn get_memory_usage(&self, org: Uuid) -> Result<MemoryUsage> {
        self.client.get_memory_usage(org).await
    }

    pub async fn get_org_summary(&self, org: Uuid) -> Result<OrgSummary> {
        self.client.get_organization_summary(org).await
    }

    /// All members of `org` holding `role`
    pub async fn get_org_users(&self, org: Uuid, role: Role) -> Result<Vec<User>> {
        role.wire_token(Scope::Organization)?;
        let first = self.client.get_organization_users_page(org, role).await?;
        self.paginate(first)
            .map_ok(|user| User::with_role(&user, role))
            .try_collect()
            .await
    }

    pub async fn get_org_users_with_roles(&self, org: Uuid) -> Result<ItemStream<'_, User>> {
        let first = self
            .client
            .get_organization_users_with_roles_page(org)
            .await?;
        Ok(Self::with_roles(self.paginate(first), Scope::Organization))
    }

    /// Make `user` a member and a manager of `org`
    ///
    /// Not atomic: if the second call fails, the membership stays and the
    /// second call's error is returned.
    pub async fn assign_user_to_organization(&self, user: Uuid, org: Uuid) -> Result<()> {
        info!("Assigning user '{}' to organization '{}'", user, org);
        self.client.associate_user_with_organization(org, user).await?;
        self.client
            .associate_manager_with_organization(org, user)
            .await
    }

    pub async fn assign_org_role(&self, user: Uuid, org: Uuid, role: Role) -> Result<()> {
        role.wire_token(Scope::Organization)?;
        info!("Granting {} of organization '{}' to user '{}'", role, org, user);
        self.client
            .associate_user_with_organization_role(org, user, role)
            .await
    }

    pub async fn revoke_org_role(&self, user: Uuid, org: Uuid, role: Role) -> Result<()> {
        role.wire_token(Scope::Organization)?;
        info!("Revoking {} of organization '{}' from user '{}'", role, org, user);
        self.client
            .remove_organization_role_from_user(org, user, role)
            .await
    }

    // === Spaces ===

    /// Create a space in `org` and return its guid
    pub async fn create_space(&self, org: Uuid, name: &str) -> Result<Uuid> {
        info!("Creating space '{}' in organization '{}'", name, org);
        Ok(self.client.create_space(org, name).await?.guid())
    }

    pub async fn delete_space(&self, space: Uuid) -> Result<()> {
        info!("Deleting space '{}'", space);
        self.client.remove_space(space).await
    }

    pub async fn get_space(&self, space: Uuid) -> Result<Space> {
        self.client.get_space(space).await
    }

    pub async fn get_spaces(&self) -> Result<ItemStream<'_, Space>> {
        let first = self.client.get_spaces_page().await?;
        Ok(self.paginate(first))
    }

    pub async fn get_spaces_count(&self) -> Result<u32> {
        Ok(self.client.get_spaces_page().await?.total_results)
    }

    pub async fn get_space_services(
        &self,
        space: Uuid,
    ) -> Result<ItemStream<'_, ExtendedService>> {
        let first = self.client.get_space_services_page(space).await?;
        Ok(self.paginate(first))
    }

    pub async fn get_space_summary(&self, space: Uuid) -> Result<SpaceSummary> {
        self.client.get_space_summary(space).await
    }

    /// All members of `space` holding `role`
    pub async fn get_space_users(&self, space: Uuid, role: Role) -> Result<Vec<User>> {
        role.wire_token(Scope::Space)?;
        let first = self.client.get_space_users_page(space, role).await?;
        self.paginate(first)
            .map_ok(|user| User::with_role(&user, role))
            .try_collect()
            .await
    }

    pub async fn get_space_users_with_roles(
        &self,
        space: Uuid,
    ) -> Result<ItemStream<'_, User>> {
        let first = self.client.get_space_users_with_roles_page(space).await?;
        Ok(Self::with_roles(self.paginate(first), Scope::Space))
    }

    /// Make `user` a developer and a manager of `space`
    ///
    /// Not atomic: if the second call fails, the developer role stays and
    /// the second call's error is returned.
    pub async fn assign_user_to_space(&self, user: Uuid, space: Uuid) -> Result<()> {
        info!("Assigning user '{}' to space '{}'", user, space);
        self.client.associate_developer_with_space(space, user).await?;
        self.client.associate_manager_with_space(space, user).await
    }

    pub async fn assign_space_role(&self, user: Uuid, space: Uuid, role: Role) -> Result<()> {
        role.wire_token(Scope::Space)?;
        info!("Granting {} of space '{}' to user '{}'", role, space, user);
        self.client
            .associate_user_with_space_role(space, user, role)
            .await
    }

    pub async fn revoke_space_role(&self, user: Uuid, space: Uuid, role: Role) -> Result<()> {
        role.wire_token(Scope::Space)?;
        info!("Revoking {} of space '{}' from user '{}'", role, space, user);
        self.client
            .remove_space_role_from_user(space, user, role)
            .await
    }

    // === Services ===

    pub async fn get_extended_services(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<ItemStream<'_, ExtendedService>> {
        let first = self.client.get_services_page(filter).await?;
        Ok(self.paginate(first))
    }

    pub async fn get_service(&self, service: Uuid) -> Result<ExtendedService> {
        self.client.get_service(service).await
    }

    pub async fn get_services_count(&self) -> Result<u32> {
        Ok(self.client.get_services_page(None).await?.total_results)
    }

    pub async fn get_extended_service_instances(
        &self,
        filter: Option<&FilterQuery>,
        depth: Option<u32>,
    ) -> Result<ItemStream<'_, ExtendedServiceInstance>> {
        let first = self.client.get_service_instances_page(filter, depth).await?;
        Ok(self.paginate(first))
    }

    pub async fn get_service_instances_count(&self) -> Result<u32> {
        Ok(self
            .client
            .get_service_instances_page(None, None)
            .await?
            .total_results)
    }

    pub async fn create_service_instance(
        &self,
        instance: &NewServiceInstance,
    ) -> Result<ExtendedServiceInstance> {
        info!("Creating service instance '{}'", instance.name);
        self.client.create_service_instance(instance).await
    }

    pub async fn delete_service_instance(&self, instance: Uuid) -> Result<()> {
        info!("Deleting service instance '{}'", instance);
        self.client.delete_service_instance(instance).await
    }

    pub async fn get_extended_service_plans(
        &self,
        service: Uuid,
    ) -> Result<ItemStream<'_, ExtendedServicePlan>> {
        let first = self.client.get_service_plans_page(service).await?;
        Ok(self.paginate(first))
    }

    pub async fn set_service_plan_visibility(
        &self,
        plan: Uuid,
        org: Uuid,
    ) -> Result<PlanVisibility> {
        info!("Making service plan '{}' visible in organization '{}'", plan, org);
        self.client.set_service_plan_visibility(plan, org).await
    }

    pub async fn get_service_plan_visibility(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<ItemStream<'_, PlanVisibility>> {
        let first = self
            .client
            .get_service_plan_visibilities_page(filter)
            .await?;
        Ok(self.paginate(first))
    }

    pub async fn get_service_keys(&self) -> Result<ItemStream<'_, ServiceKey>> {
        let first = self.client.get_service_keys_page().await?;
        Ok(self.paginate(first))
    }

    pub async fn create_service_key(&self, key: &NewServiceKey) -> Result<ServiceKey> {
        info!("Creating service key '{}'", key.name);
        self.client.create_service_key(key).await
    }

    pub async fn delete_service_key(&self, key: Uuid) -> Result<()> {
        info!("Deleting service key '{}'", key);
        self.client.delete_service_key(key).await
    }

    // === Service bindings ===

    pub async fn create_service_binding(
        &self,
        binding: &NewServiceBinding,
    ) -> Result<ServiceBinding> {
        info!(
            "Binding service instance '{}' to app '{}'",
            binding.service_instance_guid, binding.app_guid
        );
        self.client.create_service_binding(binding).await
    }

    pub async fn delete_service_binding(&self, binding: Uuid) -> Result<()> {
        info!("Deleting service binding '{}'", binding);
        self.client.delete_service_binding(binding).await
    }

    /// Bindings matching `filter`; answered in a single response, not paginated
    pub async fn get_service_bindings(
        &self,
        filter: Option<&FilterQuery>,
    ) -> Result<ServiceBindingList> {
        self.client.get_service_bindings(filter).await
    }

    // === Users ===

    pub async fn create_user(&self, user: Uuid) -> Result<()> {
        info!("Creating user '{}'", user);
        self.client.create_user(user).await
    }

    pub async fn delete_user(&self, user: Uuid) -> Result<()> {
        info!("Deleting user '{}'", user);
        self.client.delete_user(user).await
    }

    /// All users, without system users whose guid is not a UUID
    pub async fn get_users(&self) -> Result<ItemStream<'_, CcUser>> {
        let first = self.client.get_users_page().await?;
        Ok(self
            .paginate(first)
            .try_filter(|user| future::ready(user.guid() != ARTIFICIAL_USER_GUID))
            .boxed())
    }

    pub async fn get_users_count(&self) -> Result<u32> {
        Ok(self.client.get_users_page().await?.total_results)
    }

    pub async fn get_user_orgs(&self, user: Uuid) -> Result<Vec<Org>> {
        let first = self.client.get_user_organizations_page(user).await?;
        self.paginate(first).try_collect().await
    }

    pub async fn get_managed_organizations(&self, user: Uuid) -> Result<Vec<Org>> {
        let first = self.client.get_managed_organizations_page(user).await?;
        self.paginate(first).try_collect().await
    }

    pub async fn get_audited_organizations(&self, user: Uuid) -> Result<Vec<Org>> {
        let first = self.client.get_audited_organizations_page(user).await?;
        self.paginate(first).try_collect().await
    }

    pub async fn get_billing_managed_organizations(&self, user: Uuid) -> Result<Vec<Org>> {
        let first = self
            .client
            .get_billing_managed_organizations_page(user)
            .await?;
        self.paginate(first).try_collect().await
    }

    /// Spaces where `user` holds `role` (managers, auditors or developers)
    pub async fn get_users_spaces(
        &self,
        user: Uuid,
        role: Role,
        filter: Option<&FilterQuery>,
    ) -> Result<Vec<Space>> {
        role.user_spaces_segment()?;
        let first = self.client.get_user_spaces_page(user, role, filter).await?;
        self.paginate(first).try_collect().await
    }

    /// Per-organization permissions of `user`
    ///
    /// An empty `org_filter` keeps every organization. Output follows the
    /// order of the user's organization list.
    pub async fn get_user_permissions(
        &self,
        user: Uuid,
        org_filter: &[Uuid],
    ) -> Result<Vec<OrgPermission>> {
        let mut orgs = self.get_user_orgs(user).await?;
        if !org_filter.is_empty() {
            orgs.retain(|org| org_filter.contains(&org.guid()));
        }

        let managed = guid_set(self.get_managed_organizations(user).await?);
        let audited = guid_set(self.get_audited_organizations(user).await?);
        let billing_managed = guid_set(self.get_billing_managed_organizations(user).await?);

        debug!(
            "User '{}': {} orgs, {} managed, {} audited, {} billing managed",
            user,
            orgs.len(),
            managed.len(),
            audited.len(),
            billing_managed.len()
        );

        Ok(orgs
            .into_iter()
            .map(|org| {
                let guid = org.guid();
                OrgPermission {
                    is_manager: managed.contains(&guid),
                    is_auditor: audited.contains(&guid),
                    is_billing_manager: billing_managed.contains(&guid),
                    organization: org,
                }
            })
            .collect())
    }

    // === Buildpacks & quotas ===

    pub async fn get_buildpacks(&self) -> Result<ItemStream<'_, Buildpack>> {
        let first = self.client.get_buildpacks_page().await?;
        Ok(self.paginate(first))
    }

    pub async fn get_buildpacks_count(&self) -> Result<u32> {
        Ok(self.client.get_buildpacks_page().await?.total_results)
    }

    pub async fn get_quotas(&self) -> Result<ItemStream<'_, Quota>> {
        let first = self.client.get_quotas_page().await?;
        Ok(self.paginate(first))
    }
}

fn guid_set(orgs: Vec<Org>) -> HashSet<Uuid> {
    orgs.iter().map(|org| org.guid()).collect()
}
