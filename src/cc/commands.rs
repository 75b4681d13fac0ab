//! Command handlers for the CLI

use futures::future;
use futures::{StreamExt, TryStreamExt};
use log::{debug, info};

use crate::cc::pagination::ItemStream;
use crate::cc::traits::CcResource;
use crate::cc::CloudController;
use crate::cli::{CountResource, GetResource, ListArgs, PermissionsArgs, RolesArgs};
use crate::error::{CcError, Result};
use crate::output::{
    print_rows, BuildpackRow, OrgRow, PermissionRow, QuotaRow, RoleRow, ServiceInstanceRow,
    ServiceKeyRow, ServiceRow, SpaceRow, TableRow, UserRow,
};

/// Inline depth used when listing service instances, so plan names come along
const SERVICE_INSTANCE_DEPTH: u32 = 1;

/// Drain a resource stream into rows, applying the name filter and limit
///
/// The limit stops the stream, so pages past it are never requested.
async fn collect_rows<'a, T, R>(stream: ItemStream<'a, T>, args: &ListArgs) -> Result<Vec<R>>
where
    T: CcResource + Send + 'a,
    R: for<'r> From<&'r T>,
{
    let filter = args.filter.clone();
    let filtered = stream.try_filter(move |item| {
        future::ready(filter.as_deref().is_none_or(|f| item.name_contains(f)))
    });

    let items: Vec<T> = match args.limit {
        Some(limit) => filtered.take(limit).try_collect().await?,
        None => filtered.try_collect().await?,
    };

    if let Some(filter) = &args.filter {
        debug!("{} items matching '{}'", items.len(), filter);
    }

    Ok(items.iter().map(R::from).collect())
}

async fn print_list<'a, T, R>(stream: ItemStream<'a, T>, args: &ListArgs, no_header: bool) -> Result<()>
where
    T: CcResource + Send + 'a,
    R: TableRow + for<'r> From<&'r T>,
{
    let rows: Vec<R> = collect_rows(stream, args).await?;
    info!("Fetched {} {}", rows.len(), R::KIND);
    print_rows(&rows, args.output, no_header);
    Ok(())
}

/// Run the 'get' command
pub async fn run_get_command(
    cc: &CloudController,
    resource: &GetResource,
    no_header: bool,
) -> Result<()> {
    let args = resource.args();

    match resource {
        GetResource::Orgs(_) => {
            debug!("Fetching organizations");
            print_list::<_, OrgRow>(cc.get_orgs().await?, args, no_header).await
        }
        GetResource::Spaces(_) => {
            debug!("Fetching spaces");
            print_list::<_, SpaceRow>(cc.get_spaces().await?, args, no_header).await
        }
        GetResource::Users(_) => {
            debug!("Fetching users");
            print_list::<_, UserRow>(cc.get_users().await?, args, no_header).await
        }
        GetResource::Buildpacks(_) => {
            debug!("Fetching buildpacks");
            print_list::<_, BuildpackRow>(cc.get_buildpacks().await?, args, no_header).await
        }
        GetResource::Quotas(_) => {
            debug!("Fetching quota definitions");
            print_list::<_, QuotaRow>(cc.get_quotas().await?, args, no_header).await
        }
        GetResource::Services(_) => {
            debug!("Fetching services");
            print_list::<_, ServiceRow>(cc.get_extended_services(None).await?, args, no_header)
                .await
        }
        GetResource::ServiceInstances(_) => {
            debug!("Fetching service instances");
            let stream = cc
                .get_extended_service_instances(None, Some(SERVICE_INSTANCE_DEPTH))
                .await?;
            print_list::<_, ServiceInstanceRow>(stream, args, no_header).await
        }
        GetResource::ServiceKeys(_) => {
            debug!("Fetching service keys");
            print_list::<_, ServiceKeyRow>(cc.get_service_keys().await?, args, no_header).await
        }
    }
}

/// Run the 'count' command
pub async fn run_count_command(cc: &CloudController, resource: CountResource) -> Result<()> {
    debug!("Counting {}", resource);

    let count = match resource {
        CountResource::Orgs => cc.get_orgs_count().await?,
        CountResource::Spaces => cc.get_spaces_count().await?,
        CountResource::Users => cc.get_users_count().await?,
        CountResource::Buildpacks => cc.get_buildpacks_count().await?,
        CountResource::Services => cc.get_services_count().await?,
        CountResource::ServiceInstances => cc.get_service_instances_count().await?,
        CountResource::Apps => cc.get_applications_count().await?,
    };

    println!("{}", count);
    Ok(())
}

/// Run the 'permissions' command
pub async fn run_permissions_command(
    cc: &CloudController,
    args: &PermissionsArgs,
    no_header: bool,
) -> Result<()> {
    debug!(
        "Fetching permissions of user '{}' (org filter: {:?})",
        args.user, args.orgs
    );

    let permissions = cc.get_user_permissions(args.user, &args.orgs).await?;
    let rows: Vec<PermissionRow> = permissions.iter().map(PermissionRow::from).collect();
    print_rows(&rows, args.output, no_header);
    Ok(())
}

/// Run the 'roles' command
pub async fn run_roles_command(
    cc: &CloudController,
    args: &RolesArgs,
    no_header: bool,
) -> Result<()> {
    let users = match (args.org, args.space) {
        (Some(org), _) => {
            debug!("Fetching users with roles of organization '{}'", org);
            cc.get_org_users_with_roles(org).await?
        }
        (None, Some(space)) => {
            debug!("Fetching users with roles of space '{}'", space);
            cc.get_space_users_with_roles(space).await?
        }
        (None, None) => {
            return Err(CcError::Config(
                "Either --org or --space is required".to_string(),
            ))
        }
    };

    let users: Vec<_> = users.try_collect().await?;
    let rows: Vec<RoleRow> = users.iter().map(RoleRow::from).collect();
    print_rows(&rows, args.output, no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cc::{CcClient, Org};
    use crate::cli::OutputFormat;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn org_json(guid: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "metadata": {"guid": guid},
            "entity": {"name": name}
        })
    }

    fn list_args(filter: Option<&str>, limit: Option<usize>) -> ListArgs {
        ListArgs {
            filter: filter.map(|f| f.to_string()),
            limit,
            output: OutputFormat::Json,
        }
    }

    async fn two_page_server() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/organizations"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 3,
                "next_url": null,
                "resources": [org_json("c0000000-0000-4000-8000-000000000003", "prod-eu")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 3,
                "next_url": "/v2/organizations?page=2",
                "resources": [
                    org_json("a0000000-0000-4000-8000-000000000001", "prod-us"),
                    org_json("b0000000-0000-4000-8000-000000000002", "staging")
                ]
            })))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test]
    async fn test_collect_rows_filters_across_pages() {
        let server = two_page_server().await;
        let cc = CloudController::new(CcClient::test_client(&server.uri()));

        let rows: Vec<OrgRow> = collect_rows(cc.get_orgs().await.unwrap(), &list_args(Some("PROD"), None))
            .await
            .unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["prod-us", "prod-eu"]);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_collect_rows_limit_skips_later_pages() {
        let server = two_page_server().await;
        let cc = CloudController::new(CcClient::test_client(&server.uri()));

        let rows: Vec<OrgRow> = collect_rows(cc.get_orgs().await.unwrap(), &list_args(None, Some(2)))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_collect_rows_propagates_page_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/organizations"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_results": 2,
                "next_url": "/v2/organizations?page=2",
                "resources": [org_json("a0000000-0000-4000-8000-000000000001", "alpha")]
            })))
            .mount(&server)
            .await;

        let cc = CloudController::new(CcClient::test_client(&server.uri()));
        let result: Result<Vec<OrgRow>> =
            collect_rows::<Org, OrgRow>(cc.get_orgs().await.unwrap(), &list_args(None, None)).await;

        assert_eq!(result.unwrap_err().status(), Some(503));
    }
}
