//! cfctl - Explore a Cloud Foundry installation
//!
//! A typed client for the Cloud Foundry Cloud Controller v2 API, plus a small
//! CLI on top of it.
//!
//! # Features
//!
//! - One facade ([`CloudController`]) over organizations, spaces, apps,
//!   services, service bindings, users, buildpacks and quotas
//! - Lazy pagination: collections are streams that fetch the next page only
//!   when the current one is drained
//! - Role mapping between domain roles and the API's per-scope role tokens
//! - Multiple output formats (table, CSV, JSON)
//!
//! # Example
//!
//! ```bash
//! # List all organizations
//! cfctl get orgs
//!
//! # First 20 service instances with "db" in the name, as JSON
//! cfctl get si -f db -n 20 -o json
//!
//! # Number of apps (one request)
//! cfctl count apps
//!
//! # Manager/auditor/billing manager flags of a user
//! cfctl permissions --user 7c1f5c4e-2b1a-4bde-9d55-0f5a3a9e3c42
//! ```

pub mod cc;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cc::{
    concat_pages, run_count_command, run_get_command, run_permissions_command,
    run_roles_command, ApiResolver, CcClient, CcResource, CloudController, ContinuationToken,
    FilterQuery, ItemStream, Page, Role, Scope, TokenResolver,
};
pub use cli::{Cli, Command, CountResource, GetResource, ListArgs, OutputFormat};
pub use error::{CcError, Result};
