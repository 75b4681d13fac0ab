//! CLI argument parsing

mod common;
mod count;
mod get;
mod users;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use count::CountResource;
pub use get::{GetResource, ListArgs};
pub use users::{PermissionsArgs, RolesArgs};

/// Cloud Foundry Cloud Controller CLI
#[derive(Parser, Debug)]
#[command(name = "cfctl")]
#[command(version)]
#[command(about = "Explore a Cloud Foundry installation through the Cloud Controller v2 API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Cloud Controller API endpoint (overrides CF_API and the cf config file)
    #[arg(short = 'a', long, global = true)]
    pub api: Option<String>,

    /// API token (overrides env vars and the cf config file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Omit headers and totals from table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Print the number of resources (a single page request)
    Count {
        #[arg(value_enum)]
        resource: CountResource,
    },

    /// Show a user's manager, auditor and billing manager flags per organization
    Permissions(PermissionsArgs),

    /// List users of an organization or space with their roles
    Roles(RolesArgs),
}
