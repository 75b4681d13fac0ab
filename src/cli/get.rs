//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organizations
    #[command(visible_alias = "org", visible_alias = "organizations")]
    Orgs(ListArgs),

    /// Get spaces
    #[command(visible_alias = "space")]
    Spaces(ListArgs),

    /// Get users (system users are skipped)
    #[command(visible_alias = "user")]
    Users(ListArgs),

    /// Get buildpacks
    #[command(visible_alias = "buildpack", visible_alias = "bp")]
    Buildpacks(ListArgs),

    /// Get organization quota definitions
    #[command(visible_alias = "quota")]
    Quotas(ListArgs),

    /// Get services from the marketplace
    #[command(visible_alias = "service", visible_alias = "svc")]
    Services(ListArgs),

    /// Get service instances
    #[command(visible_alias = "service-instance", visible_alias = "si")]
    ServiceInstances(ListArgs),

    /// Get service keys
    #[command(visible_alias = "service-key", visible_alias = "sk")]
    ServiceKeys(ListArgs),
}

impl GetResource {
    pub fn args(&self) -> &ListArgs {
        match self {
            GetResource::Orgs(args)
            | GetResource::Spaces(args)
            | GetResource::Users(args)
            | GetResource::Buildpacks(args)
            | GetResource::Quotas(args)
            | GetResource::Services(args)
            | GetResource::ServiceInstances(args)
            | GetResource::ServiceKeys(args) => args,
        }
    }
}

/// Arguments shared by every 'get' subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Stop after this many items (only the pages needed are fetched)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
