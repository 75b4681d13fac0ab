//! Permission and role command arguments

use clap::{ArgGroup, Parser};
use uuid::Uuid;

use super::common::OutputFormat;

/// Arguments for 'permissions' command
#[derive(Parser, Debug)]
pub struct PermissionsArgs {
    /// User guid
    #[arg(short, long)]
    pub user: Uuid,

    /// Only report these organizations (repeatable)
    #[arg(long = "org")]
    pub orgs: Vec<Uuid>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'roles' command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["org", "space"])))]
pub struct RolesArgs {
    /// Organization guid
    #[arg(long)]
    pub org: Option<Uuid>,

    /// Space guid
    #[arg(long)]
    pub space: Option<Uuid>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
