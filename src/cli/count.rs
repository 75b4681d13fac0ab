//! Count command resource definitions

use clap::ValueEnum;

/// Resource types for the 'count' command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountResource {
    /// Organizations
    Orgs,
    /// Spaces
    Spaces,
    /// Users
    Users,
    /// Buildpacks
    Buildpacks,
    /// Marketplace services
    Services,
    /// Service instances
    ServiceInstances,
    /// Applications
    Apps,
}

impl std::fmt::Display for CountResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountResource::Orgs => write!(f, "orgs"),
            CountResource::Spaces => write!(f, "spaces"),
            CountResource::Users => write!(f, "users"),
            CountResource::Buildpacks => write!(f, "buildpacks"),
            CountResource::Services => write!(f, "services"),
            CountResource::ServiceInstances => write!(f, "service-instances"),
            CountResource::Apps => write!(f, "apps"),
        }
    }
}
