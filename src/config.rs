/// Configuration constants for the Cloud Controller v2 API
pub mod api {
    use std::time::Duration;

    /// Path prefix for Cloud Controller API v2
    pub const V2: &str = "/v2";

    pub const APPS: &str = "apps";
    pub const BUILDPACKS: &str = "buildpacks";
    pub const ORGANIZATIONS: &str = "organizations";
    pub const QUOTA_DEFINITIONS: &str = "quota_definitions";
    pub const SERVICES: &str = "services";
    pub const SERVICE_BINDINGS: &str = "service_bindings";
    pub const SERVICE_INSTANCES: &str = "service_instances";
    pub const SERVICE_KEYS: &str = "service_keys";
    pub const SERVICE_PLANS: &str = "service_plans";
    pub const SERVICE_PLAN_VISIBILITIES: &str = "service_plan_visibilities";
    pub const SPACES: &str = "spaces";
    pub const USERS: &str = "users";
    pub const USER_ROLES: &str = "user_roles";

    /// Connect timeout applied to every request
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Read timeout applied to every request
    pub const READ_TIMEOUT: Duration = Duration::from_secs(5 * 60);
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["CF_TOKEN", "CF_ACCESS_TOKEN"];

    /// Overrides the directory holding `.cf/config.json` (same as the cf CLI)
    pub const CF_HOME_ENV_VAR: &str = "CF_HOME";

    /// Path to the cf CLI config file (relative to HOME or CF_HOME)
    pub const CONFIG_FILE_PATH: &str = ".cf/config.json";
}

/// Configuration constants for API endpoint resolution
pub mod target {
    /// Environment variable for the API endpoint
    pub const ENV_VAR: &str = "CF_API";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
