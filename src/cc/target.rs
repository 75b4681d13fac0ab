//! API endpoint resolution from multiple sources

use log::debug;
use std::path::PathBuf;

use crate::cc::credentials::CfConfig;
use crate::config::target;
use crate::error::{CcError, Result};

/// API endpoint resolution with fallback logic
pub struct ApiResolver {
    config_path: Option<PathBuf>,
}

impl Default for ApiResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiResolver {
    pub fn new() -> Self {
        Self {
            config_path: CfConfig::default_path(),
        }
    }

    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Resolve the API endpoint:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (CF_API)
    /// 3. cf CLI config file (`Target`)
    pub fn resolve(&self, cli_api: Option<&str>) -> Result<String> {
        if let Some(api) = cli_api {
            debug!("Using API endpoint from CLI argument: {}", api);
            return Ok(api.to_string());
        }

        if let Ok(api) = std::env::var(target::ENV_VAR) {
            if !api.is_empty() {
                debug!(
                    "Using API endpoint from {} environment variable: {}",
                    target::ENV_VAR,
                    api
                );
                return Ok(api);
            }
        }

        debug!("No API endpoint in CLI or {}, trying cf config file", target::ENV_VAR);
        self.read_from_config_file()
    }

    fn read_from_config_file(&self) -> Result<String> {
        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| CcError::ApiNotFound(self.api_not_found_message()))?;

        let api = CfConfig::load_from(path)?
            .and_then(|config| config.target)
            .filter(|api| !api.is_empty())
            .ok_or_else(|| CcError::ApiNotFound(self.api_not_found_message()))?;

        debug!("Using API endpoint from cf config file {}: {}", path.display(), api);
        Ok(api)
    }

    fn api_not_found_message(&self) -> String {
        let file_info = self
            .config_path
            .as_ref()
            .map(|p| format!(" or in cf config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API endpoint found. Please provide one using one of:\n\
             \n\
             1. CLI argument:      cfctl --api <URL>\n\
             2. Environment var:   export {}=<URL>\n\
             3. cf CLI target:     cf api <URL>\n\
             \n\
             Checked: env var [{}]{}",
            target::ENV_VAR,
            target::ENV_VAR,
            file_info
        )
    }
}
