//! Token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{CcError, Result};

/// The parts of the cf CLI config file (`~/.cf/config.json`) we read
#[derive(Deserialize, Debug, Default)]
pub(crate) struct CfConfig {
    #[serde(rename = "AccessToken", default)]
    pub access_token: Option<String>,
    #[serde(rename = "Target", default)]
    pub target: Option<String>,
}

impl CfConfig {
    /// Location of the cf CLI config file, honouring `CF_HOME`
    pub(crate) fn default_path() -> Option<PathBuf> {
        match std::env::var(credentials::CF_HOME_ENV_VAR) {
            Ok(home) if !home.is_empty() => {
                Some(PathBuf::from(home).join(credentials::CONFIG_FILE_PATH))
            }
            _ => dirs::home_dir().map(|p| p.join(credentials::CONFIG_FILE_PATH)),
        }
    }

    /// Load the config file; a missing file yields `None`, other read errors fail
    pub(crate) fn load_from(path: &Path) -> Result<Option<CfConfig>> {
        debug!("Looking for cf config file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let config: CfConfig = serde_json::from_str(&content).map_err(|e| {
            CcError::Credentials(format!(
                "Could not parse cf config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(config))
    }
}

/// Strip the `bearer ` prefix the cf CLI stores in front of access tokens
fn strip_bearer(token: &str) -> &str {
    let trimmed = token.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    config_path: Option<PathBuf>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver reading the default cf CLI config file
    pub fn new() -> Self {
        Self {
            config_path: CfConfig::default_path(),
        }
    }

    /// Create a resolver reading the given config file
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (CF_TOKEN, CF_ACCESS_TOKEN - in order)
    /// 3. cf CLI config file (`AccessToken`)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(strip_bearer(token).to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(strip_bearer(&token).to_string());
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying cf config file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_config_file()
    }

    fn read_from_config_file(&self) -> Result<String> {
        let path = self
            .config_path
            .as_deref()
            .ok_or_else(|| CcError::TokenNotFound(self.token_not_found_message()))?;

        let token = CfConfig::load_from(path)?
            .and_then(|config| config.access_token)
            .map(|token| strip_bearer(&token).to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| CcError::TokenNotFound(self.token_not_found_message()))?;

        debug!("Using token from cf config file {}", path.display());
        Ok(token)
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let file_info = self
            .config_path
            .as_ref()
            .map(|p| format!(" or in cf config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      cfctl --token <TOKEN>\n\
             2. Environment var:   export CF_TOKEN=<TOKEN>  (also: CF_ACCESS_TOKEN)\n\
             3. cf CLI login:      cf login\n\
             \n\
             Checked: env vars [{}]{}",
            env_vars, file_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolver_cli_token_takes_precedence() {
        let resolver = TokenResolver::with_config_path("/nonexistent/config.json");
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("bearer abc.def"), "abc.def");
        assert_eq!(strip_bearer("Bearer abc.def"), "abc.def");
        assert_eq!(strip_bearer("abc.def"), "abc.def");
        assert_eq!(strip_bearer("bear"), "bear");
    }

    #[test]
    fn test_token_from_config_file() {
        let file = config_file(
            r#"{"ConfigVersion": 3, "Target": "https://api.example.com", "AccessToken": "bearer eyJhbGciOi"}"#,
        );
        let resolver = TokenResolver::with_config_path(file.path());
        assert_eq!(resolver.read_from_config_file().unwrap(), "eyJhbGciOi");
    }

    #[test]
    fn test_empty_token_in_config_file_is_not_found() {
        let file = config_file(r#"{"AccessToken": ""}"#);
        let resolver = TokenResolver::with_config_path(file.path());
        let err = resolver.read_from_config_file().unwrap_err();
        assert!(matches!(err, CcError::TokenNotFound(_)));
    }

    #[test]
    fn test_missing_config_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = TokenResolver::with_config_path(dir.path().join("config.json"));
        let err = resolver.read_from_config_file().unwrap_err();
        assert!(matches!(err, CcError::TokenNotFound(_)));
        assert!(err.to_string().contains("cfctl --token"));
    }

    #[test]
    fn test_malformed_config_file_is_credentials_error() {
        let file = config_file("not json");
        let resolver = TokenResolver::with_config_path(file.path());
        let err = resolver.read_from_config_file().unwrap_err();
        assert!(matches!(err, CcError::Credentials(_)));
    }

    #[test]
    fn test_unreadable_config_file_is_credentials_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CfConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, CcError::Credentials(_)));
        assert!(err.to_string().contains("Could not read cf config file"));

        let resolver = TokenResolver::with_config_path(dir.path());
        assert!(matches!(
            resolver.read_from_config_file(),
            Err(CcError::Credentials(_))
        ));
    }
}
