use std::fmt;

use crate::cc::roles::{Role, Scope};
use crate::cc::CcErrorBody;

/// Custom error type for Cloud Controller operations
#[derive(Debug)]
pub enum CcError {
    /// HTTP request failed (connection, timeout, TLS)
    Http(reqwest::Error),
    /// API returned a non-success response
    Api {
        status: u16,
        body: Option<CcErrorBody>,
        message: String,
    },
    /// Role is not valid in the requested scope
    InvalidRole { role: Role, scope: Scope },
    /// Wire role token has no known mapping
    UnknownRoleToken(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// API endpoint not found in any source
    ApiNotFound(String),
    /// Failed to read or parse the cf CLI config file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl CcError {
    /// HTTP status of a remote rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            CcError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for CcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CcError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CcError::Api {
                status, message, ..
            } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CcError::InvalidRole { role, scope } => {
                write!(f, "Role '{}' is not valid in {} scope", role, scope)
            }
            CcError::UnknownRoleToken(token) => {
                write!(f, "Role {} is not a known role type", token)
            }
            CcError::TokenNotFound(msg) => write!(f, "{}", msg),
            CcError::ApiNotFound(msg) => write!(f, "{}", msg),
            CcError::Credentials(msg) => write!(f, "{}", msg),
            CcError::Json(msg) => write!(f, "JSON error: {}", msg),
            CcError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CcError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CcError {
    fn from(err: reqwest::Error) -> Self {
        CcError::Http(err)
    }
}

impl From<serde_json::Error> for CcError {
    fn from(err: serde_json::Error) -> Self {
        CcError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CcError {
    fn from(err: std::io::Error) -> Self {
        CcError::Credentials(format!("Could not read cf config file: {}", err))
    }
}

/// Result type alias for Cloud Controller operations
pub type Result<T> = std::result::Result<T, CcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CcError::Api {
            status: 404,
            body: None,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_invalid_role_display() {
        let err = CcError::InvalidRole {
            role: Role::BillingManagers,
            scope: Scope::Space,
        };
        assert_eq!(
            err.to_string(),
            "Role 'billing_managers' is not valid in space scope"
        );
        assert!(err.status().is_none());
    }

    #[test]
    fn test_unknown_role_token_display() {
        let err = CcError::UnknownRoleToken("space_owner".to_string());
        assert!(err.to_string().contains("space_owner"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CcError>();
    }

    #[test]
    fn test_token_not_found_display() {
        let err = CcError::TokenNotFound("no token for api".to_string());
        assert!(err.to_string().contains("no token for api"));
    }

    #[test]
    fn test_json_error_display() {
        let err = CcError::Json("Invalid JSON".to_string());
        assert!(err.to_string().contains("JSON error"));
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CcError = json_err.into();
        match err {
            CcError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected CcError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CcError = io_err.into();
        match err {
            CcError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected CcError::Credentials"),
        }
    }

    #[test]
    fn test_error_source_api() {
        use std::error::Error;
        let err = CcError::Api {
            status: 500,
            body: None,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
