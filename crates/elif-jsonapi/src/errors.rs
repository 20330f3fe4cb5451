//! Error types for relationship route generation
//!
//! Expanding a relationship into routes never fails. These errors come from
//! the layers around it: loading declarations from configuration, handing
//! routes to a host router, and installing the logging subscriber.

use thiserror::Error;

/// Result type for routing operations
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Routing errors
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid relationship options: {message}")]
    InvalidOptions { message: String },

    #[error("Unknown relationship action: {name}")]
    UnknownAction { name: String },

    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },

    #[error("Route name already registered: {name}")]
    DuplicateRouteName { name: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Logging initialization failed: {message}")]
    Logging { message: String },
}

impl RoutingError {
    /// Create an invalid options error
    pub fn invalid_options<T: Into<String>>(message: T) -> Self {
        RoutingError::InvalidOptions {
            message: message.into(),
        }
    }

    /// Create an unknown action error
    pub fn unknown_action<T: Into<String>>(name: T) -> Self {
        RoutingError::UnknownAction { name: name.into() }
    }

    /// Create a duplicate route name error
    pub fn duplicate_route_name<T: Into<String>>(name: T) -> Self {
        RoutingError::DuplicateRouteName { name: name.into() }
    }

    /// Create a logging error
    pub fn logging<T: Into<String>>(message: T) -> Self {
        RoutingError::Logging {
            message: message.into(),
        }
    }

    /// Whether the error was caused by caller-supplied configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RoutingError::Yaml(_)
                | RoutingError::Json(_)
                | RoutingError::InvalidOptions { .. }
                | RoutingError::UnsupportedFormat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RoutingError::invalid_options("relationship_uri must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid relationship options: relationship_uri must not be empty"
        );

        let err = RoutingError::duplicate_route_name("posts.comments.read");
        assert_eq!(
            err.to_string(),
            "Route name already registered: posts.comments.read"
        );
    }

    #[test]
    fn test_config_error_classification() {
        assert!(RoutingError::invalid_options("bad").is_config_error());
        assert!(!RoutingError::duplicate_route_name("comments").is_config_error());
        assert!(!RoutingError::logging("already set").is_config_error());
    }
}
