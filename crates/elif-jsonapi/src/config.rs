//! Relationship route configuration
//!
//! Loads a resource's relationship table from YAML or JSON:
//!
//! ```yaml
//! resource_type: posts
//! controller: PostController
//! parameter: post
//! relationships:
//!   - field: author
//!   - field: comments
//!     to_many: true
//!     except: detachRelationship
//!     middleware: [auth]
//! ```

use crate::errors::{RoutingError, RoutingResult};
use crate::routing::relationship::default_parameter;
use crate::routing::{
    RelationshipOptions, RelationshipRegistrar, RouteCollection, RouteRegistrar,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One relationship field entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEntry {
    pub field: String,
    #[serde(default)]
    pub to_many: bool,
    #[serde(flatten)]
    pub options: RelationshipOptions,
}

/// Relationship table of one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipsConfig {
    pub resource_type: String,
    pub controller: String,
    /// Resource id path parameter, derived from the resource type when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default)]
    pub relationships: Vec<RelationshipEntry>,
}

impl RelationshipsConfig {
    pub fn from_yaml_str(source: &str) -> RoutingResult<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> RoutingResult<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> RoutingResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(RoutingError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        tracing::info!(
            path = %path.display(),
            resource_type = %config.resource_type,
            relationships = config.relationships.len(),
            "loaded relationship routes configuration"
        );

        Ok(config)
    }

    pub fn validate(&self) -> RoutingResult<()> {
        if self.resource_type.is_empty() {
            return Err(RoutingError::invalid_options("resource_type must not be empty"));
        }

        if self.controller.is_empty() {
            return Err(RoutingError::invalid_options("controller must not be empty"));
        }

        if matches!(self.parameter.as_deref(), Some("")) {
            return Err(RoutingError::invalid_options("parameter must not be empty"));
        }

        for entry in &self.relationships {
            if entry.field.is_empty() {
                return Err(RoutingError::invalid_options(
                    "relationship field must not be empty",
                ));
            }
            entry.options.validate().map_err(|err| match err {
                RoutingError::InvalidOptions { message } => {
                    RoutingError::invalid_options(format!("{}: {}", entry.field, message))
                }
                other => other,
            })?;
        }

        Ok(())
    }

    pub fn registrar(&self) -> RelationshipRegistrar {
        let parameter = self
            .parameter
            .clone()
            .unwrap_or_else(|| default_parameter(&self.resource_type));
        RelationshipRegistrar::new(self.resource_type.as_str(), self.controller.as_str(), parameter)
    }

    /// Expand every entry, in declaration order
    pub fn routes(&self) -> RouteCollection {
        let registrar = self.registrar();
        let mut routes = RouteCollection::new();
        for entry in &self.relationships {
            routes.extend(registrar.expand(&entry.field, entry.to_many, &entry.options));
        }
        routes
    }

    /// Expand every entry and hand all routes to the host as one batch
    pub fn register<R>(&self, host: &mut R) -> RoutingResult<RouteCollection>
    where
        R: RouteRegistrar + ?Sized,
    {
        let routes = self.routes();
        host.add_routes(&routes)?;
        Ok(routes)
    }
}
