//! Route descriptors produced by relationship expansion

use super::{HttpMethod, RelationAction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Route default key holding the JSON:API resource type
pub const RESOURCE_TYPE: &str = "resourceType";
/// Route default key holding the name of the resource id path parameter
pub const RESOURCE_ID_PARAMETER: &str = "resourceIdParameter";
/// Route default key holding the relationship field name
pub const RELATIONSHIP_FIELD: &str = "relationshipField";

/// Reference to the controller action that handles a route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerRef {
    pub controller: String,
    pub method: String,
}

impl HandlerRef {
    pub fn new<C: Into<String>, M: Into<String>>(controller: C, method: M) -> Self {
        Self {
            controller: controller.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.controller, self.method)
    }
}

/// Relationship context carried by every generated route, so dispatch does
/// not need to re-parse the URI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    pub resource_type: String,
    pub resource_id_parameter: String,
    pub relationship_field: String,
}

impl RouteMetadata {
    /// Metadata as ordered route defaults
    pub fn defaults(&self) -> [(&'static str, &str); 3] {
        [
            (RESOURCE_TYPE, self.resource_type.as_str()),
            (RESOURCE_ID_PARAMETER, self.resource_id_parameter.as_str()),
            (RELATIONSHIP_FIELD, self.relationship_field.as_str()),
        ]
    }
}

/// One generated relationship route
///
/// Built once by the registrar and never mutated afterwards. The HTTP method
/// is always the action's; a serialized `method` that disagrees is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DescriptorFields", try_from = "DescriptorFields")]
pub struct RouteDescriptor {
    action: RelationAction,
    uri: String,
    name: String,
    handler: HandlerRef,
    metadata: RouteMetadata,
    middleware: Option<Vec<String>>,
    excluded_middleware: Option<Vec<String>>,
}

/// Serialized form of [`RouteDescriptor`]
#[derive(Serialize, Deserialize)]
struct DescriptorFields {
    action: RelationAction,
    #[serde(default)]
    method: Option<HttpMethod>,
    uri: String,
    name: String,
    handler: HandlerRef,
    metadata: RouteMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middleware: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excluded_middleware: Option<Vec<String>>,
}

impl From<RouteDescriptor> for DescriptorFields {
    fn from(route: RouteDescriptor) -> Self {
        Self {
            action: route.action,
            method: Some(route.action.http_method()),
            uri: route.uri,
            name: route.name,
            handler: route.handler,
            metadata: route.metadata,
            middleware: route.middleware,
            excluded_middleware: route.excluded_middleware,
        }
    }
}

impl TryFrom<DescriptorFields> for RouteDescriptor {
    type Error = String;

    fn try_from(fields: DescriptorFields) -> Result<Self, Self::Error> {
        let expected = fields.action.http_method();
        match fields.method {
            Some(method) if method != expected => Err(format!(
                "method {} does not match action {}, expected {}",
                method, fields.action, expected
            )),
            _ => Ok(Self::new(
                fields.action,
                fields.uri,
                fields.name,
                fields.handler,
                fields.metadata,
                fields.middleware,
                fields.excluded_middleware,
            )),
        }
    }
}

impl RouteDescriptor {
    pub(crate) fn new(
        action: RelationAction,
        uri: String,
        name: String,
        handler: HandlerRef,
        metadata: RouteMetadata,
        middleware: Option<Vec<String>>,
        excluded_middleware: Option<Vec<String>>,
    ) -> Self {
        Self {
            action,
            uri,
            name,
            handler,
            metadata,
            middleware,
            excluded_middleware,
        }
    }

    pub fn action(&self) -> RelationAction {
        self.action
    }

    pub fn method(&self) -> HttpMethod {
        self.action.http_method()
    }

    /// URI pattern relative to the resource's own route
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    pub fn metadata(&self) -> &RouteMetadata {
        &self.metadata
    }

    pub fn middleware(&self) -> Option<&[String]> {
        self.middleware.as_deref()
    }

    pub fn excluded_middleware(&self) -> Option<&[String]> {
        self.excluded_middleware.as_deref()
    }

    /// Absolute path of this route under a base path, e.g. `posts/{post}`
    pub fn full_path(&self, base: &str) -> String {
        let base = base.trim_matches('/');
        let uri = self.uri.trim_start_matches('/');

        match (base.is_empty(), uri.is_empty()) {
            (true, true) => "/".to_string(),
            (true, false) => format!("/{}", uri),
            (false, true) => format!("/{}", base),
            (false, false) => format!("/{}/{}", base, uri),
        }
    }
}
