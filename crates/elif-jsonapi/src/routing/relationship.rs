//! Relationship route registrar
//!
//! Expands one relationship field declaration into the JSON:API
//! relationship routes of a resource:
//!
//! ```text
//! GET    {field}                  → readRelated         ({field})
//! GET    relationships/{field}    → readRelationship    ({field}.read)
//! PATCH  relationships/{field}    → updateRelationship  ({field}.update)
//! POST   relationships/{field}    → attachRelationship  ({field}.attach, to-many only)
//! DELETE relationships/{field}    → detachRelationship  ({field}.detach, to-many only)
//! ```

use super::{
    HandlerRef, RelationAction, RelationshipOptions, RouteCollection, RouteDescriptor,
    RouteMetadata, RouteRegistrar,
};
use crate::errors::RoutingResult;
use tracing::{debug, trace};

/// Generates relationship routes for a single resource type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRegistrar {
    resource_type: String,
    controller: String,
    parameter: String,
}

impl RelationshipRegistrar {
    /// Create a registrar for a resource type handled by `controller`, whose
    /// id is bound to the `parameter` path parameter
    pub fn new<T, C, P>(resource_type: T, controller: C, parameter: P) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        P: Into<String>,
    {
        Self {
            resource_type: resource_type.into(),
            controller: controller.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a registrar whose id parameter is derived from the resource type
    pub fn for_resource<T, C>(resource_type: T, controller: C) -> Self
    where
        T: Into<String>,
        C: Into<String>,
    {
        let resource_type = resource_type.into();
        let parameter = default_parameter(&resource_type);
        Self::new(resource_type, controller, parameter)
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Expand a relationship field into its routes
    pub fn expand(
        &self,
        field_name: &str,
        to_many: bool,
        options: &RelationshipOptions,
    ) -> RouteCollection {
        let routes: RouteCollection = options
            .actions(to_many)
            .into_iter()
            .map(|action| self.route(action, field_name, options))
            .collect();

        debug!(
            resource_type = %self.resource_type,
            field = field_name,
            to_many,
            routes = routes.len(),
            "expanded relationship routes"
        );

        routes
    }

    /// Expand a relationship field and hand the routes to the host as one batch
    pub fn register<R>(
        &self,
        host: &mut R,
        field_name: &str,
        to_many: bool,
        options: &RelationshipOptions,
    ) -> RoutingResult<RouteCollection>
    where
        R: RouteRegistrar + ?Sized,
    {
        let routes = self.expand(field_name, to_many, options);
        host.add_routes(&routes)?;
        Ok(routes)
    }

    fn route(
        &self,
        action: RelationAction,
        field_name: &str,
        options: &RelationshipOptions,
    ) -> RouteDescriptor {
        let uri = action.uri(options.relationship_uri_for(field_name));
        let name = options.route_name_for(action, field_name);

        trace!(
            method = %action.http_method(),
            uri = %uri,
            route_name = %name,
            "relationship route"
        );

        RouteDescriptor::new(
            action,
            uri,
            name,
            HandlerRef::new(self.controller.as_str(), action.handler_method()),
            self.metadata(field_name),
            options.middleware.clone(),
            options.excluded_middleware.clone(),
        )
    }

    fn metadata(&self, field_name: &str) -> RouteMetadata {
        RouteMetadata {
            resource_type: self.resource_type.clone(),
            resource_id_parameter: self.parameter.clone(),
            relationship_field: field_name.to_string(),
        }
    }
}

/// Fallback id parameter name when none is given: the resource type with
/// dashes replaced by underscores, e.g. `blog-posts` becomes `blog_posts`
pub(crate) fn default_parameter(resource_type: &str) -> String {
    resource_type.replace('-', "_")
}
