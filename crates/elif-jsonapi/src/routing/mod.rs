//! JSON:API relationship routing for elif.rs
//!
//! This module expands relationship field declarations into route
//! descriptors:
//! - Fixed set of relationship actions filtered by cardinality
//! - `only` / `except` filtering and custom route names
//! - URI overrides and middleware pass-through
//! - Fluent declarations for a resource's relationship table
//! - An in-memory registry for hosts that want route introspection

pub mod action;
pub mod collection;
pub mod descriptor;
pub mod options;
pub mod pending;
pub mod registry;
pub mod relationship;

pub use action::RelationAction;
pub use collection::RouteCollection;
pub use descriptor::{HandlerRef, RouteDescriptor, RouteMetadata};
pub use options::RelationshipOptions;
pub use pending::{PendingRelationship, Relationships};
pub use registry::{RegisteredRoute, RouteRegistry};
pub use relationship::RelationshipRegistrar;

use crate::errors::{RoutingError, RoutingResult};
use axum::http::Method;
use serde::{Deserialize, Serialize};

/// HTTP methods used by relationship routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Method> for HttpMethod {
    type Error = RoutingError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(HttpMethod::GET),
            Method::POST => Ok(HttpMethod::POST),
            Method::PATCH => Ok(HttpMethod::PATCH),
            Method::DELETE => Ok(HttpMethod::DELETE),
            _ => Err(RoutingError::UnsupportedMethod {
                method: method.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::DELETE => Method::DELETE,
        }
    }
}

/// Host routing table that accepts generated relationship routes
///
/// Compiling URI patterns, running middleware and invoking handlers is the
/// host's job. Implementations may reject a route, e.g. on a name clash.
pub trait RouteRegistrar {
    fn add_route(&mut self, route: RouteDescriptor) -> RoutingResult<()>;

    /// Add a batch of routes.
    ///
    /// The default adds routes one by one and stops at the first rejection.
    /// Hosts that can check a batch up front should override this so a
    /// rejected batch leaves nothing behind.
    fn add_routes(&mut self, routes: &RouteCollection) -> RoutingResult<()> {
        for route in routes {
            self.add_route(route.clone())?;
        }
        Ok(())
    }
}

impl<R: RouteRegistrar + ?Sized> RouteRegistrar for &mut R {
    fn add_route(&mut self, route: RouteDescriptor) -> RoutingResult<()> {
        (**self).add_route(route)
    }

    fn add_routes(&mut self, routes: &RouteCollection) -> RoutingResult<()> {
        (**self).add_routes(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        let method: Method = HttpMethod::PATCH.into();
        assert_eq!(method, Method::PATCH);
        assert_eq!(HttpMethod::try_from(&Method::DELETE).unwrap(), HttpMethod::DELETE);
    }

    #[test]
    fn test_unsupported_method() {
        let err = HttpMethod::try_from(&Method::PUT).unwrap_err();
        assert!(matches!(err, RoutingError::UnsupportedMethod { ref method } if method == "PUT"));
    }

    /// Host that only implements `add_route` and refuses GET routes
    #[derive(Default)]
    struct NoReads {
        added: Vec<String>,
    }

    impl RouteRegistrar for NoReads {
        fn add_route(&mut self, route: RouteDescriptor) -> RoutingResult<()> {
            if route.method() == HttpMethod::GET {
                return Err(RoutingError::invalid_options("read routes not accepted"));
            }
            self.added.push(route.name().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_default_batch_adds_in_order() {
        let registrar = RelationshipRegistrar::new("posts", "PostController", "post");
        let options = RelationshipOptions::new().with_except([
            RelationAction::ReadRelated,
            RelationAction::ReadRelationship,
        ]);
        let mut host = NoReads::default();

        registrar.register(&mut host, "tags", true, &options).unwrap();
        assert_eq!(host.added, vec!["tags.update", "tags.attach", "tags.detach"]);

        assert!(registrar
            .register(&mut host, "author", false, &RelationshipOptions::new())
            .is_err());
        assert_eq!(host.added.len(), 3);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::GET.to_string(), "GET");
        assert_eq!(HttpMethod::DELETE.to_string(), "DELETE");
    }
}
