//! In-memory route registry
//!
//! A minimal host for generated routes: keeps them in registration order,
//! resolves full paths under a resource prefix and rejects name clashes.

use super::{HttpMethod, RouteCollection, RouteDescriptor, RouteRegistrar};
use crate::errors::{RoutingError, RoutingResult};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A route as stored by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredRoute {
    pub path: String,
    pub params: Vec<String>,
    pub route: RouteDescriptor,
}

/// Route registry for introspection of relationship routes
#[derive(Debug, Default)]
pub struct RouteRegistry {
    prefix: String,
    routes: Vec<RegisteredRoute>,
    named_routes: HashMap<String, usize>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that mounts every route under `prefix`, e.g. `posts/{post}`
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn get_by_name(&self, name: &str) -> Option<&RegisteredRoute> {
        self.named_routes
            .get(name)
            .and_then(|index| self.routes.get(*index))
    }

    /// Find the route registered for a method and full path pattern
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&RegisteredRoute> {
        self.routes
            .iter()
            .find(|registered| registered.route.method() == method && registered.path == path)
    }

    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Extract parameter names from a route path
    fn extract_param_names(path: &str) -> Vec<String> {
        path.split('/')
            .filter_map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                    .map(str::to_string)
            })
            .collect()
    }
}

impl RouteRegistry {
    fn insert(&mut self, route: RouteDescriptor) {
        let path = route.full_path(&self.prefix);
        let params = Self::extract_param_names(&path);

        tracing::debug!(
            method = %route.method(),
            path = %path,
            route = route.name(),
            "registered route"
        );

        self.named_routes
            .insert(route.name().to_string(), self.routes.len());
        self.routes.push(RegisteredRoute {
            path,
            params,
            route,
        });
    }
}

impl RouteRegistrar for RouteRegistry {
    fn add_route(&mut self, route: RouteDescriptor) -> RoutingResult<()> {
        if self.named_routes.contains_key(route.name()) {
            return Err(RoutingError::duplicate_route_name(route.name()));
        }

        self.insert(route);
        Ok(())
    }

    /// All names are checked before anything is stored.
    fn add_routes(&mut self, routes: &RouteCollection) -> RoutingResult<()> {
        let mut seen = HashSet::new();
        for route in routes {
            if self.named_routes.contains_key(route.name()) || !seen.insert(route.name()) {
                return Err(RoutingError::duplicate_route_name(route.name()));
            }
        }

        for route in routes {
            self.insert(route.clone());
        }
        Ok(())
    }
}
