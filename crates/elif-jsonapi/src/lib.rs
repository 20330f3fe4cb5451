//! # elif-jsonapi
//!
//! JSON:API relationship routing for the elif.rs web framework.
//!
//! A relationship field on a JSON:API resource is served by a family of
//! routes: reading the related resource, reading and replacing the
//! relationship, and for to-many relationships attaching and detaching
//! members. This crate expands a field declaration into that family:
//! - Fixed action set filtered by cardinality, `only` and `except`
//! - Derived URIs, route names and controller handler references
//! - Relationship metadata attached to every route for dispatch
//! - YAML/JSON configuration of a resource's relationship table
//! - A host seam ([`RouteRegistrar`]) plus an in-memory registry
//!
//! ```rust
//! use elif_jsonapi::{RelationshipOptions, RelationshipRegistrar};
//!
//! let registrar = RelationshipRegistrar::new("posts", "PostController", "post");
//! let routes = registrar.expand("comments", true, &RelationshipOptions::new());
//!
//! assert_eq!(routes.len(), 5);
//! assert_eq!(routes.names()[1], "comments.read");
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod routing;

pub use config::{RelationshipEntry, RelationshipsConfig};
pub use errors::{RoutingError, RoutingResult};
pub use logging::{init_logging, LoggingConfig};
pub use routing::{
    HandlerRef, HttpMethod, PendingRelationship, RegisteredRoute, RelationAction,
    RelationshipOptions, RelationshipRegistrar, Relationships, RouteCollection, RouteDescriptor,
    RouteMetadata, RouteRegistrar, RouteRegistry,
};
