//! Fluent relationship declarations
//!
//! ```rust,ignore
//! let registrar = RelationshipRegistrar::new("posts", "PostController", "post");
//! let mut relationships = Relationships::new(&registrar);
//! relationships.has_one("author").only([RelationAction::ReadRelated]);
//! relationships.has_many("comments").uri("post-comments").middleware(["auth"]);
//! let routes = relationships.routes();
//! ```

use super::{
    RelationAction, RelationshipOptions, RelationshipRegistrar, RouteCollection, RouteRegistrar,
};
use crate::errors::RoutingResult;

/// A relationship declaration waiting to be expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRelationship {
    field_name: String,
    to_many: bool,
    options: RelationshipOptions,
}

impl PendingRelationship {
    pub fn new<S: Into<String>>(field_name: S, to_many: bool) -> Self {
        Self {
            field_name: field_name.into(),
            to_many,
            options: RelationshipOptions::default(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn is_to_many(&self) -> bool {
        self.to_many
    }

    pub fn options(&self) -> &RelationshipOptions {
        &self.options
    }

    pub fn only<I>(&mut self, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = RelationAction>,
    {
        self.options.only = Some(actions.into_iter().collect());
        self
    }

    pub fn except<I>(&mut self, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = RelationAction>,
    {
        self.options.except = Some(actions.into_iter().collect());
        self
    }

    /// Use a different URI segment than the field name
    pub fn uri<S: Into<String>>(&mut self, uri: S) -> &mut Self {
        self.options.relationship_uri = Some(uri.into());
        self
    }

    pub fn name<S: Into<String>>(&mut self, action: RelationAction, name: S) -> &mut Self {
        self.options.names.insert(action, name.into());
        self
    }

    pub fn middleware<I, S>(&mut self, middleware: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.middleware = Some(middleware.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_middleware<I, S>(&mut self, middleware: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.excluded_middleware =
            Some(middleware.into_iter().map(Into::into).collect());
        self
    }

    /// Replace all options at once
    pub fn with_options(&mut self, options: RelationshipOptions) -> &mut Self {
        self.options = options;
        self
    }

    fn expand(&self, registrar: &RelationshipRegistrar) -> RouteCollection {
        registrar.expand(&self.field_name, self.to_many, &self.options)
    }
}

/// The relationship table of one resource
#[derive(Debug)]
pub struct Relationships<'a> {
    registrar: &'a RelationshipRegistrar,
    declarations: Vec<PendingRelationship>,
}

impl<'a> Relationships<'a> {
    pub fn new(registrar: &'a RelationshipRegistrar) -> Self {
        Self {
            registrar,
            declarations: Vec::new(),
        }
    }

    /// Declare a to-one relationship
    pub fn has_one<S: Into<String>>(&mut self, field_name: S) -> &mut PendingRelationship {
        self.declare(PendingRelationship::new(field_name, false))
    }

    /// Declare a to-many relationship
    pub fn has_many<S: Into<String>>(&mut self, field_name: S) -> &mut PendingRelationship {
        self.declare(PendingRelationship::new(field_name, true))
    }

    pub fn declare(&mut self, pending: PendingRelationship) -> &mut PendingRelationship {
        self.declarations.push(pending);
        let last = self.declarations.len() - 1;
        &mut self.declarations[last]
    }

    pub fn declarations(&self) -> &[PendingRelationship] {
        &self.declarations
    }

    /// Expand every declaration, in declaration order
    pub fn routes(&self) -> RouteCollection {
        let mut routes = RouteCollection::new();
        for pending in &self.declarations {
            routes.extend(pending.expand(self.registrar));
        }
        routes
    }

    /// Expand every declaration and hand all routes to the host as one batch
    pub fn register<R>(&self, host: &mut R) -> RoutingResult<RouteCollection>
    where
        R: RouteRegistrar + ?Sized,
    {
        let routes = self.routes();
        host.add_routes(&routes)?;
        Ok(routes)
    }
}
