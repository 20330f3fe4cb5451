//! Ordered collections of generated routes

use super::{RelationAction, RouteDescriptor};
use serde::{Deserialize, Serialize};

/// Routes generated for one or more relationships, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteCollection {
    routes: Vec<RouteDescriptor>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn add(&mut self, route: RouteDescriptor) {
        self.routes.push(route);
    }

    /// Append all routes of another collection
    pub fn extend(&mut self, other: RouteCollection) {
        self.routes.extend(other.routes);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteDescriptor> {
        self.routes.iter()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// First route generated for the given action
    pub fn get_by_action(&self, action: RelationAction) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.action() == action)
    }

    pub fn actions(&self) -> Vec<RelationAction> {
        self.routes.iter().map(RouteDescriptor::action).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.routes.iter().map(RouteDescriptor::name).collect()
    }

    pub fn into_vec(self) -> Vec<RouteDescriptor> {
        self.routes
    }
}

impl From<Vec<RouteDescriptor>> for RouteCollection {
    fn from(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }
}

impl FromIterator<RouteDescriptor> for RouteCollection {
    fn from_iter<I: IntoIterator<Item = RouteDescriptor>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RouteCollection {
    type Item = RouteDescriptor;
    type IntoIter = std::vec::IntoIter<RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{RelationshipOptions, RelationshipRegistrar};

    fn registrar() -> RelationshipRegistrar {
        RelationshipRegistrar::new("posts", "PostController", "post")
    }

    #[test]
    fn test_lookup() {
        let routes = registrar().expand("tags", true, &RelationshipOptions::new());

        assert_eq!(routes.len(), 5);
        assert_eq!(
            routes.get_by_name("tags.attach").map(RouteDescriptor::action),
            Some(RelationAction::AttachRelationship)
        );
        assert_eq!(
            routes
                .get_by_action(RelationAction::ReadRelated)
                .map(RouteDescriptor::name),
            Some("tags")
        );
        assert!(routes.get_by_name("tags.destroy").is_none());
    }

    #[test]
    fn test_extend_preserves_order() {
        let registrar = registrar();
        let mut routes = registrar.expand("author", false, &RelationshipOptions::new());
        routes.extend(registrar.expand("tags", true, &RelationshipOptions::new()));

        assert_eq!(routes.len(), 8);
        assert_eq!(routes.names()[..4], ["author", "author.read", "author.update", "tags"]);
    }

    #[test]
    fn test_empty_collection() {
        let routes = RouteCollection::new();
        assert!(routes.is_empty());
        assert!(routes.actions().is_empty());
    }
}
