//! Relationship actions and their fixed route rules

use super::HttpMethod;
use crate::errors::RoutingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URI segment that prefixes every relationship-object route
pub const RELATIONSHIPS_SEGMENT: &str = "relationships";

/// One of the five operations a relationship field can expose
///
/// Serialized as the controller method name, e.g. `readRelated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationAction {
    ReadRelated,
    ReadRelationship,
    UpdateRelationship,
    AttachRelationship,
    DetachRelationship,
}

impl RelationAction {
    /// Actions every relationship exposes, in registration order
    pub const TO_ONE: [RelationAction; 3] = [
        RelationAction::ReadRelated,
        RelationAction::ReadRelationship,
        RelationAction::UpdateRelationship,
    ];

    /// Actions a to-many relationship exposes, in registration order
    pub const TO_MANY: [RelationAction; 5] = [
        RelationAction::ReadRelated,
        RelationAction::ReadRelationship,
        RelationAction::UpdateRelationship,
        RelationAction::AttachRelationship,
        RelationAction::DetachRelationship,
    ];

    /// Candidate actions for a relationship of the given cardinality
    pub fn candidates(to_many: bool) -> &'static [RelationAction] {
        if to_many {
            &Self::TO_MANY
        } else {
            &Self::TO_ONE
        }
    }

    /// Attach and detach only exist on to-many relationships
    pub fn requires_to_many(self) -> bool {
        matches!(
            self,
            RelationAction::AttachRelationship | RelationAction::DetachRelationship
        )
    }

    pub fn http_method(self) -> HttpMethod {
        match self {
            RelationAction::ReadRelated | RelationAction::ReadRelationship => HttpMethod::GET,
            RelationAction::UpdateRelationship => HttpMethod::PATCH,
            RelationAction::AttachRelationship => HttpMethod::POST,
            RelationAction::DetachRelationship => HttpMethod::DELETE,
        }
    }

    /// Controller method that handles this action
    pub fn handler_method(self) -> &'static str {
        match self {
            RelationAction::ReadRelated => "readRelated",
            RelationAction::ReadRelationship => "readRelationship",
            RelationAction::UpdateRelationship => "updateRelationship",
            RelationAction::AttachRelationship => "attachRelationship",
            RelationAction::DetachRelationship => "detachRelationship",
        }
    }

    /// Suffix appended to the field name for the default route name.
    ///
    /// `ReadRelated` has none: its default name is the bare field name.
    pub fn name_suffix(self) -> Option<&'static str> {
        match self {
            RelationAction::ReadRelated => None,
            RelationAction::ReadRelationship => Some("read"),
            RelationAction::UpdateRelationship => Some("update"),
            RelationAction::AttachRelationship => Some("attach"),
            RelationAction::DetachRelationship => Some("detach"),
        }
    }

    pub fn default_route_name(self, field_name: &str) -> String {
        match self.name_suffix() {
            Some(suffix) => format!("{}.{}", field_name, suffix),
            None => field_name.to_string(),
        }
    }

    /// Route URI for this action given the relationship URI segment
    pub fn uri(self, relationship_uri: &str) -> String {
        match self {
            RelationAction::ReadRelated => relationship_uri.to_string(),
            _ => format!("{}/{}", RELATIONSHIPS_SEGMENT, relationship_uri),
        }
    }
}

impl fmt::Display for RelationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handler_method())
    }
}

impl FromStr for RelationAction {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationAction::TO_MANY
            .iter()
            .copied()
            .find(|action| action.handler_method() == s)
            .ok_or_else(|| RoutingError::unknown_action(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        read_related = { RelationAction::ReadRelated, HttpMethod::GET, "comments", "comments", "readRelated" },
        read_relationship = { RelationAction::ReadRelationship, HttpMethod::GET, "relationships/comments", "comments.read", "readRelationship" },
        update_relationship = { RelationAction::UpdateRelationship, HttpMethod::PATCH, "relationships/comments", "comments.update", "updateRelationship" },
        attach_relationship = { RelationAction::AttachRelationship, HttpMethod::POST, "relationships/comments", "comments.attach", "attachRelationship" },
        detach_relationship = { RelationAction::DetachRelationship, HttpMethod::DELETE, "relationships/comments", "comments.detach", "detachRelationship" },
    )]
    fn test_action_rules(
        action: RelationAction,
        method: HttpMethod,
        uri: &str,
        name: &str,
        handler: &str,
    ) {
        assert_eq!(action.http_method(), method);
        assert_eq!(action.uri("comments"), uri);
        assert_eq!(action.default_route_name("comments"), name);
        assert_eq!(action.handler_method(), handler);
    }

    #[test]
    fn test_candidates_by_cardinality() {
        assert_eq!(RelationAction::candidates(false), &RelationAction::TO_ONE[..]);
        assert_eq!(RelationAction::candidates(true).len(), 5);
        assert!(RelationAction::candidates(false)
            .iter()
            .all(|action| !action.requires_to_many()));
    }

    #[test]
    fn test_parse_action_names() {
        assert_eq!(
            "attachRelationship".parse::<RelationAction>().unwrap(),
            RelationAction::AttachRelationship
        );
        assert!(matches!(
            "destroy".parse::<RelationAction>(),
            Err(RoutingError::UnknownAction { ref name }) if name == "destroy"
        ));
        assert!("ReadRelated".parse::<RelationAction>().is_err());
    }

    #[test]
    fn test_serde_names_match_handler_methods() {
        for action in RelationAction::TO_MANY {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, serde_json::json!(action.handler_method()));
        }
    }
}
