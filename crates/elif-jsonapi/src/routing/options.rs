//! Relationship route options
//!
//! Options control which actions a relationship registers and how the
//! generated routes are named. Filtering is lenient: action names that do
//! not exist are dropped while parsing and simply never match.

use super::RelationAction;
use crate::errors::{RoutingError, RoutingResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for one relationship field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipOptions {
    /// Keep only these actions
    #[serde(
        deserialize_with = "lenient::actions",
        skip_serializing_if = "Option::is_none"
    )]
    pub only: Option<Vec<RelationAction>>,

    /// Drop these actions, applied after `only`
    #[serde(
        deserialize_with = "lenient::actions",
        skip_serializing_if = "Option::is_none"
    )]
    pub except: Option<Vec<RelationAction>>,

    /// URI segment used instead of the field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_uri: Option<String>,

    /// Custom route names keyed by action
    #[serde(
        deserialize_with = "lenient::names",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub names: BTreeMap<RelationAction, String>,

    #[serde(
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub middleware: Option<Vec<String>>,

    #[serde(
        deserialize_with = "lenient::strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_middleware: Option<Vec<String>>,
}

impl RelationshipOptions {
    /// Create options that register every action
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the routes to these actions
    pub fn with_only<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = RelationAction>,
    {
        self.only = Some(actions.into_iter().collect());
        self
    }

    /// Skip these actions
    pub fn with_except<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = RelationAction>,
    {
        self.except = Some(actions.into_iter().collect());
        self
    }

    /// Use a different URI segment than the field name
    pub fn with_relationship_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.relationship_uri = Some(uri.into());
        self
    }

    /// Override the route name of a single action
    pub fn with_name<S: Into<String>>(mut self, action: RelationAction, name: S) -> Self {
        self.names.insert(action, name.into());
        self
    }

    /// Middleware attached to every generated route
    pub fn with_middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware = Some(middleware.into_iter().map(Into::into).collect());
        self
    }

    /// Middleware the generated routes opt out of
    pub fn with_excluded_middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_middleware = Some(middleware.into_iter().map(Into::into).collect());
        self
    }

    /// Actions to register, in fixed candidate order.
    ///
    /// Candidates are narrowed by cardinality, then intersected with `only`,
    /// then reduced by `except`. An action in both lists is excluded.
    pub fn actions(&self, to_many: bool) -> Vec<RelationAction> {
        RelationAction::candidates(to_many)
            .iter()
            .copied()
            .filter(|action| {
                self.only
                    .as_ref()
                    .map_or(true, |only| only.contains(action))
            })
            .filter(|action| {
                self.except
                    .as_ref()
                    .map_or(true, |except| !except.contains(action))
            })
            .collect()
    }

    /// URI segment for the relationship
    pub fn relationship_uri_for<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.relationship_uri.as_deref().unwrap_or(field_name)
    }

    /// Route name for an action, custom name first
    pub fn route_name_for(&self, action: RelationAction, field_name: &str) -> String {
        match self.names.get(&action) {
            Some(name) => name.clone(),
            None => action.default_route_name(field_name),
        }
    }

    /// Reject options that would produce unusable routes.
    ///
    /// Not applied by route expansion; the configuration loader calls it.
    pub fn validate(&self) -> RoutingResult<()> {
        if let Some(uri) = &self.relationship_uri {
            if uri.trim_matches('/').is_empty() {
                return Err(RoutingError::invalid_options(
                    "relationship_uri must not be empty",
                ));
            }
        }

        if let Some((action, _)) = self.names.iter().find(|(_, name)| name.is_empty()) {
            return Err(RoutingError::invalid_options(format!(
                "route name for {} must not be empty",
                action
            )));
        }

        let middleware = self.middleware.iter().flatten();
        let excluded = self.excluded_middleware.iter().flatten();
        if middleware.chain(excluded).any(|name| name.is_empty()) {
            return Err(RoutingError::invalid_options(
                "middleware identifiers must not be empty",
            ));
        }

        Ok(())
    }
}

mod lenient {
    //! Deserializers that accept a single string where a list is expected
    //! and drop unknown action names and non-string entries.

    use super::*;
    use serde::de::IgnoredAny;
    use serde::Deserializer;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Name(String),
        Other(IgnoredAny),
    }

    // `Many` must come first, `Other` would swallow a whole list
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Entry>),
        One(Entry),
    }

    impl OneOrMany {
        fn into_vec(self) -> Vec<String> {
            let entries = match self {
                OneOrMany::Many(entries) => entries,
                OneOrMany::One(entry) => vec![entry],
            };
            entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Entry::Name(name) => Some(name),
                    Entry::Other(_) => {
                        tracing::debug!("ignoring non-string relationship option entry");
                        None
                    }
                })
                .collect()
        }
    }

    fn parse_action(name: &str) -> Option<RelationAction> {
        match name.parse() {
            Ok(action) => Some(action),
            Err(_) => {
                tracing::debug!(action = name, "ignoring unknown relationship action");
                None
            }
        }
    }

    pub(super) fn strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(OneOrMany::into_vec))
    }

    pub(super) fn actions<'de, D>(deserializer: D) -> Result<Option<Vec<RelationAction>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(strings(deserializer)?.map(|names| {
            names
                .iter()
                .filter_map(|name| parse_action(name))
                .collect()
        }))
    }

    pub(super) fn names<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<RelationAction, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Option::<BTreeMap<String, String>>::deserialize(deserializer)?;
        Ok(names
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(action, name)| parse_action(&action).map(|action| (action, name)))
            .collect())
    }
}
