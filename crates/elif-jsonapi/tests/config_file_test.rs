//! Loading relationship tables from configuration files

use elif_jsonapi::{RelationshipsConfig, RouteRegistry, RoutingError};
use std::io::Write;
use tempfile::Builder;

const USERS_YAML: &str = r#"
resource_type: users
controller: UserController
parameter: user
relationships:
  - field: roles
    to_many: true
    only: [readRelated, attachRelationship, detachRelationship]
    excluded_middleware: csrf
"#;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_yaml_file() {
    let file = write_config(".yaml", USERS_YAML);
    let config = RelationshipsConfig::from_file(file.path()).unwrap();

    let routes = config.routes();
    assert_eq!(routes.names(), vec!["roles", "roles.attach", "roles.detach"]);
    assert!(routes
        .iter()
        .all(|route| route.excluded_middleware() == Some(&["csrf".to_string()][..])));
}

#[test]
fn test_from_json_file() {
    let file = write_config(
        ".json",
        r#"{ "resource_type": "users", "controller": "UserController",
             "relationships": [{ "field": "profile" }] }"#,
    );
    let config = RelationshipsConfig::from_file(file.path()).unwrap();

    assert_eq!(config.registrar().parameter(), "users");
    assert_eq!(config.routes().len(), 3);
}

#[test]
fn test_unsupported_extension() {
    let file = write_config(".toml", "resource_type = 'users'");
    let err = RelationshipsConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, RoutingError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let err = RelationshipsConfig::from_file("/nonexistent/relationships.yaml").unwrap_err();
    assert!(matches!(err, RoutingError::Io(_)));
}

#[test]
fn test_register_config_into_registry() {
    let config = RelationshipsConfig::from_yaml_str(USERS_YAML).unwrap();
    let mut registry = RouteRegistry::with_prefix("users/{user}");

    config.register(&mut registry).unwrap();

    let detach = registry.get_by_name("roles.detach").unwrap();
    assert_eq!(detach.path, "/users/{user}/relationships/roles");
    assert_eq!(detach.params, vec!["user".to_string()]);
}
