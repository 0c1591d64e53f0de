#![allow(clippy::unwrap_used, clippy::expect_used)]

use specroute::{ApiSpec, BindingRegistry, BindingSource, CompileError, RouteCompiler};

fn compile(spec_yaml: &str) -> Result<specroute::RoutingTable, CompileError> {
    let spec: ApiSpec = serde_yaml::from_str(spec_yaml).unwrap();
    let bindings: BindingSource = serde_yaml::from_str(
        r#"
search_pets:
  controller: "app.pets:search"
update_pet:
  controller: "app.pets:update"
"#,
    )
    .unwrap();
    RouteCompiler::new().compile(&spec, &BindingRegistry::from_sources([bindings]))
}

#[test]
fn test_cache_directive_covers_all_declared_parameters() {
    let table = compile(
        r#"
paths:
  /pets/{id}:
    get:
      operationId: search_pets
      x-cache-ttl: 60
      parameters:
        - name: id
          in: path
          type: integer
          required: true
        - name: filter
          in: query
          type: string
"#,
    )
    .unwrap();

    let cache = table.get("api_search_pets").unwrap().cache.as_ref().unwrap();
    assert_eq!(cache.ttl_seconds, 60);
    // Full parameter list in declaration order, not a curated subset.
    assert_eq!(cache.key_params, vec!["id", "filter"]);

    // Preflight companions are never cached.
    assert!(table.get("api_search_pets_options").unwrap().cache.is_none());
}

#[test]
fn test_cache_key_includes_body_parameter() {
    let table = compile(
        r#"
paths:
  /search:
    get:
      operationId: search_pets
      x-cache-ttl: "300"
      parameters:
        - name: query
          in: body
"#,
    )
    .unwrap();

    let cache = table.get("api_search_pets").unwrap().cache.as_ref().unwrap();
    assert_eq!(cache.ttl_seconds, 300);
    assert_eq!(cache.key_params, vec!["query"]);
}

#[test]
fn test_operation_without_ttl_has_no_cache_directive() {
    let table = compile(
        r#"
paths:
  /pets:
    get:
      operationId: search_pets
"#,
    )
    .unwrap();
    assert!(table.get("api_search_pets").unwrap().cache.is_none());
}

#[test]
fn test_ttl_on_non_get_operation_is_fatal() {
    let err = compile(
        r#"
paths:
  /pets/{id}:
    put:
      operationId: update_pet
      x-cache-ttl: 60
"#,
    )
    .unwrap_err();

    match err {
        CompileError::InvalidCacheConfiguration { operation_id, .. } => {
            assert_eq!(operation_id, "update_pet");
        }
        other => panic!("expected InvalidCacheConfiguration, got {other:?}"),
    }
}

#[test]
fn test_non_positive_or_non_integer_ttl_is_fatal() {
    for ttl in ["0", "\"abc\"", "-5", "60.5"] {
        let err = compile(&format!(
            r#"
paths:
  /pets:
    get:
      operationId: search_pets
      x-cache-ttl: {ttl}
"#
        ))
        .unwrap_err();
        assert!(
            matches!(err, CompileError::InvalidCacheConfiguration { .. }),
            "ttl {ttl} should be rejected, got {err:?}"
        );
    }
}
