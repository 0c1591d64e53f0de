//! Parameter handling: path-parameter match constraints, request-body
//! binding, and the declared parameter name list used for cache keys.

use crate::error::CompileError;
use crate::spec::{Operation, ParameterLocation};
use indexmap::IndexMap;
use regex::Regex;

/// A match constraint attached to one path parameter.
///
/// The pattern is matched against the whole path segment. Equality compares
/// the pattern text only, so compiled tables from identical inputs compare
/// equal.
#[derive(Debug, Clone)]
pub struct ParamConstraint {
    pattern: String,
    regex: Regex,
}

impl ParamConstraint {
    fn anchored(pattern: &str) -> Self {
        let regex = Regex::new(&format!("^(?:{pattern})$")).expect("constraint pattern is static");
        ParamConstraint {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// Constraint for integer-typed path parameters: one or more decimal
    /// digits, nothing else.
    #[must_use]
    pub fn digits() -> Self {
        Self::anchored(r"\d+")
    }

    /// The raw pattern text, unanchored.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a path segment satisfies this constraint.
    #[must_use]
    pub fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }
}

impl PartialEq for ParamConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ParamConstraint {}

/// Build match constraints for the operation's path parameters.
///
/// Only integer-typed path parameters are constrained; every other path
/// parameter accepts any non-separator segment, which is the dispatcher's
/// default and needs no entry here.
#[must_use]
pub fn path_constraints(operation: &Operation) -> IndexMap<String, ParamConstraint> {
    operation
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
        .filter(|p| p.schema_type.as_deref() == Some("integer"))
        .map(|p| (p.name.clone(), ParamConstraint::digits()))
        .collect()
}

/// Name of the single `body`-located parameter, if one is declared.
///
/// Two or more body parameters is a configuration error: only one request
/// body is representable.
pub fn body_parameter(
    operation_id: &str,
    operation: &Operation,
) -> Result<Option<String>, CompileError> {
    let mut bodies = operation
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Body);

    match (bodies.next(), bodies.next()) {
        (None, _) => Ok(None),
        (Some(body), None) => Ok(Some(body.name.clone())),
        (Some(_), Some(_)) => Err(CompileError::MultipleBodyParameters {
            operation_id: operation_id.to_string(),
        }),
    }
}

/// Every declared parameter name in declaration order, all locations alike.
#[must_use]
pub fn parameter_names(operation: &Operation) -> Vec<String> {
    operation.parameters.iter().map(|p| p.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ParameterSpec;

    fn param(name: &str, location: ParameterLocation, schema_type: Option<&str>) -> ParameterSpec {
        ParameterSpec {
            name: name.to_string(),
            location,
            schema_type: schema_type.map(str::to_string),
            required: true,
        }
    }

    #[test]
    fn integer_path_params_get_digit_constraints() {
        let op = Operation {
            parameters: vec![
                param("id", ParameterLocation::Path, Some("integer")),
                param("slug", ParameterLocation::Path, Some("string")),
                param("limit", ParameterLocation::Query, Some("integer")),
            ],
            ..Operation::default()
        };
        let constraints = path_constraints(&op);
        assert_eq!(constraints.len(), 1);
        let id = &constraints["id"];
        assert!(id.is_match("42"));
        assert!(!id.is_match("abc"));
        assert!(!id.is_match("42abc"));
        assert!(!id.is_match(""));
    }

    #[test]
    fn at_most_one_body_parameter() {
        let none = Operation {
            parameters: vec![param("id", ParameterLocation::Path, Some("integer"))],
            ..Operation::default()
        };
        assert_eq!(body_parameter("op", &none).unwrap(), None);

        let one = Operation {
            parameters: vec![param("payload", ParameterLocation::Body, None)],
            ..Operation::default()
        };
        assert_eq!(
            body_parameter("op", &one).unwrap(),
            Some("payload".to_string())
        );

        let two = Operation {
            parameters: vec![
                param("payload", ParameterLocation::Body, None),
                param("extra", ParameterLocation::Body, None),
            ],
            ..Operation::default()
        };
        assert_eq!(
            body_parameter("update_pet", &two),
            Err(CompileError::MultipleBodyParameters {
                operation_id: "update_pet".to_string()
            })
        );
    }

    #[test]
    fn parameter_names_keep_declaration_order() {
        let op = Operation {
            parameters: vec![
                param("id", ParameterLocation::Path, Some("integer")),
                param("filter", ParameterLocation::Query, Some("string")),
                param("payload", ParameterLocation::Body, None),
            ],
            ..Operation::default()
        };
        assert_eq!(parameter_names(&op), vec!["id", "filter", "payload"]);
    }
}
