//! Security scope resolution.
//!
//! Derives the access-scope set the dispatcher must enforce for an operation
//! from its declared security requirements. Requirement alternatives are
//! inspected in declaration order and the first alternative carrying a
//! recognized requirement kind supplies the scopes; alternatives are never
//! merged. Callers expecting an OR of all alternatives will be surprised —
//! this is deliberate, pinned behavior (see the resolver tests).

use crate::error::CompileError;
use crate::spec::Operation;

/// Scope granted when an operation declares no security requirement at all.
pub const DEFAULT_SCOPE: &str = "user";

/// Requirement kinds the resolver understands, in lookup precedence order
/// within a single alternative.
const RECOGNIZED_KINDS: [&str; 2] = ["token", "apps"];

/// Resolve the scopes required to invoke `operation`.
///
/// Never returns an empty set: an absent (or empty) `security` declaration
/// resolves to the single default scope. Scope order is preserved verbatim,
/// duplicates included, because order may carry precedence meaning
/// downstream.
pub fn resolve_scopes(
    operation_id: &str,
    operation: &Operation,
) -> Result<Vec<String>, CompileError> {
    if operation.security.is_empty() {
        return Ok(vec![DEFAULT_SCOPE.to_string()]);
    }

    for alternative in &operation.security {
        for kind in RECOGNIZED_KINDS {
            if let Some(scopes) = alternative.get(kind) {
                return Ok(scopes.clone());
            }
        }
    }

    Err(CompileError::UnresolvableSecurity {
        operation_id: operation_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SecurityRequirement;

    fn requirement(kind: &str, scopes: &[&str]) -> SecurityRequirement {
        let mut req = SecurityRequirement::new();
        req.insert(kind.to_string(), scopes.iter().map(|s| s.to_string()).collect());
        req
    }

    #[test]
    fn no_security_resolves_to_default_scope() {
        let op = Operation::default();
        assert_eq!(resolve_scopes("op", &op).unwrap(), vec!["user"]);
    }

    #[test]
    fn first_recognized_alternative_wins() {
        let op = Operation {
            security: vec![
                requirement("token", &["admin", "read"]),
                requirement("apps", &["partner"]),
            ],
            ..Operation::default()
        };
        assert_eq!(resolve_scopes("op", &op).unwrap(), vec!["admin", "read"]);
    }

    #[test]
    fn unrecognized_alternatives_are_skipped_not_fatal() {
        let op = Operation {
            security: vec![
                requirement("oauth2", &["whatever"]),
                requirement("apps", &["partner"]),
            ],
            ..Operation::default()
        };
        assert_eq!(resolve_scopes("op", &op).unwrap(), vec!["partner"]);
    }

    #[test]
    fn no_recognized_alternative_is_fatal() {
        let op = Operation {
            security: vec![requirement("oauth2", &["whatever"])],
            ..Operation::default()
        };
        assert_eq!(
            resolve_scopes("get_pet", &op),
            Err(CompileError::UnresolvableSecurity {
                operation_id: "get_pet".to_string()
            })
        );
    }

    #[test]
    fn scope_order_and_duplicates_are_preserved() {
        let op = Operation {
            security: vec![requirement("token", &["read", "admin", "read"])],
            ..Operation::default()
        };
        assert_eq!(
            resolve_scopes("op", &op).unwrap(),
            vec!["read", "admin", "read"]
        );
    }
}
