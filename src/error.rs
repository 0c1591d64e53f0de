use http::Method;
use std::fmt;

/// Compile-time configuration error.
///
/// Every variant is a defect in the authored specification or binding table:
/// there is no retry, the compiler aborts on the first one encountered and no
/// partial table is returned. Variants carry the operation identifier and
/// path/method context where available so the defect is locatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An operation lacks the required `operationId`.
    MissingOperationId { path: String, method: Method },
    /// An `operationId` has no entry in the binding registry.
    UnboundOperation {
        operation_id: String,
        path: String,
        method: Method,
    },
    /// None of the declared security alternatives uses a recognized
    /// requirement kind.
    UnresolvableSecurity { operation_id: String },
    /// More than one `body`-located parameter declared on one operation.
    MultipleBodyParameters { operation_id: String },
    /// `x-cache-ttl` declared on a non-GET operation, or the TTL value is
    /// not a strictly positive integer.
    InvalidCacheConfiguration {
        operation_id: String,
        reason: String,
    },
    /// Two operations produced the same generated entry name, i.e. the same
    /// `operationId` appears twice in the specification.
    DuplicateOperation { name: String, operation_id: String },
    /// `compile` invoked on an already-compiled compiler instance.
    DoubleCompilation,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MissingOperationId { path, method } => {
                write!(f, "operationId missing for {method} {path}")
            }
            CompileError::UnboundOperation {
                operation_id,
                path,
                method,
            } => {
                write!(
                    f,
                    "no controller bound for operation '{operation_id}' ({method} {path}); \
                     add it to a binding source"
                )
            }
            CompileError::UnresolvableSecurity { operation_id } => {
                write!(
                    f,
                    "unknown security requirement for operation '{operation_id}'; \
                     expected a 'token' or 'apps' alternative"
                )
            }
            CompileError::MultipleBodyParameters { operation_id } => {
                write!(
                    f,
                    "operation '{operation_id}' declares more than one body parameter; \
                     only one request body is representable"
                )
            }
            CompileError::InvalidCacheConfiguration {
                operation_id,
                reason,
            } => {
                write!(
                    f,
                    "invalid cache configuration for operation '{operation_id}': {reason}"
                )
            }
            CompileError::DuplicateOperation { name, operation_id } => {
                write!(
                    f,
                    "duplicate dispatch entry '{name}': operation '{operation_id}' \
                     is defined more than once"
                )
            }
            CompileError::DoubleCompilation => {
                write!(f, "compile called on an already-compiled compiler instance")
            }
        }
    }
}

impl std::error::Error for CompileError {}
