//! The route compiler: walks every operation in the specification, resolves
//! its binding and security scopes, derives parameter and cache metadata,
//! and accumulates dispatch entries plus their synthesized cross-origin
//! preflight companions into a [`RoutingTable`].
//!
//! Compilation is single-pass and fail-fast: the first invariant violation
//! aborts with a [`CompileError`] and no partial table is returned.

use crate::cache;
use crate::error::CompileError;
use crate::params;
use crate::registry::BindingRegistry;
use crate::security;
use crate::spec::ApiSpec;
use crate::table::{AuthPolicy, DispatchEntry, RoutingTable};
use http::Method;
use tracing::{debug, info};

/// Fixed well-known controller answering synthesized preflight entries, so
/// the dispatcher needs no per-operation OPTIONS logic.
pub const PREFLIGHT_HANDLER: &str = "accept_options";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompilerState {
    Fresh,
    Compiled,
}

/// One-shot compiler over a parsed specification and a binding registry.
///
/// A compiler instance moves from `Fresh` to the terminal `Compiled` state on
/// its first successful [`compile`](Self::compile); any further call fails
/// immediately with [`CompileError::DoubleCompilation`] and has no side
/// effects. A failed pass leaves the instance `Fresh`. Given identical
/// inputs, two fresh instances produce field-for-field equal tables.
#[derive(Debug)]
pub struct RouteCompiler {
    state: CompilerState,
}

impl RouteCompiler {
    #[must_use]
    pub fn new() -> Self {
        RouteCompiler {
            state: CompilerState::Fresh,
        }
    }

    /// Compile the specification against the binding registry.
    ///
    /// Produces exactly two entries per operation: the primary dispatch entry
    /// named `api_<operationId>` and its preflight companion named
    /// `api_<operationId>_options` on the same path with method `OPTIONS`.
    pub fn compile(
        &mut self,
        spec: &ApiSpec,
        registry: &BindingRegistry,
    ) -> Result<RoutingTable, CompileError> {
        if self.state == CompilerState::Compiled {
            return Err(CompileError::DoubleCompilation);
        }

        let mut table = RoutingTable::default();

        for (path, item) in &spec.paths {
            for (method, operation) in item.methods() {
                let operation_id = operation.operation_id.as_deref().ok_or_else(|| {
                    CompileError::MissingOperationId {
                        path: path.clone(),
                        method: method.clone(),
                    }
                })?;

                let handler = registry.controller(operation_id).ok_or_else(|| {
                    CompileError::UnboundOperation {
                        operation_id: operation_id.to_string(),
                        path: path.clone(),
                        method: method.clone(),
                    }
                })?;

                let scopes = security::resolve_scopes(operation_id, operation)?;
                let body_param = params::body_parameter(operation_id, operation)?;
                let cache = cache::cache_directive(operation_id, &method, operation)?;
                let constraints = params::path_constraints(operation);

                let name = format!("api_{operation_id}");

                debug!(
                    name = %name,
                    method = %method,
                    path = %path,
                    handler = %handler,
                    scopes = ?scopes,
                    cached = cache.is_some(),
                    "Compiled dispatch entry"
                );

                let preflight = DispatchEntry {
                    name: format!("{name}_options"),
                    path: path.clone(),
                    method: Method::OPTIONS,
                    handler: PREFLIGHT_HANDLER.to_string(),
                    operation_id: operation_id.to_string(),
                    scopes: scopes.clone(),
                    auth: AuthPolicy::PreflightExempt,
                    no_token: false,
                    body_param: None,
                    constraints: constraints.clone(),
                    cache: None,
                };

                table.insert(DispatchEntry {
                    name,
                    path: path.clone(),
                    method,
                    handler: handler.to_string(),
                    operation_id: operation_id.to_string(),
                    scopes,
                    auth: AuthPolicy::Required,
                    no_token: operation.no_token,
                    body_param,
                    constraints,
                    cache,
                })?;
                table.insert(preflight)?;
            }
        }

        self.state = CompilerState::Compiled;

        info!(
            entry_count = table.len(),
            operation_count = table.len() / 2,
            path_count = spec.paths.len(),
            "Routing table compiled"
        );

        Ok(table)
    }
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self::new()
    }
}
