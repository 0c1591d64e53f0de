//! # specroute
//!
//! Compiles a machine-readable API specification together with an
//! independently authored operation-to-controller binding table into a
//! validated, fully annotated routing table ready for dispatch.
//!
//! The two inputs are loosely coupled on purpose: the spec author never
//! names controllers, the binding author never re-describes HTTP semantics.
//! The compiler reconciles them, enforces the cross-cutting invariants
//! (every operation resolves to exactly one controller, security scopes are
//! always derivable, caching only applies to safe GET operations) and
//! synthesizes one cross-origin preflight entry per operation.
//!
//! ## Modules
//!
//! - **[`spec`]** - the parsed specification model handed in by an external loader
//! - **[`registry`]** - last-write-wins merge of binding sources
//! - **[`security`]** - scope resolution from declared security requirements
//! - **[`params`]** - path-parameter constraints and request-body binding
//! - **[`cache`]** - cache directives from the `x-cache-ttl` extension
//! - **[`compiler`]** - the one-shot, fail-fast compilation pass
//! - **[`table`]** - the immutable [`RoutingTable`] output
//!
//! ## Example
//!
//! ```rust
//! use specroute::{ApiSpec, BindingRegistry, BindingSource, RouteCompiler};
//!
//! let spec: ApiSpec = serde_json::from_value(serde_json::json!({
//!     "paths": {
//!         "/pets/{id}": {
//!             "get": {
//!                 "operationId": "get_pet",
//!                 "parameters": [
//!                     { "name": "id", "in": "path", "type": "integer", "required": true }
//!                 ]
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let bindings: BindingSource = serde_json::from_value(serde_json::json!({
//!     "get_pet": { "controller": "app.pets:show" }
//! })).unwrap();
//!
//! let registry = BindingRegistry::from_sources([bindings]);
//! let table = RouteCompiler::new().compile(&spec, &registry).unwrap();
//!
//! // One primary entry plus one synthesized preflight entry.
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("api_get_pet").unwrap().handler, "app.pets:show");
//! ```
//!
//! Compilation performs no I/O and the produced table is immutable: share it
//! read-only across dispatcher threads, and on spec change compile a new
//! table with a fresh compiler and swap the reference.

pub mod cache;
pub mod compiler;
pub mod error;
pub mod params;
pub mod registry;
pub mod security;
pub mod spec;
pub mod table;

pub use cache::CacheDirective;
pub use compiler::{RouteCompiler, PREFLIGHT_HANDLER};
pub use error::CompileError;
pub use params::ParamConstraint;
pub use registry::{Binding, BindingRegistry, BindingSource};
pub use security::DEFAULT_SCOPE;
pub use spec::{ApiSpec, Operation, ParameterLocation, ParameterSpec, PathItem, SecurityRequirement};
pub use table::{AuthPolicy, DispatchEntry, RoutingTable};
