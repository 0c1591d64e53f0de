//! The compiled routing table and its dispatch entries.

use crate::cache::CacheDirective;
use crate::error::CompileError;
use crate::params::ParamConstraint;
use http::Method;
use indexmap::IndexMap;
use std::collections::HashSet;

/// How the dispatcher must authenticate requests hitting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Standard enforcement: the request must authenticate and carry the
    /// entry's scopes.
    Required,
    /// Synthesized preflight entries: exempt from standard auth enforcement,
    /// still scope-tagged for observability.
    PreflightExempt,
}

/// One compiled, routable unit. Created exactly once per (path, method) pair
/// during compilation and immutable afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchEntry {
    /// Globally unique entry name (`api_<operationId>`, preflights suffixed
    /// with `_options`).
    pub name: String,
    pub path: String,
    pub method: Method,
    /// Opaque controller reference from the binding registry.
    pub handler: String,
    pub operation_id: String,
    /// Required scopes; never empty.
    pub scopes: Vec<String>,
    pub auth: AuthPolicy,
    /// `x-no-token`: exempt from token enforcement, still scope-checked.
    pub no_token: bool,
    /// Name of the request-body parameter, if one is declared.
    pub body_param: Option<String>,
    /// Path-parameter match constraints, keyed by parameter name.
    pub constraints: IndexMap<String, ParamConstraint>,
    pub cache: Option<CacheDirective>,
}

impl DispatchEntry {
    /// Whether this is a synthesized cross-origin preflight entry.
    #[must_use]
    pub fn is_preflight(&self) -> bool {
        self.auth == AuthPolicy::PreflightExempt
    }
}

/// Ordered, name-unique collection of dispatch entries — the sole artifact
/// handed to the dispatcher. Immutable once compilation finishes; share it
/// read-only and swap the whole table to pick up a recompiled spec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingTable {
    entries: Vec<DispatchEntry>,
    names: HashSet<String>,
}

impl RoutingTable {
    /// Append an entry, enforcing global name uniqueness.
    pub(crate) fn insert(&mut self, entry: DispatchEntry) -> Result<(), CompileError> {
        if !self.names.insert(entry.name.clone()) {
            return Err(CompileError::DuplicateOperation {
                name: entry.name,
                operation_id: entry.operation_id,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in compilation order.
    #[must_use]
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// Look up one entry by its unique name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DispatchEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DispatchEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = &'a DispatchEntry;
    type IntoIter = std::slice::Iter<'a, DispatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
