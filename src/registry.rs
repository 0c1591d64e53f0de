//! Operation binding registry.
//!
//! Bindings are authored independently of the API specification, usually as
//! one or more flat files mapping `operationId` to the controller that
//! implements it. The registry merges those sources into a single lookup
//! table; validating that every referenced operation is actually bound is the
//! compiler's job, because only the compiler knows which identifiers the
//! specification references.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// One binding record. Extra fields in the source are ignored; only the
/// controller reference matters here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Binding {
    pub controller: String,
}

/// One binding source: `operationId` → binding, in file order.
pub type BindingSource = IndexMap<String, Binding>;

/// Merged view over all binding sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingRegistry {
    bindings: HashMap<String, String>,
}

impl BindingRegistry {
    /// Merge sources in the given order, last write wins: a later source may
    /// override a controller bound by an earlier one.
    #[must_use]
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = BindingSource>,
    {
        let mut bindings = HashMap::new();
        for source in sources {
            for (operation_id, binding) in source {
                bindings.insert(operation_id, binding.controller);
            }
        }
        BindingRegistry { bindings }
    }

    /// Controller bound to the given operation, if any.
    #[must_use]
    pub fn controller(&self, operation_id: &str) -> Option<&str> {
        self.bindings.get(operation_id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
