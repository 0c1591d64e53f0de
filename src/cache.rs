//! Cache metadata derivation from the `x-cache-ttl` spec extension.

use crate::error::CompileError;
use crate::params;
use crate::spec::Operation;
use http::Method;
use serde_json::Value;

/// Caching directive attached to a dispatch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDirective {
    pub ttl_seconds: u64,
    /// Every declared parameter name of the operation, in declaration order.
    /// The cache key is derived from the full parameter list, body parameter
    /// included, not a curated subset.
    pub key_params: Vec<String>,
}

/// Build the cache directive for an operation, if it declares one.
///
/// Only safe read-only operations may be cached: a TTL on anything but `GET`
/// is rejected, as is a TTL that is not a strictly positive integer number
/// of seconds.
pub fn cache_directive(
    operation_id: &str,
    method: &Method,
    operation: &Operation,
) -> Result<Option<CacheDirective>, CompileError> {
    let Some(raw_ttl) = operation.cache_ttl.as_ref() else {
        return Ok(None);
    };

    if *method != Method::GET {
        return Err(CompileError::InvalidCacheConfiguration {
            operation_id: operation_id.to_string(),
            reason: format!("cache TTL declared on non-GET method {method}"),
        });
    }

    let ttl_seconds = parse_ttl(raw_ttl).ok_or_else(|| CompileError::InvalidCacheConfiguration {
        operation_id: operation_id.to_string(),
        reason: format!("TTL value {raw_ttl} is not a positive integer number of seconds"),
    })?;

    Ok(Some(CacheDirective {
        ttl_seconds,
        key_params: params::parameter_names(operation),
    }))
}

/// Accepts a JSON number or a numeric string; anything that is not a
/// strictly positive integer yields `None`.
fn parse_ttl(value: &Value) -> Option<u64> {
    let ttl = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    (ttl > 0).then_some(ttl)
}
