use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Where a declared parameter lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    Header,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Body => write!(f, "body"),
            ParameterLocation::Header => write!(f, "header"),
        }
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Primitive type name as declared in the spec (`integer`, `string`, ...).
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// One security requirement alternative: requirement kind → scope list.
///
/// Order-preserving because scope order may carry precedence meaning
/// downstream and is returned verbatim by the resolver.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// One operation (a single path + method pair) as declared in the spec.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Requirement alternatives in declaration order; empty means the
    /// operation declared no security at all.
    #[serde(default)]
    pub security: Vec<SecurityRequirement>,
    /// `x-no-token`: the operation is exempt from token enforcement but
    /// still scope-checked.
    #[serde(rename = "x-no-token", default)]
    pub no_token: bool,
    /// `x-cache-ttl`: raw extension value, validated by the cache builder.
    /// Kept loosely typed because spec authors write both `60` and `"60"`.
    #[serde(rename = "x-cache-ttl", default)]
    pub cache_ttl: Option<Value>,
}

/// The operations declared under one path template, keyed by HTTP method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub head: Option<Operation>,
    pub options: Option<Operation>,
}

impl PathItem {
    /// Iterate the declared operations in a fixed method order.
    pub fn methods(&self) -> impl Iterator<Item = (Method, &Operation)> {
        [
            (Method::GET, &self.get),
            (Method::PUT, &self.put),
            (Method::POST, &self.post),
            (Method::DELETE, &self.delete),
            (Method::PATCH, &self.patch),
            (Method::HEAD, &self.head),
            (Method::OPTIONS, &self.options),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }

    /// Number of operations declared under this path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods().next().is_none()
    }
}

/// A parsed API specification, produced by an external loader.
///
/// Read-only input to the compiler. Path order is preserved so the compiled
/// table order is deterministic and matches the authored spec.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiSpec {
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl ApiSpec {
    /// Total number of operations across all paths.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(PathItem::len).sum()
    }
}
