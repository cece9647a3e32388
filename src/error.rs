use std::path::PathBuf;

use thiserror::Error;

/// Contract violations inside the renderers. Fatal for the top-level entry
/// being translated; the driver drops that entry and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("primitive rendering requested for non-primitive schema {schema}")]
    NotPrimitive { schema: String },

    #[error("`{name}` is neither an object nor an anyOf union and cannot be declared")]
    NotDeclarable { name: String },

    #[error("declaration name `{name}` is already used in this block (at {path})")]
    NameCollision { name: String, path: String },
}

/// Failures while turning input files into a schema mapping.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid schema mapping at JSON path {path} → {message}")]
    Schema { path: String, message: String },

    #[error("JSON pointer `{0}` does not resolve in the document")]
    PointerNotFound(String),

    #[error("jq filter failed: {0}")]
    Jq(String),

    #[error("jq filter produced {0} outputs; expected exactly one schema mapping")]
    JqArity(usize),

    #[error("invalid input pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },
}
