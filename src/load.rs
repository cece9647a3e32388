//! Input documents → schema mapping.
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::schema::Schemas;

pub const DEFAULT_POINTER: &str = "/components/schemas";

/// Which part of a document holds the schema mapping.
#[derive(Debug, Clone)]
pub struct Selection {
    /// JSON Pointer to the mapping; empty selects the whole document.
    pub pointer: String,
    /// jq filter applied instead of the pointer. Must yield exactly one value.
    pub jq_expr: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self { pointer: DEFAULT_POINTER.to_string(), jq_expr: None }
    }
}

pub fn schemas_from_path(path: &Path, selection: &Selection) -> Result<Schemas, LoadError> {
    let source = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = source.len(), "read input");
    schemas_from_str(&source, selection)
}

pub fn schemas_from_str(source: &str, selection: &Selection) -> Result<Schemas, LoadError> {
    let document = serde_json::from_str::<Value>(source)?;
    schemas_from_value(document, selection)
}

pub fn schemas_from_value(mut document: Value, selection: &Selection) -> Result<Schemas, LoadError> {
    let selected = match &selection.jq_expr {
        Some(jq_expr) => {
            let mut outputs = crate::jq_exec::run_jaq(jq_expr, &document)?;
            if outputs.len() != 1 {
                return Err(LoadError::JqArity(outputs.len()));
            }
            outputs.remove(0)
        }
        None => document
            .pointer_mut(&selection.pointer)
            .map(Value::take)
            .ok_or_else(|| LoadError::PointerNotFound(selection.pointer.clone()))?,
    };
    from_value_with_path(selected)
}

/// Deserialize with JSON-path context in error messages.
fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, LoadError> {
    serde_path_to_error::deserialize(value).map_err(|err| LoadError::Schema {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

/// Literal paths pass through; anything with glob characters is expanded and must match.
pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, LoadError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }

        let pattern_error = |message: String| LoadError::Pattern {
            pattern: pattern.to_string(),
            message,
        };
        let entries = glob::glob(pattern).map_err(|e| pattern_error(e.to_string()))?;
        let before = out.len();
        for entry in entries {
            out.push(entry.map_err(|e| pattern_error(e.to_string()))?);
        }
        if out.len() == before {
            return Err(pattern_error("matched no files".to_string()));
        }
    }

    Ok(out)
}
