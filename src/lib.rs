//! Translate OpenAPI-style `components/schemas` mappings into TypeScript
//! interface and type-alias declarations.
//!
//! ```
//! use schema_ts::{generate, Config, Schemas};
//!
//! let schemas: Schemas = serde_json::from_str(r#"{
//!     "widget": {
//!         "type": "object",
//!         "required": ["id"],
//!         "properties": {
//!             "id": { "type": "string" },
//!             "tag": { "type": "string", "nullable": true }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let out = generate(&schemas, &Config::default());
//! assert_eq!(out.to_string(), "interface Widget {\n    id: string\n    tag?: string | null\n}\n");
//! ```
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ir;
pub mod jq_exec;
pub mod load;
pub mod naming;
pub mod schema;

pub use codegen::{generate, primitive_type, Block, Generated};
pub use config::{Config, NestedObjects, ERROR_SENTINEL};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{GenerateError, LoadError};
pub use load::Selection;
pub use schema::{Schema, Schemas};

/// Load the mapping out of a JSON document and translate it.
pub fn generate_from_str(
    source: &str,
    selection: &Selection,
    config: &Config,
) -> Result<Generated, LoadError> {
    let schemas = load::schemas_from_str(source, selection)?;
    Ok(generate(&schemas, config))
}
