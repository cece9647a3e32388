//! Input model: the `components/schemas` mapping of an OpenAPI-ish document.
//!
//! Nodes keep their raw markers; deciding what a node *is* happens in
//! [`crate::ir::classify`]. Nothing here is validated beyond what serde needs
//! to read the shape.
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Root mapping from schema name to schema node, in document order.
pub type Schemas = IndexMap<String, Schema>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Kept as a raw value so `type: ["string", "null"]` degrades to a
    /// diagnostic instead of failing the whole document.
    #[serde(rename = "type")]
    pub type_: Option<Value>,

    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,

    pub any_of: Option<Vec<Schema>>,

    pub items: Option<Box<Schema>>,

    pub properties: Option<IndexMap<String, Schema>>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub nullable: bool,

    pub title: Option<String>,

    pub description: Option<String>,
}

impl Schema {
    /// The `type` marker, when it is a plain string.
    pub fn type_name(&self) -> Option<&str> {
        self.type_.as_ref().and_then(Value::as_str)
    }

    /// Optionality is decided by membership in the parent's `required` list.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }

    /// Compact JSON rendering used in diagnostics.
    pub fn snippet(&self) -> String {
        let mut map = serde_json::Map::new();
        if let Some(t) = &self.type_ { map.insert("type".into(), t.clone()); }
        if let Some(r) = &self.ref_path { map.insert("$ref".into(), Value::from(r.clone())); }
        if let Some(e) = &self.enum_values { map.insert("enum".into(), Value::Array(e.clone())); }
        if let Some(a) = &self.any_of { map.insert("anyOf".into(), Value::from(format!("[{} alternatives]", a.len()))); }
        if self.items.is_some() { map.insert("items".into(), Value::from("{..}")); }
        if let Some(p) = &self.properties {
            let keys = p.keys().cloned().map(Value::from).collect::<Vec<_>>();
            map.insert("properties".into(), Value::Array(keys));
        }
        if let Some(t) = &self.title { map.insert("title".into(), Value::from(t.clone())); }
        Value::Object(map).to_string()
    }
}
