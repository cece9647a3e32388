// Classified view over `schema::Schema`. Borrowed, never owns the document.

use indexmap::IndexMap;
use serde_json::Value;

use crate::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Number,  // `number` and `integer`
    String,
}

impl Primitive {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "number" | "integer" => Some(Self::Number),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    pub fn as_ts(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Enum(&'a [Value]),
    Primitive(Primitive),
    Reference(&'a str),          // raw `$ref` pointer
    Union(&'a [Schema]),
    Array(Option<&'a Schema>),   // None => unconstrained items
    FreeformMap,
    TitledObject { title: &'a str, fields: &'a IndexMap<String, Schema> },
    Object(&'a IndexMap<String, Schema>),
}

impl Node<'_> {
    /// Nodes that the declaration renderer accepts.
    pub fn is_declarable(&self) -> bool {
        matches!(self, Node::Object(_) | Node::TitledObject { .. } | Node::Union(_))
    }
}

/// Marker inspection in fixed priority:
/// enum → primitive → reference → union → array → free-form map → titled object → object.
///
/// `None` means the node carries none of the recognized markers.
pub fn classify(schema: &Schema) -> Option<Node<'_>> {
    if let Some(values) = &schema.enum_values {
        return Some(Node::Enum(values));
    }
    if let Some(p) = schema.type_name().and_then(Primitive::from_type_name) {
        return Some(Node::Primitive(p));
    }
    if let Some(ptr) = &schema.ref_path {
        return Some(Node::Reference(ptr));
    }
    if let Some(alts) = &schema.any_of {
        return Some(Node::Union(alts));
    }
    match schema.type_name() {
        Some("array") => Some(Node::Array(schema.items.as_deref())),
        Some("object") => match (&schema.properties, &schema.title) {
            (None, _) => Some(Node::FreeformMap),
            (Some(fields), Some(title)) => Some(Node::TitledObject { title, fields }),
            (Some(fields), None) => Some(Node::Object(fields)),
        },
        _ => None,
    }
}
