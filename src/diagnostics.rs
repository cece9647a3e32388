//! Non-fatal findings collected while generating.
use std::fmt;

use crate::error::GenerateError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Dotted location inside the schema mapping, e.g. `widget.properties.tag.anyOf[1]`.
    pub path: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Node matched none of the recognized shapes; it is omitted from output.
    Unclassifiable { schema: String },
    /// Enum literal that has no type-level spelling (object or array).
    UnsupportedLiteral { literal: String },
    /// Top-level entry that is not an object or union.
    NotDeclarable { schema: String },
    /// The entry hit a fatal error and produced no output.
    Aborted(GenerateError),
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self { path: path.into(), kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Unclassifiable { schema } => {
                write!(f, "{}: unknown schema type, skipped: {schema}", self.path)
            }
            DiagnosticKind::UnsupportedLiteral { literal } => {
                write!(f, "{}: enum literal {literal} has no type form, skipped", self.path)
            }
            DiagnosticKind::NotDeclarable { schema } => {
                write!(f, "{}: top-level schema is not an object or anyOf, skipped: {schema}", self.path)
            }
            DiagnosticKind::Aborted(error) => write!(f, "{}: {error}", self.path),
        }
    }
}
