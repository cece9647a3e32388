//! Schema mapping → TypeScript-style declarations.
//!
//! Two renderers share the classifier in [`crate::ir`]:
//! - `declare` writes a named `interface` / `type` for objects and unions;
//! - `expression` writes an inline type expression for any node, hoisting
//!   nested objects into their own declarations where required.
//!
//! Hoisted declarations are pushed onto a collector that lives for exactly
//! one top-level entry; they are emitted ahead of that entry's own declaration.
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::config::{Config, NestedObjects};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::GenerateError;
use crate::ir::{classify, Node, Primitive};
use crate::naming::{property_key, reference_name, synthesized_name, title_case};
use crate::schema::{Schema, Schemas};

const UNCONSTRAINED_ARRAY: &str = "any[]";
const FREEFORM_MAP: &str = "{ [key: string]: string }";
const EMPTY_UNION: &str = "never";

// ————————————————————————————————————————————————————————————————————————————
// OUTPUT
// ————————————————————————————————————————————————————————————————————————————

/// Output for one top-level entry: hoisted declarations first, the entry's own last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub declarations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub blocks: Vec<Block>,
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&block.declarations.join("\n"))?;
        }
        Ok(())
    }
}

/// Per-entry scratch state. Discarded once the entry's block is built.
#[derive(Debug, Default)]
struct Collector {
    root: String,
    extra: Vec<String>,
    /// Hoisted name → its rendered declaration.
    declared: IndexMap<String, String>,
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    fn for_root(root: &str) -> Self {
        Self { root: root.to_string(), ..Self::default() }
    }

    fn report(&mut self, path: &str, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(path, kind));
    }

    fn collision(name: &str, path: &str) -> GenerateError {
        GenerateError::NameCollision { name: name.to_string(), path: path.to_string() }
    }

    /// The root name can never be hoisted.
    fn check_root(&self, name: &str, path: &str) -> Result<(), GenerateError> {
        if self.root == name { Err(Self::collision(name, path)) } else { Ok(()) }
    }

    /// Record a hoisted declaration. A name seen again with the same body is the
    /// same shape reused and is emitted once; a different body is a collision.
    fn admit(&mut self, name: &str, declaration: String, path: &str) -> Result<(), GenerateError> {
        match self.declared.get(name) {
            Some(earlier) if *earlier == declaration => Ok(()),
            Some(_) => Err(Self::collision(name, path)),
            None => {
                self.declared.insert(name.to_string(), declaration.clone());
                self.extra.push(declaration);
                Ok(())
            }
        }
    }
}

/// Where the renderer currently is: a diagnostic path plus the name a nested
/// untitled object would get if it had to be hoisted.
#[derive(Debug, Clone)]
struct Site {
    path: String,
    hint: String,
}

impl Site {
    fn root(key: &str, name: &str) -> Self {
        Self { path: key.to_string(), hint: name.to_string() }
    }

    fn field(&self, key: &str, owner: &str) -> Self {
        Self {
            path: format!("{}.properties.{key}", self.path),
            hint: synthesized_name(owner, key),
        }
    }

    fn items(&self) -> Self {
        Self { path: format!("{}.items", self.path), hint: self.hint.clone() }
    }

    fn alternative(&self, index: usize) -> Self {
        Self {
            path: format!("{}.anyOf[{index}]", self.path),
            hint: synthesized_name(&self.hint, &format!("option_{}", index + 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Expr {
    text: String,
    union: bool,
}

impl Expr {
    fn atom(text: impl Into<String>) -> Self {
        Self { text: text.into(), union: false }
    }

    fn union_of(mut arms: Vec<String>) -> Self {
        match arms.len() {
            0 => Self::atom(EMPTY_UNION),
            1 => Self::atom(arms.remove(0)),
            _ => Self { text: arms.join(" | "), union: true },
        }
    }

    fn or_null(self, nullable: bool) -> Self {
        if nullable {
            Self { text: format!("{} | null", self.text), union: true }
        } else {
            self
        }
    }

    /// Array element position: unions need parentheses to stay unions of elements.
    fn as_element(&self) -> String {
        if self.union { format!("({})", self.text) } else { self.text.clone() }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DRIVER
// ————————————————————————————————————————————————————————————————————————————

/// Translate every entry of the mapping, in document order.
///
/// The `error` sentinel and any configured skip names are left out. Entries that
/// are not objects or unions, and entries that hit a fatal error, produce a
/// diagnostic instead of a block; everything else is still emitted.
pub fn generate(schemas: &Schemas, config: &Config) -> Generated {
    let cg = Codegen::new(config);
    let mut out = Generated::default();

    for (key, schema) in schemas {
        if config.is_skipped(key) {
            debug!(entry = %key, "skipping reserved entry");
            continue;
        }
        if !classify(schema).is_some_and(|node| node.is_declarable()) {
            out.diagnostics.push(Diagnostic::new(
                key.as_str(),
                DiagnosticKind::NotDeclarable { schema: schema.snippet() },
            ));
            continue;
        }

        let name = title_case(key);
        let mut collector = Collector::for_root(&name);
        let result = cg.declare(&name, schema, &Site::root(key, &name), &mut collector);
        out.diagnostics.append(&mut collector.diagnostics);

        match result {
            Ok(declaration) => {
                debug!(entry = %key, name = %name, hoisted = collector.extra.len(), "declared");
                let mut declarations = collector.extra;
                declarations.push(declaration);
                out.blocks.push(Block { name, declarations });
            }
            Err(error) => {
                out.diagnostics.push(Diagnostic::new(key.as_str(), DiagnosticKind::Aborted(error)));
            }
        }
    }

    out
}

/// The underlying type name of a primitive node.
pub fn primitive_type(schema: &Schema) -> Result<&'static str, GenerateError> {
    schema
        .type_name()
        .and_then(Primitive::from_type_name)
        .map(Primitive::as_ts)
        .ok_or_else(|| GenerateError::NotPrimitive { schema: schema.snippet() })
}

// ————————————————————————————————————————————————————————————————————————————
// RENDERERS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy)]
struct Codegen<'c> {
    config: &'c Config,
}

impl<'c> Codegen<'c> {
    fn new(config: &'c Config) -> Self {
        Self { config }
    }

    fn keyword(&self, keyword: &str) -> String {
        if self.config.export { format!("export {keyword}") } else { keyword.to_string() }
    }

    /// Named declaration for an object or union node.
    fn declare(
        &self,
        name: &str,
        schema: &Schema,
        at: &Site,
        out: &mut Collector,
    ) -> Result<String, GenerateError> {
        match classify(schema) {
            Some(Node::Object(fields) | Node::TitledObject { fields, .. }) => {
                self.interface(name, schema, fields, at, out)
            }
            Some(Node::Union(alternatives)) => {
                let body = self
                    .union(alternatives, at, out)?
                    .unwrap_or_else(|| Expr::atom(EMPTY_UNION))
                    .or_null(schema.nullable);
                Ok(format!("{} {name} = {}\n", self.keyword("type"), body.text))
            }
            _ => Err(GenerateError::NotDeclarable { name: name.to_string() }),
        }
    }

    fn interface(
        &self,
        name: &str,
        owner: &Schema,
        fields: &IndexMap<String, Schema>,
        at: &Site,
        out: &mut Collector,
    ) -> Result<String, GenerateError> {
        let indent = &self.config.indent;
        let mut lines = Vec::with_capacity(fields.len());

        for (key, field) in fields {
            let Some(expr) = self.expression(field, &at.field(key, name), out)? else {
                continue;
            };
            if self.config.descriptions && let Some(text) = &field.description {
                lines.extend(doc_comment(text, indent));
            }
            let marker = if owner.is_required(key) { "" } else { "?" };
            lines.push(format!("{indent}{}{marker}: {}", property_key(key), expr.text));
        }

        let head = format!("{} {name}", self.keyword("interface"));
        if lines.is_empty() {
            Ok(format!("{head} {{}}\n"))
        } else {
            Ok(format!("{head} {{\n{}\n}}\n", lines.join("\n")))
        }
    }

    /// Inline type expression. `Ok(None)` means the node was reported and left out.
    fn expression(
        &self,
        schema: &Schema,
        at: &Site,
        out: &mut Collector,
    ) -> Result<Option<Expr>, GenerateError> {
        let Some(node) = classify(schema) else {
            out.report(&at.path, DiagnosticKind::Unclassifiable { schema: schema.snippet() });
            return Ok(None);
        };

        let expr = match node {
            Node::Enum(values) => literal_union(values, at, out),
            Node::Primitive(_) => Expr::atom(primitive_type(schema)?),
            Node::Reference(ptr) => Expr::atom(reference_name(ptr)),
            Node::Union(alternatives) => match self.union(alternatives, at, out)? {
                Some(expr) => expr,
                None => return Ok(None),
            },
            Node::Array(None) => Expr::atom(UNCONSTRAINED_ARRAY),
            Node::Array(Some(items)) => {
                let Some(item) = self.expression(items, &at.items(), out)? else {
                    return Ok(None);
                };
                Expr::atom(format!("{}[]", item.as_element()))
            }
            Node::FreeformMap => Expr::atom(FREEFORM_MAP),
            Node::TitledObject { title, .. } => self.hoist(&title_case(title), schema, at, out)?,
            Node::Object(fields) => match self.config.nested_objects {
                NestedObjects::Inline => self.inline_object(schema, fields, at, out)?,
                NestedObjects::Hoist => self.hoist(&at.hint, schema, at, out)?,
            },
        };

        Ok(Some(expr.or_null(schema.nullable)))
    }

    /// `Ok(None)` when every alternative was reported and left out. An empty
    /// `anyOf` is still `never`.
    fn union(
        &self,
        alternatives: &[Schema],
        at: &Site,
        out: &mut Collector,
    ) -> Result<Option<Expr>, GenerateError> {
        let mut arms = Vec::with_capacity(alternatives.len());
        for (i, alternative) in alternatives.iter().enumerate() {
            if let Some(expr) = self.expression(alternative, &at.alternative(i), out)? {
                arms.push(expr.text);
            }
        }
        if arms.is_empty() && !alternatives.is_empty() {
            return Ok(None);
        }
        Ok(Some(Expr::union_of(arms)))
    }

    fn hoist(
        &self,
        name: &str,
        schema: &Schema,
        at: &Site,
        out: &mut Collector,
    ) -> Result<Expr, GenerateError> {
        out.check_root(name, &at.path)?;
        let declaration = self.declare(name, schema, at, out)?;
        out.admit(name, declaration, &at.path)?;
        Ok(Expr::atom(name))
    }

    fn inline_object(
        &self,
        owner: &Schema,
        fields: &IndexMap<String, Schema>,
        at: &Site,
        out: &mut Collector,
    ) -> Result<Expr, GenerateError> {
        let mut members = Vec::with_capacity(fields.len());
        for (key, field) in fields {
            if let Some(expr) = self.expression(field, &at.field(key, &at.hint), out)? {
                let marker = if owner.is_required(key) { "" } else { "?" };
                members.push(format!("{}{marker}: {}", property_key(key), expr.text));
            }
        }
        if members.is_empty() {
            Ok(Expr::atom("{}"))
        } else {
            Ok(Expr::atom(format!("{{ {} }}", members.join("; "))))
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn literal_union(values: &[Value], at: &Site, out: &mut Collector) -> Expr {
    let mut arms = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        match value {
            Value::Array(_) | Value::Object(_) => out.report(
                &format!("{}.enum[{i}]", at.path),
                DiagnosticKind::UnsupportedLiteral { literal: value.to_string() },
            ),
            // strings come out JSON-quoted, which is also a valid TS literal
            _ => arms.push(value.to_string()),
        }
    }
    Expr::union_of(arms)
}

fn doc_comment(text: &str, indent: &str) -> Vec<String> {
    let mut lines = vec![format!("{indent}/**")];
    for line in text.trim_end().lines() {
        let line = line.trim_end().replace("*/", "*\\/");
        if line.is_empty() {
            lines.push(format!("{indent} *"));
        } else {
            lines.push(format!("{indent} * {line}"));
        }
    }
    lines.push(format!("{indent} */"));
    lines
}
