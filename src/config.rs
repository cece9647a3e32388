//! Generator settings.

/// Top-level name reserved for the generic error shape. Never emitted.
pub const ERROR_SENTINEL: &str = "error";

/// What happens to object schemas nested inside a declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NestedObjects {
    /// Titled objects get their own declaration; untitled ones are written inline.
    #[default]
    Inline,
    /// Every nested object gets its own declaration. Untitled ones are named
    /// after the enclosing declaration and the field (`Widget` + `extra_data`).
    Hoist,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) export: bool,
    pub(crate) indent: String,
    pub(crate) descriptions: bool,
    pub(crate) skip: Vec<String>,
    pub(crate) nested_objects: NestedObjects,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: false,
            indent: "    ".to_string(),
            descriptions: true,
            skip: Vec::new(),
            nested_objects: NestedObjects::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every declaration with `export`.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Render field descriptions as doc comments.
    pub fn descriptions(mut self, value: bool) -> Self {
        self.descriptions = value;
        self
    }

    /// Additional top-level names to leave out, on top of [`ERROR_SENTINEL`].
    pub fn skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn nested_objects(mut self, value: NestedObjects) -> Self {
        self.nested_objects = value;
        self
    }

    pub(crate) fn is_skipped(&self, name: &str) -> bool {
        name == ERROR_SENTINEL || self.skip.iter().any(|s| s == name)
    }
}
