//! Registry type definitions for component overrides.

use serde::{Deserialize, Serialize};

fn default_export_type() -> String {
    "named".to_string()
}

/// A custom renderer, identified by name and import location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomComponent {
    /// Component name (e.g., "Heading", "CodeBlock").
    pub name: String,
    /// Module path for import (e.g., "@/components/markdown").
    pub module_path: String,
    /// Export type: "named" or "default".
    #[serde(default = "default_export_type")]
    pub export_type: String,
}

impl CustomComponent {
    /// Creates a named export reference.
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            export_type: default_export_type(),
        }
    }
}

/// What a tag name is overridden with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    /// A primitive UI tag, possibly different from the source tag.
    Primitive(String),
    /// The fragment placeholder; renders only its children.
    Fragment,
    /// A custom renderer.
    Custom(CustomComponent),
    /// A configured value the host cannot render, kept for error reporting.
    Unrenderable(String),
}

impl ComponentRef {
    /// Whether the host can render this reference.
    pub fn is_renderable(&self) -> bool {
        match self {
            ComponentRef::Primitive(tag) => is_tag_name(tag),
            ComponentRef::Fragment => true,
            ComponentRef::Custom(custom) => !custom.name.trim().is_empty(),
            ComponentRef::Unrenderable(_) => false,
        }
    }
}

/// Declarative override value as it appears in configuration.
///
/// A string names a primitive tag (`"Fragment"` names the fragment
/// placeholder); an object names a custom renderer. Any other JSON shape is
/// accepted here and reported as unrenderable when the tag is projected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ComponentSpec {
    /// `"h2"`, `"Fragment"`.
    Tag(String),
    /// `{ "name": "Heading", "modulePath": "..." }`.
    Custom(CustomComponent),
    /// Anything else.
    Other(serde_json::Value),
}

impl From<ComponentSpec> for ComponentRef {
    fn from(spec: ComponentSpec) -> Self {
        match spec {
            ComponentSpec::Tag(tag) if tag == "Fragment" => ComponentRef::Fragment,
            ComponentSpec::Tag(tag) => ComponentRef::Primitive(tag),
            ComponentSpec::Custom(custom) => ComponentRef::Custom(custom),
            ComponentSpec::Other(value) => ComponentRef::Unrenderable(value.to_string()),
        }
    }
}

/// Tag names the host accepts as primitives: an ASCII letter followed by
/// letters, digits, `-`, `.` or `:`.
pub fn is_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':'))
        }
        _ => false,
    }
}
