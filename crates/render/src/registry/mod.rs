//! Component override registry.
//!
//! Maps source tag names to the component that renders them. Tags without
//! an override render as the primitive of the same name.

pub mod types;

pub use types::{ComponentRef, ComponentSpec, CustomComponent, is_tag_name};

use mdview_core::MdviewError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A resolved component, borrowed from the registry or the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component<'a> {
    /// A primitive UI tag.
    Primitive(&'a str),
    /// The fragment placeholder.
    Fragment,
    /// A custom renderer.
    Custom(&'a CustomComponent),
}

impl Component<'_> {
    /// Primitives and fragments are "basic": they receive no derived props.
    pub fn is_basic(&self) -> bool {
        !matches!(self, Component::Custom(_))
    }
}

impl Serialize for Component<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Component::Primitive(tag) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("kind", "primitive")?;
                map.serialize_entry("name", tag)?;
                map.end()
            }
            Component::Fragment => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", "fragment")?;
                map.end()
            }
            Component::Custom(custom) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("kind", "custom")?;
                map.serialize_entry("name", &custom.name)?;
                map.serialize_entry("modulePath", &custom.module_path)?;
                map.serialize_entry("exportType", &custom.export_type)?;
                map.end()
            }
        }
    }
}

/// Tag name → override table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    overrides: HashMap<String, ComponentRef>,
}

impl Components {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override, replacing any previous one for the tag.
    pub fn insert(&mut self, tag_name: impl Into<String>, component: ComponentRef) {
        self.overrides.insert(tag_name.into(), component);
    }

    /// Builder form of [`Components::insert`].
    pub fn with(mut self, tag_name: impl Into<String>, component: ComponentRef) -> Self {
        self.insert(tag_name, component);
        self
    }

    /// The override for a tag, if any.
    pub fn get(&self, tag_name: &str) -> Option<&ComponentRef> {
        self.overrides.get(tag_name)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns true when no override is registered.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Resolves the component for a tag.
    ///
    /// A tag without an override renders as itself, whatever its spelling.
    /// Fails with [`MdviewError::ComponentNotRenderable`] when a configured
    /// override is not renderable.
    pub fn resolve<'a>(&'a self, tag_name: &'a str) -> Result<Component<'a>, MdviewError> {
        let component = match self.overrides.get(tag_name) {
            None => Component::Primitive(tag_name),
            Some(reference) if !reference.is_renderable() => {
                return Err(MdviewError::not_renderable(tag_name));
            }
            Some(ComponentRef::Primitive(tag)) => Component::Primitive(tag),
            Some(ComponentRef::Fragment) => Component::Fragment,
            Some(ComponentRef::Custom(custom)) => Component::Custom(custom),
            Some(ComponentRef::Unrenderable(_)) => {
                return Err(MdviewError::not_renderable(tag_name));
            }
        };
        Ok(component)
    }
}

impl<K: Into<String>> FromIterator<(K, ComponentRef)> for Components {
    fn from_iter<I: IntoIterator<Item = (K, ComponentRef)>>(iter: I) -> Self {
        Self {
            overrides: iter
                .into_iter()
                .map(|(tag, component)| (tag.into(), component))
                .collect(),
        }
    }
}
