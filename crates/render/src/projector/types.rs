//! Output types of the projector.

use crate::registry::Component;
use crate::style::StyleMap;
use mdview_core::hast::{Element, Position};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A resolved property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue<'a> {
    /// Explicit null (`checked` on a list item without a checkbox).
    Null,
    /// Boolean.
    Bool(bool),
    /// Number.
    Number(f64),
    /// String.
    String(String),
    /// Parsed inline style.
    Style(StyleMap),
    /// Raw source position.
    Position(&'a Position),
    /// The source element, for custom renderers.
    Node(&'a Element),
}

impl<'a> PropValue<'a> {
    /// Returns the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the style declarations if this is a style value.
    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            PropValue::Style(style) => Some(style),
            _ => None,
        }
    }
}

impl From<&str> for PropValue<'_> {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue<'_> {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue<'_> {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<usize> for PropValue<'_> {
    fn from(value: usize) -> Self {
        PropValue::Number(value as f64)
    }
}

impl Serialize for PropValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(value) => serializer.serialize_bool(*value),
            PropValue::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                serializer.serialize_i64(*value as i64)
            }
            PropValue::Number(value) => serializer.serialize_f64(*value),
            PropValue::String(value) => serializer.serialize_str(value),
            PropValue::Style(style) => {
                let mut map = serializer.serialize_map(Some(style.len()))?;
                for (name, value) in style {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            PropValue::Position(position) => position.serialize(serializer),
            PropValue::Node(element) => element.serialize(serializer),
        }
    }
}

/// Ordered props of one UI element.
///
/// Names are unique; `insert` replaces in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props<'a> {
    entries: Vec<(String, PropValue<'a>)>,
}

impl<'a> Props<'a> {
    /// Creates an empty prop map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a prop by name.
    pub fn get(&self, name: &str) -> Option<&PropValue<'a>> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Mutable access to a prop.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PropValue<'a>> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Inserts or replaces a prop.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue<'a>>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes a prop, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropValue<'a>> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true if the prop is set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue<'a>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no prop is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Props<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One element of the output tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiElement<'a> {
    /// What renders this element.
    pub component: Component<'a>,
    /// Resolved props, including `key`.
    pub props: Props<'a>,
    /// Children; `None` when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<UiNode<'a>>>,
}

impl<'a> UiElement<'a> {
    /// The `key` prop.
    pub fn key(&self) -> Option<&str> {
        self.props.get("key").and_then(PropValue::as_str)
    }

    /// Children, or an empty slice.
    pub fn children(&self) -> &[UiNode<'a>] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Element children only.
    pub fn elements(&self) -> impl Iterator<Item = &UiElement<'a>> {
        self.children().iter().filter_map(UiNode::as_element)
    }
}

/// A child in the output tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UiNode<'a> {
    /// A nested element.
    Element(UiElement<'a>),
    /// Literal text (or raw HTML when it is not skipped).
    Text(&'a str),
}

impl<'a> UiNode<'a> {
    /// Returns the element if this is one.
    pub fn as_element(&self) -> Option<&UiElement<'a>> {
        match self {
            UiNode::Element(element) => Some(element),
            UiNode::Text(_) => None,
        }
    }

    /// Returns the text if this is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            UiNode::Text(text) => Some(text),
            UiNode::Element(_) => None,
        }
    }
}
