//! Document tree model (HTML abstract syntax tree).
//!
//! This is the tree the parser pipeline produces, the filter rewrites, and
//! the projector walks. Property names follow the DOM property convention
//! (`className`, `htmlFor`, `dataFoo`) like the rest of the unified
//! ecosystem's trees do.

use serde::Serialize;
use serde::ser::SerializeMap;

/// A point in the markdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset (0-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    /// Creates a point without offset information.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: None,
        }
    }
}

/// A span in the markdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Start of the span (inclusive)
    pub start: Point,
    /// End of the span (exclusive)
    pub end: Point,
}

impl Position {
    /// Creates a position from two line/column pairs.
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
        }
    }
}

impl From<&markdown::unist::Position> for Position {
    fn from(position: &markdown::unist::Position) -> Self {
        Self {
            start: Point {
                line: position.start.line,
                column: position.start.column,
                offset: Some(position.start.offset),
            },
            end: Point {
                line: position.end.line,
                column: position.end.column,
                offset: Some(position.end.offset),
            },
        }
    }
}

/// One item of a list-valued property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListValue {
    /// String token.
    String(String),
    /// Numeric token.
    Number(f64),
}

impl std::fmt::Display for ListValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListValue::String(value) => f.write_str(value),
            ListValue::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

/// Value of an element property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Explicitly empty value; never projected.
    Null,
    /// Boolean attribute (`checked`, `disabled`).
    Bool(bool),
    /// Numeric attribute (`start`, `colSpan`).
    Number(f64),
    /// Plain string attribute.
    String(String),
    /// Space- or comma-separated token list (`className`).
    List(Vec<ListValue>),
}

impl PropertyValue {
    /// Builds a list value from string tokens.
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::List(
            tokens
                .into_iter()
                .map(|token| ListValue::String(token.into()))
                .collect(),
        )
    }

    /// Returns the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// JavaScript-style truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::Bool(value) => *value,
            PropertyValue::Number(value) => *value != 0.0 && !value.is_nan(),
            PropertyValue::String(value) => !value.is_empty(),
            PropertyValue::List(_) => true,
        }
    }

    /// Returns true for values that are dropped during projection (null, NaN).
    pub fn is_nullish(&self) -> bool {
        match self {
            PropertyValue::Null => true,
            PropertyValue::Number(value) => value.is_nan(),
            _ => false,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

/// Formats a number the way `String(number)` does in JavaScript for the
/// values that show up in attributes.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Ordered property mapping of an element.
///
/// Names are unique; the producer is responsible for that, so `insert`
/// replaces in place and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    /// Creates an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `name`.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Sets `name`, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

impl Serialize for Properties {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Root {
    /// Top-level content.
    pub children: Vec<Node>,
    /// Source span, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An element such as `<p>` or `<svg>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lowercase tag name.
    pub tag_name: String,
    /// Properties in source order.
    pub properties: Properties,
    /// Child content.
    pub children: Vec<Node>,
    /// Source span; absent for nodes created by transforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Element {
    /// Creates an element with no properties, children, or position.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
            position: None,
        }
    }

    /// Adds a property.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Sets the source position.
    pub fn with_position(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }

    /// Returns the first direct element child with the given tag name.
    pub fn find_child(&self, tag_name: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(element) if element.tag_name == tag_name => Some(element),
            _ => None,
        })
    }
}

/// Plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    /// Text content.
    pub value: String,
}

/// Unprocessed embedded markup (raw HTML in markdown).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raw {
    /// Markup as written in the source.
    pub value: String,
}

/// HTML comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Comment content.
    pub value: String,
}

/// Any node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Document root.
    Root(Root),
    /// Element.
    Element(Element),
    /// Text.
    Text(Text),
    /// Raw markup.
    Raw(Raw),
    /// Comment.
    Comment(Comment),
    /// Document type declaration.
    Doctype,
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Creates a raw node.
    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(Raw {
            value: value.into(),
        })
    }

    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            position: None,
        })
    }

    /// Name of the node type, as used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Raw(_) => "raw",
            Node::Comment(_) => "comment",
            Node::Doctype => "doctype",
        }
    }

    /// Children of parent nodes.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    /// Mutable children of parent nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Element(element) => Some(&mut element.children),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Borrowed parent of a node during a walk.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    /// The document root.
    Root(&'a Root),
    /// An element.
    Element(&'a Element),
}

impl<'a> Parent<'a> {
    /// Children of the parent.
    pub fn children(&self) -> &'a [Node] {
        match *self {
            Parent::Root(root) => &root.children,
            Parent::Element(element) => &element.children,
        }
    }

    /// The parent element, if the parent is not the root.
    pub fn element(&self) -> Option<&'a Element> {
        match *self {
            Parent::Root(_) => None,
            Parent::Element(element) => Some(element),
        }
    }

    /// Tag name of the parent element.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.element().map(|element| element.tag_name.as_str())
    }

    /// Number of element children before `index`.
    pub fn elements_before(&self, index: usize) -> usize {
        self.children()
            .iter()
            .take(index)
            .filter(|child| matches!(child, Node::Element(_)))
            .count()
    }

    /// Total number of element children.
    pub fn element_count(&self) -> usize {
        self.elements_before(usize::MAX)
    }
}
