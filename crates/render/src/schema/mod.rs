//! Attribute naming schemas.
//!
//! Maps document-tree property names (or attribute names, in any case) to
//! their canonical property/attribute pair and value kind. Two schemas
//! exist: the default HTML one, and the SVG one used inside `<svg>`
//! subtrees, where names are case-sensitive and many are hyphenated.

mod html;
mod svg;

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Attribute schema in force while projecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schema {
    /// HTML documents.
    #[default]
    Html,
    /// Embedded SVG subtrees.
    Svg,
}

/// Namespace a known property belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// HTML attributes.
    Html,
    /// SVG attributes.
    Svg,
    /// `xlink:*` attributes.
    Xlink,
    /// `xml:*` attributes.
    Xml,
    /// `xmlns` attributes.
    Xmlns,
    /// `aria-*` attributes and `role`.
    Aria,
}

/// Value kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Free-form string.
    Plain,
    /// Presence attribute.
    Boolean,
    /// Either a boolean or a string (`download`).
    OverloadedBoolean,
    /// Numeric attribute.
    Number,
    /// Space-separated tokens.
    SpaceSeparated,
    /// Comma-separated tokens.
    CommaSeparated,
    /// Comma- or space-separated tokens.
    CommaOrSpaceSeparated,
}

/// A property known to a schema.
#[derive(Debug)]
pub(crate) struct Definition {
    pub(crate) property: &'static str,
    pub(crate) attribute: String,
    pub(crate) space: Space,
    pub(crate) kind: Kind,
}

impl Definition {
    pub(crate) fn new(property: &'static str, attribute: String, space: Space, kind: Kind) -> Self {
        Self {
            property,
            attribute,
            space,
            kind,
        }
    }
}

/// Resolved information about one property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo<'a> {
    /// Property name (`className`, `strokeWidth`).
    pub property: Cow<'a, str>,
    /// Attribute name (`class`, `stroke-width`).
    pub attribute: Cow<'a, str>,
    /// Namespace, for properties the schema defines.
    pub space: Option<Space>,
    /// Value kind.
    pub kind: Kind,
}

impl PropertyInfo<'_> {
    /// Whether list values join with commas rather than spaces.
    pub fn comma_separated(&self) -> bool {
        self.kind == Kind::CommaSeparated
    }
}

struct Table {
    definitions: Vec<Definition>,
    normal: HashMap<String, usize>,
}

impl Table {
    fn build(groups: Vec<Vec<Definition>>) -> Self {
        let definitions: Vec<Definition> = groups.into_iter().flatten().collect();
        let mut normal = HashMap::with_capacity(definitions.len() * 2);
        for (index, definition) in definitions.iter().enumerate() {
            normal.insert(definition.property.to_lowercase(), index);
            normal.insert(definition.attribute.to_lowercase(), index);
        }
        Self {
            definitions,
            normal,
        }
    }

    fn get(&self, name: &str) -> Option<&Definition> {
        self.normal
            .get(&name.to_lowercase())
            .map(|index| &self.definitions[*index])
    }
}

static HTML: Lazy<Table> = Lazy::new(|| {
    Table::build(vec![xml(), xlink(), xmlns(), aria(), html::definitions()])
});

static SVG: Lazy<Table> = Lazy::new(|| {
    Table::build(vec![xml(), xlink(), xmlns(), aria(), svg::definitions()])
});

/// Looks up a property or attribute name in a schema.
///
/// Unknown names come back without a space, with the name as both property
/// and attribute, except `data*` names, which are normalized between the
/// `dataFooBar` and `data-foo-bar` forms.
pub fn find(schema: Schema, name: &str) -> PropertyInfo<'_> {
    let table: &'static Table = match schema {
        Schema::Html => &HTML,
        Schema::Svg => &SVG,
    };

    if let Some(definition) = table.get(name) {
        return PropertyInfo {
            property: Cow::Borrowed(definition.property),
            attribute: Cow::Borrowed(definition.attribute.as_str()),
            space: Some(definition.space),
            kind: definition.kind,
        };
    }

    if is_data_name(name) {
        return data_info(name);
    }

    PropertyInfo {
        property: Cow::Borrowed(name),
        attribute: Cow::Borrowed(name),
        space: None,
        kind: Kind::Plain,
    }
}

fn is_data_name(name: &str) -> bool {
    name.len() > 4
        && name.starts_with("data")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn has_dash_lower(value: &str) -> bool {
    value
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'-' && pair[1].is_ascii_lowercase())
}

/// `data-foo-bar` ↔ `dataFooBar`.
fn data_info(name: &str) -> PropertyInfo<'_> {
    if let Some(rest) = name.strip_prefix("data-") {
        let mut property = String::from("data");
        let mut chars = rest.chars().peekable();
        let mut first = true;
        while let Some(c) = chars.next() {
            if c == '-'
                && let Some(next) = chars.peek().copied()
                && next.is_ascii_lowercase()
            {
                chars.next();
                property.push(next.to_ascii_uppercase());
            } else if first {
                property.push(c.to_ascii_uppercase());
            } else {
                property.push(c);
            }
            first = false;
        }
        return PropertyInfo {
            property: Cow::Owned(property),
            attribute: Cow::Borrowed(name),
            space: None,
            kind: Kind::Plain,
        };
    }

    let rest = &name[4..];
    let attribute = if has_dash_lower(rest) {
        Cow::Borrowed(name)
    } else {
        let mut dashes = String::with_capacity(rest.len() + 4);
        for c in rest.chars() {
            if c.is_ascii_uppercase() {
                dashes.push('-');
                dashes.push(c.to_ascii_lowercase());
            } else {
                dashes.push(c);
            }
        }
        if !dashes.starts_with('-') {
            dashes.insert(0, '-');
        }
        Cow::Owned(format!("data{dashes}"))
    };

    PropertyInfo {
        property: Cow::Borrowed(name),
        attribute,
        space: None,
        kind: Kind::Plain,
    }
}

/// Property names the UI framework spells differently.
const REACT_ALIASES: &[(&str, &str)] = &[
    ("classId", "classID"),
    ("dataType", "datatype"),
    ("itemId", "itemID"),
    ("strokeDashArray", "strokeDasharray"),
    ("strokeDashOffset", "strokeDashoffset"),
    ("strokeLineCap", "strokeLinecap"),
    ("strokeLineJoin", "strokeLinejoin"),
    ("strokeMiterLimit", "strokeMiterlimit"),
    ("typeOf", "typeof"),
    ("xLinkActuate", "xlinkActuate"),
    ("xLinkArcRole", "xlinkArcrole"),
    ("xLinkHref", "xlinkHref"),
    ("xLinkRole", "xlinkRole"),
    ("xLinkShow", "xlinkShow"),
    ("xLinkTitle", "xlinkTitle"),
    ("xLinkType", "xlinkType"),
    ("xmlnsXLink", "xmlnsXlink"),
];

/// Returns the UI framework's spelling of a schema property, if it differs.
pub fn react_alias(property: &str) -> Option<&'static str> {
    REACT_ALIASES
        .iter()
        .find(|(from, _)| *from == property)
        .map(|(_, to)| *to)
}

/// Output property name for a resolved property.
pub fn prop_name<'a>(info: &'a PropertyInfo<'a>) -> &'a str {
    if info.space.is_none() || info.property.is_empty() {
        return info.attribute.as_ref();
    }
    match react_alias(&info.property) {
        Some(alias) => alias,
        None => info.property.as_ref(),
    }
}

fn prefixed(space: Space, prefix: &str, properties: &[&'static str]) -> Vec<Definition> {
    properties
        .iter()
        .map(|property| {
            let attribute = format!("{prefix}{}", property[prefix.len() - 1..].to_lowercase());
            Definition::new(property, attribute, space, Kind::Plain)
        })
        .collect()
}

fn xml() -> Vec<Definition> {
    prefixed(Space::Xml, "xml:", &["xmlLang", "xmlBase", "xmlSpace"])
}

fn xlink() -> Vec<Definition> {
    [
        ("xLinkActuate", "xlink:actuate"),
        ("xLinkArcRole", "xlink:arcrole"),
        ("xLinkHref", "xlink:href"),
        ("xLinkRole", "xlink:role"),
        ("xLinkShow", "xlink:show"),
        ("xLinkTitle", "xlink:title"),
        ("xLinkType", "xlink:type"),
    ]
    .into_iter()
    .map(|(property, attribute)| {
        Definition::new(property, attribute.to_string(), Space::Xlink, Kind::Plain)
    })
    .collect()
}

fn xmlns() -> Vec<Definition> {
    vec![
        Definition::new("xmlns", "xmlns".to_string(), Space::Xmlns, Kind::Plain),
        Definition::new(
            "xmlnsXLink",
            "xmlns:xlink".to_string(),
            Space::Xmlns,
            Kind::Plain,
        ),
    ]
}

fn aria() -> Vec<Definition> {
    const SPACE_SEPARATED: &[&str] = &[
        "ariaControls",
        "ariaDescribedBy",
        "ariaDropEffect",
        "ariaFlowTo",
        "ariaKeyShortcuts",
        "ariaLabelledBy",
        "ariaOwns",
        "ariaRelevant",
    ];
    const PROPERTIES: &[&str] = &[
        "ariaActiveDescendant",
        "ariaAtomic",
        "ariaAutoComplete",
        "ariaBusy",
        "ariaChecked",
        "ariaColCount",
        "ariaColIndex",
        "ariaColSpan",
        "ariaControls",
        "ariaCurrent",
        "ariaDescribedBy",
        "ariaDetails",
        "ariaDisabled",
        "ariaDropEffect",
        "ariaErrorMessage",
        "ariaExpanded",
        "ariaFlowTo",
        "ariaGrabbed",
        "ariaHasPopup",
        "ariaHidden",
        "ariaInvalid",
        "ariaKeyShortcuts",
        "ariaLabel",
        "ariaLabelledBy",
        "ariaLevel",
        "ariaLive",
        "ariaModal",
        "ariaMultiLine",
        "ariaMultiSelectable",
        "ariaOrientation",
        "ariaOwns",
        "ariaPlaceholder",
        "ariaPosInSet",
        "ariaPressed",
        "ariaReadOnly",
        "ariaRelevant",
        "ariaRequired",
        "ariaRoleDescription",
        "ariaRowCount",
        "ariaRowIndex",
        "ariaRowSpan",
        "ariaSelected",
        "ariaSetSize",
        "ariaSort",
        "ariaValueMax",
        "ariaValueMin",
        "ariaValueNow",
        "ariaValueText",
    ];

    let mut definitions = vec![Definition::new(
        "role",
        "role".to_string(),
        Space::Aria,
        Kind::Plain,
    )];
    definitions.extend(PROPERTIES.iter().map(|property| {
        let kind = if SPACE_SEPARATED.contains(property) {
            Kind::SpaceSeparated
        } else {
            Kind::Plain
        };
        let attribute = format!("aria-{}", property[4..].to_lowercase());
        Definition::new(property, attribute, Space::Aria, kind)
    }));
    definitions
}
