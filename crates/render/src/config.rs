//! Declarative (JSON) configuration.
//!
//! [`Config`] is the serializable subset of [`Options`]: flags, element
//! lists, a static link target and component overrides. Hooks stay on the
//! Rust side. Legacy option names are rewritten before deserializing, each
//! with a warning.

use crate::options::{LinkTarget, Options};
use crate::registry::{ComponentRef, ComponentSpec, Components};
use mdview_core::{MdviewError, ParseOptions};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Mutex;

const CHANGELOG: &str = "https://github.com/remarkjs/react-markdown/blob/main/changelog.md";

/// A legacy option name and what replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    /// The legacy key.
    pub from: &'static str,
    /// Its replacement, if any.
    pub to: Option<&'static str>,
    /// Changelog anchor describing the change.
    pub id: &'static str,
    /// Whether the legacy value carries over to the replacement key.
    carries_value: bool,
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "please use `{to}` instead of `{}`", self.from)?,
            None => write!(f, "please remove `{}`", self.from)?,
        }
        write!(f, " (see <{CHANGELOG}#{}> for more info)", self.id)
    }
}

const fn renamed(from: &'static str, to: &'static str, id: &'static str) -> Deprecation {
    Deprecation {
        from,
        to: Some(to),
        id,
        carries_value: true,
    }
}

const fn removed(from: &'static str, id: &'static str) -> Deprecation {
    Deprecation {
        from,
        to: None,
        id,
        carries_value: false,
    }
}

const DEPRECATIONS: &[Deprecation] = &[
    renamed("renderers", "components", "change-renderers-to-components"),
    removed("astPlugins", "remove-buggy-html-in-markdown-parser"),
    removed("allowDangerousHtml", "remove-buggy-html-in-markdown-parser"),
    removed("escapeHtml", "remove-buggy-html-in-markdown-parser"),
    renamed("source", "children", "change-source-to-children"),
    // Predicates are not expressible in JSON; the hint still names the new option.
    Deprecation {
        from: "allowNode",
        to: Some("allowElement"),
        id: "replace-allownode-allowedtypes-and-disallowedtypes",
        carries_value: false,
    },
    renamed(
        "allowedTypes",
        "allowedElements",
        "replace-allownode-allowedtypes-and-disallowedtypes",
    ),
    renamed(
        "disallowedTypes",
        "disallowedElements",
        "replace-allownode-allowedtypes-and-disallowedtypes",
    ),
    renamed(
        "includeNodeIndex",
        "includeElementIndex",
        "change-includenodeindex-to-includeelementindex",
    ),
];

/// Legacy keys already warned about in this process.
static WARNED: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Returns true the first time `key` is seen.
fn first_warning(key: &'static str) -> bool {
    match WARNED.lock() {
        Ok(mut warned) => warned.insert(key),
        Err(poisoned) => poisoned.into_inner().insert(key),
    }
}

/// Rewrites legacy keys in place, returning what was found.
///
/// A replacement key already present wins over the legacy one. Each legacy
/// key is logged once per process; the returned list always reports it.
pub fn migrate(object: &mut Map<String, Value>) -> Vec<Deprecation> {
    let mut found = Vec::new();
    for deprecation in DEPRECATIONS {
        let Some(value) = object.remove(deprecation.from) else {
            continue;
        };
        if first_warning(deprecation.from) {
            log::warn!("Deprecated option: {deprecation}");
        }
        if deprecation.carries_value
            && let Some(to) = deprecation.to
            && !object.contains_key(to)
        {
            object.insert(to.to_string(), value);
        }
        found.push(*deprecation);
    }
    found
}

fn enabled() -> bool {
    true
}

/// `true` keeps the default sanitizer; `false` or `null` disables it.
fn link_transform_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Serializable render configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Markdown source.
    #[serde(default)]
    pub children: Option<String>,
    /// Only these tag names survive filtering.
    #[serde(default)]
    pub allowed_elements: Option<Vec<String>>,
    /// These tag names are filtered out.
    #[serde(default)]
    pub disallowed_elements: Option<Vec<String>>,
    /// Promote the children of filtered elements.
    #[serde(default)]
    pub unwrap_disallowed: bool,
    /// Drop raw HTML.
    #[serde(default)]
    pub skip_html: bool,
    /// Add `data-sourcepos`.
    #[serde(default)]
    pub source_pos: bool,
    /// Pass `sourcePosition` to custom components.
    #[serde(default)]
    pub raw_source_pos: bool,
    /// Pass `index` and `siblingCount` to custom components.
    #[serde(default)]
    pub include_element_index: bool,
    /// Keep the default link sanitizer.
    #[serde(default = "enabled", deserialize_with = "link_transform_flag")]
    pub transform_link_uri: bool,
    /// Static link target.
    #[serde(default)]
    pub link_target: Option<String>,
    /// Tag overrides.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentSpec>,
    /// Wrapper class name.
    #[serde(default)]
    pub class_name: Option<String>,
    /// GitHub Flavored Markdown.
    #[serde(default = "enabled")]
    pub gfm: bool,
    /// Legacy options found while reading.
    #[serde(skip)]
    pub deprecations: Vec<Deprecation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            children: None,
            allowed_elements: None,
            disallowed_elements: None,
            unwrap_disallowed: false,
            skip_html: false,
            source_pos: false,
            raw_source_pos: false,
            include_element_index: false,
            transform_link_uri: true,
            link_target: None,
            components: BTreeMap::new(),
            class_name: None,
            gfm: true,
            deprecations: Vec::new(),
        }
    }
}

impl Config {
    /// Reads configuration from JSON text.
    pub fn from_json(input: &str) -> Result<Self, MdviewError> {
        Self::from_value(serde_json::from_str(input)?)
    }

    /// Reads configuration from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, MdviewError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(MdviewError::Config(format!(
                    "expected an object, found `{other}`"
                )));
            }
        };
        let deprecations = migrate(&mut object);
        let mut config: Config = serde_json::from_value(Value::Object(object))?;
        config.deprecations = deprecations;
        Ok(config)
    }

    /// Converts into render options.
    pub fn into_options(self) -> Options {
        let defaults = Options::default();
        let parse = if self.gfm {
            ParseOptions::gfm()
        } else {
            ParseOptions::commonmark()
        };
        let components: Components = self
            .components
            .into_iter()
            .map(|(tag, spec)| (tag, ComponentRef::from(spec)))
            .collect();

        Options {
            allowed_elements: self.allowed_elements,
            disallowed_elements: self.disallowed_elements,
            unwrap_disallowed: self.unwrap_disallowed,
            skip_html: self.skip_html,
            source_pos: self.source_pos,
            raw_source_pos: self.raw_source_pos,
            include_element_index: self.include_element_index,
            transform_link_uri: if self.transform_link_uri {
                defaults.transform_link_uri
            } else {
                None
            },
            link_target: self.link_target.map(LinkTarget::Static),
            components,
            class_name: self.class_name,
            parse,
            ..defaults
        }
    }
}
