#![deny(missing_docs)]
//! mdview render engine: projects filtered document trees into UI component trees.

/// JSON configuration and legacy option migration.
pub mod config;
/// Parse, filter and render entry points.
pub mod document;
/// Rendering options and hooks.
pub mod options;
/// Document tree to UI tree projection.
pub mod projector;
/// Component override registry.
pub mod registry;
/// Attribute naming schemas (HTML and SVG).
pub mod schema;
/// Inline style parsing.
pub mod style;
/// Default link URI sanitizer.
pub mod uri;

pub use config::{Config, Deprecation};
pub use document::{Document, parse_document, render_config_json, render_to_json};
pub use options::{LinkTarget, Options, TransformImage, TransformLink, TransformLinkTarget};
pub use projector::{PropValue, Props, Projector, UiElement, UiNode};
pub use registry::{Component, ComponentRef, Components, CustomComponent};
pub use uri::uri_transformer;
