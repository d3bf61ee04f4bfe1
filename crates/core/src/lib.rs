#![deny(missing_docs)]
//! mdview core: markdown parsing pipeline, document tree, and element filtering.

/// Core error types.
pub mod error;
/// Element allow/deny filtering.
pub mod filter;
/// Document tree (HTML AST) model.
pub mod hast;
/// Markdown parsing utilities and extension hooks.
pub mod parse;
/// MDAST to document tree conversion.
pub mod to_hast;

pub use error::{MdviewError, SourceLocation};
pub use filter::{AllowElement, FilterOptions, Verdict, filter};
pub use hast::{Element, Node, Parent, Position, PropertyValue, Root};
pub use parse::{
    AstTransform, ParseOptions, ParserPipeline, TextTransform, TreeTransform, parse_hast,
    parse_mdast, parse_mdast_with_options,
};
pub use to_hast::mdast_to_hast;
