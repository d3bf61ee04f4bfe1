//! Projection of document trees into UI element trees.
//!
//! Each element becomes one [`UiElement`]: its component is resolved
//! through the registry, its properties are renamed through the active
//! attribute schema, and tag-specific props (`level`, `depth`, `checked`,
//! `isHeader`, ...) are derived from its position in the tree.

mod context;
mod project;
pub mod types;

pub use context::Scope;
pub use project::Projector;
pub use types::{PropValue, Props, UiElement, UiNode};
