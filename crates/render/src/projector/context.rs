//! Projection scope.

use crate::schema::Schema;

/// Inherited state for one subtree.
///
/// Passed by value; entering an `svg` or list element produces a new scope
/// for that subtree, and the caller's copy is untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
    /// Attribute schema in force.
    pub schema: Schema,
    /// Number of enclosing `ol`/`ul` elements, including the current one.
    pub list_depth: usize,
}

impl Scope {
    /// Scope for an element with the given tag and its subtree.
    pub fn enter(self, tag_name: &str) -> Self {
        let mut scope = self;
        if scope.schema == Schema::Html && tag_name == "svg" {
            scope.schema = Schema::Svg;
        }
        if tag_name == "ol" || tag_name == "ul" {
            scope.list_depth += 1;
        }
        scope
    }
}
