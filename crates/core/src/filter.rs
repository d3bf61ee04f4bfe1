//! Element allow/deny filtering over the document tree.
//!
//! The filter rebuilds the tree top-down. Removed elements either vanish
//! with their subtree or, in unwrap mode, hand their children to their
//! former parent at the same position, where they are visited in turn.

use crate::MdviewError;
use crate::hast::{Element, Node, Root};

/// Outcome of a custom element predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep the element.
    Keep,
    /// Remove the element (or unwrap it).
    Remove,
    /// No opinion; the list-based decision stands.
    Defer,
}

/// Custom element predicate.
///
/// Receives the element, its index among the parent's children as filtered
/// so far, and the parent element (`None` for the root). The parent's
/// `children` are being rebuilt during the walk and read as empty. It is only
/// consulted for elements the allow/deny lists kept, so it can only narrow
/// what survives.
pub trait AllowElement {
    /// Decides the fate of one element.
    fn verdict(&self, element: &Element, index: usize, parent: Option<&Element>) -> Verdict;
}

impl<F> AllowElement for F
where
    F: Fn(&Element, usize, Option<&Element>) -> Verdict,
{
    fn verdict(&self, element: &Element, index: usize, parent: Option<&Element>) -> Verdict {
        (self)(element, index, parent)
    }
}

/// Filter configuration, borrowed from the caller's options.
#[derive(Clone, Copy, Default)]
pub struct FilterOptions<'a> {
    /// Only these tag names survive.
    pub allowed_elements: Option<&'a [String]>,
    /// These tag names are removed.
    pub disallowed_elements: Option<&'a [String]>,
    /// Extra predicate applied to elements the lists kept.
    pub allow_element: Option<&'a dyn AllowElement>,
    /// Promote children of removed elements instead of dropping them.
    pub unwrap_disallowed: bool,
}

impl FilterOptions<'_> {
    /// Returns true when any removal criterion is configured.
    pub fn is_active(&self) -> bool {
        self.allowed_elements.is_some()
            || self.disallowed_elements.is_some()
            || self.allow_element.is_some()
    }

    /// Fails when both lists are configured.
    pub fn validate(&self) -> Result<(), MdviewError> {
        if self.allowed_elements.is_some() && self.disallowed_elements.is_some() {
            return Err(MdviewError::ConflictingElementLists);
        }
        Ok(())
    }
}

/// Filters a document root.
pub fn filter(root: Root, options: &FilterOptions<'_>) -> Result<Root, MdviewError> {
    options.validate()?;
    if !options.is_active() {
        return Ok(root);
    }

    let Root { children, position } = root;
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        visit(options, child, None, &mut out);
    }

    Ok(Root {
        children: out,
        position,
    })
}

fn visit(options: &FilterOptions<'_>, node: Node, parent: Option<&Element>, out: &mut Vec<Node>) {
    let mut element = match node {
        Node::Element(element) => element,
        other => {
            out.push(other);
            return;
        }
    };

    if should_remove(options, &element, out.len(), parent) {
        log::trace!(
            "filter: removing <{}> (unwrap: {})",
            element.tag_name,
            options.unwrap_disallowed
        );
        if options.unwrap_disallowed {
            for child in element.children {
                visit(options, child, parent, out);
            }
        }
        return;
    }

    let children = std::mem::take(&mut element.children);
    let mut kept = Vec::with_capacity(children.len());
    for child in children {
        visit(options, child, Some(&element), &mut kept);
    }
    element.children = kept;
    out.push(Node::Element(element));
}

fn should_remove(
    options: &FilterOptions<'_>,
    element: &Element,
    index: usize,
    parent: Option<&Element>,
) -> bool {
    let listed = |tags: &[String]| tags.iter().any(|tag| *tag == element.tag_name);

    let remove = if let Some(allowed) = options.allowed_elements {
        !listed(allowed)
    } else if let Some(denied) = options.disallowed_elements {
        listed(denied)
    } else {
        false
    };

    if remove {
        return true;
    }

    match options.allow_element {
        Some(predicate) => predicate.verdict(element, index, parent) == Verdict::Remove,
        None => false,
    }
}
