//! Top-level entry points: parse, filter, render.

use crate::config::Config;
use crate::options::Options;
use crate::projector::{Projector, Props, UiElement, UiNode};
use crate::registry::Component;
use mdview_core::hast::{Node, Root};
use mdview_core::{MdviewError, filter};

/// A parsed and filtered document, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Root,
}

impl Document {
    /// Filters an existing tree with the options' element criteria.
    pub fn from_root(root: Root, options: &Options) -> Result<Self, MdviewError> {
        let root = filter(root, &options.filter_options())?;
        Ok(Self { root })
    }

    /// The filtered tree.
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Takes the filtered tree.
    pub fn into_root(self) -> Root {
        self.root
    }

    /// Projects the document.
    ///
    /// The result is a fragment holding the top-level elements, wrapped in
    /// a `div` when `class_name` is set.
    pub fn render<'a>(&'a self, options: &'a Options) -> Result<UiElement<'a>, MdviewError> {
        let children = Projector::new(options).project_root(&self.root)?;
        let fragment = UiElement {
            component: Component::Fragment,
            props: Props::new(),
            children: (!children.is_empty()).then_some(children),
        };

        let Some(class_name) = &options.class_name else {
            return Ok(fragment);
        };

        let mut props = Props::new();
        props.insert("className", class_name.as_str());
        Ok(UiElement {
            component: Component::Primitive("div"),
            props,
            children: Some(vec![UiNode::Element(fragment)]),
        })
    }
}

/// Parses markdown and applies the element filter.
pub fn parse_document(input: &str, options: &Options) -> Result<Document, MdviewError> {
    options.filter_options().validate()?;

    let tree = options.pipeline().parse(input)?;
    let root = match tree {
        Node::Root(root) => root,
        other => {
            return Err(MdviewError::UnexpectedRoot {
                found: other.kind().to_string(),
            });
        }
    };

    log::debug!("parsed document with {} top-level nodes", root.children.len());
    Document::from_root(root, options)
}

/// Parses, filters and renders markdown into an owned JSON tree.
pub fn render_to_json(input: &str, options: &Options) -> Result<serde_json::Value, MdviewError> {
    let document = parse_document(input, options)?;
    let element = document.render(options)?;
    serde_json::to_value(&element).map_err(|err| MdviewError::InternalError(err.to_string()))
}

/// Renders a JSON configuration whose `children` holds the markdown.
pub fn render_config_json(config: &str) -> Result<serde_json::Value, MdviewError> {
    let mut config = Config::from_json(config)?;
    let input = config.children.take().unwrap_or_default();
    render_to_json(&input, &config.into_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdview_core::hast::{self, Element};

    #[test]
    fn test_render_wraps_in_fragment() {
        let options = Options::default();
        let document = parse_document("# Hi", &options).unwrap();
        let element = document.render(&options).unwrap();
        assert_eq!(element.component, Component::Fragment);
        let h1 = element.elements().next().unwrap();
        assert_eq!(h1.component, Component::Primitive("h1"));
        assert_eq!(h1.children(), &[UiNode::Text("Hi")]);
    }

    #[test]
    fn test_empty_document_has_no_children() {
        let options = Options::default();
        let document = parse_document("", &options).unwrap();
        assert_eq!(document.render(&options).unwrap().children, None);
    }

    #[test]
    fn test_class_name_wraps_in_div() {
        let options = Options {
            class_name: Some("prose".into()),
            ..Default::default()
        };
        let document = parse_document("text", &options).unwrap();
        let element = document.render(&options).unwrap();
        assert_eq!(element.component, Component::Primitive("div"));
        assert_eq!(
            element.props.get("className").and_then(|v| v.as_str()),
            Some("prose")
        );
        assert_eq!(element.children().len(), 1);
        assert_eq!(
            element.elements().next().unwrap().component,
            Component::Fragment
        );
    }

    #[test]
    fn test_unknown_tags_render_as_primitives() {
        let root = Root {
            children: vec![
                Element::new("my_widget")
                    .with_children(vec![Node::text("x")])
                    .into(),
            ],
            position: None,
        };
        let options = Options::default();
        let document = Document::from_root(root, &options).unwrap();
        let element = document.render(&options).unwrap();
        let widget = element.elements().next().unwrap();
        assert_eq!(widget.component, Component::Primitive("my_widget"));
        assert_eq!(widget.children(), &[UiNode::Text("x")]);
    }

    #[test]
    fn test_non_root_tree_is_rejected() {
        let options = Options::default().with_rehype_plugin(|tree: &mut hast::Node| {
            *tree = Element::new("div").into();
        });
        let err = parse_document("text", &options).unwrap_err();
        assert_eq!(err.to_string(), "Expected a `root` node, found `element`");
    }

    #[test]
    fn test_conflicting_lists_fail_before_parsing() {
        let options = Options {
            allowed_elements: Some(vec!["p".into()]),
            disallowed_elements: Some(vec!["em".into()]),
            ..Default::default()
        };
        assert!(matches!(
            parse_document("text", &options),
            Err(MdviewError::ConflictingElementLists)
        ));
    }

    #[test]
    fn test_render_config_json() {
        let config = r#"{"source": "*a*", "disallowedTypes": ["em"], "unwrapDisallowed": true}"#;
        let value = render_config_json(config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "component": { "kind": "fragment" },
                "props": {},
                "children": [{
                    "component": { "kind": "primitive", "name": "p" },
                    "props": { "key": "p-1-1-0" },
                    "children": ["a"]
                }]
            })
        );
    }
}
