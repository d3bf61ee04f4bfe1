//! Element projection.

use super::context::Scope;
use super::types::{PropValue, Props, UiElement, UiNode};
use crate::options::{Options, TransformImage, TransformLink};
use crate::schema::{self, Schema};
use crate::style::parse_style;
use mdview_core::MdviewError;
use mdview_core::hast::{Element, ListValue, Node, Parent, Position, PropertyValue, Root, format_number};

/// Elements that must not contain whitespace-only `"\n"` text.
const TABLE_ELEMENTS: &[&str] = &["table", "thead", "tbody", "tfoot", "tr"];

/// Walks a document tree and builds the UI tree.
///
/// The output borrows both the tree and the options (component overrides
/// are referenced, not copied).
pub struct Projector<'a> {
    options: &'a Options,
}

impl<'a> Projector<'a> {
    /// Creates a projector for one configuration.
    pub fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Projects the children of a root.
    pub fn project_root(&self, root: &'a Root) -> Result<Vec<UiNode<'a>>, MdviewError> {
        self.project_children(Parent::Root(root), Scope::default())
    }

    /// Projects the children of a parent node.
    pub fn project_children(
        &self,
        parent: Parent<'a>,
        scope: Scope,
    ) -> Result<Vec<UiNode<'a>>, MdviewError> {
        let children = parent.children();
        let mut out = Vec::with_capacity(children.len());

        for (index, child) in children.iter().enumerate() {
            match child {
                Node::Element(element) => {
                    out.push(UiNode::Element(
                        self.project_element(element, index, parent, scope)?,
                    ));
                }
                Node::Text(text) => {
                    let in_table = parent
                        .tag_name()
                        .is_some_and(|tag| TABLE_ELEMENTS.contains(&tag));
                    if !(in_table && text.value == "\n") {
                        out.push(UiNode::Text(&text.value));
                    }
                }
                Node::Raw(raw) if self.options.skip_html => {
                    log::debug!("skipping raw HTML ({} bytes)", raw.value.len());
                }
                Node::Raw(raw) => out.push(UiNode::Text(&raw.value)),
                Node::Comment(_) | Node::Doctype | Node::Root(_) => {}
            }
        }

        Ok(out)
    }

    /// Projects one element found at `index` among `parent`'s children.
    pub fn project_element(
        &self,
        element: &'a Element,
        index: usize,
        parent: Parent<'a>,
        scope: Scope,
    ) -> Result<UiElement<'a>, MdviewError> {
        let options = self.options;
        let name = element.tag_name.as_str();
        let scope = scope.enter(name);

        let mut props = Props::new();
        for (property, value) in element.properties.iter() {
            add_property(&mut props, scope.schema, property, value);
        }

        let children = self.project_children(Parent::Element(element), scope)?;

        let component = options.components.resolve(name)?;
        let basic = component.is_basic();
        let position = element.position.as_ref();

        props.insert("key", key(name, position, index));

        if name == "a" {
            let href = text_value(props.get("href")).unwrap_or_default();
            let title = props.get("title").and_then(PropValue::as_str).map(str::to_string);
            let title = title.as_deref();

            if let Some(policy) = &options.link_target
                && let Some(target) = policy.resolve(&href, &element.children, title)
            {
                props.insert("target", target);
            }

            if let Some(transform) = &options.transform_link_uri {
                let href = TransformLink::transform(&**transform, &href, &element.children, title);
                props.insert("href", href);
            }
        }

        if !basic && name == "code" && parent.tag_name().is_some_and(|tag| tag != "pre") {
            props.insert("inline", true);
        }

        if !basic && let Some(level) = heading_level(name) {
            props.insert("level", level);
        }

        if name == "img"
            && let Some(transform) = &options.transform_image_uri
        {
            let src = text_value(props.get("src")).unwrap_or_default();
            let alt = text_value(props.get("alt")).unwrap_or_default();
            let title = props.get("title").and_then(PropValue::as_str);
            let src = TransformImage::transform(&**transform, &src, &alt, title);
            props.insert("src", src);
        }

        if !basic
            && name == "li"
            && let Some(list) = parent.element()
        {
            let checked = match element.find_child("input") {
                Some(input) => PropValue::Bool(
                    input
                        .properties
                        .get("checked")
                        .is_some_and(PropertyValue::is_truthy),
                ),
                None => PropValue::Null,
            };
            props.insert("checked", checked);
            props.insert("index", parent.elements_before(index));
            props.insert("ordered", list.tag_name == "ol");
        }

        if !basic && (name == "ol" || name == "ul") {
            props.insert("ordered", name == "ol");
            props.insert("depth", scope.list_depth);
        }

        if name == "td" || name == "th" {
            move_align_to_style(&mut props);
            if !basic {
                props.insert("isHeader", name == "th");
            }
        }

        if !basic
            && name == "tr"
            && let Some(section) = parent.element()
        {
            props.insert("isHeader", section.tag_name == "thead");
        }

        if options.source_pos {
            props.insert("data-sourcepos", flatten_position(position));
        }

        if !basic
            && options.raw_source_pos
            && let Some(position) = position
        {
            props.insert("sourcePosition", PropValue::Position(position));
        }

        if !basic && options.include_element_index {
            props.insert("index", parent.elements_before(index));
            props.insert("siblingCount", parent.element_count());
        }

        if !basic {
            props.insert("node", PropValue::Node(element));
        }

        Ok(UiElement {
            component,
            props,
            children: (!children.is_empty()).then_some(children),
        })
    }
}

/// Remaps one source property into `props`.
fn add_property(props: &mut Props<'_>, schema: Schema, name: &str, value: &PropertyValue) {
    if value.is_nullish() {
        return;
    }

    let info = schema::find(schema, name);
    let mut result = match value {
        PropertyValue::Null => return,
        PropertyValue::Bool(value) => PropValue::Bool(*value),
        PropertyValue::Number(value) => PropValue::Number(*value),
        PropertyValue::String(value) => PropValue::String(value.clone()),
        PropertyValue::List(items) => {
            let separator = if info.comma_separated() { ", " } else { " " };
            PropValue::String(join(items, separator))
        }
    };

    let style = match &result {
        PropValue::String(text) if info.property == "style" => Some(parse_style(text)),
        _ => None,
    };
    if let Some(parsed) = style {
        result = PropValue::Style(parsed.unwrap_or_else(|err| {
            log::debug!("ignoring malformed style: {err}");
            Vec::new()
        }));
    }

    props.insert(schema::prop_name(&info), result);
}

fn join(items: &[ListValue], separator: &str) -> String {
    let joined = items
        .iter()
        .map(ListValue::to_string)
        .collect::<Vec<_>>()
        .join(separator);
    joined.trim().to_string()
}

/// String form of a truthy prop value; `None` for falsy or non-scalar ones.
fn text_value(value: Option<&PropValue<'_>>) -> Option<String> {
    match value? {
        PropValue::String(text) if !text.is_empty() => Some(text.clone()),
        PropValue::Number(number) if *number != 0.0 && !number.is_nan() => {
            Some(format_number(*number))
        }
        PropValue::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn key(name: &str, position: Option<&Position>, index: usize) -> String {
    match position {
        Some(position) => format!(
            "{name}-{}-{}-{index}",
            position.start.line, position.start.column
        ),
        None => format!("{name}---{index}"),
    }
}

/// `start.line:start.column-end.line:end.column`, with `null` for unknowns.
fn flatten_position(position: Option<&Position>) -> String {
    match position {
        Some(position) => format!(
            "{}:{}-{}:{}",
            position.start.line, position.start.column, position.end.line, position.end.column
        ),
        None => "null:null-null:null".to_string(),
    }
}

fn heading_level(name: &str) -> Option<usize> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Table cells carry alignment as `style.textAlign`.
fn move_align_to_style(props: &mut Props<'_>) {
    let Some(align) = text_value(props.get("align")) else {
        return;
    };
    props.remove("align");

    if !props.contains("style") {
        props.insert("style", PropValue::Style(vec![("textAlign".to_string(), align)]));
        return;
    }
    if let Some(PropValue::Style(style)) = props.get_mut("style") {
        match style.iter_mut().find(|(name, _)| name == "textAlign") {
            Some(entry) => entry.1 = align,
            None => style.push(("textAlign".to_string(), align)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Component, ComponentRef, CustomComponent};
    use mdview_core::hast::Properties;

    fn root(children: Vec<Node>) -> Root {
        Root {
            children,
            position: None,
        }
    }

    fn custom(name: &str) -> ComponentRef {
        ComponentRef::Custom(CustomComponent::new(name, "./ui"))
    }

    fn project<'a>(options: &'a Options, tree: &'a Root) -> Vec<UiNode<'a>> {
        Projector::new(options).project_root(tree).unwrap()
    }

    fn first<'b, 'a>(nodes: &'b [UiNode<'a>]) -> &'b UiElement<'a> {
        nodes[0].as_element().expect("expected an element")
    }

    #[test]
    fn test_table_newlines_are_dropped() {
        let tree = root(vec![
            Element::new("table")
                .with_children(vec![
                    Node::text("\n"),
                    Element::new("tbody")
                        .with_children(vec![
                            Node::text("\n"),
                            Element::new("tr").into(),
                            Node::text(" \n "),
                            Node::text("\na"),
                        ])
                        .into(),
                ])
                .into(),
            Node::text("\n"),
        ]);
        let options = Options::default();
        let nodes = project(&options, &tree);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].as_text(), Some("\n"));

        let table = first(&nodes);
        assert_eq!(table.children().len(), 1);
        let tbody = table.elements().next().unwrap();
        let texts: Vec<&str> = tbody.children().iter().filter_map(UiNode::as_text).collect();
        assert_eq!(texts, vec![" \n ", "\na"]);
    }

    #[test]
    fn test_raw_and_comments() {
        let tree = root(vec![
            Node::raw("<b>hi</b>"),
            Node::Comment(mdview_core::hast::Comment {
                value: "c".into(),
            }),
            Node::Doctype,
        ]);
        let options = Options::default();
        assert_eq!(project(&options, &tree), vec![UiNode::Text("<b>hi</b>")]);

        let options = Options {
            skip_html: true,
            ..Default::default()
        };
        assert!(project(&options, &tree).is_empty());
    }

    #[test]
    fn test_attribute_remap() {
        let mut properties = Properties::new();
        properties.insert("className", PropertyValue::tokens(["a", "b"]));
        properties.insert("htmlFor", "x");
        properties.insert("dataFooBar", "baz");
        properties.insert("hidden", PropertyValue::Null);
        properties.insert("width", f64::NAN);
        properties.insert("accept", PropertyValue::tokens(["image/png", "image/gif"]));
        properties.insert("style", "color: red; -webkit-box-flex: 1");
        let mut element = Element::new("label");
        element.properties = properties;

        let tree = root(vec![element.into()]);
        let options = Options::default();
        let nodes = project(&options, &tree);
        let props = &first(&nodes).props;

        let names: Vec<&str> = props.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["className", "htmlFor", "data-foo-bar", "accept", "style", "key"]
        );
        assert_eq!(props.get("className").and_then(PropValue::as_str), Some("a b"));
        assert_eq!(
            props.get("accept").and_then(PropValue::as_str),
            Some("image/png, image/gif")
        );
        assert_eq!(
            props.get("style").and_then(PropValue::as_style),
            Some(&vec![
                ("color".to_string(), "red".to_string()),
                ("WebkitBoxFlex".to_string(), "1".to_string())
            ])
        );
    }

    #[test]
    fn test_malformed_style_becomes_empty() {
        let element = Element::new("span").with_property("style", "color red");
        let tree = root(vec![element.into()]);
        let options = Options::default();
        let nodes = project(&options, &tree);
        assert_eq!(
            first(&nodes).props.get("style"),
            Some(&PropValue::Style(Vec::new()))
        );
    }

    #[test]
    fn test_svg_schema_applies_inside_svg() {
        let svg = Element::new("svg")
            .with_property("viewBox", "0 0 1 1")
            .with_children(vec![
                Element::new("path")
                    .with_property("stroke-width", "2")
                    .with_property("xLinkHref", "#a")
                    .into(),
            ]);
        let tree = root(vec![
            svg.into(),
            Element::new("div").with_property("stroke-width", "2").into(),
        ]);
        let options = Options::default();
        let nodes = project(&options, &tree);

        let svg = first(&nodes);
        assert!(svg.props.contains("viewBox"));
        let path = svg.elements().next().unwrap();
        assert!(path.props.contains("strokeWidth"));
        assert!(path.props.contains("xlinkHref"));

        let div = nodes[1].as_element().unwrap();
        assert!(div.props.contains("stroke-width"));
    }

    #[test]
    fn test_keys_and_missing_positions() {
        let tree = root(vec![
            Element::new("p")
                .with_position(Some(Position::new((1, 1), (1, 5))))
                .into(),
            Node::text("\n"),
            Element::new("input").into(),
        ]);
        let options = Options {
            source_pos: true,
            ..Default::default()
        };
        let nodes = project(&options, &tree);
        let p = first(&nodes);
        assert_eq!(p.key(), Some("p-1-1-0"));
        assert_eq!(
            p.props.get("data-sourcepos").and_then(PropValue::as_str),
            Some("1:1-1:5")
        );

        let input = nodes[2].as_element().unwrap();
        assert_eq!(input.key(), Some("input---2"));
        assert_eq!(
            input.props.get("data-sourcepos").and_then(PropValue::as_str),
            Some("null:null-null:null")
        );
    }

    #[test]
    fn test_void_elements_have_no_children() {
        let tree = root(vec![Element::new("br").into()]);
        let options = Options::default();
        let nodes = project(&options, &tree);
        assert_eq!(first(&nodes).children, None);
    }

    #[test]
    fn test_link_target_and_transform() {
        let link = Element::new("a")
            .with_property("href", "javascript:alert(1)")
            .with_property("title", "t")
            .with_children(vec![Node::text("x")]);
        let tree = root(vec![link.into(), Element::new("a").into()]);
        let options = Options::default().with_link_target("_blank");
        let nodes = project(&options, &tree);

        let a = first(&nodes);
        assert_eq!(
            a.props.get("href").and_then(PropValue::as_str),
            Some("javascript:void(0)")
        );
        assert_eq!(a.props.get("target").and_then(PropValue::as_str), Some("_blank"));

        let bare = nodes[1].as_element().unwrap();
        assert_eq!(bare.props.get("href").and_then(PropValue::as_str), Some(""));
    }

    #[test]
    fn test_link_hooks_receive_href_and_title() {
        let link = Element::new("a")
            .with_property("href", "/docs")
            .with_property("title", "Docs");
        let tree = root(vec![link.into()]);
        let options = Options {
            transform_link_uri: None,
            ..Default::default()
        }
        .with_link_target_fn(|href: &str, children: &[Node], title: Option<&str>| {
            assert!(children.is_empty());
            (title == Some("Docs")).then(|| format!("target:{href}"))
        });
        let nodes = project(&options, &tree);
        let a = first(&nodes);
        assert_eq!(a.props.get("href").and_then(PropValue::as_str), Some("/docs"));
        assert_eq!(
            a.props.get("target").and_then(PropValue::as_str),
            Some("target:/docs")
        );
    }

    #[test]
    fn test_image_transform() {
        let image = Element::new("img")
            .with_property("src", "a.png")
            .with_property("alt", "A");
        let tree = root(vec![image.into()]);
        let options = Options::default().with_image_transform(
            |src: &str, alt: &str, title: Option<&str>| {
                format!("/cdn/{src}?alt={alt}&title={}", title.unwrap_or("-"))
            },
        );
        let nodes = project(&options, &tree);
        assert_eq!(
            first(&nodes).props.get("src").and_then(PropValue::as_str),
            Some("/cdn/a.png?alt=A&title=-")
        );
    }

    #[test]
    fn test_headings_get_level_only_when_overridden() {
        let tree = root(vec![
            Element::new("h1").with_children(vec![Node::text("a")]).into(),
            Element::new("h3").with_children(vec![Node::text("b")]).into(),
        ]);
        let mut options = Options::default();
        options.components.insert("h3", custom("Heading"));
        options.components.insert("h1", ComponentRef::Primitive("h2".into()));
        let nodes = project(&options, &tree);

        let h1 = first(&nodes);
        assert_eq!(h1.component, Component::Primitive("h2"));
        assert!(!h1.props.contains("level"));
        assert_eq!(h1.key(), Some("h1---0"));

        let h3 = nodes[1].as_element().unwrap();
        assert_eq!(h3.props.get("level"), Some(&PropValue::Number(3.0)));
        assert!(matches!(h3.props.get("node"), Some(PropValue::Node(node)) if node.tag_name == "h3"));
    }

    #[test]
    fn test_list_props() {
        let checkbox = Element::new("input")
            .with_property("type", "checkbox")
            .with_property("checked", true);
        let nested = Element::new("ol").with_children(vec![
            Element::new("li").with_children(vec![Node::text("c")]).into(),
        ]);
        let list = Element::new("ul").with_children(vec![
            Node::text("\n"),
            Element::new("li")
                .with_children(vec![checkbox.into(), Node::text(" a")])
                .into(),
            Node::text("\n"),
            Element::new("li")
                .with_children(vec![Node::text("b"), nested.into()])
                .into(),
        ]);
        let tree = root(vec![list.into()]);

        let mut options = Options::default();
        for tag in ["ul", "ol", "li"] {
            options.components.insert(tag, custom("List"));
        }
        let nodes = project(&options, &tree);

        let ul = first(&nodes);
        assert_eq!(ul.props.get("ordered"), Some(&PropValue::Bool(false)));
        assert_eq!(ul.props.get("depth"), Some(&PropValue::Number(1.0)));

        let items: Vec<&UiElement<'_>> = ul.elements().collect();
        assert_eq!(items[0].props.get("checked"), Some(&PropValue::Bool(true)));
        assert_eq!(items[0].props.get("index"), Some(&PropValue::Number(0.0)));
        assert_eq!(items[1].props.get("checked"), Some(&PropValue::Null));
        assert_eq!(items[1].props.get("index"), Some(&PropValue::Number(1.0)));
        assert_eq!(items[1].props.get("ordered"), Some(&PropValue::Bool(false)));

        let ol = items[1].elements().next().unwrap();
        assert_eq!(ol.props.get("ordered"), Some(&PropValue::Bool(true)));
        assert_eq!(ol.props.get("depth"), Some(&PropValue::Number(2.0)));
        let inner = ol.elements().next().unwrap();
        assert_eq!(inner.props.get("ordered"), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_table_props() {
        let cell = |tag: &str| {
            Element::new(tag)
                .with_property("align", "center")
                .with_children(vec![Node::text("x")])
        };
        let table = Element::new("table").with_children(vec![
            Element::new("thead")
                .with_children(vec![Element::new("tr").with_children(vec![cell("th").into()]).into()])
                .into(),
            Element::new("tbody")
                .with_children(vec![Element::new("tr").with_children(vec![cell("td").into()]).into()])
                .into(),
        ]);
        let tree = root(vec![table.into()]);

        let mut options = Options::default();
        for tag in ["tr", "th"] {
            options.components.insert(tag, custom("Table"));
        }
        let nodes = project(&options, &tree);
        let table = first(&nodes);
        let sections: Vec<&UiElement<'_>> = table.elements().collect();

        let head_row = sections[0].elements().next().unwrap();
        assert_eq!(head_row.props.get("isHeader"), Some(&PropValue::Bool(true)));
        let th = head_row.elements().next().unwrap();
        assert_eq!(th.props.get("isHeader"), Some(&PropValue::Bool(true)));
        assert!(!th.props.contains("align"));

        let body_row = sections[1].elements().next().unwrap();
        assert_eq!(body_row.props.get("isHeader"), Some(&PropValue::Bool(false)));
        let td = body_row.elements().next().unwrap();
        assert!(!td.props.contains("isHeader"));
        assert!(!td.props.contains("align"));
        assert_eq!(
            td.props.get("style"),
            Some(&PropValue::Style(vec![(
                "textAlign".to_string(),
                "center".to_string()
            )]))
        );
    }

    #[test]
    fn test_inline_code_only_outside_pre() {
        let tree = root(vec![
            Element::new("pre")
                .with_children(vec![Element::new("code").into()])
                .into(),
            Element::new("p")
                .with_children(vec![Element::new("code").into()])
                .into(),
            Element::new("code").into(),
        ]);
        let mut options = Options::default();
        options.components.insert("code", custom("Code"));
        let nodes = project(&options, &tree);

        let in_pre = first(&nodes).elements().next().unwrap();
        assert!(!in_pre.props.contains("inline"));
        let in_p = nodes[1].as_element().unwrap().elements().next().unwrap();
        assert_eq!(in_p.props.get("inline"), Some(&PropValue::Bool(true)));
        let at_root = nodes[2].as_element().unwrap();
        assert!(!at_root.props.contains("inline"));
    }

    #[test]
    fn test_diagnostic_props_for_custom_components() {
        let tree = root(vec![
            Node::text("\n"),
            Element::new("p").into(),
            Element::new("hr")
                .with_position(Some(Position::new((3, 1), (3, 4))))
                .into(),
        ]);
        let options = Options {
            raw_source_pos: true,
            include_element_index: true,
            components: [("hr", custom("Rule"))].into_iter().collect(),
            ..Default::default()
        };
        let nodes = project(&options, &tree);

        let p = first(&nodes[1..]);
        assert!(!p.props.contains("sourcePosition"));
        assert!(!p.props.contains("siblingCount"));

        let hr = nodes[2].as_element().unwrap();
        assert_eq!(hr.props.get("index"), Some(&PropValue::Number(1.0)));
        assert_eq!(hr.props.get("siblingCount"), Some(&PropValue::Number(2.0)));
        assert!(matches!(
            hr.props.get("sourcePosition"),
            Some(PropValue::Position(position)) if position.start.line == 3
        ));
    }

    #[test]
    fn test_missing_position_omits_source_position() {
        let tree = root(vec![Element::new("hr").into()]);
        let options = Options {
            raw_source_pos: true,
            components: [("hr", custom("Rule"))].into_iter().collect(),
            ..Default::default()
        };
        let nodes = project(&options, &tree);
        let hr = first(&nodes);
        assert!(!hr.props.contains("sourcePosition"));
        assert!(hr.props.contains("node"));
    }

    #[test]
    fn test_unrenderable_component_fails() {
        let tree = root(vec![
            Element::new("p")
                .with_children(vec![Element::new("em").into()])
                .into(),
        ]);
        let mut options = Options::default();
        options
            .components
            .insert("em", ComponentRef::Unrenderable("null".into()));
        let err = Projector::new(&options).project_root(&tree).unwrap_err();
        assert!(matches!(err, MdviewError::ComponentNotRenderable { ref name } if name == "em"));
    }
}
