//! Conversion from the markdown AST (MDAST) to the document tree.
//!
//! Block content is separated by `"\n"` text nodes the same way the
//! conventional markdown-to-HTML converters do it, so downstream consumers
//! see the incidental whitespace they would see in serialized HTML.

use crate::hast::{Element, Node, Position, PropertyValue, Root};
use markdown::mdast;
use std::collections::HashMap;

/// Converts an MDAST tree into a document tree.
///
/// The result is always a root; a non-root MDAST node becomes the single
/// child content of a new root.
pub fn mdast_to_hast(tree: &mdast::Node) -> Node {
    let converter = Converter::new(tree);
    match tree {
        mdast::Node::Root(root) => Node::Root(Root {
            children: wrap(converter.all(&root.children), false),
            position: position_of(&root.position),
        }),
        other => Node::root(converter.one(other)),
    }
}

fn position_of(position: &Option<markdown::unist::Position>) -> Option<Position> {
    position.as_ref().map(Position::from)
}

/// Interleaves `"\n"` text between nodes; `loose` also adds one at both ends.
fn wrap(nodes: Vec<Node>, loose: bool) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len() * 2 + 1);
    let non_empty = !nodes.is_empty();
    if loose {
        result.push(Node::text("\n"));
    }
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            result.push(Node::text("\n"));
        }
        result.push(node);
    }
    if loose && non_empty {
        result.push(Node::text("\n"));
    }
    result
}

/// Removes spaces and tabs around line endings.
fn trim_lines(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending = String::new();
    let mut after_eol = false;
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' => {
                if !after_eol {
                    pending.push(c);
                }
            }
            '\r' | '\n' => {
                pending.clear();
                out.push(c);
                if c == '\r' && chars.peek() == Some(&'\n') {
                    out.push('\n');
                    chars.next();
                }
                after_eol = true;
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                out.push(c);
                after_eol = false;
            }
        }
    }

    out.push_str(&pending);
    out
}

struct Definition {
    url: String,
    title: Option<String>,
}

struct Converter {
    definitions: HashMap<String, Definition>,
}

impl Converter {
    fn new(tree: &mdast::Node) -> Self {
        let mut definitions = HashMap::new();
        collect_definitions(tree, &mut definitions);
        Self { definitions }
    }

    fn all(&self, children: &[mdast::Node]) -> Vec<Node> {
        children.iter().flat_map(|child| self.one(child)).collect()
    }

    fn element(
        &self,
        tag_name: &str,
        position: &Option<markdown::unist::Position>,
        children: Vec<Node>,
    ) -> Node {
        Element::new(tag_name)
            .with_children(children)
            .with_position(position_of(position))
            .into()
    }

    fn one(&self, node: &mdast::Node) -> Vec<Node> {
        match node {
            mdast::Node::Root(root) => self.all(&root.children),
            mdast::Node::Paragraph(para) => {
                vec![self.element("p", &para.position, self.all(&para.children))]
            }
            mdast::Node::Heading(heading) => vec![self.element(
                &format!("h{}", heading.depth),
                &heading.position,
                self.all(&heading.children),
            )],
            mdast::Node::Text(text) => vec![Node::text(trim_lines(&text.value))],
            mdast::Node::Emphasis(emphasis) => {
                vec![self.element("em", &emphasis.position, self.all(&emphasis.children))]
            }
            mdast::Node::Strong(strong) => {
                vec![self.element("strong", &strong.position, self.all(&strong.children))]
            }
            mdast::Node::Delete(delete) => {
                vec![self.element("del", &delete.position, self.all(&delete.children))]
            }
            mdast::Node::InlineCode(code) => {
                let value = code.value.replace("\r\n", " ").replace(['\r', '\n'], " ");
                vec![self.element("code", &code.position, vec![Node::text(value)])]
            }
            mdast::Node::Break(br) => {
                vec![self.element("br", &br.position, Vec::new()), Node::text("\n")]
            }
            mdast::Node::ThematicBreak(hr) => vec![self.element("hr", &hr.position, Vec::new())],
            mdast::Node::Blockquote(quote) => vec![self.element(
                "blockquote",
                &quote.position,
                wrap(self.all(&quote.children), true),
            )],
            mdast::Node::Code(code) => vec![self.code(code)],
            mdast::Node::Html(html) => vec![Node::raw(html.value.clone())],
            mdast::Node::Link(link) => vec![self.link(
                &link.url,
                link.title.as_deref(),
                &link.position,
                self.all(&link.children),
            )],
            mdast::Node::Image(image) => vec![self.image(
                &image.url,
                &image.alt,
                image.title.as_deref(),
                &image.position,
            )],
            mdast::Node::LinkReference(reference) => self.link_reference(reference),
            mdast::Node::ImageReference(reference) => self.image_reference(reference),
            mdast::Node::List(list) => vec![self.list(list)],
            mdast::Node::ListItem(item) => vec![self.list_item(item, None)],
            mdast::Node::Table(table) => vec![self.table(table)],
            mdast::Node::Yaml(_) | mdast::Node::Toml(_) | mdast::Node::Definition(_) => {
                Vec::new()
            }
            _ => {
                log::warn!("Unhandled markdown node type: {:?}", node);
                Vec::new()
            }
        }
    }

    fn code(&self, code: &mdast::Code) -> Node {
        let value = if code.value.is_empty() {
            String::new()
        } else {
            format!("{}\n", code.value)
        };

        let mut inner = Element::new("code")
            .with_children(vec![Node::text(value)])
            .with_position(position_of(&code.position));
        let lang = code
            .lang
            .as_deref()
            .and_then(|lang| lang.split([' ', '\t']).next())
            .filter(|lang| !lang.is_empty());
        if let Some(lang) = lang {
            inner
                .properties
                .insert("className", PropertyValue::tokens([format!("language-{lang}")]));
        }

        self.element("pre", &code.position, vec![inner.into()])
    }

    fn link(
        &self,
        url: &str,
        title: Option<&str>,
        position: &Option<markdown::unist::Position>,
        children: Vec<Node>,
    ) -> Node {
        let mut element = Element::new("a")
            .with_property("href", url)
            .with_children(children)
            .with_position(position_of(position));
        if let Some(title) = title {
            element.properties.insert("title", title);
        }
        element.into()
    }

    fn image(
        &self,
        url: &str,
        alt: &str,
        title: Option<&str>,
        position: &Option<markdown::unist::Position>,
    ) -> Node {
        let mut element = Element::new("img")
            .with_property("src", url)
            .with_property("alt", alt)
            .with_position(position_of(position));
        if let Some(title) = title {
            element.properties.insert("title", title);
        }
        element.into()
    }

    fn link_reference(&self, reference: &mdast::LinkReference) -> Vec<Node> {
        let children = self.all(&reference.children);
        match self.definitions.get(&reference.identifier.to_lowercase()) {
            Some(definition) => vec![self.link(
                &definition.url,
                definition.title.as_deref(),
                &reference.position,
                children,
            )],
            None => {
                let suffix = reference_suffix(
                    &reference.reference_kind,
                    reference.label.as_deref().unwrap_or(&reference.identifier),
                );
                revert(children, &suffix)
            }
        }
    }

    fn image_reference(&self, reference: &mdast::ImageReference) -> Vec<Node> {
        match self.definitions.get(&reference.identifier.to_lowercase()) {
            Some(definition) => vec![self.image(
                &definition.url,
                &reference.alt,
                definition.title.as_deref(),
                &reference.position,
            )],
            None => {
                let suffix = reference_suffix(
                    &reference.reference_kind,
                    reference.label.as_deref().unwrap_or(&reference.identifier),
                );
                vec![Node::text(format!("![{}{}", reference.alt, suffix))]
            }
        }
    }

    fn list(&self, list: &mdast::List) -> Node {
        let loose = list_loose(list);
        let items: Vec<Node> = list
            .children
            .iter()
            .flat_map(|child| match child {
                mdast::Node::ListItem(item) => vec![self.list_item(item, Some(loose))],
                other => self.one(other),
            })
            .collect();

        let tag_name = if list.ordered { "ol" } else { "ul" };
        let mut element = Element::new(tag_name).with_position(position_of(&list.position));
        if let Some(start) = list.start
            && list.ordered
            && start != 1
        {
            element.properties.insert("start", f64::from(start));
        }
        if list
            .children
            .iter()
            .any(|child| matches!(child, mdast::Node::ListItem(item) if item.checked.is_some()))
        {
            element
                .properties
                .insert("className", PropertyValue::tokens(["contains-task-list"]));
        }

        element.with_children(wrap(items, true)).into()
    }

    /// Converts a list item; `parent_loose` is the looseness of the enclosing list.
    fn list_item(&self, item: &mdast::ListItem, parent_loose: Option<bool>) -> Node {
        let mut result = self.all(&item.children);
        let loose = parent_loose.unwrap_or(item.spread);
        let mut element = Element::new("li").with_position(position_of(&item.position));

        if let Some(checked) = item.checked {
            let starts_with_paragraph =
                matches!(result.first(), Some(Node::Element(el)) if el.tag_name == "p");
            if !starts_with_paragraph {
                result.insert(0, Element::new("p").into());
            }
            if let Some(Node::Element(paragraph)) = result.first_mut() {
                if !paragraph.children.is_empty() {
                    paragraph.children.insert(0, Node::text(" "));
                }
                let input = Element::new("input")
                    .with_property("type", "checkbox")
                    .with_property("checked", checked)
                    .with_property("disabled", true);
                paragraph.children.insert(0, input.into());
            }
            element
                .properties
                .insert("className", PropertyValue::tokens(["task-list-item"]));
        }

        let tail_is_paragraph =
            matches!(result.last(), Some(Node::Element(el)) if el.tag_name == "p");
        let has_tail = !result.is_empty();
        let mut wrapped = Vec::with_capacity(result.len() * 2 + 1);

        for (index, child) in result.into_iter().enumerate() {
            let is_paragraph = matches!(&child, Node::Element(el) if el.tag_name == "p");
            if loose || index != 0 || !is_paragraph {
                wrapped.push(Node::text("\n"));
            }
            match child {
                Node::Element(paragraph) if is_paragraph && !loose => {
                    wrapped.extend(paragraph.children);
                }
                child => wrapped.push(child),
            }
        }

        if has_tail && (loose || !tail_is_paragraph) {
            wrapped.push(Node::text("\n"));
        }

        element.with_children(wrapped).into()
    }

    fn table(&self, table: &mdast::Table) -> Node {
        let mut rows: Vec<Element> = Vec::with_capacity(table.children.len());

        for (index, row) in table.children.iter().enumerate() {
            let mdast::Node::TableRow(row) = row else {
                continue;
            };
            let tag_name = if index == 0 { "th" } else { "td" };
            let length = if table.align.is_empty() {
                row.children.len()
            } else {
                table.align.len()
            };

            let mut cells = Vec::with_capacity(length);
            for cell_index in 0..length {
                let mut cell = Element::new(tag_name);
                if let Some(mdast::Node::TableCell(source)) = row.children.get(cell_index) {
                    cell.children = self.all(&source.children);
                    cell.position = position_of(&source.position);
                }
                let align = match table.align.get(cell_index) {
                    Some(mdast::AlignKind::Left) => Some("left"),
                    Some(mdast::AlignKind::Right) => Some("right"),
                    Some(mdast::AlignKind::Center) => Some("center"),
                    Some(mdast::AlignKind::None) | None => None,
                };
                if let Some(align) = align {
                    cell.properties.insert("align", align);
                }
                cells.push(cell.into());
            }

            rows.push(
                Element::new("tr")
                    .with_children(wrap(cells, true))
                    .with_position(position_of(&row.position)),
            );
        }

        let mut sections = Vec::with_capacity(2);
        let mut rows = rows.into_iter();
        if let Some(head) = rows.next() {
            let head_position = head.position;
            sections.push(
                Element::new("thead")
                    .with_children(wrap(vec![head.into()], true))
                    .with_position(head_position)
                    .into(),
            );
        }

        let body: Vec<Element> = rows.collect();
        if let (Some(first), Some(last)) = (body.first(), body.last()) {
            let body_position = match (first.position, last.position) {
                (Some(start), Some(end)) => Some(Position {
                    start: start.start,
                    end: end.end,
                }),
                _ => None,
            };
            let body_rows = body.into_iter().map(Node::from).collect();
            sections.push(
                Element::new("tbody")
                    .with_children(wrap(body_rows, true))
                    .with_position(body_position)
                    .into(),
            );
        }

        self.element("table", &table.position, wrap(sections, true))
    }
}

fn collect_definitions(node: &mdast::Node, definitions: &mut HashMap<String, Definition>) {
    if let mdast::Node::Definition(definition) = node {
        definitions
            .entry(definition.identifier.to_lowercase())
            .or_insert_with(|| Definition {
                url: definition.url.clone(),
                title: definition.title.clone(),
            });
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, definitions);
        }
    }
}

fn list_loose(list: &mdast::List) -> bool {
    list.spread
        || list
            .children
            .iter()
            .any(|child| matches!(child, mdast::Node::ListItem(item) if item.spread))
}

fn reference_suffix(kind: &mdast::ReferenceKind, label: &str) -> String {
    match kind {
        mdast::ReferenceKind::Shortcut => "]".to_string(),
        mdast::ReferenceKind::Collapsed => "][]".to_string(),
        mdast::ReferenceKind::Full => format!("][{label}]"),
    }
}

/// Turns an unresolved link reference back into its literal text.
fn revert(mut children: Vec<Node>, suffix: &str) -> Vec<Node> {
    match children.first_mut() {
        Some(Node::Text(head)) => head.value.insert(0, '['),
        _ => children.insert(0, Node::text("[")),
    }
    match children.last_mut() {
        Some(Node::Text(tail)) => tail.value.push_str(suffix),
        _ => children.push(Node::text(suffix)),
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ParseOptions, parse_mdast};

    fn convert(input: &str) -> Root {
        let mdast = parse_mdast(input, &ParseOptions::default()).unwrap();
        match mdast_to_hast(&mdast) {
            Node::Root(root) => root,
            other => panic!("expected root, got {:?}", other),
        }
    }

    fn element(node: &Node) -> &Element {
        match node {
            Node::Element(element) => element,
            other => panic!("expected element, got {:?}", other),
        }
    }

    fn tags(children: &[Node]) -> Vec<String> {
        children
            .iter()
            .map(|child| match child {
                Node::Element(element) => element.tag_name.clone(),
                Node::Text(text) => format!("{:?}", text.value),
                other => other.kind().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_heading() {
        let root = convert("# Hi");
        assert_eq!(root.children.len(), 1);
        let h1 = element(&root.children[0]);
        assert_eq!(h1.tag_name, "h1");
        assert_eq!(h1.children, vec![Node::text("Hi")]);
        let position = h1.position.unwrap();
        assert_eq!((position.start.line, position.start.column), (1, 1));
    }

    #[test]
    fn test_root_blocks_are_newline_separated() {
        let root = convert("a\n\nb");
        assert_eq!(tags(&root.children), vec!["p", "\"\\n\"", "p"]);
    }

    #[test]
    fn test_trim_lines() {
        assert_eq!(trim_lines("a  \n  b"), "a\nb");
        assert_eq!(trim_lines("a \r\n\tb"), "a\r\nb");
        assert_eq!(trim_lines(" a "), " a ");
    }

    #[test]
    fn test_table_structure() {
        let root = convert("| a | b |\n| :- | -: |\n| 1 | 2 |");
        let table = element(&root.children[0]);
        assert_eq!(table.tag_name, "table");
        assert_eq!(
            tags(&table.children),
            vec!["\"\\n\"", "thead", "\"\\n\"", "tbody", "\"\\n\""]
        );

        let tbody = element(&table.children[3]);
        assert_eq!(tags(&tbody.children), vec!["\"\\n\"", "tr", "\"\\n\""]);

        let tr = element(&tbody.children[1]);
        let td = element(&tr.children[1]);
        assert_eq!(td.tag_name, "td");
        assert_eq!(td.properties.get("align"), Some(&PropertyValue::from("left")));
        let second = element(&tr.children[3]);
        assert_eq!(second.properties.get("align"), Some(&PropertyValue::from("right")));
    }

    #[test]
    fn test_tight_task_list() {
        let root = convert("- [x] done\n- plain");
        let ul = element(&root.children[0]);
        assert_eq!(
            ul.properties.get("className"),
            Some(&PropertyValue::tokens(["contains-task-list"]))
        );

        let li = element(&ul.children[1]);
        assert_eq!(tags(&li.children), vec!["input", "\" \"", "\"done\""]);
        let input = li.find_child("input").unwrap();
        assert_eq!(input.properties.get("checked"), Some(&PropertyValue::Bool(true)));
        assert!(input.position.is_none());

        let plain = element(&ul.children[3]);
        assert_eq!(tags(&plain.children), vec!["\"plain\""]);
    }

    #[test]
    fn test_loose_list_keeps_paragraphs() {
        let root = convert("- a\n\n- b");
        let ul = element(&root.children[0]);
        let li = element(&ul.children[1]);
        assert_eq!(tags(&li.children), vec!["\"\\n\"", "p", "\"\\n\""]);
    }

    #[test]
    fn test_ordered_list_start() {
        let root = convert("3. three\n4. four");
        let ol = element(&root.children[0]);
        assert_eq!(ol.tag_name, "ol");
        assert_eq!(ol.properties.get("start"), Some(&PropertyValue::Number(3.0)));
    }

    #[test]
    fn test_code_block() {
        let root = convert("```rust extra\nfn main() {}\n```");
        let pre = element(&root.children[0]);
        let code = element(&pre.children[0]);
        assert_eq!(
            code.properties.get("className"),
            Some(&PropertyValue::tokens(["language-rust"]))
        );
        assert_eq!(code.children, vec![Node::text("fn main() {}\n")]);
    }

    #[test]
    fn test_raw_html() {
        let root = convert("<div>hi</div>");
        assert_eq!(root.children, vec![Node::raw("<div>hi</div>")]);
    }

    #[test]
    fn test_link_and_image() {
        let root = convert("[a](/x \"t\") ![b](/y.png)");
        let p = element(&root.children[0]);
        let a = element(&p.children[0]);
        assert_eq!(a.properties.get("href"), Some(&PropertyValue::from("/x")));
        assert_eq!(a.properties.get("title"), Some(&PropertyValue::from("t")));
        let img = element(&p.children[2]);
        assert_eq!(img.properties.get("src"), Some(&PropertyValue::from("/y.png")));
        assert_eq!(img.properties.get("alt"), Some(&PropertyValue::from("b")));
        assert!(img.properties.get("title").is_none());
    }

    #[test]
    fn test_references() {
        let root = convert("[x][def] and [missing]\n\n[def]: /target");
        let p = element(&root.children[0]);
        let a = element(&p.children[0]);
        assert_eq!(a.properties.get("href"), Some(&PropertyValue::from("/target")));
        let rest: String = p.children[1..]
            .iter()
            .map(|child| match child {
                Node::Text(text) => text.value.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(rest, " and [missing]");
    }

    #[test]
    fn test_hard_break() {
        let root = convert("a  \nb");
        let p = element(&root.children[0]);
        assert_eq!(tags(&p.children), vec!["\"a\"", "br", "\"\\n\"", "\"b\""]);
    }
}
