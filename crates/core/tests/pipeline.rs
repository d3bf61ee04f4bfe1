use mdview_core::hast::{Element, Node, Root};
use mdview_core::{FilterOptions, ParseOptions, ParserPipeline, Verdict, filter, parse_hast};

fn root(input: &str) -> Root {
    match parse_hast(input, &ParseOptions::default()).expect("parse should succeed") {
        Node::Root(root) => root,
        other => panic!("expected root, found {}", other.kind()),
    }
}

fn tags(nodes: &[Node], out: &mut Vec<String>) {
    for node in nodes {
        if let Node::Element(element) = node {
            out.push(element.tag_name.clone());
            tags(&element.children, out);
        }
    }
}

fn all_tags(root: &Root) -> Vec<String> {
    let mut out = Vec::new();
    tags(&root.children, &mut out);
    out
}

#[test]
fn parse_then_filter_with_allow_list() {
    let allowed = vec!["p".to_string(), "strong".to_string()];
    let options = FilterOptions {
        allowed_elements: Some(&allowed),
        ..Default::default()
    };

    let filtered = filter(root("# Title\n\nsome **bold** and *soft*"), &options)
        .expect("filter should succeed");

    assert_eq!(all_tags(&filtered), vec!["p", "strong"]);
}

#[test]
fn unwrap_keeps_text_in_place() {
    let disallowed = vec!["em".to_string()];
    let options = FilterOptions {
        disallowed_elements: Some(&disallowed),
        unwrap_disallowed: true,
        ..Default::default()
    };

    let filtered = filter(root("a *b* c"), &options).expect("filter should succeed");
    let Node::Element(paragraph) = &filtered.children[0] else {
        panic!("expected paragraph");
    };
    let texts: Vec<_> = paragraph
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Text(text) => Some(text.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["a ", "b", " c"]);
}

#[test]
fn predicate_sees_parent_element() {
    let predicate = |element: &Element, _index: usize, parent: Option<&Element>| {
        if element.tag_name == "code" && parent.is_some_and(|parent| parent.tag_name == "pre") {
            Verdict::Remove
        } else {
            Verdict::Defer
        }
    };
    let options = FilterOptions {
        allow_element: Some(&predicate),
        ..Default::default()
    };

    let filtered = filter(root("`inline`\n\n```\nblock\n```"), &options)
        .expect("filter should succeed");

    assert_eq!(all_tags(&filtered), vec!["p", "code", "pre"]);
}

#[test]
fn tree_transforms_run_after_conversion() {
    let mut pipeline = ParserPipeline::default();
    pipeline.add_tree_transform(|tree: &mut Node| {
        if let Some(children) = tree.children_mut() {
            children.push(Element::new("hr").into());
        }
    });

    let Node::Root(root) = pipeline.parse("text").expect("parse should succeed") else {
        panic!("expected root");
    };
    assert_eq!(all_tags(&root), vec!["p", "hr"]);
}
