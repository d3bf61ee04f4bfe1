//! Rendering options and the hooks they carry.

use crate::registry::Components;
use crate::uri::uri_transformer;
use markdown::mdast;
use mdview_core::hast::{self, Node};
use mdview_core::{
    AllowElement, AstTransform, FilterOptions, ParseOptions, ParserPipeline, TextTransform,
    TreeTransform,
};
use std::borrow::Cow;

/// Rewrites a link `href`.
///
/// Receives the raw href, the link's children and its title.
pub trait TransformLink {
    /// Returns the href to render.
    fn transform(&self, href: &str, children: &[Node], title: Option<&str>) -> String;
}

impl<F> TransformLink for F
where
    F: Fn(&str, &[Node], Option<&str>) -> String,
{
    fn transform(&self, href: &str, children: &[Node], title: Option<&str>) -> String {
        (self)(href, children, title)
    }
}

/// Rewrites an image `src`.
///
/// Receives the raw src, the alt text and the title.
pub trait TransformImage {
    /// Returns the src to render.
    fn transform(&self, src: &str, alt: &str, title: Option<&str>) -> String;
}

impl<F> TransformImage for F
where
    F: Fn(&str, &str, Option<&str>) -> String,
{
    fn transform(&self, src: &str, alt: &str, title: Option<&str>) -> String {
        (self)(src, alt, title)
    }
}

/// Computes the `target` of a link; `None` leaves it unset.
pub trait TransformLinkTarget {
    /// Returns the target for one link.
    fn target(&self, href: &str, children: &[Node], title: Option<&str>) -> Option<String>;
}

impl<F> TransformLinkTarget for F
where
    F: Fn(&str, &[Node], Option<&str>) -> Option<String>,
{
    fn target(&self, href: &str, children: &[Node], title: Option<&str>) -> Option<String> {
        (self)(href, children, title)
    }
}

/// Link `target` policy.
pub enum LinkTarget {
    /// The same target for every link (`"_blank"`).
    Static(String),
    /// A target computed per link.
    Computed(Box<dyn TransformLinkTarget>),
}

impl LinkTarget {
    /// Resolves the target for one link.
    pub fn resolve(&self, href: &str, children: &[Node], title: Option<&str>) -> Option<String> {
        match self {
            LinkTarget::Static(target) => Some(target.clone()),
            LinkTarget::Computed(hook) => hook.target(href, children, title),
        }
    }
}

/// The default link transform: [`uri_transformer`].
pub fn sanitize_link(href: &str, _children: &[Node], _title: Option<&str>) -> String {
    uri_transformer(href)
}

/// Everything that shapes one render.
pub struct Options {
    /// Only these tag names survive filtering.
    pub allowed_elements: Option<Vec<String>>,
    /// These tag names are filtered out.
    pub disallowed_elements: Option<Vec<String>>,
    /// Extra filter predicate, consulted for elements the lists keep.
    pub allow_element: Option<Box<dyn AllowElement>>,
    /// Promote the children of filtered elements instead of dropping them.
    pub unwrap_disallowed: bool,
    /// Drop raw HTML nodes instead of emitting them as text.
    pub skip_html: bool,
    /// Add `data-sourcepos` to every element.
    pub source_pos: bool,
    /// Pass `sourcePosition` to custom components.
    pub raw_source_pos: bool,
    /// Pass `index` and `siblingCount` to custom components.
    pub include_element_index: bool,
    /// Link href rewriting; `None` leaves hrefs untouched.
    pub transform_link_uri: Option<Box<dyn TransformLink>>,
    /// Image src rewriting.
    pub transform_image_uri: Option<Box<dyn TransformImage>>,
    /// Link target policy.
    pub link_target: Option<LinkTarget>,
    /// Tag overrides.
    pub components: Components,
    /// Wraps the output in a `div` with this class.
    pub class_name: Option<String>,
    /// Markdown syntax options.
    pub parse: ParseOptions,
    /// Text preprocessors, run before parsing.
    pub text_transforms: Vec<Box<dyn TextTransform>>,
    /// Markdown AST plugins.
    pub remark_plugins: Vec<Box<dyn AstTransform>>,
    /// Document tree plugins.
    pub rehype_plugins: Vec<Box<dyn TreeTransform>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allowed_elements: None,
            disallowed_elements: None,
            allow_element: None,
            unwrap_disallowed: false,
            skip_html: false,
            source_pos: false,
            raw_source_pos: false,
            include_element_index: false,
            transform_link_uri: Some(Box::new(sanitize_link)),
            transform_image_uri: None,
            link_target: None,
            components: Components::default(),
            class_name: None,
            parse: ParseOptions::default(),
            text_transforms: Vec::new(),
            remark_plugins: Vec::new(),
            rehype_plugins: Vec::new(),
        }
    }
}

impl Options {
    /// Sets a static link target.
    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = Some(LinkTarget::Static(target.into()));
        self
    }

    /// Sets a computed link target.
    pub fn with_link_target_fn<T: TransformLinkTarget + 'static>(mut self, hook: T) -> Self {
        self.link_target = Some(LinkTarget::Computed(Box::new(hook)));
        self
    }

    /// Replaces the link transform.
    pub fn with_link_transform<T: TransformLink + 'static>(mut self, hook: T) -> Self {
        self.transform_link_uri = Some(Box::new(hook));
        self
    }

    /// Sets the image transform.
    pub fn with_image_transform<T: TransformImage + 'static>(mut self, hook: T) -> Self {
        self.transform_image_uri = Some(Box::new(hook));
        self
    }

    /// Sets the filter predicate.
    pub fn with_allow_element<T: AllowElement + 'static>(mut self, predicate: T) -> Self {
        self.allow_element = Some(Box::new(predicate));
        self
    }

    /// Adds a markdown AST plugin.
    pub fn with_remark_plugin<T: AstTransform + 'static>(mut self, plugin: T) -> Self {
        self.remark_plugins.push(Box::new(plugin));
        self
    }

    /// Adds a document tree plugin.
    pub fn with_rehype_plugin<T: TreeTransform + 'static>(mut self, plugin: T) -> Self {
        self.rehype_plugins.push(Box::new(plugin));
        self
    }

    /// Filter settings borrowed from these options.
    pub fn filter_options(&self) -> FilterOptions<'_> {
        FilterOptions {
            allowed_elements: self.allowed_elements.as_deref(),
            disallowed_elements: self.disallowed_elements.as_deref(),
            allow_element: self.allow_element.as_deref(),
            unwrap_disallowed: self.unwrap_disallowed,
        }
    }

    /// A parser pipeline running this configuration's plugins.
    pub fn pipeline(&self) -> ParserPipeline<'_> {
        let mut pipeline = ParserPipeline::with_options(self.parse);
        for transform in &self.text_transforms {
            pipeline.add_text_transform(Borrowed(transform.as_ref()));
        }
        for plugin in &self.remark_plugins {
            pipeline.add_ast_transform(Borrowed(plugin.as_ref()));
        }
        for plugin in &self.rehype_plugins {
            pipeline.add_tree_transform(Borrowed(plugin.as_ref()));
        }
        pipeline
    }
}

/// Lends a boxed hook to the pipeline.
struct Borrowed<'a, T: ?Sized>(&'a T);

impl TextTransform for Borrowed<'_, dyn TextTransform> {
    fn transform<'i>(&self, input: &'i str) -> Cow<'i, str> {
        TextTransform::transform(self.0, input)
    }
}

impl AstTransform for Borrowed<'_, dyn AstTransform> {
    fn transform(&self, root: &mut mdast::Node) {
        AstTransform::transform(self.0, root)
    }
}

impl TreeTransform for Borrowed<'_, dyn TreeTransform> {
    fn transform(&self, tree: &mut hast::Node) {
        TreeTransform::transform(self.0, tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdview_core::Element;

    #[test]
    fn test_default_link_transform_sanitizes() {
        let options = Options::default();
        let hook = options.transform_link_uri.as_ref().unwrap();
        assert_eq!(
            hook.transform("javascript:alert(1)", &[], None),
            "javascript:void(0)"
        );
        assert_eq!(hook.transform("https://a.b", &[], None), "https://a.b");
    }

    #[test]
    fn test_link_target_policies() {
        let fixed = LinkTarget::Static("_blank".into());
        assert_eq!(fixed.resolve("/x", &[], None).as_deref(), Some("_blank"));

        let external = |href: &str, _children: &[Node], _title: Option<&str>| {
            href.starts_with("http").then(|| "_blank".to_string())
        };
        let computed = LinkTarget::Computed(Box::new(external));
        assert_eq!(
            computed.resolve("https://x", &[], None).as_deref(),
            Some("_blank")
        );
        assert_eq!(computed.resolve("/local", &[], None), None);
    }

    #[test]
    fn test_filter_options_borrow_lists() {
        let options = Options {
            disallowed_elements: Some(vec!["em".into()]),
            unwrap_disallowed: true,
            ..Default::default()
        };
        let filter = options.filter_options();
        assert_eq!(filter.disallowed_elements, Some(&["em".to_string()][..]));
        assert!(filter.unwrap_disallowed);
        assert!(filter.is_active());
    }

    #[test]
    fn test_pipeline_runs_plugins() {
        let options = Options::default().with_rehype_plugin(|tree: &mut hast::Node| {
            if let Some(children) = tree.children_mut() {
                children.push(Element::new("hr").into());
            }
        });
        let tree = options.pipeline().parse("text").unwrap();
        let last = tree.children().and_then(|children| children.last());
        assert!(matches!(last, Some(Node::Element(element)) if element.tag_name == "hr"));
    }
}
