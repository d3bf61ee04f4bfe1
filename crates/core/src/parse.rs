//! Markdown parsing pipeline and extension hooks.

use crate::hast;
use crate::to_hast::mdast_to_hast;
use crate::{MdviewError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use std::borrow::Cow;

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, task lists, strikethrough, autolinks).
    pub gfm: bool,
    /// Enable YAML frontmatter parsing (frontmatter never reaches the document tree).
    pub frontmatter: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
    /// Parse raw HTML into raw nodes instead of text.
    pub raw_html: bool,
}

impl ParseOptions {
    /// CommonMark only.
    pub const fn commonmark() -> Self {
        Self {
            gfm: false,
            frontmatter: false,
            code_indented: true,
            raw_html: true,
        }
    }

    /// CommonMark plus GFM and frontmatter.
    pub const fn gfm() -> Self {
        Self {
            gfm: true,
            frontmatter: true,
            code_indented: true,
            raw_html: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: self.code_indented,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::gfm()
    }
}

/// Trait for preprocessing raw markdown text before parsing.
pub trait TextTransform {
    /// Transform the input markdown text, returning an owned or borrowed string.
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> TextTransform for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn transform<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (self)(input)
    }
}

/// Trait for mutating the parsed MDAST after parsing (remark-style plugin).
pub trait AstTransform {
    /// Mutate the parsed markdown AST in place.
    fn transform(&self, root: &mut Node);
}

impl<F> AstTransform for F
where
    F: Fn(&mut Node),
{
    fn transform(&self, root: &mut Node) {
        (self)(root)
    }
}

/// Trait for mutating the document tree after conversion (rehype-style plugin).
pub trait TreeTransform {
    /// Mutate the document tree in place.
    fn transform(&self, tree: &mut hast::Node);
}

impl<F> TreeTransform for F
where
    F: Fn(&mut hast::Node),
{
    fn transform(&self, tree: &mut hast::Node) {
        (self)(tree)
    }
}

/// Configurable parsing pipeline with optional transforms.
///
/// Transforms may borrow from the caller for `'a`.
pub struct ParserPipeline<'a> {
    options: markdown::ParseOptions,
    text_transforms: Vec<Box<dyn TextTransform + 'a>>,
    ast_transforms: Vec<Box<dyn AstTransform + 'a>>,
    tree_transforms: Vec<Box<dyn TreeTransform + 'a>>,
}

impl<'a> ParserPipeline<'a> {
    /// Create a new pipeline from markdown-rs parse options.
    pub fn new(options: markdown::ParseOptions) -> Self {
        Self {
            options,
            text_transforms: Vec::new(),
            ast_transforms: Vec::new(),
            tree_transforms: Vec::new(),
        }
    }

    /// Create a new pipeline from core options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self::new(options.to_markdown())
    }

    /// Add a text preprocessor transform.
    pub fn add_text_transform<T: TextTransform + 'a>(&mut self, transform: T) {
        self.text_transforms.push(Box::new(transform));
    }

    /// Add an already boxed text transform.
    pub fn push_text_transform(&mut self, transform: Box<dyn TextTransform + 'a>) {
        self.text_transforms.push(transform);
    }

    /// Add an AST transform.
    pub fn add_ast_transform<T: AstTransform + 'a>(&mut self, transform: T) {
        self.ast_transforms.push(Box::new(transform));
    }

    /// Add an already boxed AST transform.
    pub fn push_ast_transform(&mut self, transform: Box<dyn AstTransform + 'a>) {
        self.ast_transforms.push(transform);
    }

    /// Add a document tree transform.
    pub fn add_tree_transform<T: TreeTransform + 'a>(&mut self, transform: T) {
        self.tree_transforms.push(Box::new(transform));
    }

    /// Add an already boxed document tree transform.
    pub fn push_tree_transform(&mut self, transform: Box<dyn TreeTransform + 'a>) {
        self.tree_transforms.push(transform);
    }

    /// Parse markdown into MDAST using the configured text and AST transforms.
    pub fn parse_mdast(&self, input: &str) -> Result<Node, MdviewError> {
        let mut current = Cow::Borrowed(input);
        for transform in &self.text_transforms {
            let next = transform.transform(current.as_ref());
            current = Cow::Owned(next.into_owned());
        }

        let mut root = parse_mdast_with_options(&current, &self.options)?;
        for transform in &self.ast_transforms {
            transform.transform(&mut root);
        }

        Ok(root)
    }

    /// Parse markdown all the way into a document tree.
    ///
    /// The result is whatever the last tree transform left behind; callers
    /// that need a root must check for it.
    pub fn parse(&self, input: &str) -> Result<hast::Node, MdviewError> {
        let mdast = self.parse_mdast(input)?;
        let mut tree = mdast_to_hast(&mdast);
        for transform in &self.tree_transforms {
            transform.transform(&mut tree);
        }
        Ok(tree)
    }
}

impl Default for ParserPipeline<'_> {
    fn default() -> Self {
        Self::with_options(ParseOptions::default())
    }
}

/// Parse markdown into an MDAST tree using core options.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, MdviewError> {
    parse_mdast_with_options(input, &options.to_markdown())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, MdviewError> {
    markdown::to_mdast(input, options).map_err(|err| MdviewError::MarkdownAdapter {
        message: err.to_string(),
        location: message_location(&err),
    })
}

/// Parse markdown into a document tree using core options.
pub fn parse_hast(input: &str, options: &ParseOptions) -> Result<hast::Node, MdviewError> {
    ParserPipeline::with_options(*options).parse(input)
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
