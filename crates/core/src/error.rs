use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while turning markdown into a component tree.
///
/// Every variant is fatal for the invocation that produced it: no partial
/// tree is ever returned next to one of these.
#[derive(Debug, Error)]
pub enum MdviewError {
    /// markdown-rs parser error surfaced through the adapter.
    #[error("Parse error at {location}: {message}")]
    MarkdownAdapter {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Both an allow-list and a deny-list were given to the element filter.
    #[error("Only one of `allowedElements` and `disallowedElements` should be defined")]
    ConflictingElementLists,
    /// A tag resolved to a component reference that cannot be rendered.
    #[error("Component for name `{name}` not defined or is not renderable")]
    ComponentNotRenderable {
        /// Tag name being projected
        name: String,
    },
    /// The parser pipeline produced something other than a root node.
    #[error("Expected a `root` node, found `{found}`")]
    UnexpectedRoot {
        /// Kind of the node that was found instead
        found: String,
    },
    /// Configuration could not be read.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Internal logic error (unexpected state).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MdviewError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::MarkdownAdapter {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Create a "not renderable" error for a tag name
    pub fn not_renderable(name: impl Into<String>) -> Self {
        Self::ComponentNotRenderable { name: name.into() }
    }
}

impl From<serde_json::Error> for MdviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
