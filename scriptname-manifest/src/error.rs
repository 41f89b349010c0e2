use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "hierarchy.toml");
/// ctx.validation_error("roots must be packages", None);
/// ctx.unknown_reference_error("super type", "UObject", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an error for a node declared under a parent that cannot own it.
    pub fn misplaced_node_error(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        parent: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MisplacedNode {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            kind: kind.into(),
            parent: parent.into(),
        })
    }

    /// Create an error for an attribute set on a kind that does not support it.
    pub fn invalid_attribute_error(
        &self,
        attribute: impl Into<String>,
        kind: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAttribute {
            src: self.named_source(),
            span: span.into(),
            attribute: attribute.into(),
            kind: kind.into(),
        })
    }

    /// Create an error for a reference to an undeclared node.
    pub fn unknown_reference_error(
        &self,
        what: impl Into<String>,
        name: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownReference {
            src: self.named_source(),
            span: span.into(),
            what: what.into(),
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the hierarchy manifest with --config <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hierarchy manifest")]
    #[diagnostic(code(scriptname::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(scriptname::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{kind} '{name}' cannot be declared inside {parent}")]
    #[diagnostic(
        code(scriptname::misplaced_node),
        help(
            "packages own header groups, header groups own types and functions, types own properties and functions, functions own parameters"
        )
    )]
    MisplacedNode {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
        name: String,
        kind: String,
        parent: String,
    },

    #[error("'{attribute}' is not valid on a {kind}")]
    #[diagnostic(
        code(scriptname::invalid_attribute),
        help(
            "'super' applies to classes, structs and interfaces, 'delegate' to functions, 'package' to header groups"
        )
    )]
    InvalidAttribute {
        #[source_code]
        src: NamedSource<String>,
        #[label("not allowed here")]
        span: SourceSpan,
        attribute: String,
        kind: String,
    },

    #[error("unknown {what} '{name}'")]
    #[diagnostic(
        code(scriptname::unknown_reference),
        help("declare '{name}' somewhere in the manifest")
    )]
    UnknownReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: SourceSpan,
        what: String,
        name: String,
    },
}
