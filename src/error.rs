use std::fmt;

use derive_more::with_trait::Display;

use crate::{
    ast::LiteralNode,
    parser::{SourcePosition, Spanning},
};

/// Kind of a [`ConversionError`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ConversionErrorKind {
    /// Value of an incompatible runtime type was given to
    /// [`serialize()`] or [`parse_value()`].
    ///
    /// [`parse_value()`]: crate::ScalarConverter::parse_value
    /// [`serialize()`]: crate::ScalarConverter::serialize
    #[display("Type mismatch")]
    TypeMismatch,

    /// Literal of a kind the scalar cannot accept was given to
    /// [`parse_literal()`].
    ///
    /// [`parse_literal()`]: crate::ScalarConverter::parse_literal
    #[display("Invalid literal kind")]
    InvalidLiteralKind,

    /// Numeric literal whose text doesn't represent a number.
    #[display("Malformed literal")]
    MalformedLiteral,
}

/// Error of converting a value by a scalar.
///
/// Fatal for the resolution of the single field it was raised for.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionError {
    kind: ConversionErrorKind,
    message: String,
    node: Option<Spanning<LiteralNode>>,
}

/// Result of converting a value by a scalar.
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    /// Constructs a new [`ConversionErrorKind::TypeMismatch`] error.
    pub fn type_mismatch<M: Into<String>>(message: M) -> Self {
        Self {
            kind: ConversionErrorKind::TypeMismatch,
            message: message.into(),
            node: None,
        }
    }

    /// Constructs a new [`ConversionErrorKind::InvalidLiteralKind`] error
    /// citing the offending literal `node`.
    pub fn invalid_literal_kind<M: Into<String>>(
        message: M,
        node: &Spanning<LiteralNode>,
    ) -> Self {
        Self {
            kind: ConversionErrorKind::InvalidLiteralKind,
            message: message.into(),
            node: Some(node.clone()),
        }
    }

    /// Constructs a new [`ConversionErrorKind::MalformedLiteral`] error
    /// citing the offending literal `node`.
    pub fn malformed_literal<M: Into<String>>(message: M, node: &Spanning<LiteralNode>) -> Self {
        Self {
            kind: ConversionErrorKind::MalformedLiteral,
            message: message.into(),
            node: Some(node.clone()),
        }
    }

    /// Returns the [`ConversionErrorKind`] of this error.
    pub fn kind(&self) -> ConversionErrorKind {
        self.kind
    }

    /// Returns the message of this error.
    ///
    /// May be empty, in which case the caller is expected to provide the
    /// context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending literal node, if any.
    pub fn node(&self) -> Option<&Spanning<LiteralNode>> {
        self.node.as_ref()
    }

    /// Returns the position of the offending literal in the query document,
    /// if known.
    pub fn location(&self) -> Option<SourcePosition> {
        self.node
            .as_ref()
            .filter(|n| !n.span.is_unlocated())
            .map(Spanning::start)
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        if let Some(pos) = self.location() {
            write!(f, ". At {pos}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConversionError {}
