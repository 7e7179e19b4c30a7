use std::fmt;

use derive_more::with_trait::Display;

use crate::parser::Spanning;

/// A value literal embedded directly into a query document, as handed over by
/// a query parser.
///
/// Numeric literals keep their raw source text, so that each scalar decides on
/// its own how (and whether) to interpret them.
///
/// Lists and objects variants are _spanned_, i.e. they contain a reference to
/// their position in the source document, if available.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum LiteralNode {
    Null,
    String(String),
    Boolean(bool),
    Int(String),
    Float(String),
    Enum(String),
    Variable(String),
    List(Vec<Spanning<LiteralNode>>),
    Object(Vec<(Spanning<String>, Spanning<LiteralNode>)>),
}

/// Tag of a [`LiteralNode`], named after the GraphQL AST node kinds.
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum LiteralKind {
    #[display("NullValue")]
    Null,
    #[display("StringValue")]
    String,
    #[display("BooleanValue")]
    Boolean,
    #[display("IntValue")]
    Int,
    #[display("FloatValue")]
    Float,
    #[display("EnumValue")]
    Enum,
    #[display("Variable")]
    Variable,
    #[display("ListValue")]
    List,
    #[display("ObjectValue")]
    Object,
}

impl LiteralNode {
    /// Construct a string literal.
    pub fn string<T: Into<String>>(s: T) -> Self {
        Self::String(s.into())
    }

    /// Construct an integer literal from its source text.
    pub fn int<T: ToString>(n: T) -> Self {
        Self::Int(n.to_string())
    }

    /// Construct a float literal from its source text.
    pub fn float<T: ToString>(n: T) -> Self {
        Self::Float(n.to_string())
    }

    /// Construct an enum literal.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Construct a variable reference.
    pub fn variable<T: AsRef<str>>(v: T) -> Self {
        Self::Variable(v.as_ref().into())
    }

    /// Construct a [`Spanning::unlocated`] list.
    ///
    /// Convenience function to make each [`LiteralNode`] in the input vector
    /// not contain any location information.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l.into_iter().map(Spanning::unlocated).collect())
    }

    /// Construct a [`Spanning::unlocated`] object.
    ///
    /// Field order is preserved as given.
    pub fn object<K, I>(o: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            o.into_iter()
                .map(|(k, v)| (Spanning::unlocated(k.into()), Spanning::unlocated(v)))
                .collect(),
        )
    }

    /// Returns the [`LiteralKind`] tag of this literal.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Null => LiteralKind::Null,
            Self::String(_) => LiteralKind::String,
            Self::Boolean(_) => LiteralKind::Boolean,
            Self::Int(_) => LiteralKind::Int,
            Self::Float(_) => LiteralKind::Float,
            Self::Enum(_) => LiteralKind::Enum,
            Self::Variable(_) => LiteralKind::Variable,
            Self::List(_) => LiteralKind::List,
            Self::Object(_) => LiteralKind::Object,
        }
    }

    /// View the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying object fields, if present.
    pub fn as_object_fields(&self) -> Option<&[(Spanning<String>, Spanning<Self>)]> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(n) | Self::Float(n) => write!(f, "{n}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Variable(v) => write!(f, "${v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, spanning) in v.iter().enumerate() {
                    spanning.item.fmt(f)?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{}: ", k.item)?;
                    v.item.fmt(f)?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for LiteralNode {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for LiteralNode {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for LiteralNode {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for LiteralNode {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<f64> for LiteralNode {
    fn from(n: f64) -> Self {
        Self::float(n)
    }
}
