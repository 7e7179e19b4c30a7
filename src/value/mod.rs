mod object;
mod opaque;

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use derive_more::with_trait::From;

use crate::util::truncate;

pub use self::{
    object::Object,
    opaque::{OpaqueObject, ToMapping},
};

/// Primitive leaf of a [`Value`].
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, Debug, From, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Runtime value flowing through the scalars.
///
/// On the input side it's what request variables decode into and what
/// [`parse_value()`]/[`parse_literal()`] produce; on the output side it's what
/// the application resolves a field into and what [`serialize()`] turns into
/// wire-safe data (only [`Value::Null`], [`Value::Scalar`], [`Value::List`]
/// and [`Value::Object`]).
///
/// [`parse_literal()`]: crate::ScalarConverter::parse_literal
/// [`parse_value()`]: crate::ScalarConverter::parse_value
/// [`serialize()`]: crate::ScalarConverter::serialize
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,

    /// Primitive value.
    Scalar(Scalar),

    /// Ordered sequence of values.
    List(Vec<Value>),

    /// Insertion-ordered mapping of values.
    Object(Object),

    /// Instant on the time-line with a fixed UTC offset.
    DateTime(DateTime<FixedOffset>),

    /// Calendar date without time.
    Date(NaiveDate),

    /// Time of day without date.
    Time(NaiveTime),

    /// Application object exposing itself as mapping data.
    Opaque(OpaqueObject),
}

/// Maximum number of characters rendered by [`Value::print_safe()`] and
/// [`Value::print_safe_json()`] before truncating.
const MAX_SAFE_PRINT_LEN: usize = 64;

impl Value {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value.
    pub fn scalar<T>(s: T) -> Self
    where
        Scalar: From<T>,
    {
        Self::Scalar(s.into())
    }

    /// Construct a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Construct an object value.
    pub fn object(o: Object) -> Self {
        Self::Object(o)
    }

    /// Wraps an application object implementing [`ToMapping`].
    pub fn opaque<T: ToMapping + 'static>(o: T) -> Self {
        Self::Opaque(OpaqueObject::new(o))
    }

    /// Does this value represent `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Is this value an ordered sequence or a mapping?
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Object(_))
    }

    /// View the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// View the underlying object value, if present.
    pub fn as_object_value(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// View the underlying list value, if present.
    pub fn as_list_value(&self) -> Option<&[Self]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Renders this value for error messages, never dumping whole containers.
    ///
    /// Long renderings are truncated.
    pub fn print_safe(&self) -> String {
        let rendered = match self {
            Self::Null => "null".into(),
            Self::Scalar(Scalar::String(s)) => format!("\"{s}\""),
            Self::Scalar(s) => s.to_string(),
            Self::List(l) => format!("array({})", l.len()),
            Self::Object(o) => format!("object({})", o.field_count()),
            Self::DateTime(_) => "instance of DateTime".into(),
            Self::Date(_) => "instance of Date".into(),
            Self::Time(_) => "instance of Time".into(),
            Self::Opaque(o) => format!("instance of {}", o.type_name()),
        };
        truncate(rendered, MAX_SAFE_PRINT_LEN)
    }

    /// Renders this value as JSON for error messages.
    ///
    /// Falls back to [`Value::print_safe()`] if the value cannot be encoded.
    /// Long renderings are truncated.
    pub fn print_safe_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => truncate(json, MAX_SAFE_PRINT_LEN),
            Err(_) => self.print_safe(),
        }
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Self::Time(t)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Self::List(l)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Object, Scalar, ToMapping, Value};

    #[derive(Debug)]
    struct Point;

    impl ToMapping for Point {
        fn to_mapping(&self) -> Object {
            Object::with_capacity(0)
        }

        fn type_name(&self) -> &'static str {
            "Point"
        }
    }

    #[test]
    fn prints_safe() {
        let obj: Object = [("a", Value::scalar(1))].into_iter().collect();

        for (val, expected) in [
            (Value::null(), "null"),
            (Value::scalar(12), "12"),
            (Value::scalar(1.5), "1.5"),
            (Value::scalar(true), "true"),
            (Value::scalar("foo"), "\"foo\""),
            (Value::list(vec![Value::null(), Value::null()]), "array(2)"),
            (Value::object(obj), "object(1)"),
            (
                NaiveDate::from_ymd_opt(2020, 1, 1).map(Value::from).into(),
                "instance of Date",
            ),
            (Value::opaque(Point), "instance of Point"),
        ] {
            assert_eq!(val.print_safe(), expected, "on value: {val:?}");
        }
    }

    #[test]
    fn prints_safe_json() {
        let obj: Object = [(
            "a",
            Value::list(vec![Value::scalar(1), Value::scalar("x")]),
        )]
        .into_iter()
        .collect();

        assert_eq!(Value::object(obj).print_safe_json(), r#"{"a":[1,"x"]}"#);
        assert_eq!(Value::scalar(7).print_safe_json(), "7");
        assert_eq!(Value::scalar("x").print_safe_json(), r#""x""#);
    }

    #[test]
    fn truncates_long_renderings() {
        let long = "a".repeat(100);
        let printed = Value::scalar(long).print_safe();

        assert!(printed.ends_with("..."), "not truncated: {printed}");
        assert_eq!(printed.chars().count(), 67);
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(Value::scalar(5), Value::Scalar(Scalar::Int(5)));
        assert_eq!(Value::scalar(5_i64), Value::Scalar(Scalar::Int(5)));
        assert_eq!(
            Value::scalar(String::from("s")),
            Value::Scalar(Scalar::String("s".into())),
        );
        assert_eq!(Value::from(None::<Scalar>), Value::Null);
    }
}
