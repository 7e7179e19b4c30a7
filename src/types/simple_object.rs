use crate::{
    ast::LiteralNode,
    error::{ConversionError, ConversionResult},
    parser::Spanning,
    types::base::{ScalarConverter, ScalarDescriptor},
    value::{Object, Value},
};

/// [`ScalarDescriptor`] of the `SimpleObject` scalar.
pub const SIMPLE_OBJECT: ScalarDescriptor = ScalarDescriptor {
    name: "SimpleObject",
    description: "The `SimpleObject` scalar type represents simple PHP object as Json",
};

/// Fields of an object literal, handed out as is.
pub type LiteralFields = [(Spanning<String>, Spanning<LiteralNode>)];

/// Scalar exposing an application object as plain mapping data.
///
/// Objects implementing [`ToMapping`] are exposed through their mapping, plain
/// [`Object`]s are exposed as they are.
///
/// [`ToMapping`]: crate::ToMapping
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleObjectScalar;

impl SimpleObjectScalar {
    /// Coerces any `value` into an object, without validation.
    ///
    /// - objects are returned as they are;
    /// - lists become objects keyed by element indices;
    /// - `null` becomes an empty object;
    /// - other scalars are wrapped into a `scalar` field;
    /// - [`ToMapping`] implementors are converted into their mapping;
    /// - date and time values are returned as they are.
    ///
    /// [`ToMapping`]: crate::ToMapping
    pub fn coerce(value: &Value) -> Value {
        match value {
            Value::Object(_) | Value::DateTime(_) | Value::Date(_) | Value::Time(_) => {
                value.clone()
            }
            Value::Opaque(o) => Value::Object(o.to_mapping()),
            Value::List(l) => Value::Object(
                l.iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v.clone()))
                    .collect(),
            ),
            Value::Null => Value::Object(Object::default()),
            Value::Scalar(_) => Value::Object([("scalar", value.clone())].into_iter().collect()),
        }
    }
}

impl ScalarConverter for SimpleObjectScalar {
    type Literal<'n> = &'n LiteralFields;

    fn descriptor(&self) -> &'static ScalarDescriptor {
        &SIMPLE_OBJECT
    }

    fn serialize(&self, value: &Value) -> ConversionResult<Value> {
        match value {
            Value::Opaque(o) => Ok(Value::Object(o.to_mapping())),
            Value::Object(_) => Ok(value.clone()),
            v => {
                __scalars_trace_debug!(scalar = SIMPLE_OBJECT.name, "non object value rejected");
                Err(ConversionError::type_mismatch(format!(
                    "SimpleObject cannot represent non object value: {}",
                    v.print_safe(),
                )))
            }
        }
    }

    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>> {
        Ok(Some(Self::coerce(value)))
    }

    fn parse_literal<'n>(
        &self,
        node: &'n Spanning<LiteralNode>,
    ) -> ConversionResult<&'n LiteralFields> {
        node.item.as_object_fields().ok_or_else(|| {
            ConversionError::invalid_literal_kind(
                format!(
                    "Query error: Can only parse simple objects got: {}",
                    node.item.kind(),
                ),
                node,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use chrono::NaiveDate;

    use crate::{
        ConversionErrorKind, ScalarConverter as _, ToMapping,
        ast::LiteralNode,
        parser::Spanning,
        value::{Object, Value},
    };

    use super::SimpleObjectScalar;

    #[derive(Debug)]
    struct User {
        id: i64,
        name: &'static str,
    }

    impl ToMapping for User {
        fn to_mapping(&self) -> Object {
            [
                ("id", Value::scalar(self.id)),
                ("name", Value::scalar(self.name)),
            ]
            .into_iter()
            .collect()
        }
    }

    #[derive(Debug, Default)]
    struct Counted(Arc<AtomicUsize>);

    impl ToMapping for Counted {
        fn to_mapping(&self) -> Object {
            _ = self.0.fetch_add(1, Ordering::SeqCst);
            Object::default()
        }
    }

    fn obj<const N: usize>(fields: [(&str, Value); N]) -> Value {
        Value::Object(fields.into_iter().collect::<Object>())
    }

    #[test]
    fn serializes_mapping_of_capable_objects() {
        let user = Value::opaque(User { id: 7, name: "Ann" });

        assert_eq!(
            SimpleObjectScalar.serialize(&user),
            Ok(obj([("id", Value::scalar(7)), ("name", Value::scalar("Ann"))])),
        );
    }

    #[test]
    fn invokes_mapping_once_per_serialization() {
        let calls = Arc::new(AtomicUsize::new(0));
        let value = Value::opaque(Counted(Arc::clone(&calls)));

        _ = SimpleObjectScalar.serialize(&value);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn serializes_plain_objects_as_is() {
        let val = obj([("a", Value::list(vec![Value::scalar(1)]))]);

        assert_eq!(SimpleObjectScalar.serialize(&val), Ok(val.clone()));
    }

    #[test]
    fn fails_to_serialize_non_objects() {
        for (val, expected) in [
            (
                Value::scalar(1),
                "SimpleObject cannot represent non object value: 1",
            ),
            (
                Value::list(vec![]),
                "SimpleObject cannot represent non object value: array(0)",
            ),
            (
                Value::Null,
                "SimpleObject cannot represent non object value: null",
            ),
        ] {
            let err = SimpleObjectScalar.serialize(&val).unwrap_err();

            assert_eq!(err.kind(), ConversionErrorKind::TypeMismatch);
            assert_eq!(err.message(), expected);
        }
    }

    #[test]
    fn coerces_anything_into_object() {
        let date = Value::Date(NaiveDate::from_ymd_opt(2020, 2, 2).unwrap());

        for (input, expected) in [
            (obj([("a", Value::scalar(1))]), obj([("a", Value::scalar(1))])),
            (
                Value::list(vec![Value::scalar("x"), Value::scalar(true)]),
                obj([("0", Value::scalar("x")), ("1", Value::scalar(true))]),
            ),
            (Value::Null, obj([])),
            (Value::scalar(5), obj([("scalar", Value::scalar(5))])),
            (
                Value::opaque(User { id: 1, name: "Bo" }),
                obj([("id", Value::scalar(1)), ("name", Value::scalar("Bo"))]),
            ),
            (date.clone(), date),
        ] {
            assert_eq!(
                SimpleObjectScalar.parse_value(&input),
                Ok(Some(expected)),
                "input: {input:?}",
            );
        }
    }

    #[test]
    fn returns_raw_literal_fields() {
        let node = Spanning::unlocated(LiteralNode::object([
            ("b", LiteralNode::variable("v")),
            ("a", LiteralNode::int(1)),
        ]));

        let fields = SimpleObjectScalar.parse_literal(&node).unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0.item, "b");
        assert_eq!(fields[0].1.item, LiteralNode::variable("v"));
        assert_eq!(fields[1].1.item, LiteralNode::int(1));
    }

    #[test]
    fn rejects_non_object_literals() {
        for node in [
            LiteralNode::string("{}"),
            LiteralNode::list(vec![]),
            LiteralNode::Null,
        ] {
            let node = Spanning::unlocated(node);
            let err = SimpleObjectScalar.parse_literal(&node).unwrap_err();

            assert_eq!(err.kind(), ConversionErrorKind::InvalidLiteralKind);
            assert_eq!(
                err.message(),
                format!(
                    "Query error: Can only parse simple objects got: {}",
                    node.item.kind(),
                ),
            );
        }
    }
}
