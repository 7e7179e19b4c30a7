use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer},
    ser::{SerializeMap as _, Serializer},
};

use crate::{
    error::ConversionError,
    integrations::chrono::{DateScalar, DateTimeScalar, TimeScalar},
    parser::SourcePosition,
    value::{Object, Scalar, Value},
};

impl Serialize for ConversionError {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let msg = self.to_string();
        map.serialize_key("message")?;
        map.serialize_value(&msg)?;

        let locations = self.location().into_iter().collect::<Vec<_>>();
        map.serialize_key("locations")?;
        map.serialize_value(&locations)?;

        map.end()
    }
}

impl Serialize for SourcePosition {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let line = self.line() + 1;
        map.serialize_key("line")?;
        map.serialize_value(&line)?;

        let column = self.column() + 1;
        map.serialize_key("column")?;
        map.serialize_value(&column)?;

        map.end()
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => ser.serialize_i64(*n),
            Self::Float(n) => ser.serialize_f64(*n),
            Self::String(s) => ser.serialize_str(s),
            Self::Boolean(b) => ser.serialize_bool(*b),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.field_count()))?;
        for (f, v) in self.iter() {
            map.serialize_key(f)?;
            map.serialize_value(v)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => ser.serialize_unit(),
            Self::Scalar(s) => s.serialize(ser),
            Self::List(l) => l.serialize(ser),
            Self::Object(o) => o.serialize(ser),
            Self::DateTime(dt) => ser.serialize_str(&DateTimeScalar::format(dt)),
            Self::Date(d) => ser.serialize_str(&DateScalar::format(d)),
            Self::Time(t) => ser.serialize_str(&TimeScalar::format(t)),
            Self::Opaque(o) => o.to_mapping().serialize(ser),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a valid input value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(Value::scalar(b))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                Ok(Value::scalar(n))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                if let Ok(n) = i64::try_from(n) {
                    Ok(Value::scalar(n))
                } else {
                    // Too large for `i64`, but still a valid number.
                    Ok(Value::scalar(n as f64))
                }
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Ok(Value::scalar(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(Value::scalar(s))
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(Value::scalar(s))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, de: D) -> Result<Self::Value, D::Error> {
                Value::deserialize(de)
            }

            fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let mut vals = Vec::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some(v) = visitor.next_element()? {
                    vals.push(v);
                }
                Ok(Value::list(vals))
            }

            fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut obj =
                    IndexMap::<String, Value>::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some((key, val)) = visitor.next_entry()? {
                    _ = obj.insert(key, val);
                }
                Ok(Value::object(obj.into_iter().collect()))
            }
        }

        de.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::{from_str, to_string};

    use crate::{
        ScalarConverter as _, ToMapping,
        ast::LiteralNode,
        parser::{SourcePosition, Spanning},
        types::iterable::StructuredValueScalar,
        value::{Object, Value},
    };

    #[derive(Debug)]
    struct Flag;

    impl ToMapping for Flag {
        fn to_mapping(&self) -> Object {
            [("on", Value::scalar(true))].into_iter().collect()
        }
    }

    #[test]
    fn int() {
        assert_eq!(from_str::<Value>("1235").unwrap(), Value::scalar(1235));
    }

    #[test]
    fn float() {
        assert_eq!(from_str::<Value>("2.0").unwrap(), Value::scalar(2.0));
        // integers beyond `i64` are floats
        assert_eq!(
            from_str::<Value>("18446744073709551615").unwrap(),
            Value::scalar(18_446_744_073_709_551_615.0),
        );
    }

    #[test]
    fn nested_keeps_order() {
        let parsed = from_str::<Value>(r#"{"b": [1, "x", null], "a": {"c": false}}"#).unwrap();

        assert_eq!(to_string(&parsed).unwrap(), r#"{"b":[1,"x",null],"a":{"c":false}}"#);
    }

    #[test]
    fn typed_values() {
        let val = Value::list(vec![
            Value::Date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()),
            Value::Time(NaiveTime::from_hms_opt(3, 4, 5).unwrap()),
            Value::opaque(Flag),
        ]);

        assert_eq!(
            to_string(&val).unwrap(),
            r#"["2020-01-02","03:04:05",{"on":true}]"#,
        );
    }

    #[test]
    fn errors() {
        let node = Spanning::start_end(
            &SourcePosition::new(9, 1, 8),
            &SourcePosition::new(11, 1, 10),
            LiteralNode::variable("v"),
        );
        let err = StructuredValueScalar::JSON
            .parse_literal(&Spanning::unlocated(LiteralNode::List(vec![node])))
            .unwrap_err();

        assert_eq!(
            to_string(&err).unwrap(),
            r#"{"message":"Invalid literal kind. At 1:8","locations":[{"line":2,"column":9}]}"#,
        );
    }
}
