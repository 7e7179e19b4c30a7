use crate::{
    ast::LiteralNode,
    error::{ConversionError, ConversionResult},
    parser::Spanning,
    types::base::{ScalarConverter, ScalarDescriptor},
    value::{Object, Value},
};

/// [`ScalarDescriptor`] of the `Iterable` scalar.
pub const ITERABLE: ScalarDescriptor = ScalarDescriptor {
    name: "Iterable",
    description: "The `Iterable` scalar type represents an array or a Traversable with any kind \
                  of data.",
};

/// [`ScalarDescriptor`] of the `Json` scalar.
pub const JSON: ScalarDescriptor = ScalarDescriptor {
    name: "Json",
    description: "The `JSON` scalar type represents JSON values as specified by \
                  [ECMA-404](http://www.ecma-international.org/publications/files/ECMA-ST/ECMA-404.pdf).",
};

/// Scalar of arbitrary nested lists and objects.
///
/// Registered twice, as `Iterable` and as `Json`, behaving the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StructuredValueScalar {
    descriptor: &'static ScalarDescriptor,
}

impl StructuredValueScalar {
    /// `Iterable` scalar.
    pub const ITERABLE: Self = Self { descriptor: &ITERABLE };

    /// `Json` scalar.
    pub const JSON: Self = Self { descriptor: &JSON };

    fn ensure_container(
        &self,
        value: &Value,
        render: fn(&Value) -> String,
    ) -> ConversionResult<()> {
        if value.is_container() {
            Ok(())
        } else {
            __scalars_trace_debug!(scalar = self.descriptor.name, "non iterable value rejected");
            Err(ConversionError::type_mismatch(format!(
                "{} cannot represent non iterable value: {}",
                self.descriptor.name,
                render(value),
            )))
        }
    }
}

impl Default for StructuredValueScalar {
    fn default() -> Self {
        Self::ITERABLE
    }
}

impl ScalarConverter for StructuredValueScalar {
    type Literal<'n> = Value;

    fn descriptor(&self) -> &'static ScalarDescriptor {
        self.descriptor
    }

    fn serialize(&self, value: &Value) -> ConversionResult<Value> {
        self.ensure_container(value, Value::print_safe)?;
        Ok(value.clone())
    }

    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>> {
        self.ensure_container(value, Value::print_safe_json)?;
        Ok(Some(value.clone()))
    }

    fn parse_literal<'n>(&self, node: &'n Spanning<LiteralNode>) -> ConversionResult<Value> {
        match node.item {
            // Only valid inside lists and objects.
            LiteralNode::Null => {
                __scalars_trace_debug!(scalar = self.descriptor.name, "top-level null rejected");
                Err(ConversionError::invalid_literal_kind("", node))
            }
            _ => literal_to_value(node),
        }
    }
}

/// Rebuilds the native [`Value`] represented by the literal `node`.
///
/// Lists and objects are converted recursively, preserving the order of
/// elements and fields. `null` is converted into [`Value::Null`] at any depth.
pub fn literal_to_value(node: &Spanning<LiteralNode>) -> ConversionResult<Value> {
    match &node.item {
        LiteralNode::Null => Ok(Value::Null),
        LiteralNode::String(s) => Ok(Value::scalar(s.as_str())),
        LiteralNode::Boolean(b) => Ok(Value::scalar(*b)),
        LiteralNode::Int(n) => match n.parse::<i64>() {
            Ok(i) => Ok(Value::scalar(i)),
            // Integers not fitting into `i64` are still valid numbers.
            Err(_) if is_integer_text(n) => n
                .parse::<f64>()
                .map(Value::scalar)
                .map_err(|_| malformed_int(n, node)),
            Err(_) => Err(malformed_int(n, node)),
        },
        LiteralNode::Float(n) => n.parse::<f64>().map(Value::scalar).map_err(|_| {
            ConversionError::malformed_literal(format!("Invalid float literal: {n}"), node)
        }),
        LiteralNode::Object(fields) => fields
            .iter()
            .map(|(name, value)| {
                Ok::<_, ConversionError>((name.item.as_str(), literal_to_value(value)?))
            })
            .collect::<ConversionResult<Object>>()
            .map(Value::Object),
        LiteralNode::List(items) => items
            .iter()
            .map(literal_to_value)
            .collect::<ConversionResult<Vec<_>>>()
            .map(Value::List),
        LiteralNode::Enum(_) | LiteralNode::Variable(_) => {
            __scalars_trace_debug!(kind = %node.item.kind(), "unsupported literal rejected");
            Err(ConversionError::invalid_literal_kind("", node))
        }
    }
}

/// Checks that `s` is an optional `-` followed by ASCII digits only.
fn is_integer_text(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn malformed_int(n: &str, node: &Spanning<LiteralNode>) -> ConversionError {
    ConversionError::malformed_literal(format!("Invalid integer literal: {n}"), node)
}
