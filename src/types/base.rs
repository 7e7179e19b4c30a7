use crate::{
    ast::LiteralNode,
    error::ConversionResult,
    parser::Spanning,
    value::Value,
};

/// Static metadata of a scalar, used when registering it in a schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ScalarDescriptor {
    /// Name of the scalar in a schema.
    pub name: &'static str,

    /// Description of the scalar in a schema.
    pub description: &'static str,
}

/**
Conversion hooks of a custom GraphQL scalar.

A GraphQL execution engine calls these hooks whenever a value of the scalar
crosses its boundary:

- [`serialize()`] on the response path, turning a resolved [`Value`] into
  wire-safe data;
- [`parse_value()`] for externally supplied variables;
- [`parse_literal()`] for literals embedded right into a query document.

All the hooks are pure: they neither mutate their input nor keep any state
between calls, so a single converter may be shared and used concurrently
without any coordination.

Failures are reported in two ways. A value that merely doesn't match any
accepted format yields `Ok(None)` from [`parse_value()`], leaving it to the
caller to reject it for non-null positions. A value or literal of an
incompatible kind yields a [`ConversionError`].

[`ConversionError`]: crate::ConversionError
[`parse_literal()`]: ScalarConverter::parse_literal
[`parse_value()`]: ScalarConverter::parse_value
[`serialize()`]: ScalarConverter::serialize
*/
pub trait ScalarConverter: Send + Sync {
    /// Representation produced from a query literal.
    ///
    /// It may borrow from the literal, as some scalars hand out the literal
    /// itself for the execution engine to finish the coercion.
    type Literal<'n>;

    /// Returns the [`ScalarDescriptor`] this scalar is registered with.
    fn descriptor(&self) -> &'static ScalarDescriptor;

    /// Returns the name of this scalar.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Converts an internal [`Value`] into a wire-safe response value.
    fn serialize(&self, value: &Value) -> ConversionResult<Value>;

    /// Converts an externally supplied variable value into an internal
    /// [`Value`].
    ///
    /// Returns `Ok(None)` if the `value` doesn't represent any valid value of
    /// this scalar.
    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>>;

    /// Converts a literal embedded into a query document.
    fn parse_literal<'n>(
        &self,
        node: &'n Spanning<LiteralNode>,
    ) -> ConversionResult<Self::Literal<'n>>;
}
