use crate::{
    ast::LiteralNode,
    error::{ConversionError, ConversionResult},
    parser::Spanning,
    value::Value,
};

/// Unwraps a string literal, leaving its coercion for later.
pub(crate) fn string_literal(node: &Spanning<LiteralNode>) -> ConversionResult<&str> {
    node.item.as_string_value().ok_or_else(|| {
        __scalars_trace_debug!(kind = %node.item.kind(), "non-string literal rejected");
        ConversionError::invalid_literal_kind(
            format!("Query error: Can only parse strings got: {}", node.item.kind()),
            node,
        )
    })
}

/// Unwraps a string variable value.
///
/// `null` yields `Ok(None)`, as it doesn't represent any value.
pub(crate) fn string_value<'v>(
    scalar_name: &str,
    value: &'v Value,
) -> ConversionResult<Option<&'v str>> {
    match value {
        Value::Null => Ok(None),
        v => v.as_string_value().map(Some).ok_or_else(|| {
            ConversionError::type_mismatch(format!(
                "{scalar_name} cannot parse non string value: {}",
                v.print_safe_json(),
            ))
        }),
    }
}
