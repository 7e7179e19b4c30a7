#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[cfg(test)]
use pretty_assertions as _;

#[doc(hidden)]
#[macro_use]
mod macros;
mod ast;
mod error;
pub mod integrations;
pub mod parser;
mod types;
mod util;
mod value;

pub use crate::{
    ast::{LiteralKind, LiteralNode},
    error::{ConversionError, ConversionErrorKind, ConversionResult},
    integrations::chrono::{DATE, DATE_TIME, DateScalar, DateTimeScalar, TIME, TimeScalar},
    parser::{SourcePosition, Span, Spanning},
    types::{
        base::{ScalarConverter, ScalarDescriptor},
        descriptor, descriptors,
        iterable::{ITERABLE, JSON, StructuredValueScalar, literal_to_value},
        simple_object::{LiteralFields, SIMPLE_OBJECT, SimpleObjectScalar},
    },
    value::{Object, OpaqueObject, Scalar, ToMapping, Value},
};
