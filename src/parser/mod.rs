//! Source location utilities for literals handed over by a query parser.

mod utils;

pub use self::utils::{SourcePosition, Span, Spanning};
