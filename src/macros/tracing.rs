// Macros to emit events.

macro_rules! __scalars_trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$trace_type!($($element)*);
        }
    }};
}

macro_rules! __scalars_trace {
    ($($element:tt)*) => {{
        __scalars_trace_internal!(trace; $($element)*)
    }};
}

macro_rules! __scalars_trace_debug {
    ($($element:tt)*) => {{
        __scalars_trace_internal!(debug; $($element)*)
    }};
}
