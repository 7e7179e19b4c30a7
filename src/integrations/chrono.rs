//! Date and time scalars backed by [`chrono`] types.
//!
//! # Supported scalars
//!
//! | GraphQL scalar | Rust type                            | Format                      |
//! |----------------|--------------------------------------|-----------------------------|
//! | `DateTime`     | [`DateTime`]`<`[`FixedOffset`]`>`    | `yyyy-MM-ddTHH:mm:ss±hh:mm` |
//! | `Date`         | [`NaiveDate`]                        | `yyyy-MM-dd`                |
//! | `Time`         | [`NaiveTime`]                        | `HH:mm:ss`                  |
//!
//! `Date` also serializes the date of a [`DateTime`], and `Time` its time of
//! day.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike as _};

use crate::{
    ast::LiteralNode,
    error::{ConversionError, ConversionResult},
    parser::Spanning,
    types::{
        base::{ScalarConverter, ScalarDescriptor},
        utilities::{string_literal, string_value},
    },
    value::Value,
};

/// [`ScalarDescriptor`] of the `DateTime` scalar.
pub const DATE_TIME: ScalarDescriptor = ScalarDescriptor {
    name: "DateTime",
    description: "The `DateTime` scalar type represents time data, represented as an ISO-8601 \
                  encoded UTC date string.",
};

/// [`ScalarDescriptor`] of the `Date` scalar.
pub const DATE: ScalarDescriptor = ScalarDescriptor {
    name: "Date",
    description: "The `Date` scalar type represents date data in format \"2012-12-31\"",
};

/// [`ScalarDescriptor`] of the `Time` scalar.
pub const TIME: ScalarDescriptor = ScalarDescriptor {
    name: "Time",
    description: "The `Time` scalar type represents time data in format \"15:20:32\"",
};

/// Output format of the `DateTime` scalar (ISO-8601 extended, with offset).
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format of the `Date` scalar.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `Time` scalar.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Maximum number of fractional second digits accepted by the `DateTime`
/// scalar.
const MAX_FRACTION_DIGITS: usize = 6;

/// Checks that `s` matches the `shape` byte by byte, where `d` stands for an
/// ASCII digit and any other byte for itself.
fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            p => c == p,
        })
}

/// Checks that `s` is `yyyy-MM-ddTHH:mm:ss`, optionally followed by up to
/// [`MAX_FRACTION_DIGITS`] fractional digits and by either `Z` or a `±hh:mm`
/// offset.
///
/// `chrono` alone accepts looser input (padding whitespace, signed years,
/// colon-less offsets), so inputs are checked against this shape first.
fn has_date_time_shape(s: &str) -> bool {
    let Some((date_time, rest)) = s.split_at_checked(19) else {
        return false;
    };
    if !matches_shape(date_time, "dddd-dd-ddTdd:dd:dd") {
        return false;
    }
    let offset = match rest.strip_prefix('.') {
        Some(fraction) => {
            let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
            if !(1..=MAX_FRACTION_DIGITS).contains(&digits) {
                return false;
            }
            &fraction[digits..]
        }
        None => rest,
    };
    match offset.as_bytes() {
        [] | [b'Z'] => true,
        [b'+' | b'-', ..] => matches_shape(&offset[1..], "dd:dd"),
        _ => false,
    }
}

/// Indicates whether `time` is a leap second, which none of the scalars
/// accept.
fn is_leap_second(time: NaiveTime) -> bool {
    time.nanosecond() >= 1_000_000_000
}

/// Input format accepted by the `DateTime` scalar.
#[derive(Clone, Copy, Debug)]
enum DateTimeFormat {
    /// Format without an offset, interpreted as UTC.
    Local(&'static str),

    /// Format with an explicit `±hh:mm` offset.
    Offset(&'static str),

    /// [RFC 3339] profile of ISO-8601, with optional fractional seconds and
    /// `Z` or `±hh:mm` offset.
    ///
    /// [RFC 3339]: https://datatracker.ietf.org/doc/html/rfc3339#section-5.6
    Rfc3339,
}

/// Input formats of the `DateTime` scalar, in the order they are tried.
const DATE_TIME_INPUT_FORMATS: [DateTimeFormat; 5] = [
    DateTimeFormat::Local("%Y-%m-%dT%H:%M:%S"),
    DateTimeFormat::Local("%Y-%m-%dT%H:%M:%S%.f"),
    DateTimeFormat::Offset("%Y-%m-%dT%H:%M:%S%.f%:z"),
    DateTimeFormat::Offset("%Y-%m-%dT%H:%M:%S%:z"),
    DateTimeFormat::Rfc3339,
];

impl DateTimeFormat {
    /// Parses the whole `s` string, rejecting any trailing input.
    fn parse(self, s: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Local(fmt) => NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|dt| dt.and_utc().into()),
            Self::Offset(fmt) => DateTime::parse_from_str(s, fmt).ok(),
            Self::Rfc3339 => DateTime::parse_from_rfc3339(s).ok(),
        }
    }
}

/// `DateTime` scalar: an instant on the time-line with a UTC offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeScalar;

impl DateTimeScalar {
    /// Parses the `s` string against the accepted input formats, returning
    /// the result of the first one matching it entirely.
    ///
    /// Values without an offset are interpreted as UTC.
    pub fn parse_str(s: &str) -> Option<DateTime<FixedOffset>> {
        let parsed = has_date_time_shape(s)
            .then(|| {
                DATE_TIME_INPUT_FORMATS.iter().find_map(|fmt| {
                    let dt = fmt.parse(s)?;
                    __scalars_trace!(format = ?fmt, input = s, "`DateTime` input format matched");
                    Some(dt)
                })
            })
            .flatten()
            .filter(|dt| !is_leap_second(dt.time()));
        if parsed.is_none() {
            __scalars_trace_debug!(input = s, "no `DateTime` input format matched");
        }
        parsed
    }

    /// Formats the `dt` in ISO-8601 extended format, keeping its offset.
    pub fn format(dt: &DateTime<FixedOffset>) -> String {
        dt.format(DATE_TIME_FORMAT).to_string()
    }
}

impl ScalarConverter for DateTimeScalar {
    type Literal<'n> = &'n str;

    fn descriptor(&self) -> &'static ScalarDescriptor {
        &DATE_TIME
    }

    fn serialize(&self, value: &Value) -> ConversionResult<Value> {
        match value {
            Value::DateTime(dt) => Ok(Value::scalar(Self::format(dt))),
            v => Err(non_date_time_error(&DATE_TIME, v)),
        }
    }

    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>> {
        Ok(string_value(DATE_TIME.name, value)?
            .and_then(Self::parse_str)
            .map(Value::DateTime))
    }

    fn parse_literal<'n>(&self, node: &'n Spanning<LiteralNode>) -> ConversionResult<&'n str> {
        string_literal(node)
    }
}

/// `Date` scalar: a calendar date without time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateScalar;

impl DateScalar {
    /// Parses the `s` string strictly as `yyyy-MM-dd`.
    pub fn parse_str(s: &str) -> Option<NaiveDate> {
        if !matches_shape(s, "dddd-dd-dd") {
            return None;
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
    }

    /// Formats the `date` as `yyyy-MM-dd`.
    pub fn format(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }
}

impl ScalarConverter for DateScalar {
    type Literal<'n> = &'n str;

    fn descriptor(&self) -> &'static ScalarDescriptor {
        &DATE
    }

    fn serialize(&self, value: &Value) -> ConversionResult<Value> {
        match value {
            Value::Date(d) => Ok(Value::scalar(Self::format(d))),
            Value::DateTime(dt) => Ok(Value::scalar(Self::format(&dt.date_naive()))),
            v => Err(non_date_time_error(&DATE, v)),
        }
    }

    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>> {
        Ok(string_value(DATE.name, value)?
            .and_then(Self::parse_str)
            .map(Value::Date))
    }

    fn parse_literal<'n>(&self, node: &'n Spanning<LiteralNode>) -> ConversionResult<&'n str> {
        string_literal(node)
    }
}

/// `Time` scalar: a time of day without date.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeScalar;

impl TimeScalar {
    /// Parses the `s` string strictly as `HH:mm:ss`.
    ///
    /// Keeps the parsed hour, minute and second. Leap seconds are rejected.
    pub fn parse_str(s: &str) -> Option<NaiveTime> {
        if !matches_shape(s, "dd:dd:dd") {
            return None;
        }
        NaiveTime::parse_from_str(s, TIME_FORMAT)
            .ok()
            .filter(|t| !is_leap_second(*t))
    }

    /// Formats the `time` as `HH:mm:ss`, dropping any fractional seconds.
    pub fn format(time: &NaiveTime) -> String {
        time.format(TIME_FORMAT).to_string()
    }
}

impl ScalarConverter for TimeScalar {
    type Literal<'n> = &'n str;

    fn descriptor(&self) -> &'static ScalarDescriptor {
        &TIME
    }

    fn serialize(&self, value: &Value) -> ConversionResult<Value> {
        match value {
            Value::Time(t) => Ok(Value::scalar(Self::format(t))),
            Value::DateTime(dt) => Ok(Value::scalar(Self::format(&dt.time()))),
            v => Err(non_date_time_error(&TIME, v)),
        }
    }

    fn parse_value(&self, value: &Value) -> ConversionResult<Option<Value>> {
        Ok(string_value(TIME.name, value)?
            .and_then(Self::parse_str)
            .map(Value::Time))
    }

    fn parse_literal<'n>(&self, node: &'n Spanning<LiteralNode>) -> ConversionResult<&'n str> {
        string_literal(node)
    }
}

fn non_date_time_error(descriptor: &ScalarDescriptor, value: &Value) -> ConversionError {
    __scalars_trace_debug!(scalar = descriptor.name, "non date/time value rejected");
    ConversionError::type_mismatch(format!(
        "{} cannot represent non DateTime value: {}",
        descriptor.name,
        value.print_safe(),
    ))
}



#[cfg(test)]
mod time_test {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

    use crate::{
        ConversionErrorKind, ScalarConverter as _, ast::LiteralNode, parser::Spanning,
        value::Value,
    };

    use super::TimeScalar;

    #[test]
    fn parses_correct_input_keeping_time_of_day() {
        for (raw, expected) in [
            ("14:23:43", NaiveTime::from_hms_opt(14, 23, 43)),
            ("00:00:00", NaiveTime::from_hms_opt(0, 0, 0)),
            ("23:59:59", NaiveTime::from_hms_opt(23, 59, 59)),
            ("15:20:32", NaiveTime::from_hms_opt(15, 20, 32)),
        ] {
            let parsed = TimeScalar.parse_value(&Value::scalar(raw));

            assert_eq!(parsed, Ok(expected.map(Value::Time)), "input: {raw}");
        }
    }

    #[test]
    fn yields_no_value_on_invalid_input() {
        for raw in [
            "12",
            "12:",
            "14:23",
            "56:34:22",
            "23:78:43",
            "24:00:00",
            "14:23:43.345",
            "14:23:43Z",
            "2020-01-01T14:23:43",
            "i'm not even a time",
            "01: 2:03",
            "1:02:03",
            " 01:02:03",
            "01:02:03 ",
            "+1:02:03",
            "01-02-03",
            "23:59:60",
        ] {
            assert_eq!(
                TimeScalar.parse_value(&Value::scalar(raw)),
                Ok(None),
                "allows input: {raw}",
            );
        }
    }

    #[test]
    fn formats_correctly() {
        let date_time: DateTime<FixedOffset> = NaiveDate::from_ymd_opt(2020, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap()
            .and_utc()
            .into();

        for (val, expected) in [
            (
                Value::Time(NaiveTime::from_hms_micro_opt(1, 2, 3, 4005).unwrap()),
                "01:02:03",
            ),
            (Value::Time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "00:00:00"),
            (Value::Time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00:00"),
            (Value::DateTime(date_time), "07:08:09"),
        ] {
            assert_eq!(
                TimeScalar.serialize(&val),
                Ok(Value::scalar(expected)),
                "on value: {val:?}",
            );
        }
    }

    #[test]
    fn fails_to_serialize_non_time() {
        for val in [
            Value::scalar(1.5),
            Value::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
        ] {
            let err = TimeScalar.serialize(&val).unwrap_err();

            assert_eq!(err.kind(), ConversionErrorKind::TypeMismatch, "on value: {val:?}");
        }
    }

    #[test]
    fn parses_string_literal_only() {
        let node = Spanning::unlocated(LiteralNode::string("15:20:32"));
        assert_eq!(TimeScalar.parse_literal(&node), Ok("15:20:32"));

        let node = Spanning::unlocated(LiteralNode::from(true));
        let err = TimeScalar.parse_literal(&node).unwrap_err();
        assert_eq!(err.kind(), ConversionErrorKind::InvalidLiteralKind);
    }
}
