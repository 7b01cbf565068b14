//! Loosely-typed field values.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Date format used by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used by `<input type="time">`.
pub const TIME_FORMAT: &str = "%H:%M";

/// A value supplied for a form field, or resolved from submitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A boolean flag.
    Bool(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A wall-clock time.
    Time(NaiveTime),
    /// A date and time.
    DateTime(NaiveDateTime),
    /// Several values submitted under one name (`tags[]`).
    List(Vec<String>),
}

impl FieldValue {
    /// Returns whether the value compares loosely equal to the integer 1.
    ///
    /// Matches `1`, `true`, and numeric strings such as `"1"` or `"1.0"`.
    pub fn loosely_equals_one(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 1,
            Self::Bool(b) => *b,
            Self::Text(s) => parse_numeric(s).is_some_and(|n| (n - 1.0).abs() < f64::EPSILON),
            _ => false,
        }
    }

    /// Returns whether two values compare loosely equal.
    ///
    /// Numeric strings compare as numbers, booleans by truthiness, and
    /// everything else by rendered text.
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(b), v) | (v, Self::Bool(b)) => *b == v.is_truthy(),
            (a, b) => {
                let (a, b) = (a.to_string(), b.to_string());
                match (parse_numeric(&a), parse_numeric(&b)) {
                    (Some(x), Some(y)) => (x - y).abs() < f64::EPSILON,
                    _ => a == b,
                }
            }
        }
    }

    /// Returns whether the value counts as "set" for a checkbox.
    ///
    /// Empty text, `"0"`, `0`, `false` and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::Integer(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => true,
        }
    }

    /// Returns whether a list value contains the given value.
    ///
    /// A scalar value contains only itself.
    pub fn contains(&self, needle: &Self) -> bool {
        match self {
            Self::List(items) => {
                let needle = needle.to_string();
                items.iter().any(|item| *item == needle)
            }
            other => other.loosely_equals(needle),
        }
    }

    /// Returns whether the value carries a date, a time, or both.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date(_) | Self::Time(_) | Self::DateTime(_))
    }

    /// Formats the date part as `YYYY-MM-DD`.
    pub fn date_string(&self) -> Option<String> {
        match self {
            Self::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            Self::DateTime(dt) => Some(dt.format(DATE_FORMAT).to_string()),
            _ => None,
        }
    }

    /// Formats the time part as `HH:MM`.
    ///
    /// A bare date is taken to be at midnight.
    pub fn time_string(&self) -> Option<String> {
        match self {
            Self::Time(t) => Some(t.format(TIME_FORMAT).to_string()),
            Self::DateTime(dt) => Some(dt.format(TIME_FORMAT).to_string()),
            Self::Date(_) => Some("00:00".to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) => Ok(()),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for FieldValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.naive_local())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Parses a numeric string, tolerating surrounding whitespace.
fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
