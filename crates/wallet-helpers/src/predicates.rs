//! Type and format predicates over dynamic JSON values and strings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static ALPHA_NUM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-+,._A-Za-z0-9_\s]+$").expect("alphanumeric pattern"));

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for numeric values that are not NaN.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| !n.is_nan())
}

pub fn is_not_number(value: &Value) -> bool {
    !is_number(value)
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Labels only need to be strings.
pub fn is_valid_label(value: &Value) -> bool {
    is_string(value)
}

/// Letters, digits, whitespace and `-+,._`; empty strings are rejected.
pub fn is_alpha_num(input: &str) -> bool {
    ALPHA_NUM_PATTERN.is_match(input)
}

/// True iff `input` is one or more ASCII hex digits.
pub fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Half-open range check: `min <= value < max`.
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value < max
}
