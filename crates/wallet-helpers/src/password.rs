//! Heuristic password strength: character-class entropy scaled down when
//! the password has a well-known weak shape. Not a cryptographic measure.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::math::{add, log2};

const DIGIT_BASE: u32 = 10;
const LOWERCASE_BASE: u32 = 26;
const UPPERCASE_BASE: u32 = 26;
const PUNCTUATION_BASE: u32 = 31;
const PUNCTUATION: &str = "-!$%^&*()_+|~=`{}[]:\";'<>?@,./";

/// Weak shapes and their quality weights; the last entry matches anything.
static WEAK_PATTERNS: LazyLock<Vec<(f64, Regex)>> = LazyLock::new(|| {
    [
        (0.25, r"^[0-9\s]+$"),
        (0.25, r"^[a-z\s]+[0-9]$"),
        (0.25, r"^[A-Z\s]+[0-9]$"),
        (0.5, r"^[a-zA-Z\s]+[0-9]$"),
        (0.5, r"^[a-z\s]+[0-9]+$"),
        (0.25, r"^[a-z\s]+$"),
        (0.25, r"^[A-Z\s]+$"),
        (0.25, r"^[A-Z][a-z\s]+$"),
        (0.25, r"^[A-Z][a-z\s]+[0-9]$"),
        (0.5, r"^[A-Z][a-z\s]+[0-9]+$"),
        (0.25, r"^[a-z\s]+[._!\- @*#]$"),
        (0.25, r"^[A-Z\s]+[._!\- @*#]$"),
        (0.5, r"^[a-zA-Z\s]+[._!\- @*#]$"),
        (0.25, r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]+$"),
        (1.0, r"(?s)^.*$"),
    ]
    .into_iter()
    .map(|(weight, pattern)| (weight, Regex::new(pattern).expect("weak password pattern")))
    .collect()
});

/// Intermediate values behind a password score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PasswordAssessment {
    pub base: u32,
    pub entropy: f64,
    pub quality: f64,
    pub score: f64,
}

/// Score a dynamic value; anything that is not a string scores `0`.
pub fn score_password(password: &Value) -> f64 {
    match password {
        Value::String(s) => score_password_str(s),
        _ => 0.0,
    }
}

pub fn score_password_str(password: &str) -> f64 {
    assess_password(password).score
}

pub fn assess_password(password: &str) -> PasswordAssessment {
    let base = character_base(password);
    let entropy = entropy(password, base);
    let quality = quality(password);
    PasswordAssessment {
        base,
        entropy,
        quality,
        score: quality * entropy,
    }
}

/// Sum of the alphabets present in `password`; `1` when none are.
pub fn character_base(password: &str) -> u32 {
    let classes = [
        (DIGIT_BASE, password.chars().any(|c| c.is_ascii_digit())),
        (LOWERCASE_BASE, password.chars().any(|c| c.is_ascii_lowercase())),
        (UPPERCASE_BASE, password.chars().any(|c| c.is_ascii_uppercase())),
        (PUNCTUATION_BASE, password.chars().any(|c| PUNCTUATION.contains(c))),
    ];
    let base = classes
        .into_iter()
        .filter_map(|(size, present)| present.then_some(size))
        .fold(0, add);
    if base == 0 {
        1
    } else {
        base
    }
}

/// `log2(base ^ length)`, evaluated as `length * log2(base)` so long
/// passwords do not overflow to infinity.
fn entropy(password: &str, base: u32) -> f64 {
    password.chars().count() as f64 * log2(f64::from(base))
}

/// Lowest weight among the matching shapes.
fn quality(password: &str) -> f64 {
    WEAK_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(password))
        .map(|(weight, _)| *weight)
        .fold(1.0, f64::min)
}
