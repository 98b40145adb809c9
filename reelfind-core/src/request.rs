//! Request construction for the recommendation service
//!
//! A search is a single `GET /recommend/{mode}?{key}={value}`. For every mode
//! except rating the value is the raw input string. Rating input is parsed as
//! a float with a leading-prefix parser, so `"7.5 stars"` becomes `7.5` and
//! non-numeric input becomes `NaN`, which is still sent as the text `NaN`.

use crate::mode::{SearchMode, RATING_MAX, RATING_MIN};
use crate::ReelfindError;
use serde::Serialize;
use std::fmt;

/// One outbound search request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub mode: SearchMode,
    pub key: &'static str,
    pub value: String,
}

impl SearchRequest {
    /// Build the request for `mode` from the raw input value.
    pub fn build(mode: SearchMode, raw: &str) -> Self {
        let value = match mode {
            SearchMode::Rating => format_number(parse_float(raw)),
            _ => raw.to_string(),
        };
        Self {
            mode,
            key: mode.query_key(),
            value,
        }
    }

    /// Like [`SearchRequest::build`], but rejects rating input that does not
    /// parse to a number within the rating bounds.
    pub fn build_strict(mode: SearchMode, raw: &str) -> crate::Result<Self> {
        if mode == SearchMode::Rating {
            let rating = parse_float(raw);
            if !rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&rating) {
                return Err(ReelfindError::InvalidRating(raw.to_string()));
            }
        }
        Ok(Self::build(mode, raw))
    }

    pub fn path(&self) -> String {
        self.mode.path()
    }

    pub fn query_pair(&self) -> (&'static str, &str) {
        (self.key, &self.value)
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}={}", self.path(), self.key, self.value)
    }
}

/// Parse the longest numeric prefix of `input` after leading whitespace.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// (`5.`, `.5`) and an exponent only when digits follow it. Returns `NaN`
/// when no digits are found.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // "5." is not accepted by str::parse
    s[..end].trim_end_matches('.').parse().unwrap_or(f64::NAN)
}

/// Render a number the way it appears in the outgoing query string.
///
/// Shortest round-trip digits; `NaN`, `Infinity` and `-Infinity` for the
/// special values; exponent notation below 1e-6 and from 1e21 upwards.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    } else {
        n.to_string()
    }
}
