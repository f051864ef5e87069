//! SQL literal rendering
//!
//! This module handles conversion of runtime values
//! to the literal text inlined into generated statements.

use crate::types::SqlValue;

/// Timestamp layout used for inline timestamp literals (always UTC)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Date layout used for inline date literals
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a value as inline SQL literal text
pub fn to_sql_literal(value: &SqlValue) -> String {
    match value {
        SqlValue::Text(s) => quote_text(s),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Float(f) => float_literal(*f),
        SqlValue::Decimal(d) => {
            if is_plain_number(d) {
                d.clone()
            } else {
                quote_text(d)
            }
        }
        SqlValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        SqlValue::Uuid(u) => quote_text(&u.hyphenated().to_string()),
        SqlValue::Date(d) => quote_text(&d.format(DATE_FORMAT).to_string()),
        SqlValue::Timestamp(ts) => quote_text(&ts.format(TIMESTAMP_FORMAT).to_string()),
        SqlValue::Null => "NULL".to_string(),
    }
}

/// Wrap text in single quotes, doubling any embedded quote
pub fn quote_text(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if c == '\'' {
            quoted.push('\'');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// Check whether a string is an unsigned or signed plain decimal number
/// (digits with at most one decimal point, no exponent)
pub fn is_plain_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return false;
    }

    let mut seen_point = false;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        quote_text("NaN")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            quote_text("Infinity")
        } else {
            quote_text("-Infinity")
        }
    } else {
        value.to_string()
    }
}
