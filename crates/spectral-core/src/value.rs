//! Coercion helpers for untrusted record values.
//!
//! Values arrive as JSON from form inputs, so these follow the loose
//! conversions a browser form layer would apply: `"42"` is a number, `""`
//! counts as empty, and anything is printable.

use serde_json::{Number, Value};

/// Missing, `null`, and `""` all count as "no value".
#[must_use]
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Coerce a value to a number; `None` means not-a-number.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => parse_number(&display_string(only)),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

// decimal, exponent, Infinity and 0x/0o/0b forms; surrounding whitespace ignored
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = s
            .strip_prefix(prefix)
            .or_else(|| s.strip_prefix(&prefix.to_ascii_uppercase()))
        {
            #[allow(clippy::cast_precision_loss)]
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // f64::from_str also takes "inf"/"nan" spellings, which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Render a value the way it would print in a text input.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), format_float)
    }
}

/// Shortest float rendering: `5` rather than `5.0`.
#[must_use]
pub fn format_float(f: f64) -> String {
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    format!("{f}")
}

/// Text length as users count it (Unicode scalar values).
#[must_use]
pub fn text_len(s: &str) -> usize {
    s.chars().count()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_covers_missing_null_and_empty_string() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!(" "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }

    #[test]
    fn numeric_strings_coerce() {
        assert_eq!(coerce_number(&json!("42")), Some(42.0));
        assert_eq!(coerce_number(&json!("  -3.5 ")), Some(-3.5));
        assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&json!("0x1F")), Some(31.0));
        assert_eq!(coerce_number(&json!("Infinity")), Some(f64::INFINITY));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!([7])), Some(7.0));
    }

    #[test]
    fn non_numeric_values_are_nan() {
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!("12px")), None);
        assert_eq!(coerce_number(&json!({ "n": 1 })), None);
        assert_eq!(coerce_number(&json!([1, 2])), None);
    }

    #[test]
    fn display_string_matches_input_rendering() {
        assert_eq!(display_string(&json!(5.0)), "5");
        assert_eq!(display_string(&json!(2.5)), "2.5");
        assert_eq!(display_string(&json!(["a", null, 3])), "a,,3");
        assert_eq!(display_string(&json!({})), "[object Object]");
    }

    #[test]
    fn text_len_counts_characters_not_bytes() {
        assert_eq!(text_len("ghoül"), 5);
    }
}
