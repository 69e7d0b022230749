//! Loose coercion of JSON values and query strings
//!
//! Browser clients send whatever their form state holds: numbers as strings,
//! booleans, nulls. These helpers turn such values into strings and numbers
//! the same way a browser would, so validation can apply one set of rules.

use serde_json::Value;

/// Trim whitespace the way browsers do, including the byte-order mark U+FEFF.
pub fn js_trim(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Browser string form of a number: integral values carry no fraction
fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form with an explicit sign, e.g. 1e+21
        let s = format!("{:e}", n);
        if s.contains("e-") {
            s
        } else {
            s.replacen('e', "e+", 1)
        }
    } else {
        n.to_string()
    }
}

/// Parse a numeric string. Surrounding whitespace is ignored, an empty string
/// is zero, and anything that is not a complete numeric literal is NaN.
pub fn number_from_str(input: &str) -> f64 {
    let s = js_trim(input);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // f64::from_str also accepts "inf" and "nan"; only plain decimal literals are numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// f64 value of a JSON number literal; literals beyond the f64 range become
/// infinite, as a browser parser would make them.
fn number_value(n: &serde_json::Number) -> f64 {
    n.as_f64()
        .unwrap_or_else(|| number_from_str(&n.to_string()))
}

/// Numeric value of a JSON value; `None` stands for a missing field.
pub fn value_to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => number_value(n),
        Some(Value::String(s)) => number_from_str(s),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            [single] => number_from_str(&value_to_string(Some(single))),
            _ => f64::NAN,
        },
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// String value of a JSON value; missing fields and `null` become empty.
pub fn value_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_string(number_value(n)),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| value_to_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}
