//! Gauge value coercion.

use serde_json::Value;

use crate::error::{BridgeError, Result};

/// Coerce a payload value to a finite `f64`.
///
/// Numbers pass through, booleans become `1.0`/`0.0`, strings are trimmed and
/// parsed. Null, arrays, objects, and non-finite results are rejected.
pub fn coerce_value(raw: &Value) -> Result<f64> {
    let v = match raw {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match v {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(BridgeError::InvalidValue(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(coerce_value(&json!(21.5)).unwrap(), 21.5);
        assert_eq!(coerce_value(&json!(1)).unwrap(), 1.0);
        assert_eq!(coerce_value(&json!(-3)).unwrap(), -3.0);
        assert_eq!(coerce_value(&json!(" 42.25 ")).unwrap(), 42.25);
        assert_eq!(coerce_value(&json!("1e3")).unwrap(), 1000.0);
        assert_eq!(coerce_value(&json!(true)).unwrap(), 1.0);
        assert_eq!(coerce_value(&json!(false)).unwrap(), 0.0);
    }

    #[test]
    fn non_numeric_is_rejected() {
        for raw in [
            json!("abc"),
            json!("notanumber"),
            json!(""),
            json!("NaN"),
            json!("inf"),
            json!(null),
            json!([1]),
            json!({"v": 1}),
        ] {
            let err = coerce_value(&raw).unwrap_err();
            assert!(matches!(err, BridgeError::InvalidValue(_)), "{raw}");
        }
    }
}
