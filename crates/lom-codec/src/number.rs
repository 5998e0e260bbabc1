use serde_json::Value;

/// Integer view of a host number. The host may send integral floats.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Non-negative integer view of a number or a string of digits.
pub(crate) fn as_index(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => as_integer(value).and_then(|i| u64::try_from(i).ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_integer() {
        assert_eq!(as_integer(&json!(4)), Some(4));
        assert_eq!(as_integer(&json!(-4)), Some(-4));
        assert_eq!(as_integer(&json!(4.0)), Some(4));
        assert_eq!(as_integer(&json!(4.5)), None);
        assert_eq!(as_integer(&json!("4")), None);
    }

    #[test]
    fn test_as_index() {
        assert_eq!(as_index(&json!(12)), Some(12));
        assert_eq!(as_index(&json!("12")), Some(12));
        assert_eq!(as_index(&json!(-1)), None);
        assert_eq!(as_index(&json!("")), None);
        assert_eq!(as_index(&json!("1a")), None);
        assert_eq!(as_index(&json!(null)), None);
    }
}
