//! Built-in coercion from submitted string values to field storage.
//!
//! Applies only to fields with no setter hook. Numeric kinds treat an
//! absent or blank submission as `"0"`; text and boolean kinds require a
//! value and report its absence explicitly.

use crate::error::DecodeError;
use crate::field::Slot;

/// Assign `values` into `slot`. `field` is the declared identifier, used
/// only in error reports.
pub(crate) fn assign(
    field: &'static str,
    slot: Slot<'_>,
    values: &[String],
) -> Result<(), DecodeError> {
    match slot {
        Slot::Text(dst) => {
            let value = values.first().ok_or(DecodeError::NoValues { field })?;
            *dst = value.clone();
        }
        Slot::Int(dst) => {
            let raw = scalar_or_zero(values);
            *dst = parse_i64(raw).ok_or_else(|| parse_error(field, "integer", raw))?;
        }
        Slot::Uint(dst) => {
            let raw = scalar_or_zero(values);
            *dst = parse_u64(raw).ok_or_else(|| parse_error(field, "unsigned integer", raw))?;
        }
        Slot::Float(dst) => {
            let raw = scalar_or_zero(values);
            *dst = raw
                .parse::<f64>()
                .map_err(|_| parse_error(field, "float", raw))?;
        }
        Slot::Bool(dst) => {
            let value = values.first().ok_or(DecodeError::NoValues { field })?;
            *dst = parse_bool(value).ok_or_else(|| parse_error(field, "boolean", value))?;
        }
        Slot::TextList(dst) => {
            *dst = values.to_vec();
        }
    }
    Ok(())
}

fn parse_error(field: &'static str, kind: &'static str, value: &str) -> DecodeError {
    DecodeError::Parse {
        field,
        kind,
        value: value.to_string(),
    }
}

/// A submission is "empty" when it carries no values, or one blank value.
fn empty(values: &[String]) -> bool {
    values.is_empty() || (values.len() == 1 && values[0].is_empty())
}

fn scalar_or_zero(values: &[String]) -> &str {
    if empty(values) { "0" } else { &values[0] }
}

/// Base-agnostic signed integer parse: optional sign, then `0x`/`0X`,
/// `0o`/`0O`, `0b`/`0B`, a legacy leading zero for octal, or decimal.
pub(crate) fn parse_i64(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = split_radix(rest);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        // i64::MIN has no positive counterpart, so allow one past i64::MAX.
        if magnitude > i64::MAX as u64 + 1 {
            return None;
        }
        Some((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Base-agnostic unsigned integer parse.
pub(crate) fn parse_u64(s: &str) -> Option<u64> {
    let rest = s.strip_prefix('+').unwrap_or(s);
    let (radix, digits) = split_radix(rest);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if s.len() > 1 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &s[2..]),
            b'o' | b'O' => (8, &s[2..]),
            b'b' | b'B' => (2, &s[2..]),
            _ => (8, &s[1..]),
        }
    } else {
        (10, s)
    }
}

/// The canonical boolean text set.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(vs: &[&str]) -> Vec<String> {
        vs.iter().map(|v| v.to_string()).collect()
    }

    // ── text ──

    #[test]
    fn text_takes_first_value() {
        let mut dst = String::new();
        assign("Name", Slot::Text(&mut dst), &values(&["Matt", "ignored"])).unwrap();
        assert_eq!(dst, "Matt");
    }

    #[test]
    fn text_without_values_is_explicit_error() {
        let mut dst = String::new();
        let err = assign("Name", Slot::Text(&mut dst), &[]).unwrap_err();
        assert!(matches!(err, DecodeError::NoValues { field: "Name" }));
    }

    // ── integers ──

    #[test]
    fn int_parses_decimal() {
        let mut dst = 0i64;
        assign("Year", Slot::Int(&mut dst), &values(&["1999"])).unwrap();
        assert_eq!(dst, 1999);
    }

    #[test]
    fn int_empty_defaults_to_zero() {
        let mut dst = 7i64;
        assign("Year", Slot::Int(&mut dst), &[]).unwrap();
        assert_eq!(dst, 0);

        let mut dst = 7i64;
        assign("Year", Slot::Int(&mut dst), &values(&[""])).unwrap();
        assert_eq!(dst, 0);
    }

    #[test]
    fn int_supports_base_prefixes() {
        for (raw, want) in [
            ("0x1F", 31),
            ("0o17", 15),
            ("0b101", 5),
            ("010", 8),
            ("-0x10", -16),
            ("+42", 42),
            ("0", 0),
        ] {
            assert_eq!(parse_i64(raw), Some(want), "raw: {raw}");
        }
    }

    #[test]
    fn int_rejects_malformed_literals() {
        for raw in ["abc", "0x", "1.5", "--1", "0x+1f", "019", ""] {
            assert_eq!(parse_i64(raw), None, "raw: {raw}");
        }
    }

    #[test]
    fn int_parse_failure_is_fatal() {
        let mut dst = 0i64;
        let err = assign("Year", Slot::Int(&mut dst), &values(&["abc"])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Parse {
                field: "Year",
                kind: "integer",
                ..
            }
        ));
    }

    #[test]
    fn uint_rejects_negative() {
        let mut dst = 0u64;
        assert!(assign("Year", Slot::Uint(&mut dst), &values(&["-1"])).is_err());
        assign("Year", Slot::Uint(&mut dst), &values(&["0xff"])).unwrap();
        assert_eq!(dst, 255);
    }

    #[test]
    fn int_boundaries() {
        assert_eq!(parse_i64("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_i64("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_i64("9223372036854775808"), None);
    }

    // ── float ──

    #[test]
    fn float_parses_and_defaults() {
        let mut dst = 0f64;
        assign("Speed", Slot::Float(&mut dst), &values(&["1.23"])).unwrap();
        assert_eq!(dst, 1.23);

        assign("Speed", Slot::Float(&mut dst), &values(&[""])).unwrap();
        assert_eq!(dst, 0.0);
    }

    // ── bool ──

    #[test]
    fn bool_accepts_canonical_set() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool(raw), Some(true), "raw: {raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(raw), Some(false), "raw: {raw}");
        }
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn bool_has_no_empty_fallback() {
        let mut dst = false;
        let err = assign("Flag", Slot::Bool(&mut dst), &values(&[""])).unwrap_err();
        assert!(matches!(err, DecodeError::Parse { kind: "boolean", .. }));

        let err = assign("Flag", Slot::Bool(&mut dst), &[]).unwrap_err();
        assert!(matches!(err, DecodeError::NoValues { field: "Flag" }));
    }

    // ── text list ──

    #[test]
    fn list_takes_every_value_in_order() {
        let mut dst = Vec::new();
        let vs = values(&["John", "Johnny", "Johnboy"]);
        assign("Nicknames", Slot::TextList(&mut dst), &vs).unwrap();
        assert_eq!(dst, vs);
    }
}
