//! Metric value literals.
//!
//! Counters take base-10 `i64`. Gauges take decimal or exponent notation,
//! hexadecimal floats with a mandatory `p` exponent (`0x1.8p1`), and the
//! special tokens `inf`, `infinity` (optionally signed) and `nan` (unsigned),
//! all case-insensitive. Any literal whose magnitude overflows `f64` is
//! rejected instead of rounding to infinity.

use crate::error::{MemstatError, Result};

/// Base-10 `i64` with an optional sign.
pub(crate) fn parse_counter_value(value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| MemstatError::InvalidIntegerValue(value.to_string()))
}

pub(crate) fn parse_gauge_value(value: &str) -> Result<f64> {
    let invalid = || MemstatError::InvalidFloatValue(value.to_string());
    let (sign, unsigned) = strip_sign(value);

    if unsigned.eq_ignore_ascii_case("nan") {
        return match sign {
            None => Ok(f64::NAN),
            Some(_) => Err(invalid()),
        };
    }

    let parsed = if has_hex_prefix(unsigned) {
        if !hex_underscores_ok(unsigned) {
            return Err(invalid());
        }
        let v = parse_hex_float(unsigned).ok_or_else(invalid)?;
        if sign == Some('-') {
            -v
        } else {
            v
        }
    } else {
        value.parse::<f64>().map_err(|_| invalid())?
    };

    if parsed.is_infinite() && !is_infinity_literal(unsigned) {
        return Err(invalid());
    }
    Ok(parsed)
}

fn strip_sign(s: &str) -> (Option<char>, &str) {
    match s.chars().next() {
        Some(c @ ('+' | '-')) => (Some(c), &s[1..]),
        _ => (None, s),
    }
}

fn is_infinity_literal(unsigned: &str) -> bool {
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_hex_prefix(unsigned: &str) -> bool {
    unsigned.starts_with("0x") || unsigned.starts_with("0X")
}

#[derive(PartialEq)]
enum Seen {
    Digit,
    Underscore,
    Other,
}

/// `_` may only sit between digits, or between the `0x` prefix and a digit.
fn hex_underscores_ok(unsigned: &str) -> bool {
    let mut seen = Seen::Digit;
    for c in unsigned.chars().skip(2) {
        if c.is_ascii_hexdigit() {
            seen = Seen::Digit;
        } else if c == '_' {
            if seen != Seen::Digit {
                return false;
            }
            seen = Seen::Underscore;
        } else if seen == Seen::Underscore {
            return false;
        } else {
            seen = Seen::Other;
        }
    }
    seen != Seen::Underscore
}

/// Significant hex digits kept in the mantissa (64 bits).
const MAX_MANT_DIGITS: u32 = 16;

/// Unsigned `0x<hex>[.<hex>]p[+-]<dec>`, underscores already validated.
fn parse_hex_float(unsigned: &str) -> Option<f64> {
    let body = unsigned.get(2..)?;
    let (mant, exp) = body.split_once(|c: char| c == 'p' || c == 'P')?;

    let mut mantissa: u64 = 0;
    let mut kept = 0u32;
    let mut bin_exp: i64 = 0;
    let mut saw_digit = false;
    let mut saw_dot = false;
    let mut truncated = false;

    for c in mant.chars().filter(|&c| c != '_') {
        if c == '.' {
            if saw_dot {
                return None;
            }
            saw_dot = true;
            continue;
        }
        let d = c.to_digit(16)?;
        saw_digit = true;
        if d == 0 && kept == 0 {
            if saw_dot {
                bin_exp -= 4;
            }
            continue;
        }
        if kept < MAX_MANT_DIGITS {
            mantissa = (mantissa << 4) | u64::from(d);
            kept += 1;
            if saw_dot {
                bin_exp -= 4;
            }
        } else {
            if !saw_dot {
                bin_exp += 4;
            }
            truncated |= d != 0;
        }
    }
    if !saw_digit {
        return None;
    }
    // sticky bit so the conversion below still rounds correctly
    if truncated {
        mantissa |= 1;
    }

    let bin_exp = bin_exp.saturating_add(parse_decimal_exponent(exp)?);
    Some(scale_by_pow2(mantissa as f64, bin_exp))
}

/// Bound on the magnitude of a parsed exponent; anything past it already
/// under- or overflows.
const EXP_CLAMP: i64 = 100_000;

fn parse_decimal_exponent(s: &str) -> Option<i64> {
    let (sign, digits) = strip_sign(s);
    let mut e: i64 = 0;
    let mut any = false;
    for c in digits.chars().filter(|&c| c != '_') {
        let d = c.to_digit(10)?;
        any = true;
        e = (e * 10 + i64::from(d)).min(EXP_CLAMP);
    }
    if !any {
        return None;
    }
    Some(if sign == Some('-') { -e } else { e })
}

fn scale_by_pow2(mut x: f64, mut exp: i64) -> f64 {
    const STEP: i32 = 1000;
    while exp > i64::from(STEP) && x.is_finite() && x != 0.0 {
        x *= 2f64.powi(STEP);
        exp -= i64::from(STEP);
    }
    while exp < -i64::from(STEP) && x != 0.0 {
        x *= 2f64.powi(-STEP);
        exp += i64::from(STEP);
    }
    let exp = exp.clamp(-i64::from(STEP), i64::from(STEP)) as i32;
    x * 2f64.powi(exp)
}
