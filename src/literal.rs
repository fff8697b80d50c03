//! Numeric literal grammar.
//!
//! Two families of operations live here: whole-string validators (`is_*_literal`)
//! used by the `validate` side of the numeric parsers, and prefix readers
//! (`read_int_prefix`, `read_float_prefix`) that consume the longest numeric
//! prefix of a string the way `parseInt` and `parseFloat` do.

use regex::Regex;
use std::sync::LazyLock;

static INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("invalid int regex"));

static INT_NO_LEADING_ZEROES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").expect("invalid strict int regex")
});

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(0x|0h)?[0-9a-f]+$").expect("invalid hex regex"));

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?$")
        .expect("invalid float regex")
});

// Sign and alphanumeric run after leading whitespace. Digits valid in the radix
// are picked out of the run afterwards.
static INT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{FEFF}]*([-+]?)([0-9A-Za-z]*)").expect("invalid int prefix regex")
});

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{FEFF}]*([-+]?)(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?)")
        .expect("invalid float prefix regex")
});

/// `[-+]?[0-9]+`, or `[-+]?(0|[1-9][0-9]*)` when leading zeroes are not allowed.
pub fn is_int_literal(text: &str, allow_leading_zeroes: bool) -> bool {
    if allow_leading_zeroes {
        INT.is_match(text)
    } else {
        INT_NO_LEADING_ZEROES.is_match(text)
    }
}

/// `(0x|0h)?[0-9a-f]+`, case-insensitive.
pub fn is_hex_literal(text: &str) -> bool {
    HEX.is_match(text)
}

/// `[-+]?[0-9]*(\.[0-9]*)?([eE][-+]?[0-9]+)?` with at least one mantissa digit.
pub fn is_float_literal(text: &str) -> bool {
    FLOAT.is_match(text)
}

/// Reads the longest integer prefix of `text`.
///
/// Leading whitespace and a sign are skipped. With no radix, or radix 16, a `0x`
/// prefix selects base 16. No radix otherwise means base 10. A radix outside
/// `2..=36`, or a prefix without digits, yields NaN.
pub fn read_int_prefix(text: &str, radix: Option<u32>) -> f64 {
    let radix = match radix {
        None | Some(0) => None,
        Some(r) if (2..=36).contains(&r) => Some(r),
        Some(_) => return f64::NAN,
    };
    let Some(caps) = INT_PREFIX.captures(text) else {
        return f64::NAN;
    };
    let negative = &caps[1] == "-";
    let mut run = &caps[2];

    let hex_prefixed = run.len() >= 2 && run[..2].eq_ignore_ascii_case("0x");
    let radix = match radix {
        None | Some(16) if hex_prefixed => {
            run = &run[2..];
            16
        }
        None => 10,
        Some(r) => r,
    };

    let end = run.find(|c: char| !c.is_digit(radix)).unwrap_or(run.len());
    let digits = &run[..end];
    if digits.is_empty() {
        return f64::NAN;
    }

    let value = digits_to_f64(digits, radix);
    if negative {
        -value
    } else {
        value
    }
}

/// Converts validated digits with a single rounding step.
fn digits_to_f64(digits: &str, radix: u32) -> f64 {
    if radix == 10 {
        return digits.parse().unwrap_or(f64::NAN);
    }
    match u128::from_str_radix(digits, radix) {
        Ok(exact) => exact as f64,
        // Beyond 128 bits the value is far outside what f64 resolves exactly.
        Err(_) => digits.chars().fold(0f64, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        }),
    }
}

/// Reads the longest decimal floating point prefix of `text`, accepting `Infinity`.
///
/// `Infinity` is case-sensitive, unlike Rust's own `inf`/`infinity` parsing.
pub fn read_float_prefix(text: &str) -> f64 {
    let Some(caps) = FLOAT_PREFIX.captures(text) else {
        return f64::NAN;
    };
    let negative = &caps[1] == "-";
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        number => number.parse().unwrap_or(f64::NAN),
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
