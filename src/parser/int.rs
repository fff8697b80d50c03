use super::{effective, Bounds, Parser};
use crate::input::Input;
use crate::literal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntValidatorOptions {
    pub allow_leading_zeroes: bool,
    #[serde(flatten)]
    pub bounds: Bounds,
}

impl Default for IntValidatorOptions {
    fn default() -> Self {
        Self {
            allow_leading_zeroes: true,
            bounds: Bounds::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntParseOptions {
    /// Base for the digits. `None` means 10, or 16 for `0x`-prefixed text.
    pub radix: Option<u32>,
}

impl IntParseOptions {
    #[must_use]
    pub fn radix(radix: u32) -> Self {
        Self { radix: Some(radix) }
    }
}

/// Integers, decimal or hexadecimal, as `f64`.
///
/// Parsing reads the longest integer prefix and yields NaN when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntParser;

pub static PARSER: IntParser = IntParser;

impl Parser<f64> for IntParser {
    type ValidateOptions = IntValidatorOptions;
    type ParseOptions = IntParseOptions;
    type Error = Infallible;

    fn validate_sync(&self, input: Input<'_>, options: Option<&IntValidatorOptions>) -> bool {
        let text = match input {
            Input::Missing | Input::Null => return false,
            Input::Text(text) => text,
        };
        let options = effective(options);
        let is_int = literal::is_int_literal(text, options.allow_leading_zeroes)
            && options.bounds.contains(literal::read_int_prefix(text, Some(10)));
        is_int || literal::is_hex_literal(text)
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&IntParseOptions>,
    ) -> Result<f64, Infallible> {
        match input {
            Input::Missing | Input::Null => Ok(f64::NAN),
            Input::Text(text) => Ok(literal::read_int_prefix(text, effective(options).radix)),
        }
    }
}
