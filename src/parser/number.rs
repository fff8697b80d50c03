use super::float::{self, FloatValidatorOptions};
use super::int::{self, IntParseOptions, IntValidatorOptions};
use super::{effective, Parser};
use crate::input::Input;
use crate::literal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberValidatorOptions {
    pub int: IntValidatorOptions,
    pub float: FloatValidatorOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberParseOptions {
    /// Radix handed to the integer parser.
    pub int_radix: Option<u32>,
}

/// Integer or float, whichever the text is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser;

pub static PARSER: NumberParser = NumberParser;

impl Parser<f64> for NumberParser {
    type ValidateOptions = NumberValidatorOptions;
    type ParseOptions = NumberParseOptions;
    type Error = Infallible;

    fn validate_sync(&self, input: Input<'_>, options: Option<&NumberValidatorOptions>) -> bool {
        if !input.is_present() {
            return false;
        }
        let options = effective(options);
        int::PARSER.validate_sync(input, Some(&options.int))
            || float::PARSER.validate_sync(input, Some(&options.float))
    }

    fn parse_sync(
        &self,
        input: Input<'_>,
        options: Option<&NumberParseOptions>,
    ) -> Result<f64, Infallible> {
        let text = match input {
            Input::Missing | Input::Null => return Ok(f64::NAN),
            Input::Text(text) => text,
        };

        if literal::is_int_literal(text, true) || literal::is_hex_literal(text) {
            let int_options = IntParseOptions {
                radix: effective(options).int_radix,
            };
            return int::PARSER.parse_sync(input, Some(&int_options));
        }
        if literal::is_float_literal(text) {
            return float::PARSER.parse_sync(input, None);
        }
        Ok(f64::NAN)
    }
}
