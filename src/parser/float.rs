use super::{effective, Bounds, Parser};
use crate::input::Input;
use crate::literal;
use std::convert::Infallible;

pub type FloatValidatorOptions = Bounds;

/// Decimal floating point numbers, with optional exponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

pub static PARSER: FloatParser = FloatParser;

impl Parser<f64> for FloatParser {
    type ValidateOptions = FloatValidatorOptions;
    type ParseOptions = ();
    type Error = Infallible;

    fn validate_sync(&self, input: Input<'_>, options: Option<&FloatValidatorOptions>) -> bool {
        let text = match input {
            Input::Missing | Input::Null => return false,
            Input::Text(text) => text,
        };
        literal::is_float_literal(text)
            && effective(options).contains(literal::read_float_prefix(text))
    }

    fn parse_sync(&self, input: Input<'_>, _options: Option<&()>) -> Result<f64, Infallible> {
        match input {
            Input::Missing | Input::Null => Ok(f64::NAN),
            Input::Text(text) => Ok(literal::read_float_prefix(text)),
        }
    }
}
