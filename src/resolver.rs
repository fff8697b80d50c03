use crate::config::TryAllOptions;
use crate::input::Input;
use crate::parser::{boolean, date, number, Parser};
use crate::value::Value;

/// Best-guess conversion of a single leaf.
///
/// Strings are offered to the number, date and boolean parsers in that order,
/// skipping any disabled in `options`. The first parser that accepts the text
/// and yields a usable value wins; NaN is never usable. Everything else,
/// including `Undefined`, `Null`, values that are already typed and containers,
/// is returned unchanged.
#[must_use]
pub fn resolve(value: &Value, options: &TryAllOptions) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };

    match resolve_text(text, options) {
        Some(resolved) => {
            log::trace!("resolved '{text}' as {}", resolved.type_name());
            resolved
        }
        None => value.clone(),
    }
}

fn resolve_text(text: &str, options: &TryAllOptions) -> Option<Value> {
    let input = Input::Text(text);

    if options.number {
        let parsed = number::PARSER
            .validate_and_parse_sync(input, None, None)
            .filter(|n| !n.is_nan());
        if let Some(n) = parsed {
            return Some(Value::Number(n));
        }
    }

    if options.date {
        if let Some(d) = date::PARSER.validate_and_parse_sync(input, None, None) {
            return Some(Value::Date(d));
        }
    }

    if options.boolean {
        if let Some(b) = boolean::PARSER.validate_and_parse_sync(input, None, None) {
            return Some(Value::Bool(b));
        }
    }

    None
}
