use crate::config::TryAllOptions;
use crate::resolver;
use crate::value::Value;
use crate::walker;
use std::future::{ready, Ready};

/// Tries to turn `value` into a number, a date or a boolean, in that order.
///
/// Returns `value` unchanged when no enabled parser accepts it. `Undefined` and
/// `Null` are returned as they are without consulting any parser.
///
/// # Examples
///
/// ```
/// use string_to::{try_any_to_primitive, Value};
///
/// assert_eq!(try_any_to_primitive(&Value::from("2018"), None), Value::Number(2018.0));
/// assert_eq!(try_any_to_primitive(&Value::from("yes"), None), Value::Bool(true));
/// assert_eq!(
///     try_any_to_primitive(&Value::from("this is a string"), None),
///     Value::from("this is a string")
/// );
/// ```
#[must_use]
pub fn try_any_to_primitive(value: &Value, options: Option<&TryAllOptions>) -> Value {
    resolver::resolve(value, &options.copied().unwrap_or_default())
}

/// Converts every leaf of an array, recursing into nested arrays and objects.
///
/// Anything that is not an array, `Undefined` and `Null` included, comes back unchanged.
#[must_use]
pub fn parse_array_items_sync(value: &Value, options: Option<&TryAllOptions>) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(walker::walk_array(items, &options.copied().unwrap_or_default()))
        }
        other => other.clone(),
    }
}

pub fn parse_array_items(value: &Value, options: Option<&TryAllOptions>) -> Ready<Value> {
    ready(parse_array_items_sync(value, options))
}

/// Converts every value of an object, recursing into nested arrays and objects.
/// Keys and their order are kept.
///
/// Anything that is not an object, `Undefined` and `Null` included, comes back unchanged.
///
/// # Examples
///
/// ```
/// use string_to::{parse_object_keys_sync, Value};
///
/// let raw: Value = serde_json::from_str(r#"{ "port": "8080", "debug": "no" }"#).unwrap();
/// let typed = parse_object_keys_sync(&raw, None);
///
/// assert_eq!(typed.to_json_value(), serde_json::json!({ "port": 8080, "debug": false }));
/// ```
#[must_use]
pub fn parse_object_keys_sync(value: &Value, options: Option<&TryAllOptions>) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(walker::walk_object(map, &options.copied().unwrap_or_default()))
        }
        other => other.clone(),
    }
}

pub fn parse_object_keys(value: &Value, options: Option<&TryAllOptions>) -> Ready<Value> {
    ready(parse_object_keys_sync(value, options))
}

/// Converts a value of any shape: arrays and objects are walked, leaves are resolved.
#[must_use]
pub fn convert_sync(value: &Value, options: Option<&TryAllOptions>) -> Value {
    walker::walk(value, &options.copied().unwrap_or_default())
}

pub fn convert(value: &Value, options: Option<&TryAllOptions>) -> Ready<Value> {
    ready(convert_sync(value, options))
}
