//! Recursive conversion of nested arrays and objects.
//!
//! Every leaf is handed to [`resolver::resolve`]; arrays and objects are rebuilt
//! around the results with the same length, keys and key order. Inputs are never
//! mutated. Recursion follows the nesting of the input with no depth limit.

use crate::config::TryAllOptions;
use crate::resolver;
use crate::value::{Map, Shape, Value};

pub fn walk_array(items: &[Value], options: &TryAllOptions) -> Vec<Value> {
    items.iter().map(|item| walk(item, options)).collect()
}

pub fn walk_object(map: &Map, options: &TryAllOptions) -> Map {
    let mut output = Map::with_capacity(map.len());
    for (key, value) in map {
        output.insert(key.clone(), walk(value, options));
    }
    output
}

/// Converts any value: containers are walked, leaves are resolved.
pub fn walk(value: &Value, options: &TryAllOptions) -> Value {
    match value.shape() {
        Shape::Sequence(items) => Value::Array(walk_array(items, options)),
        Shape::Mapping(map) => Value::Object(walk_object(map, options)),
        Shape::Scalar(leaf) => resolver::resolve(leaf, options),
    }
}
