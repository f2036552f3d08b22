//! JSON ingest.
//!
//! Turns a raw response body into a `RawTable` of JSON objects. The endpoint
//! has served several layouts over time, so the body is tried against an
//! ordered list of shape matchers; the first one that recognizes it wins.
//!
//! No type coercion happens here; see `io::normalize`.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::data::Fetch;
use crate::error::AppError;

/// One source row: column name -> raw JSON value.
pub type Row = Map<String, Value>;

/// Wrapper keys accepted around the row array, in priority order.
const WRAPPER_KEYS: [&str; 4] = ["items", "data", "results", "value"];

/// Rows as ingested, plus every column name seen in any row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Row>,
    pub columns: BTreeSet<String>,
}

impl RawTable {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows.iter().flat_map(|r| r.keys().cloned()).collect();
        Self { rows, columns }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which layout a body matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `[ {..}, {..} ]`
    Array,
    /// `{ "<key>": [ {..}, .. ] }`
    Wrapped(&'static str),
    /// Any other object, flattened.
    Flattened,
}

type ShapeMatcher = fn(&Value) -> Option<(Shape, Vec<Row>)>;

const SHAPE_MATCHERS: [ShapeMatcher; 3] = [match_array, match_wrapped, match_flattened];

/// Fetch `url` once and parse the body into a table.
pub fn fetch_table(fetcher: &dyn Fetch, url: &str) -> Result<RawTable, AppError> {
    let body = fetcher.fetch(url)?;
    parse_body(&body)
}

/// Parse a response body into a table.
pub fn parse_body(body: &[u8]) -> Result<RawTable, AppError> {
    let (shape, rows) = parse_with_shape(body)?;
    log::debug!("body matched shape {shape:?} with {} row(s)", rows.len());
    Ok(RawTable::from_rows(rows))
}

fn parse_with_shape(body: &[u8]) -> Result<(Shape, Vec<Row>), AppError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| AppError::Format(format!("Response body is not UTF-8: {e}")))?;

    // Servers on Windows stacks tend to prefix JSON with a BOM.
    let text = text.trim().trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Err(AppError::Format("Response body is empty.".to_string()));
    }

    let root: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Format(format!("Response body is not valid JSON: {e}")))?;

    SHAPE_MATCHERS
        .iter()
        .find_map(|matcher| matcher(&root))
        .ok_or_else(|| {
            AppError::Format(format!(
                "Unrecognized JSON layout (top-level {}); expected an array of objects.",
                kind_name(&root)
            ))
        })
}

fn match_array(root: &Value) -> Option<(Shape, Vec<Row>)> {
    let rows = object_rows(root.as_array()?)?;
    Some((Shape::Array, rows))
}

fn match_wrapped(root: &Value) -> Option<(Shape, Vec<Row>)> {
    let obj = root.as_object()?;
    WRAPPER_KEYS.iter().find_map(|&key| {
        let rows = object_rows(obj.get(key)?.as_array()?)?;
        Some((Shape::Wrapped(key), rows))
    })
}

fn match_flattened(root: &Value) -> Option<(Shape, Vec<Row>)> {
    let obj = root.as_object()?;
    let rows = match find_object_array(root) {
        Some(items) => object_rows(items)?,
        None => vec![flatten_object(obj)],
    };
    Some((Shape::Flattened, rows))
}

/// Flatten every element into a row, or `None` if any element is not an object.
fn object_rows(items: &[Value]) -> Option<Vec<Row>> {
    items
        .iter()
        .map(|item| item.as_object().map(flatten_object))
        .collect()
}

/// Depth-first search, in document order, for the first non-empty array made
/// only of objects.
fn find_object_array(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => {
            if !items.is_empty() && items.iter().all(Value::is_object) {
                return Some(items.as_slice());
            }
            items.iter().find_map(find_object_array)
        }
        Value::Object(map) => map.values().find_map(find_object_array),
        _ => None,
    }
}

/// Nested objects become dotted column names (`{"a": {"b": 1}}` -> `a.b`).
fn flatten_object(obj: &Map<String, Value>) -> Row {
    let mut out = Row::new();
    flatten_into("", obj, &mut out);
    out
}

fn flatten_into(prefix: &str, obj: &Map<String, Value>, out: &mut Row) {
    for (key, value) in obj {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => flatten_into(&name, inner, out),
            other => {
                out.insert(name, other.clone());
            }
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
