use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::{Map, Value};

/// A stored record: a JSON object that always carries a string `id`.
pub type Document = Value;

/// `$set`-style changes keyed by dotted path (`name.firstName`).
pub type UpdateDocument = Map<String, Value>;

/// Key shared by every collection, and between a parent record and its user.
pub const ID_FIELD: &str = "id";

pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

/// Walks a dotted path through nested objects.
pub fn get_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(doc, |current, segment| current.as_object()?.get(segment))
}

/// Textual rendering of a scalar; composite values and `null` have none.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Orders a stored scalar against a textual operand. Numbers compare
/// numerically when the operand parses as a finite number, everything else
/// compares as text.
pub fn compare_to_operand(value: &Value, operand: &str) -> Option<Ordering> {
    let numeric_operand = operand.parse::<f64>().ok().filter(|n| n.is_finite());
    if let (Some(number), Some(operand)) = (value.as_f64(), numeric_operand) {
        return number.partial_cmp(&operand);
    }
    scalar_text(value).map(|text| text.as_ref().cmp(operand))
}

/// Ascending order of two stored values. Missing and non-scalar values come
/// first, then text, then numbers in numeric order.
pub fn compare_scalars(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
        value.and_then(scalar_text)
    }

    match (left.and_then(Value::as_f64), right.and_then(Value::as_f64)) {
        (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| text(left).cmp(&text(right))),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => text(left).cmp(&text(right)),
    }
}

/// Sets `value` at a dotted path, creating (or replacing non-object)
/// intermediate levels.
pub fn set_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            target.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                set_path(child, rest, value);
            }
        }
    }
}

pub fn apply_update(doc: &mut Document, update: &UpdateDocument) {
    if let Value::Object(target) = doc {
        for (path, value) in update {
            set_path(target, path, value.clone());
        }
    }
}

/// Keeps only the listed (possibly dotted) fields. `id` is always kept.
pub fn project(doc: &Document, fields: &[String]) -> Document {
    let mut projected = Map::new();

    if let Some(id) = doc.get(ID_FIELD) {
        projected.insert(ID_FIELD.to_string(), id.clone());
    }
    for field in fields {
        if let Some(value) = get_path(doc, field) {
            set_path(&mut projected, field, value.clone());
        }
    }

    Value::Object(projected)
}
