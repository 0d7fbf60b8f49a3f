use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::document::value_objects::{ID_FIELD, UpdateDocument};

use super::CollectionSchema;

/// Turns a partial change set into dotted-path updates.
///
/// Sub-objects the schema declares as flattenable become one `parent.leaf`
/// entry per declared leaf, so sibling leaves keep their stored values.
/// Undeclared leaves are dropped. `null` means "unchanged" and `id` can
/// never be changed.
pub fn flatten_update(schema: &CollectionSchema, changes: Map<String, Value>) -> UpdateDocument {
    let mut update = UpdateDocument::new();

    for (key, value) in changes {
        if key == ID_FIELD {
            warn!(collection = schema.name, "Ignoring change to record id");
            continue;
        }
        if value.is_null() {
            continue;
        }

        match (schema.leaves_of(&key), value) {
            (Some(leaves), Value::Object(fields)) => {
                for (leaf, leaf_value) in fields {
                    if leaf_value.is_null() {
                        continue;
                    }
                    if leaves.contains(&leaf.as_str()) {
                        update.insert(format!("{key}.{leaf}"), leaf_value);
                    } else {
                        warn!(
                            collection = schema.name,
                            field = %key,
                            leaf = %leaf,
                            "Ignoring undeclared nested field"
                        );
                    }
                }
            }
            (_, value) => {
                update.insert(key, value);
            }
        }
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STUDENTS: CollectionSchema = CollectionSchema {
        name: "students",
        searchable_fields: &[],
        flattenable: &[
            ("name", &["firstName", "middleName", "lastName"]),
            ("guardian", &["fatherName", "motherName"]),
        ],
        references: &[],
        linked: None,
    };

    fn changes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_nested_changes_become_dotted_paths() {
        let update = flatten_update(
            &STUDENTS,
            changes(json!({
                "name": { "lastName": "Byron" },
                "guardian": { "motherName": "Anne" },
                "email": "ada@example.com",
            })),
        );

        assert_eq!(
            Value::Object(update),
            json!({
                "name.lastName": "Byron",
                "guardian.motherName": "Anne",
                "email": "ada@example.com",
            })
        );
    }

    #[test]
    fn test_only_declared_leaves_are_emitted() {
        let update = flatten_update(
            &STUDENTS,
            changes(json!({ "guardian": { "fatherName": "Tom", "nickname": "T" } })),
        );

        assert_eq!(Value::Object(update), json!({ "guardian.fatherName": "Tom" }));
    }

    #[test]
    fn test_nulls_and_id_are_skipped() {
        let update = flatten_update(
            &STUDENTS,
            changes(json!({
                "id": "00002",
                "email": null,
                "name": { "firstName": null, "middleName": "M" },
            })),
        );

        assert_eq!(Value::Object(update), json!({ "name.middleName": "M" }));
    }

    #[test]
    fn test_non_flattenable_objects_pass_through() {
        let update = flatten_update(
            &STUDENTS,
            changes(json!({ "address": { "city": "Dhaka" } })),
        );

        assert_eq!(Value::Object(update), json!({ "address": { "city": "Dhaka" } }));
    }
}
