use serde::{Deserialize, Serialize};

/// Searchable fields shared by admins, faculty members and students.
pub const PERSON_SEARCHABLE_FIELDS: &[&str] = &[
    "id",
    "email",
    "contactNo",
    "name.firstName",
    "name.middleName",
    "name.lastName",
];

pub const NAME_FIELDS: &[&str] = &["firstName", "middleName", "lastName"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

/// Partial name change; absent parts stay as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChanges {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

/// A field holding another record's id, replaced by the record itself once
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Populated(Box<T>),
    Id(String),
}

impl<T> Reference<T> {
    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Populated(record) => Some(&**record),
            Reference::Id(_) => None,
        }
    }

    pub fn as_id(&self) -> Option<&str> {
        match self {
            Reference::Populated(_) => None,
            Reference::Id(id) => Some(id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Faculty {
        id: String,
        title: String,
    }

    #[test]
    fn test_reference_accepts_id_or_record() {
        let id: Reference<Faculty> = serde_json::from_value(json!("f-1")).unwrap();
        assert_eq!(id.as_id(), Some("f-1"));
        assert!(id.populated().is_none());

        let populated: Reference<Faculty> =
            serde_json::from_value(json!({ "id": "f-1", "title": "Science" })).unwrap();
        assert_eq!(populated.populated().map(|f| f.title.as_str()), Some("Science"));
        assert_eq!(populated.as_id(), None);
    }

    #[test]
    fn test_name_uses_camel_case() {
        let name: Name = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
        }))
        .unwrap();
        assert_eq!(name.middle_name, None);
        assert_eq!(
            serde_json::to_value(&name).unwrap()["firstName"],
            json!("Ada")
        );
    }
}
