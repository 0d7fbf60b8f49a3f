use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Control parameters: they shape the result page and are never data filters.
pub const RESERVED_PARAMETERS: [&str; 4] = ["sort", "page", "limit", "fields"];

/// Filter key carrying the free-text search token.
pub const SEARCH_KEY: &str = "search";

/// Query parameters exactly as received at the system boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters(BTreeMap<String, Option<String>>);

impl RawParameters {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parse a URL query string such as `search=phy&age[gte]=18&page=2`.
    /// A repeated key keeps its last value.
    pub fn from_query_string(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding malformed query string");
            Vec::new()
        });

        pairs
            .into_iter()
            .map(|(key, value)| (key, Some(value)))
            .collect()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), Some(value.to_string())))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Drops every key addressing `field`, plain (`field`) or bracketed
    /// (`field[gte]`, `field[sub]`).
    pub fn remove_field(&mut self, field: &str) {
        self.0.retain(|key, _| key.split('[').next() != Some(field));
    }

    /// Value for `key`, treating a missing or empty value as absent.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for RawParameters {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Comparison operator recognized in bracket notation (`age[gte]=18`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(ComparisonOperator::Gt),
            "gte" => Ok(ComparisonOperator::Gte),
            "lt" => Ok(ComparisonOperator::Lt),
            "lte" => Ok(ComparisonOperator::Lte),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub value: String,
}

impl Comparison {
    pub fn new(operator: ComparisonOperator, value: impl Into<String>) -> Self {
        Self {
            operator,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    Exact(String),
    Compare(Vec<Comparison>),
}

/// Data filters derived from raw parameters, keyed by (dotted) field path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec(BTreeMap<String, FilterValue>);

impl FilterSpec {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn exact(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, FilterValue::Exact(value.into()));
        self
    }

    /// Adds `value` under `field`. Comparisons on the same field accumulate;
    /// any other combination replaces the previous entry.
    pub fn insert(&mut self, field: impl Into<String>, value: FilterValue) {
        let field = field.into();
        match (self.0.get_mut(&field), value) {
            (Some(FilterValue::Compare(existing)), FilterValue::Compare(more)) => {
                existing.extend(more);
            }
            (_, value) => {
                self.0.insert(field, value);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.0.get(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// The free-text token, if one was supplied as an exact, non-empty value.
    pub fn search_token(&self) -> Option<&str> {
        match self.0.get(SEARCH_KEY) {
            Some(FilterValue::Exact(token)) if !token.is_empty() => Some(token.as_str()),
            _ => None,
        }
    }

    /// Every entry except the search token.
    pub fn data_filters(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.iter().filter(|(field, _)| *field != SEARCH_KEY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn parse_list(s: &str) -> Vec<SortSpec> {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                if !stripped.is_empty() {
                    sorts.push(SortSpec::desc(stripped));
                }
            } else {
                sorts.push(SortSpec::asc(part));
            }
        }
        sorts
    }
}

/// Projection, ordering and pagination directives for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub fields: Option<Vec<String>>,
    pub sort: Option<Vec<SortSpec>>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl QuerySpec {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.skip = Some(self.skip.unwrap_or(0));
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Projection as a space separated inclusion list, `None` when every
    /// field is returned.
    pub fn projection(&self) -> Option<String> {
        self.fields.as_ref().map(|fields| fields.join(" "))
    }

    /// Effective row limit; `0` stands for "no limit".
    pub fn effective_limit(&self) -> u64 {
        self.limit.unwrap_or(0)
    }
}
