use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::document::value_objects::{Document, compare_to_operand, get_path, scalar_text};

use super::value_objects::{Comparison, ComparisonOperator};

/// Boolean predicate tree handed to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionExpression {
    /// Selects every record.
    MatchAll,
    And(Vec<ConditionExpression>),
    Or(Vec<ConditionExpression>),
    Predicate(FieldPredicate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub field: String,
    pub matcher: Matcher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matcher {
    Equals(String),
    /// Every comparison must hold.
    Compare(Vec<Comparison>),
    /// Case-insensitive substring match.
    Contains(String),
}

impl ConditionExpression {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::predicate(field, Matcher::Equals(value.into()))
    }

    pub fn contains(field: impl Into<String>, token: impl Into<String>) -> Self {
        Self::predicate(field, Matcher::Contains(token.into()))
    }

    pub fn compare(field: impl Into<String>, comparisons: Vec<Comparison>) -> Self {
        Self::predicate(field, Matcher::Compare(comparisons))
    }

    fn predicate(field: impl Into<String>, matcher: Matcher) -> Self {
        ConditionExpression::Predicate(FieldPredicate {
            field: field.into(),
            matcher,
        })
    }

    /// In-memory evaluation. Equality and search use the textual rendering of
    /// a scalar, comparisons are numeric for numbers; missing fields, `null` and composite values never match a
    /// predicate.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            ConditionExpression::MatchAll => true,
            ConditionExpression::And(children) => children.iter().all(|c| c.matches(doc)),
            ConditionExpression::Or(children) => children.iter().any(|c| c.matches(doc)),
            ConditionExpression::Predicate(predicate) => predicate.matches(doc),
        }
    }
}

impl FieldPredicate {
    pub fn matches(&self, doc: &Document) -> bool {
        let Some(value) = get_path(doc, &self.field) else {
            return false;
        };
        let Some(text) = scalar_text(value) else {
            return false;
        };
        let text: &str = &text;

        match &self.matcher {
            Matcher::Equals(expected) => text == expected,
            Matcher::Compare(comparisons) => comparisons.iter().all(|comparison| {
                compare_to_operand(value, &comparison.value)
                    .is_some_and(|ordering| holds(ordering, comparison.operator))
            }),
            Matcher::Contains(token) => text.to_lowercase().contains(&token.to_lowercase()),
        }
    }
}

fn holds(ordering: Ordering, operator: ComparisonOperator) -> bool {
    match operator {
        ComparisonOperator::Gt => ordering == Ordering::Greater,
        ComparisonOperator::Gte => ordering != Ordering::Less,
        ComparisonOperator::Lt => ordering == Ordering::Less,
        ComparisonOperator::Lte => ordering != Ordering::Greater,
    }
}
