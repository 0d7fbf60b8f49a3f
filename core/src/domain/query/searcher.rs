use tracing::warn;

use super::{
    condition::ConditionExpression,
    value_objects::{FilterSpec, FilterValue},
};

/// Combines a filter with a collection's searchable fields into one
/// condition:
///
/// `AND( OR(field ≈ token for each searchable field), AND(field = value …) )`
///
/// Either clause is left out when it would be empty. With neither clause the
/// result is [`ConditionExpression::MatchAll`].
pub fn build(filter: &FilterSpec, searchable_fields: &[&str]) -> ConditionExpression {
    let mut clauses = Vec::with_capacity(2);

    if let Some(token) = filter.search_token() {
        if searchable_fields.is_empty() {
            warn!(token, "Search token ignored: no searchable fields declared");
        } else {
            clauses.push(ConditionExpression::Or(
                searchable_fields
                    .iter()
                    .map(|field| ConditionExpression::contains(*field, token))
                    .collect(),
            ));
        }
    }

    let exact: Vec<ConditionExpression> = filter
        .data_filters()
        .map(|(field, value)| match value {
            FilterValue::Exact(value) => ConditionExpression::equals(field, value.as_str()),
            FilterValue::Compare(comparisons) => {
                ConditionExpression::compare(field, comparisons.clone())
            }
        })
        .collect();
    if !exact.is_empty() {
        clauses.push(ConditionExpression::And(exact));
    }

    if clauses.is_empty() {
        ConditionExpression::MatchAll
    } else {
        ConditionExpression::And(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::value_objects::{Comparison, ComparisonOperator};

    #[test]
    fn test_search_and_exact_filters() {
        let filter = FilterSpec::new().exact("search", "phy").exact("name", "X");
        let condition = build(&filter, &["name", "code"]);

        assert_eq!(
            condition,
            ConditionExpression::And(vec![
                ConditionExpression::Or(vec![
                    ConditionExpression::contains("name", "phy"),
                    ConditionExpression::contains("code", "phy"),
                ]),
                ConditionExpression::And(vec![ConditionExpression::equals("name", "X")]),
            ])
        );
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(
            build(&FilterSpec::new(), &["name", "code"]),
            ConditionExpression::MatchAll
        );
        assert_eq!(build(&FilterSpec::new(), &[]), ConditionExpression::MatchAll);
    }

    #[test]
    fn test_search_without_searchable_fields_omits_or_clause() {
        let filter = FilterSpec::new().exact("search", "x");
        assert_eq!(build(&filter, &[]), ConditionExpression::MatchAll);

        let filter = FilterSpec::new().exact("search", "x").exact("title", "Fall");
        assert_eq!(
            build(&filter, &[]),
            ConditionExpression::And(vec![ConditionExpression::And(vec![
                ConditionExpression::equals("title", "Fall")
            ])])
        );
    }

    #[test]
    fn test_empty_search_token_is_absent() {
        let filter = FilterSpec::new().exact("search", "");
        assert_eq!(build(&filter, &["title"]), ConditionExpression::MatchAll);
    }

    #[test]
    fn test_comparisons_are_kept() {
        let mut filter = FilterSpec::new();
        filter.insert(
            "year",
            FilterValue::Compare(vec![Comparison::new(ComparisonOperator::Gte, "2020")]),
        );
        assert_eq!(
            build(&filter, &["title"]),
            ConditionExpression::And(vec![ConditionExpression::And(vec![
                ConditionExpression::compare(
                    "year",
                    vec![Comparison::new(ComparisonOperator::Gte, "2020")]
                )
            ])])
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let filter = FilterSpec::new()
            .exact("search", "ada")
            .exact("gender", "female")
            .exact("bloodGroup", "O+");
        let fields = ["id", "email", "name.firstName"];
        assert_eq!(build(&filter, &fields), build(&filter, &fields));
    }
}
