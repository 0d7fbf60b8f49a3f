use tracing::{debug, warn};

use crate::domain::common::QueryDefaults;

use super::value_objects::{
    Comparison, ComparisonOperator, FilterSpec, FilterValue, QuerySpec, RESERVED_PARAMETERS,
    RawParameters, SortSpec,
};

/// Splits raw request parameters into data filters and listing directives.
///
/// Handles formats like:
/// - `field=value` (exact match)
/// - `field[gte]=value` (comparison, also `gt`, `lt`, `lte`)
/// - `name[firstName]=value` (exact match on the dotted path `name.firstName`)
/// - `sort=field,-other`, `fields=a,b`, `page=2`, `limit=5`
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryTranslator {
    defaults: QueryDefaults,
}

impl QueryTranslator {
    pub fn new(defaults: QueryDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> QueryDefaults {
        self.defaults
    }

    pub fn translate(&self, params: &RawParameters) -> (FilterSpec, QuerySpec) {
        let filter = self.filter_spec(params);
        let query = self.query_spec(params);

        debug!(filters = filter.len(), ?query, "Translated query parameters");

        (filter, query)
    }

    fn filter_spec(&self, params: &RawParameters) -> FilterSpec {
        let mut filter = FilterSpec::new();

        for (key, value) in params.iter() {
            if is_reserved(key) {
                continue;
            }
            let Some(value) = value else {
                continue;
            };

            let (path, operator) = parse_filter_key(key);
            let entry = match operator {
                Some(operator) => FilterValue::Compare(vec![Comparison::new(operator, value)]),
                None => FilterValue::Exact(value.to_string()),
            };
            filter.insert(path, entry);
        }

        filter
    }

    fn query_spec(&self, params: &RawParameters) -> QuerySpec {
        let mut query = QuerySpec::default();

        if let Some(fields) = params.value("fields") {
            let fields: Vec<String> = fields
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect();
            if !fields.is_empty() {
                query.fields = Some(fields);
            }
        }

        if let Some(sort) = params.value("sort") {
            let sorts = SortSpec::parse_list(sort);
            if !sorts.is_empty() {
                query.sort = Some(sorts);
            }
        }

        let page = params.value("page");
        let limit = params.value("limit");
        if page.is_some() || limit.is_some() {
            let page = parse_count("page", page, self.defaults.page).max(1);
            let limit = parse_count("limit", limit, self.defaults.limit);

            query.skip = Some((page - 1).saturating_mul(limit));
            query.limit = Some(limit);
        }

        query
    }
}

/// Control parameters are never filters, bracketed (`sort[gt]`) or not.
fn is_reserved(key: &str) -> bool {
    let base = key.split('[').next().unwrap_or(key);
    RESERVED_PARAMETERS.contains(&base)
}

/// Resolves a filter key to its dotted field path and, when the last bracket
/// segment is exactly an operator name, the comparison operator.
///
/// Keys that are not well formed bracket expressions are kept verbatim.
fn parse_filter_key(key: &str) -> (String, Option<ComparisonOperator>) {
    let Some(open) = key.find('[') else {
        return (key.to_string(), None);
    };

    let base = &key[..open];
    if base.is_empty() {
        return (key.to_string(), None);
    }

    let mut segments = Vec::new();
    let mut remaining = &key[open..];
    while !remaining.is_empty() {
        let Some(inner) = remaining.strip_prefix('[') else {
            return (key.to_string(), None);
        };
        let Some(end_bracket) = inner.find(']') else {
            return (key.to_string(), None);
        };
        let segment = &inner[..end_bracket];
        if segment.is_empty() || segment.contains('[') {
            return (key.to_string(), None);
        }
        segments.push(segment);
        remaining = &inner[end_bracket + 1..];
    }

    let operator = segments
        .last()
        .and_then(|segment| segment.parse::<ComparisonOperator>().ok());
    if operator.is_some() {
        segments.pop();
    }

    let mut path = base.to_string();
    for segment in segments {
        path.push('.');
        path.push_str(segment);
    }

    (path, operator)
}

fn parse_count(name: &str, raw: Option<&str>, default: u64) -> u64 {
    match raw {
        None => default,
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!(
                parameter = name,
                value, default, "Malformed pagination value, using default"
            );
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(pairs: &[(&str, &str)]) -> (FilterSpec, QuerySpec) {
        QueryTranslator::default().translate(&RawParameters::from_pairs(pairs))
    }

    #[test]
    fn test_reserved_keys_never_reach_filters() {
        let (filter, _) = translate(&[
            ("sort", "name"),
            ("page", "2"),
            ("limit", "5"),
            ("fields", "name"),
            ("bloodGroup", "A+"),
        ]);
        for reserved in RESERVED_PARAMETERS {
            assert!(!filter.contains_key(reserved));
        }
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get("bloodGroup"), Some(&FilterValue::Exact("A+".into())));

        let (filter, query) = translate(&[
            ("sort[gt]", "a"),
            ("limit[gte]", "5"),
            ("page[lt]", "3"),
            ("fields[name]", "x"),
            ("year[gte]", "2020"),
        ]);
        for reserved in RESERVED_PARAMETERS {
            assert!(!filter.contains_key(reserved));
        }
        assert_eq!(filter.len(), 1);
        assert!(filter.contains_key("year"));
        assert_eq!(query, QuerySpec::default());
    }

    #[test]
    fn test_reserved_keys_without_values_are_dropped() {
        let mut params = RawParameters::new();
        params.insert("page", None);
        params.insert("gender", None);
        let (filter, query) = QueryTranslator::default().translate(&params);
        assert!(filter.is_empty());
        assert_eq!(query, QuerySpec::default());
    }

    #[test]
    fn test_operator_key_becomes_comparison() {
        let (filter, _) = translate(&[("age[gte]", "18")]);
        assert_eq!(
            filter.get("age"),
            Some(&FilterValue::Compare(vec![Comparison::new(
                ComparisonOperator::Gte,
                "18"
            )]))
        );
    }

    #[test]
    fn test_operators_on_one_field_accumulate() {
        let (filter, _) = translate(&[("age[gt]", "18"), ("age[lte]", "30")]);
        assert_eq!(
            filter.get("age"),
            Some(&FilterValue::Compare(vec![
                Comparison::new(ComparisonOperator::Gt, "18"),
                Comparison::new(ComparisonOperator::Lte, "30"),
            ]))
        );
    }

    #[test]
    fn test_partial_operator_words_are_not_rewritten() {
        let (filter, _) = translate(&[
            ("digest", "abc"),
            ("age[gtex]", "1"),
            ("title", "lt"),
            ("height[ltee]", "2"),
        ]);
        assert_eq!(filter.get("digest"), Some(&FilterValue::Exact("abc".into())));
        assert_eq!(filter.get("age.gtex"), Some(&FilterValue::Exact("1".into())));
        assert_eq!(filter.get("title"), Some(&FilterValue::Exact("lt".into())));
        assert_eq!(filter.get("height.ltee"), Some(&FilterValue::Exact("2".into())));
    }

    #[test]
    fn test_nested_keys_become_dotted_paths() {
        let (filter, _) = translate(&[
            ("name[firstName]", "Ada"),
            ("guardian[income][gte]", "100"),
        ]);
        assert_eq!(filter.get("name.firstName"), Some(&FilterValue::Exact("Ada".into())));
        assert_eq!(
            filter.get("guardian.income"),
            Some(&FilterValue::Compare(vec![Comparison::new(
                ComparisonOperator::Gte,
                "100"
            )]))
        );
    }

    #[test]
    fn test_malformed_bracket_keys_are_kept_verbatim() {
        assert_eq!(parse_filter_key("age[gte"), ("age[gte".to_string(), None));
        assert_eq!(parse_filter_key("[gte]"), ("[gte]".to_string(), None));
        assert_eq!(parse_filter_key("tags[]"), ("tags[]".to_string(), None));
        assert_eq!(parse_filter_key("age[gte]x"), ("age[gte]x".to_string(), None));
    }

    #[test]
    fn test_fields_projection() {
        let (_, query) = translate(&[("fields", "name, email,,id")]);
        assert_eq!(
            query.fields,
            Some(vec!["name".to_string(), "email".to_string(), "id".to_string()])
        );
        assert_eq!(query.projection().as_deref(), Some("name email id"));

        let (_, query) = translate(&[("fields", " , ")]);
        assert_eq!(query.fields, None);
    }

    #[test]
    fn test_sort_keeps_order_and_direction() {
        let (_, query) = translate(&[("sort", "-createdAt,name")]);
        assert_eq!(
            query.sort,
            Some(vec![SortSpec::desc("createdAt"), SortSpec::asc("name")])
        );
    }

    #[test]
    fn test_pagination_page_and_limit() {
        let (_, query) = translate(&[("page", "2"), ("limit", "5")]);
        assert_eq!(query.skip, Some(5));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_pagination_limit_only() {
        let (_, query) = translate(&[("limit", "5")]);
        assert_eq!(query.skip, Some(0));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_pagination_page_only_uses_default_limit() {
        let (_, query) = translate(&[("page", "3")]);
        assert_eq!(query.skip, Some(20));
        assert_eq!(query.limit, Some(10));
    }

    #[test]
    fn test_pagination_absent() {
        let (_, query) = translate(&[("name", "X")]);
        assert_eq!(query.skip, None);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_pagination_malformed_values_fall_back_to_defaults() {
        let (_, query) = translate(&[("page", "abc"), ("limit", "-4")]);
        assert_eq!(query.skip, Some(0));
        assert_eq!(query.limit, Some(10));

        let (_, query) = translate(&[("page", "0"), ("limit", "5")]);
        assert_eq!(query.skip, Some(0));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_configured_defaults() {
        let translator = QueryTranslator::new(QueryDefaults { page: 1, limit: 25 });
        let (_, query) = translator.translate(&RawParameters::from_pairs(&[("page", "2")]));
        assert_eq!(query.skip, Some(25));
        assert_eq!(query.limit, Some(25));
    }
}
