//! SQL rendering for collections stored as
//! `(seq BIGSERIAL, id TEXT PRIMARY KEY, doc JSONB NOT NULL)` tables.
//!
//! Field paths and values are always bound parameters; only the table name is
//! written into the SQL text, quoted.

use sea_orm::{DbBackend, Statement, Value};

use crate::domain::query::{
    condition::{ConditionExpression, FieldPredicate, Matcher},
    value_objects::{Comparison, ComparisonOperator, QuerySpec, SortDirection},
};

/// SQL text plus the values bound to its `$n` placeholders.
#[derive(Debug, Clone, Default)]
pub struct SqlStatement {
    sql: String,
    values: Vec<Value>,
}

impl SqlStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Binds a value and returns its placeholder.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_statement(self) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, self.sql, self.values)
    }
}

pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escapes `%`, `_` and `\` so a token matches literally inside `ILIKE`.
pub fn escape_like(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Text of the scalar at a dotted path: `doc -> $1 ->> $2`.
fn json_text(stmt: &mut SqlStatement, path: &str) -> String {
    json_path(stmt, path, "->>")
}

/// The `jsonb` value at a dotted path: `doc -> $1 -> $2`.
fn json_value(stmt: &mut SqlStatement, path: &str) -> String {
    json_path(stmt, path, "->")
}

fn json_path(stmt: &mut SqlStatement, path: &str, last_operator: &str) -> String {
    let segments: Vec<&str> = path.split('.').collect();
    let mut expr = String::from("doc");

    for (index, segment) in segments.iter().enumerate() {
        let placeholder = stmt.bind(segment.to_string());
        let operator = if index + 1 == segments.len() { last_operator } else { "->" };
        expr.push_str(&format!(" {operator} {placeholder}::text"));
    }

    format!("({expr})")
}

/// Numeric key of a path for ordering, `NULL` unless the value is a number.
fn numeric_key(stmt: &mut SqlStatement, path: &str) -> String {
    let value = json_value(stmt, path);
    format!("CASE WHEN jsonb_typeof({value}) = 'number' THEN {value}::numeric END")
}

fn comparison_operator(operator: ComparisonOperator) -> &'static str {
    match operator {
        ComparisonOperator::Gt => ">",
        ComparisonOperator::Gte => ">=",
        ComparisonOperator::Lt => "<",
        ComparisonOperator::Lte => "<=",
    }
}

/// Renders a condition as a boolean SQL expression, binding its values.
///
/// Comparisons and ordering use the `C` collation so text compares byte-wise,
/// and compare JSON numbers numerically.
pub fn render_condition(stmt: &mut SqlStatement, condition: &ConditionExpression) -> String {
    match condition {
        ConditionExpression::MatchAll => "TRUE".to_string(),
        ConditionExpression::And(children) => join(stmt, children, " AND ", "TRUE"),
        ConditionExpression::Or(children) => join(stmt, children, " OR ", "FALSE"),
        ConditionExpression::Predicate(predicate) => render_predicate(stmt, predicate),
    }
}

fn join(
    stmt: &mut SqlStatement,
    children: &[ConditionExpression],
    separator: &str,
    empty: &str,
) -> String {
    if children.is_empty() {
        return empty.to_string();
    }

    let parts: Vec<String> = children
        .iter()
        .map(|child| render_condition(stmt, child))
        .collect();
    format!("({})", parts.join(separator))
}

fn render_predicate(stmt: &mut SqlStatement, predicate: &FieldPredicate) -> String {
    match &predicate.matcher {
        Matcher::Equals(value) => {
            let field = json_text(stmt, &predicate.field);
            let placeholder = stmt.bind(value.clone());
            format!("{field} = {placeholder}")
        }
        Matcher::Compare(comparisons) => {
            if comparisons.is_empty() {
                return "TRUE".to_string();
            }
            let parts: Vec<String> = comparisons
                .iter()
                .map(|comparison| render_comparison(stmt, &predicate.field, comparison))
                .collect();
            format!("({})", parts.join(" AND "))
        }
        Matcher::Contains(token) => {
            let field = json_text(stmt, &predicate.field);
            let placeholder = stmt.bind(format!("%{}%", escape_like(token)));
            format!("{field} ILIKE {placeholder} ESCAPE '\\'")
        }
    }
}

/// Byte-wise text comparison, or a numeric one when the stored value is a
/// JSON number and the operand parses as a finite number.
fn render_comparison(stmt: &mut SqlStatement, field: &str, comparison: &Comparison) -> String {
    let operator = comparison_operator(comparison.operator);
    let numeric_operand = comparison
        .value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite());

    let Some(number) = numeric_operand else {
        let text = json_text(stmt, field);
        let placeholder = stmt.bind(comparison.value.clone());
        return format!("{text} COLLATE \"C\" {operator} {placeholder}");
    };

    let value = json_value(stmt, field);
    let number = stmt.bind(number);
    let text = json_text(stmt, field);
    let placeholder = stmt.bind(comparison.value.clone());
    format!(
        "(CASE WHEN jsonb_typeof({value}) = 'number' \
         THEN {value}::numeric {operator} {number}::numeric \
         ELSE {text} COLLATE \"C\" {operator} {placeholder} END)"
    )
}

/// `SELECT doc` over one collection with filtering, ordering and paging.
/// Rows without an explicit order come back in insertion order.
pub fn select_documents(
    collection: &str,
    condition: &ConditionExpression,
    spec: &QuerySpec,
) -> SqlStatement {
    let mut stmt = SqlStatement::new("SELECT doc FROM ");
    stmt.push(&quote_identifier(collection)).push(" WHERE ");
    let predicate = render_condition(&mut stmt, condition);
    stmt.push(&predicate).push(" ORDER BY ");

    for sort in spec.sort.iter().flatten() {
        let number = numeric_key(&mut stmt, &sort.field);
        let field = json_text(&mut stmt, &sort.field);
        let direction = match sort.direction {
            SortDirection::Asc => "ASC NULLS FIRST",
            SortDirection::Desc => "DESC NULLS LAST",
        };
        stmt.push(&format!(
            "{number} {direction}, {field} COLLATE \"C\" {direction}, "
        ));
    }
    stmt.push("seq ASC");

    let limit = spec.effective_limit();
    if limit > 0 {
        let placeholder = stmt.bind(i64::try_from(limit).unwrap_or(i64::MAX));
        stmt.push(&format!(" LIMIT {placeholder}"));
    }
    if let Some(skip) = spec.skip.filter(|skip| *skip > 0) {
        let placeholder = stmt.bind(i64::try_from(skip).unwrap_or(i64::MAX));
        stmt.push(&format!(" OFFSET {placeholder}"));
    }

    stmt
}

pub fn count_documents(collection: &str, condition: &ConditionExpression) -> SqlStatement {
    let mut stmt = SqlStatement::new("SELECT COUNT(*) AS count FROM ");
    stmt.push(&quote_identifier(collection)).push(" WHERE ");
    let predicate = render_condition(&mut stmt, condition);
    stmt.push(&predicate);
    stmt
}

/// Single-row statement keyed by id: `{head} "collection" WHERE id = $n {tail}`.
pub fn by_id(head: &str, collection: &str, tail: &str, id: &str) -> SqlStatement {
    let mut stmt = SqlStatement::new(head);
    stmt.push(" ").push(&quote_identifier(collection));
    let placeholder = stmt.bind(id.to_string());
    stmt.push(&format!(" WHERE id = {placeholder}"));
    if !tail.is_empty() {
        stmt.push(" ").push(tail);
    }
    stmt
}
