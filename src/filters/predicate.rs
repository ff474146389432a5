// ABOUTME: Builds the typed WHERE predicate for recipe search from a filter request
// ABOUTME: Renders SQL and positional bindings once for both the count and page queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::expression::{self, ComparisonOperator};
use crate::pagination::PageRequest;

/// Structured search request handed over by the HTTP adapter
///
/// Every filter is optional. Blank strings are treated as absent and numeric
/// expressions that fail to parse are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive exact cuisine
    pub cuisine: Option<String>,
    /// Rating expression, e.g. `">=4.5"`
    pub rating: Option<String>,
    /// Total time expression, e.g. `"<=30"`
    pub total_time: Option<String>,
    /// Calories expression, e.g. `"<400"`
    pub calories: Option<String>,
    /// Requested page (defaults to 1)
    pub page: Option<i64>,
    /// Requested page size (defaults to 10)
    pub limit: Option<i64>,
}

impl FilterRequest {
    /// Paging part of the request
    #[must_use]
    pub const fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// Filterable recipe columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `title` (text)
    Title,
    /// `cuisine` (text)
    Cuisine,
    /// `rating` (real)
    Rating,
    /// `total_time` (integer)
    TotalTime,
    /// `calories_num` (integer, derived by storage)
    Calories,
}

impl Column {
    /// Qualified column name in the `recipes r` relation
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Title => "r.title",
            Self::Cuisine => "r.cuisine",
            Self::Rating => "r.rating",
            Self::TotalTime => "r.total_time",
            Self::Calories => "r.calories_num",
        }
    }

    /// Lower-cased shadow column used for case-insensitive matches
    ///
    /// Storage fills the shadow columns with Unicode-lowercased copies of
    /// `title` and `cuisine`; other columns are compared as they are.
    #[must_use]
    pub const fn folded_sql(&self) -> &'static str {
        match self {
            Self::Title => "r.title_lower",
            Self::Cuisine => "r.cuisine_lower",
            Self::Rating | Self::TotalTime | Self::Calories => self.as_sql(),
        }
    }

    /// Name of the parameter bound for this column
    #[must_use]
    pub const fn binding_name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Cuisine => "cuisine",
            Self::Rating => "rating",
            Self::TotalTime => "tt",
            Self::Calories => "cal",
        }
    }
}

/// A value bound to a query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// TEXT
    Text(String),
    /// REAL
    Real(f64),
    /// INTEGER
    Integer(i64),
}

/// A named parameter and its value
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Parameter name, for logs
    pub name: &'static str,
    /// Bound value
    pub value: SqlValue,
}

/// One AND-ed condition of the predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `folded_column LIKE '%needle%'` with the needle lowercased
    ContainsIgnoreCase {
        /// Column searched
        column: Column,
        /// Literal substring
        needle: String,
    },
    /// `folded_column = value` with the value lowercased
    EqualsIgnoreCase {
        /// Column compared
        column: Column,
        /// Expected value
        value: String,
    },
    /// `column <op> value`
    Compare {
        /// Column compared
        column: Column,
        /// Operator
        operator: ComparisonOperator,
        /// Operand, already typed for the column
        value: SqlValue,
    },
}

impl Clause {
    /// Column this clause constrains
    #[must_use]
    pub const fn column(&self) -> Column {
        match self {
            Self::ContainsIgnoreCase { column, .. }
            | Self::EqualsIgnoreCase { column, .. }
            | Self::Compare { column, .. } => *column,
        }
    }

    fn render(&self, placeholder: usize) -> String {
        match self {
            Self::ContainsIgnoreCase { column, .. } => format!(
                "{} LIKE ${placeholder} ESCAPE '\\'",
                column.folded_sql()
            ),
            Self::EqualsIgnoreCase { column, .. } => {
                format!("{} = ${placeholder}", column.folded_sql())
            }
            Self::Compare {
                column, operator, ..
            } => format!("{} {} ${placeholder}", column.as_sql(), operator.as_sql()),
        }
    }

    fn binding(&self) -> Binding {
        let value = match self {
            Self::ContainsIgnoreCase { needle, .. } => {
                SqlValue::Text(format!("%{}%", escape_like(&needle.to_lowercase())))
            }
            Self::EqualsIgnoreCase { value, .. } => SqlValue::Text(value.to_lowercase()),
            Self::Compare { value, .. } => value.clone(),
        };
        Binding {
            name: self.column().binding_name(),
            value,
        }
    }
}

/// Escape LIKE wildcards so the needle matches literally
///
/// Title search is a plain substring search: a `%` or `_` typed by a user
/// (`"100%"`, `"rye_bread"`) matches that character, never any run of text.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// An always-true base predicate followed by AND-ed clauses
///
/// Clause `i` is bound to placeholder `$(i + 1)`; callers appending their own
/// parameters (LIMIT/OFFSET) start at [`Predicate::next_placeholder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Predicate matching every row
    #[must_use]
    pub const fn match_all() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Clauses in binding order
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when no filter contributed a clause
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// `WHERE 1=1 AND ...` fragment
    #[must_use]
    pub fn where_sql(&self) -> String {
        let mut sql = String::from("WHERE 1=1");
        for (index, clause) in self.clauses.iter().enumerate() {
            // Writing to a String cannot fail
            let _ = write!(sql, " AND {}", clause.render(index + 1));
        }
        sql
    }

    /// Bindings in placeholder order
    #[must_use]
    pub fn bindings(&self) -> Vec<Binding> {
        self.clauses.iter().map(Clause::binding).collect()
    }

    /// First placeholder number free for additional parameters
    #[must_use]
    pub fn next_placeholder(&self) -> usize {
        self.clauses.len() + 1
    }
}

/// Accumulates clauses from optional, loosely-typed filters
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    clauses: Vec<Clause>,
}

impl PredicateBuilder {
    /// Start from the always-true predicate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the predicate for a search request
    #[must_use]
    pub fn from_request(request: &FilterRequest) -> Predicate {
        Self::new()
            .contains_ignore_case(Column::Title, request.title.as_deref())
            .equals_ignore_case(Column::Cuisine, request.cuisine.as_deref())
            .compare_real(Column::Rating, request.rating.as_deref())
            .compare_integer(Column::TotalTime, request.total_time.as_deref())
            .compare_integer(Column::Calories, request.calories.as_deref())
            .build()
    }

    /// Add a case-insensitive substring match unless `needle` is blank
    #[must_use]
    pub fn contains_ignore_case(mut self, column: Column, needle: Option<&str>) -> Self {
        if let Some(needle) = non_blank(needle) {
            self.clauses.push(Clause::ContainsIgnoreCase {
                column,
                needle: needle.to_owned(),
            });
        }
        self
    }

    /// Add a case-insensitive equality match unless `value` is blank
    #[must_use]
    pub fn equals_ignore_case(mut self, column: Column, value: Option<&str>) -> Self {
        if let Some(value) = non_blank(value) {
            self.clauses.push(Clause::EqualsIgnoreCase {
                column,
                value: value.to_owned(),
            });
        }
        self
    }

    /// Add a comparison on a REAL column; unparsable expressions are dropped
    #[must_use]
    pub fn compare_real(self, column: Column, expr: Option<&str>) -> Self {
        self.compare(column, expr, |parsed| SqlValue::Real(parsed.value))
    }

    /// Add a comparison on an INTEGER column, truncating the operand
    #[must_use]
    pub fn compare_integer(self, column: Column, expr: Option<&str>) -> Self {
        self.compare(column, expr, |parsed| {
            SqlValue::Integer(parsed.value_as_integer())
        })
    }

    fn compare(
        mut self,
        column: Column,
        expr: Option<&str>,
        to_value: impl FnOnce(&expression::ParsedComparison) -> SqlValue,
    ) -> Self {
        let Some(expr) = non_blank(expr) else {
            return self;
        };
        match expression::parse(expr) {
            Some(parsed) => self.clauses.push(Clause::Compare {
                column,
                operator: parsed.operator,
                value: to_value(&parsed),
            }),
            None => debug!(
                filter = column.binding_name(),
                expression = %expr,
                "Ignoring unparsable filter expression"
            ),
        }
        self
    }

    /// Finish the predicate
    #[must_use]
    pub fn build(self) -> Predicate {
        Predicate {
            clauses: self.clauses,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FilterRequest {
        FilterRequest::default()
    }

    #[test]
    fn test_empty_request_matches_all() {
        let predicate = PredicateBuilder::from_request(&request());
        assert!(predicate.is_empty());
        assert_eq!(predicate.where_sql(), "WHERE 1=1");
        assert!(predicate.bindings().is_empty());
        assert_eq!(predicate.next_placeholder(), 1);
    }

    #[test]
    fn test_blank_filters_are_absent() {
        let predicate = PredicateBuilder::from_request(&FilterRequest {
            title: Some("   ".to_owned()),
            cuisine: Some(String::new()),
            rating: Some(" \t".to_owned()),
            ..request()
        });
        assert!(predicate.is_empty());
    }

    #[test]
    fn test_all_filters_render_in_order() {
        let predicate = PredicateBuilder::from_request(&FilterRequest {
            title: Some("Pie".to_owned()),
            cuisine: Some("Southern Recipes".to_owned()),
            rating: Some(">=4.5".to_owned()),
            total_time: Some("<= 60.9".to_owned()),
            calories: Some("400".to_owned()),
            ..request()
        });

        assert_eq!(
            predicate.where_sql(),
            "WHERE 1=1 \
             AND r.title_lower LIKE $1 ESCAPE '\\' \
             AND r.cuisine_lower = $2 \
             AND r.rating >= $3 \
             AND r.total_time <= $4 \
             AND r.calories_num = $5"
        );
        assert_eq!(
            predicate.bindings(),
            vec![
                Binding {
                    name: "title",
                    value: SqlValue::Text("%pie%".to_owned())
                },
                Binding {
                    name: "cuisine",
                    value: SqlValue::Text("southern recipes".to_owned())
                },
                Binding {
                    name: "rating",
                    value: SqlValue::Real(4.5)
                },
                Binding {
                    name: "tt",
                    value: SqlValue::Integer(60)
                },
                Binding {
                    name: "cal",
                    value: SqlValue::Integer(400)
                },
            ]
        );
        assert_eq!(predicate.next_placeholder(), 6);
    }

    #[test]
    fn test_unparsable_expression_is_dropped() {
        let with_bad = PredicateBuilder::from_request(&FilterRequest {
            cuisine: Some("italian".to_owned()),
            total_time: Some("fast".to_owned()),
            ..request()
        });
        let without = PredicateBuilder::from_request(&FilterRequest {
            cuisine: Some("italian".to_owned()),
            ..request()
        });
        assert_eq!(with_bad, without);
        assert_eq!(with_bad.where_sql(), without.where_sql());
    }

    #[test]
    fn test_placeholders_stay_dense_after_dropped_filter() {
        let predicate = PredicateBuilder::from_request(&FilterRequest {
            rating: Some("abc".to_owned()),
            calories: Some("<500".to_owned()),
            ..request()
        });
        assert_eq!(predicate.where_sql(), "WHERE 1=1 AND r.calories_num < $1");
        assert_eq!(predicate.next_placeholder(), 2);
    }

    #[test]
    fn test_like_wildcards_are_escaped() {
        let predicate = PredicateBuilder::new()
            .contains_ignore_case(Column::Title, Some("100%_pure\\"))
            .build();
        assert_eq!(
            predicate.bindings()[0].value,
            SqlValue::Text("%100\\%\\_pure\\\\%".to_owned())
        );
    }

    #[test]
    fn test_text_operands_are_unicode_lowercased() {
        let predicate = PredicateBuilder::from_request(&FilterRequest {
            title: Some("CRÈME".to_owned()),
            cuisine: Some("FRANÇAISE".to_owned()),
            ..request()
        });
        let values: Vec<SqlValue> = predicate.bindings().into_iter().map(|b| b.value).collect();
        assert_eq!(
            values,
            vec![
                SqlValue::Text("%crème%".to_owned()),
                SqlValue::Text("française".to_owned()),
            ]
        );
    }

    #[test]
    fn test_rating_keeps_real_operand() {
        let predicate = PredicateBuilder::new()
            .compare_real(Column::Rating, Some("<3.75"))
            .build();
        assert_eq!(predicate.bindings()[0].value, SqlValue::Real(3.75));
    }
}
