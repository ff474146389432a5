// ABOUTME: Recipe filter handling: comparison expression parsing and SQL predicate building
// ABOUTME: Produces one predicate shared verbatim by the count and page queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe filters
//!
//! A search request carries optional, loosely-typed filters. Numeric filters are
//! comparison expressions such as `">=4.5"` or `"30"`, parsed by
//! [`expression::parse`]. [`predicate::PredicateBuilder`] turns the request into a
//! [`predicate::Predicate`]: a list of typed clauses rendered once into SQL plus
//! positional bindings, so the count query and the data query can never disagree.

/// Comparison expression parsing (`>=4.5`, `<10`, `5`)
pub mod expression;

/// Typed predicate clauses and their SQL rendering
pub mod predicate;

pub use expression::{parse, ComparisonOperator, ParsedComparison};
pub use predicate::{Binding, Clause, Column, FilterRequest, Predicate, PredicateBuilder, SqlValue};
