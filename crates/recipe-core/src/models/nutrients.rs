// ABOUTME: Closed variant type for the loosely-typed nutrient mapping
// ABOUTME: Converts arbitrary JSON into string, number, boolean, or nested map values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nutrient mapping keyed by nutrient name (e.g. `"calories" -> "389 kcal"`)
pub type Nutrients = BTreeMap<String, NutrientValue>;

/// A single nutrient value
///
/// Serialized untagged, so a stored `{"calories": "389 kcal", "servings": 4}`
/// round-trips to the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric amount
    Number(f64),
    /// Free text such as `"389 kcal"`
    Text(String),
    /// Nested grouping
    Map(BTreeMap<String, NutrientValue>),
}

impl NutrientValue {
    /// Convert an arbitrary JSON value
    ///
    /// Returns `None` for nulls, arrays, and numbers that do not fit an `f64`.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(b)),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::Text(s)),
            serde_json::Value::Object(map) => Some(Self::Map(
                map.into_iter()
                    .filter_map(|(k, v)| Self::from_json(v).map(|v| (k, v)))
                    .collect(),
            )),
            serde_json::Value::Null | serde_json::Value::Array(_) => None,
        }
    }
}

/// Convert a JSON object into a nutrient mapping
///
/// Anything other than an object yields `None`; unrepresentable entries are dropped.
#[must_use]
pub fn nutrients_from_json(value: serde_json::Value) -> Option<Nutrients> {
    match NutrientValue::from_json(value)? {
        NutrientValue::Map(map) => Some(map),
        _ => None,
    }
}
