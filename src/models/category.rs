// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label, e.g. "Science".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// `{id: type}` lookup as served to clients. JSON object keys are the ids.
pub type CategoryMap = BTreeMap<i64, String>;

/// Collects categories into the id-to-label map.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serializes_with_id_keys() {
        let map = category_map(vec![
            Category { id: 2, category_type: "Art".into() },
            Category { id: 1, category_type: "Science".into() },
        ]);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
