//! # Book Record
//!
//! The sole entity of the catalog. Field names are part of the persisted
//! layout and the HTTP contract; they must stay stable.

use serde::{Deserialize, Serialize};

/// Publication year, accepted as either an integer or a string and treated
/// opaquely beyond that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Externally supplied primary key, unique within the collection
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: Year,
    pub copies: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_year_deserializes_from_number_and_string() {
        let n: Year = serde_json::from_value(json!(2000)).unwrap();
        assert_eq!(n, Year::Number(2000));

        let s: Year = serde_json::from_value(json!("2000")).unwrap();
        assert_eq!(s, Year::Text("2000".to_string()));
    }

    #[test]
    fn test_book_serializes_with_stable_field_names() {
        let book = Book {
            id: "b1".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            genre: "G".to_string(),
            year: Year::Number(2000),
            copies: 3,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "b1",
                "title": "T",
                "author": "A",
                "genre": "G",
                "year": 2000,
                "copies": 3
            })
        );
    }
}
