//! # Request Input Schemas
//!
//! Per-operation schemas parsed out of dynamic JSON bodies before any
//! business logic runs: the full required-field set for create, an
//! all-optional patch for update.
//!
//! Validation is presence-based: a missing key and a key holding a zero
//! value are different things. `copies: 0` is a legal value everywhere.

use serde_json::{Map, Value};

use super::book::{Book, Year};
use super::errors::{CatalogError, CatalogResult};

/// Candidate record for the create operation; all fields required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: Year,
    pub copies: u64,
}

impl NewBook {
    /// Parses and validates a create request body.
    ///
    /// # Errors
    ///
    /// `InvalidBody` if the body is not an object, `MissingField` for each
    /// absent required key, `InvalidField` for present keys with unusable
    /// values.
    pub fn from_value(body: &Value) -> CatalogResult<Self> {
        let obj = as_object(body)?;

        Ok(Self {
            id: require(obj, "id", parse_string)?,
            title: require(obj, "title", parse_string)?,
            author: require(obj, "author", parse_string)?,
            genre: require(obj, "genre", parse_string)?,
            year: require(obj, "year", parse_year)?,
            copies: require(obj, "copies", parse_copies)?,
        })
    }

    pub fn into_book(self) -> Book {
        Book {
            id: self.id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year: self.year,
            copies: self.copies,
        }
    }
}

/// Partial record for the update operation; any subset of the mutable
/// fields. An `id` key in the body is ignored; the path parameter is the
/// only identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<Year>,
    pub copies: Option<u64>,
}

impl BookPatch {
    /// Parses and validates an update request body.
    ///
    /// Present keys are validated with the same per-field rules as create;
    /// absent keys stay `None`.
    pub fn from_value(body: &Value) -> CatalogResult<Self> {
        let obj = as_object(body)?;

        Ok(Self {
            title: optional(obj, "title", parse_string)?,
            author: optional(obj, "author", parse_string)?,
            genre: optional(obj, "genre", parse_string)?,
            year: optional(obj, "year", parse_year)?,
            copies: optional(obj, "copies", parse_copies)?,
        })
    }

    /// Overwrites each field of `book` for which this patch carries a value.
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(copies) = self.copies {
            book.copies = copies;
        }
    }
}

// ==================
// Field Parsers
// ==================

fn as_object(body: &Value) -> CatalogResult<&Map<String, Value>> {
    body.as_object()
        .ok_or(CatalogError::InvalidBody("expected a JSON object"))
}

fn require<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    parse: fn(&Value, &'static str) -> CatalogResult<T>,
) -> CatalogResult<T> {
    match obj.get(field) {
        Some(value) => parse(value, field),
        None => Err(CatalogError::MissingField(field)),
    }
}

fn optional<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    parse: fn(&Value, &'static str) -> CatalogResult<T>,
) -> CatalogResult<Option<T>> {
    obj.get(field).map(|value| parse(value, field)).transpose()
}

fn parse_string(value: &Value, field: &'static str) -> CatalogResult<String> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(CatalogError::InvalidField {
            field,
            reason: "must be a non-empty string",
        }),
    }
}

fn parse_year(value: &Value, field: &'static str) -> CatalogResult<Year> {
    if let Some(n) = value.as_i64() {
        return Ok(Year::Number(n));
    }
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(Year::Text(s.to_string())),
        _ => Err(CatalogError::InvalidField {
            field,
            reason: "must be an integer or a non-empty string",
        }),
    }
}

fn parse_copies(value: &Value, field: &'static str) -> CatalogResult<u64> {
    value.as_u64().ok_or(CatalogError::InvalidField {
        field,
        reason: "must be a non-negative integer",
    })
}
