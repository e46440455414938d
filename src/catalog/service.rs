//! # Catalog Service
//!
//! The five catalog operations, each a full load → locate/mutate → persist
//! cycle against the store. The collection is never cached between
//! requests.

use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

use crate::store::FileStore;

use super::book::Book;
use super::errors::{CatalogError, CatalogResult};
use super::input::{BookPatch, NewBook};

/// Store-backed catalog service
pub struct Catalog {
    store: FileStore,
    /// Every load-mutate-persist cycle runs under this lock; concurrent
    /// writers would otherwise overwrite each other's saves.
    lock: Mutex<()>,
}

impl Catalog {
    /// Creates a catalog over the given store.
    pub fn new(store: FileStore) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Creates a new book from a request body and appends it to the
    /// collection.
    ///
    /// # Errors
    ///
    /// Validation errors for a malformed body, `DuplicateId` if the id is
    /// already taken, store errors on load/save failure.
    pub fn create(&self, body: &Value) -> CatalogResult<Book> {
        let book = NewBook::from_value(body)?.into_book();

        let _guard = self.lock.lock().unwrap();
        let mut books: Vec<Book> = self.store.load_all()?;

        if books.iter().any(|b| b.id == book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }

        books.push(book.clone());
        self.store.save_all(&books)?;

        debug!(id = %book.id, "book created");
        Ok(book)
    }

    /// Returns the full collection in insertion order.
    ///
    /// # Errors
    ///
    /// `EmptyCatalog` if the collection holds zero records; an empty result
    /// is a distinct outcome, not an empty list.
    pub fn list(&self) -> CatalogResult<Vec<Book>> {
        let _guard = self.lock.lock().unwrap();
        let books: Vec<Book> = self.store.load_all()?;

        if books.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(books)
    }

    /// Returns the first book whose id matches exactly.
    pub fn get(&self, id: &str) -> CatalogResult<Book> {
        let _guard = self.lock.lock().unwrap();
        let books: Vec<Book> = self.store.load_all()?;

        books
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Applies a partial update to the book with the given id.
    ///
    /// Fields present in the body overwrite stored values; absent fields
    /// are retained. An empty body leaves the book unchanged.
    pub fn update(&self, id: &str, body: &Value) -> CatalogResult<Book> {
        let patch = BookPatch::from_value(body)?;

        let _guard = self.lock.lock().unwrap();
        let mut books: Vec<Book> = self.store.load_all()?;

        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Err(CatalogError::NotFound(id.to_string()));
        };
        patch.apply(book);
        let updated = book.clone();

        self.store.save_all(&books)?;

        debug!(id = %updated.id, "book updated");
        Ok(updated)
    }

    /// Removes the book with the given id, preserving the relative order of
    /// the remaining records.
    pub fn delete(&self, id: &str) -> CatalogResult<()> {
        let _guard = self.lock.lock().unwrap();
        let mut books: Vec<Book> = self.store.load_all()?;

        let Some(position) = books.iter().position(|b| b.id == id) else {
            return Err(CatalogError::NotFound(id.to_string()));
        };
        books.remove(position);

        self.store.save_all(&books)?;

        debug!(id, "book deleted");
        Ok(())
    }
}
