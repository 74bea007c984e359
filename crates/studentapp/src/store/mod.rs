//! # Storage Layer
//!
//! This module defines the storage abstraction for studentapp. The [`DataStore`]
//! trait lets the command layer and the API work against any store.
//!
//! ## Contract
//!
//! - **Insertion order**: `list_all` and `filter_by_checked` return students in
//!   the order they were inserted. `update` keeps a student's position even when
//!   it changes the student's ID.
//! - **Unique IDs**: `insert` rejects an ID that is already present, and `update`
//!   rejects re-keying a student onto another student's ID. Both fail with
//!   [`StudentError::DuplicateId`](crate::error::StudentError::DuplicateId)
//!   and leave the store unchanged.
//! - **Not found is not an error**: `get` returns `None`, `update` returns
//!   `Ok(false)`, `delete` and `toggle_checked` return `false`.
//! - **Snapshots**: every read returns owned copies. Nothing hands out references
//!   into the collection.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store, seeded with synthetic
//!   students on construction.
//! - [`shared::SharedStore`]: wraps any store in a single mutex so it can be
//!   shared across threads. Every operation, including the read-then-write ones,
//!   runs as one critical section.

use crate::error::Result;
use crate::model::Student;

pub mod memory;
pub mod shared;

/// Abstract interface for student storage.
pub trait DataStore {
    /// Every student, in insertion order.
    fn list_all(&self) -> Vec<Student>;

    /// Linear lookup by ID.
    fn get(&self, id: &str) -> Option<Student>;

    fn exists(&self, id: &str) -> bool;

    /// Appends a student. Fails if the ID is already taken.
    fn insert(&mut self, student: Student) -> Result<()>;

    /// Replaces the student stored under `original_id` in place.
    ///
    /// Returns `Ok(false)` if there is no such student.
    fn update(&mut self, original_id: &str, student: Student) -> Result<bool>;

    /// Removes the student with this ID. Returns whether one was removed.
    fn delete(&mut self, id: &str) -> bool;

    fn count(&self) -> usize;

    /// Removes every student.
    fn clear(&mut self);

    /// Flips the checked flag of one student, leaving everything else as is.
    fn toggle_checked(&mut self, id: &str) -> bool {
        match self.get(id) {
            Some(student) => matches!(self.update(id, student.with_checked_toggled()), Ok(true)),
            None => false,
        }
    }

    /// Students whose checked flag equals `checked`, in insertion order.
    fn filter_by_checked(&self, checked: bool) -> Vec<Student> {
        self.list_all()
            .into_iter()
            .filter(|student| student.checked == checked)
            .collect()
    }
}
