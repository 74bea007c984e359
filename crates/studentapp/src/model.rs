//! # Domain Model: the Student Record
//!
//! A [`Student`] is a flat value: four text fields, one boolean and an opaque
//! image handle. The store hands out owned copies, so callers can hold and mutate
//! a `Student` freely without ever touching the stored one.
//!
//! ## Replacement, Not Patching
//!
//! Every change to a stored student is a whole-record replacement. To flip the
//! checked flag, take a copy, call [`Student::with_checked_toggled`], and write
//! the copy back. The store's `toggle_checked` does exactly that.
//!
//! ## Seeded Records
//!
//! A fresh store is populated with synthetic records built by
//! [`Student::seeded`]:
//!
//! ```text
//! i = 1  → Student 1  | id "1"  | 050-1000001 | Address 1  | unchecked
//! i = 20 → Student 20 | id "20" | 050-1000020 | Address 20 | unchecked
//! ```
//!
//! ## Image References
//!
//! [`ImageRef`] is a handle the presentation layer resolves to an actual asset.
//! The core never interprets it beyond carrying it around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of synthetic students a fresh store holds.
pub const DEFAULT_SEED_COUNT: usize = 20;

/// Handle used when no image is specified.
pub const DEFAULT_IMAGE: &str = "student";

const SEED_PHONE_PREFIX: &str = "050-";
const SEED_PHONE_BASE: usize = 1_000_000;

/// Opaque handle to a display asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self(DEFAULT_IMAGE.to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Unique key within a store.
    pub id: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub image: ImageRef,
}

impl Student {
    /// Creates an unchecked student with the default image.
    ///
    /// Does not validate anything; see [`crate::validation::validate_student`].
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            phone: phone.into(),
            address: address.into(),
            checked: false,
            image: ImageRef::default(),
        }
    }

    /// The synthetic record number `i` used to populate a fresh store.
    pub fn seeded(i: usize) -> Self {
        Self::new(
            format!("Student {}", i),
            i.to_string(),
            format!("{}{}", SEED_PHONE_PREFIX, SEED_PHONE_BASE + i),
            format!("Address {}", i),
        )
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = image;
        self
    }

    /// Returns a copy with `checked` inverted and every other field untouched.
    pub fn with_checked_toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }

    /// `"{name} (ID: {id})"`
    pub fn display_text(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }

    pub fn formatted_phone(&self) -> String {
        crate::validation::format_phone(&self.phone)
    }
}
