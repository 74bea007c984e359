//! # Command Layer
//!
//! This module contains the **business logic** of studentapp. Each operation lives
//! in its own submodule as a plain function generic over [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands sit between the API facade and the store:
//! - Run field validation before anything is written
//! - Cross-check ID uniqueness before inserting or re-keying
//! - Return a structured [`CmdResult`] with affected/listed students and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **Argument parsing**: That is the client's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Failure vs. Warning
//!
//! Single-target mutations (`add`, `edit`) fail with a [`StudentError`] when the
//! input is invalid, the ID is taken, or the target is missing. Batch operations
//! (`delete`, `toggle`, `view`) keep going past missing IDs and report each one
//! as a warning message instead.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and insert a new student
//! - [`edit`]: Patch an existing student (full replacement in the store)
//! - [`delete`]: Remove students
//! - [`toggle`]: Flip the checked flag
//! - [`list`]: List students, optionally filtered by checked state; count
//! - [`view`]: Fetch specific students
//! - [`reset`]: Clear the roster, optionally re-seeding it
//!
//! [`StudentError`]: crate::error::StudentError

use crate::model::{ImageRef, Student};
use crate::store::DataStore;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod reset;
pub mod toggle;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Students created or changed by the command, in their post-command state
    pub affected: Vec<Student>,
    /// Students to display
    pub listed: Vec<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, students: Vec<Student>) -> Self {
        self.listed = students;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Field values for a student that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub id: String,
    pub phone: String,
    pub address: String,
    pub checked: bool,
    /// `None` means "use the configured default image"
    pub image: Option<ImageRef>,
}

impl StudentDraft {
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
            ..Default::default()
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Builds the record. Text fields are trimmed, as form input would be.
    pub fn into_student(self) -> Student {
        Student {
            name: self.name.trim().to_string(),
            id: self.id.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            checked: self.checked,
            image: self.image.unwrap_or_default(),
        }
    }
}

/// A partial change to an existing student. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub id: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub checked: Option<bool>,
    pub image: Option<ImageRef>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produces the full replacement record for `base`.
    pub fn apply(self, base: Student) -> Student {
        fn pick(patch: Option<String>, current: String) -> String {
            patch.map(|v| v.trim().to_string()).unwrap_or(current)
        }

        Student {
            name: pick(self.name, base.name),
            id: pick(self.id, base.id),
            phone: pick(self.phone, base.phone),
            address: pick(self.address, base.address),
            checked: self.checked.unwrap_or(base.checked),
            image: self.image.unwrap_or(base.image),
        }
    }
}

/// Shared by batch commands: a warning for an ID with no student.
pub(crate) fn missing(id: &str) -> CmdMessage {
    CmdMessage::warning(format!("No student with ID '{}'", id))
}

/// Looks up every ID, reporting missing ones on `result`.
pub(crate) fn found<'a, S: DataStore, I: AsRef<str>>(
    store: &S,
    ids: &'a [I],
    result: &mut CmdResult,
) -> Vec<(&'a str, Student)> {
    let mut hits = Vec::new();
    for id in ids {
        let id = id.as_ref();
        match store.get(id) {
            Some(student) => hits.push((id, student)),
            None => result.add_message(missing(id)),
        }
    }
    hits
}
