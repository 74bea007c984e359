//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all studentapp operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills defaults** from [`StudentsConfig`] (seed count, default image)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`) and no I/O.
//!
//! ## Generic Over DataStore
//!
//! `StudentApi<S: DataStore>` works with any store:
//! - `StudentApi<InMemoryStore>` for a single-threaded client
//! - `StudentApi<SharedStore<InMemoryStore>>` when other threads hold handles
//!   to the same roster
//!
//! ## Uniqueness Pre-Checks
//!
//! Clients that build forms can call [`StudentApi::id_taken`] and
//! [`StudentApi::validate_draft`] for live feedback. `add_student` and
//! `edit_student` repeat both checks, so skipping them is safe.

use crate::commands;
use crate::config::StudentsConfig;
use crate::error::Result;
use crate::model::Student;
use crate::store::DataStore;
use crate::validation::{self, ValidationResult};

/// The main API facade for roster operations.
pub struct StudentApi<S: DataStore> {
    store: S,
    config: StudentsConfig,
}

impl<S: DataStore> StudentApi<S> {
    pub fn new(store: S, config: StudentsConfig) -> Self {
        Self { store, config }
    }

    pub fn add_student(&mut self, mut draft: StudentDraft) -> Result<CmdResult> {
        if draft.image.is_none() {
            draft.image = Some(self.config.default_image());
        }
        commands::add::run(&mut self.store, draft)
    }

    pub fn edit_student(&mut self, original_id: &str, patch: StudentPatch) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, original_id, patch)
    }

    pub fn delete_students<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn toggle_students<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::toggle::run(&mut self.store, ids)
    }

    pub fn list_students(&self, filter: CheckedFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_students<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn count(&self) -> Result<CmdResult> {
        commands::list::count(&self.store)
    }

    /// Clears the roster and re-seeds it. `None` uses the configured seed count.
    pub fn reset(&mut self, seed_count: Option<usize>) -> Result<CmdResult> {
        let seed_count = seed_count.unwrap_or(self.config.seed_count);
        commands::reset::run(&mut self.store, seed_count)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::reset::clear(&mut self.store)
    }

    pub fn get_student(&self, id: &str) -> Option<Student> {
        self.store.get(id)
    }

    pub fn id_taken(&self, id: &str) -> bool {
        self.store.exists(id.trim())
    }

    /// Runs field validation on a draft without touching the store.
    pub fn validate_draft(&self, draft: &StudentDraft) -> ValidationResult {
        validation::validate_student(&draft.clone().into_student())
    }

    pub fn format_phone(&self, phone: &str) -> String {
        validation::format_phone(phone)
    }

    pub fn config(&self) -> &StudentsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::list::CheckedFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StudentDraft, StudentPatch};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudentError;
    use crate::model::ImageRef;
    use crate::store::memory::InMemoryStore;
    use crate::store::shared::SharedStore;

    fn api() -> StudentApi<InMemoryStore> {
        StudentApi::new(InMemoryStore::new(), StudentsConfig::default())
    }

    fn draft() -> StudentDraft {
        StudentDraft::new("Alice", "abc", "0501234567", "Main St")
    }

    #[test]
    fn add_uses_configured_default_image() {
        let config = StudentsConfig {
            default_image: "avatar".into(),
            ..Default::default()
        };
        let mut api = StudentApi::new(InMemoryStore::empty(), config);
        api.add_student(draft()).unwrap();
        assert_eq!(api.get_student("abc").unwrap().image, ImageRef::new("avatar"));
    }

    #[test]
    fn add_keeps_explicit_image() {
        let mut api = api();
        let mut d = draft();
        d.image = Some(ImageRef::new("own.png"));
        api.add_student(d).unwrap();
        assert_eq!(api.get_student("abc").unwrap().image.as_str(), "own.png");
    }

    #[test]
    fn dispatches_mutations_to_store() {
        let mut api = api();
        api.add_student(draft()).unwrap();
        api.toggle_students(&["abc"]).unwrap();
        api.edit_student(
            "abc",
            StudentPatch {
                name: Some("Alicia".into()),
                ..Default::default()
            },
        )
        .unwrap();
        api.delete_students(&["1", "2"]).unwrap();

        let student = api.get_student("abc").unwrap();
        assert!(student.checked);
        assert_eq!(student.name, "Alicia");
        assert_eq!(api.count().unwrap().count, Some(19));
        assert_eq!(
            api.list_students(CheckedFilter::Checked).unwrap().listed,
            vec![student]
        );
    }

    #[test]
    fn reset_uses_configured_seed_count_by_default() {
        let config = StudentsConfig {
            seed_count: 4,
            ..Default::default()
        };
        let mut api = StudentApi::new(InMemoryStore::empty(), config);
        assert_eq!(api.reset(None).unwrap().count, Some(4));
        assert_eq!(api.reset(Some(2)).unwrap().count, Some(2));
        assert_eq!(api.clear().unwrap().count, Some(0));
        assert_eq!(api.store().count(), 0);
    }

    #[test]
    fn pre_checks() {
        let api = api();
        assert!(api.id_taken("5"));
        assert!(api.id_taken(" 5 "));
        assert!(!api.id_taken("abc"));
        assert!(api.validate_draft(&draft()).is_ok());

        let mut bad = draft();
        bad.name = " ".into();
        assert!(api.validate_draft(&bad).is_err());
    }

    #[test]
    fn view_and_format() {
        let api = api();
        let result = api.view_students(&["3"]).unwrap();
        assert_eq!(result.listed[0].id, "3");
        assert_eq!(api.format_phone("512345678"), "051-2345678");
    }

    #[test]
    fn works_over_shared_store() {
        let shared = SharedStore::new(InMemoryStore::new());
        let observer = shared.clone();
        let mut api = StudentApi::new(shared, StudentsConfig::default());

        api.add_student(draft()).unwrap();
        assert!(observer.exists("abc"));
        assert!(matches!(
            api.add_student(draft()),
            Err(StudentError::DuplicateId(_))
        ));
    }
}
