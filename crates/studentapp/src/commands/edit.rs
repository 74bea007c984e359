use crate::commands::{CmdMessage, CmdResult, StudentPatch};
use crate::error::{Result, StudentError};
use crate::store::DataStore;
use crate::validation::{validate_address, validate_id, validate_name, validate_phone};
use tracing::debug;

/// Applies `patch` to the student stored under `original_id`.
///
/// The ID is only validated when it changes: seeded IDs like `"7"` are
/// shorter than the minimum and must stay editable.
pub fn run<S: DataStore>(
    store: &mut S,
    original_id: &str,
    patch: StudentPatch,
) -> Result<CmdResult> {
    let current = store
        .get(original_id)
        .ok_or_else(|| StudentError::NotFound(original_id.to_string()))?;
    let updated = patch.apply(current);
    let rekeyed = updated.id != original_id;

    validate_name(&updated.name)?;
    if rekeyed {
        validate_id(&updated.id)?;
    }
    validate_phone(&updated.phone)?;
    validate_address(&updated.address)?;

    if rekeyed && store.exists(&updated.id) {
        return Err(StudentError::DuplicateId(updated.id));
    }

    if !store.update(original_id, updated.clone())? {
        return Err(StudentError::NotFound(original_id.to_string()));
    }
    debug!(id = original_id, new_id = %updated.id, "student edited");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated: {}",
        updated.display_text()
    )));
    if rekeyed {
        result.add_message(CmdMessage::info(format!(
            "ID changed from '{}' to '{}'",
            original_id, updated.id
        )));
    }
    result.affected.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::store::memory::InMemoryStore;
    use crate::validation::Field;

    fn rename(name: &str) -> StudentPatch {
        StudentPatch {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn rekey(id: &str) -> StudentPatch {
        StudentPatch {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    #[test]
    fn edits_seeded_student_in_place() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "3", rename("Dana")).unwrap();

        let stored = store.list_all()[2].clone();
        assert_eq!(stored.name, "Dana");
        assert_eq!(stored.id, "3");
        assert_eq!(result.affected, vec![stored]);
        assert_eq!(store.count(), 20);
    }

    #[test]
    fn rekeys_keeping_position() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "3", rekey("s-003")).unwrap();

        assert_eq!(store.list_all()[2].id, "s-003");
        assert!(!store.exists("3"));
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn rekey_onto_existing_id_fails() {
        let mut store = InMemoryStore::empty();
        store
            .insert(Student::new("Alice", "abc", "0501234567", "Main St"))
            .unwrap();
        store
            .insert(Student::new("Bob", "bob", "0501234567", "Side St"))
            .unwrap();

        assert!(matches!(
            run(&mut store, "bob", rekey("abc")),
            Err(StudentError::DuplicateId(id)) if id == "abc"
        ));
        assert_eq!(store.get("bob").unwrap().name, "Bob");
    }

    #[test]
    fn new_id_must_be_valid() {
        let mut store = InMemoryStore::new();
        match run(&mut store, "3", rekey("ab")) {
            Err(StudentError::Validation(err)) => assert_eq!(err.field, Field::Id),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(store.exists("3"));
    }

    #[test]
    fn invalid_field_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        let before = store.list_all();
        let patch = StudentPatch {
            address: Some("   ".into()),
            ..Default::default()
        };

        assert!(matches!(
            run(&mut store, "3", patch),
            Err(StudentError::Validation(_))
        ));
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn missing_student_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "404", rename("Ghost")),
            Err(StudentError::NotFound(id)) if id == "404"
        ));
    }

    #[test]
    fn checked_flag_can_be_set_directly() {
        let mut store = InMemoryStore::new();
        let patch = StudentPatch {
            checked: Some(true),
            ..Default::default()
        };
        run(&mut store, "9", patch).unwrap();
        assert!(store.get("9").unwrap().checked);
    }
}
