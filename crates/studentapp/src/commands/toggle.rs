use crate::commands::{found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (id, _) in found(store, ids, &mut result) {
        if !store.toggle_checked(id) {
            continue;
        }
        if let Some(student) = store.get(id) {
            let state = if student.checked {
                "checked"
            } else {
                "unchecked"
            };
            result.add_message(CmdMessage::success(format!(
                "Student {}: {}",
                state,
                student.display_text()
            )));
            result.affected.push(student);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn flips_and_reports_new_state() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &["1"]).unwrap();

        assert!(store.get("1").unwrap().checked);
        assert!(result.affected[0].checked);
        assert_eq!(
            result.messages[0].content,
            "Student checked: Student 1 (ID: 1)"
        );

        let result = run(&mut store, &["1"]).unwrap();
        assert!(!store.get("1").unwrap().checked);
        assert_eq!(
            result.messages[0].content,
            "Student unchecked: Student 1 (ID: 1)"
        );
    }

    #[test]
    fn toggling_twice_in_one_batch_restores() {
        let mut store = InMemoryStore::new();
        let before = store.list_all();
        run(&mut store, &["6", "6"]).unwrap();
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn missing_id_warns() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &["nope"]).unwrap();
        assert!(result.affected.is_empty());
        assert!(result.has_warnings());
    }
}
