use crate::commands::{found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (id, student) in found(store, ids, &mut result) {
        if store.delete(id) {
            result.add_message(CmdMessage::success(format!(
                "Student deleted: {}",
                student.display_text()
            )));
            result.affected.push(student);
        }
    }

    Ok(result)
}
