use crate::commands::{CmdMessage, CmdResult, StudentDraft};
use crate::error::{Result, StudentError};
use crate::store::DataStore;
use crate::validation::validate_student;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, draft: StudentDraft) -> Result<CmdResult> {
    let student = draft.into_student();
    validate_student(&student)?;

    if store.exists(&student.id) {
        return Err(StudentError::DuplicateId(student.id));
    }
    store.insert(student.clone())?;
    debug!(id = %student.id, "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {}",
        student.display_text()
    )));
    result.affected.push(student);
    Ok(result)
}
