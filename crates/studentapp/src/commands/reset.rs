use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::DataStore;
use tracing::info;

/// Clears the roster and seeds students `1..=seed_count`.
pub fn run<S: DataStore>(store: &mut S, seed_count: usize) -> Result<CmdResult> {
    store.clear();
    for i in 1..=seed_count {
        store.insert(Student::seeded(i))?;
    }
    info!(seed_count, "roster reset");

    let mut result = CmdResult::default().with_count(store.count());
    result.add_message(CmdMessage::success(format!(
        "Roster reset with {} students",
        seed_count
    )));
    Ok(result)
}

/// Removes every student.
pub fn clear<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.count();
    store.clear();
    info!(removed, "roster cleared");

    let mut result = CmdResult::default().with_count(0);
    result.add_message(CmdMessage::success(format!(
        "Removed {} students",
        removed
    )));
    Ok(result)
}
