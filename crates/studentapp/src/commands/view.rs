use crate::commands::{found, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let students = found(store, ids, &mut result)
        .into_iter()
        .map(|(_, student)| student)
        .collect();
    Ok(result.with_listed(students))
}
