use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckedFilter {
    #[default]
    All,
    Checked,
    Unchecked,
}

pub fn run<S: DataStore>(store: &S, filter: CheckedFilter) -> Result<CmdResult> {
    let students = match filter {
        CheckedFilter::All => store.list_all(),
        CheckedFilter::Checked => store.filter_by_checked(true),
        CheckedFilter::Unchecked => store.filter_by_checked(false),
    };
    let count = students.len();
    Ok(CmdResult::default()
        .with_listed(students)
        .with_count(count))
}

pub fn count<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_count(store.count()))
}
