use studentapp::api::{CheckedFilter, StudentApi, StudentDraft, StudentPatch};
use studentapp::config::StudentsConfig;
use studentapp::error::StudentError;
use studentapp::model::Student;
use studentapp::store::memory::fixtures::StoreFixture;
use studentapp::store::memory::InMemoryStore;
use studentapp::store::DataStore;
use studentapp::validation::Field;

fn setup() -> StudentApi<InMemoryStore> {
    StudentApi::new(InMemoryStore::new(), StudentsConfig::default())
}

fn ids(students: &[Student]) -> Vec<String> {
    students.iter().map(|s| s.id.clone()).collect()
}

#[test]
fn test_seeded_roster() {
    let api = setup();
    let listed = api.list_students(CheckedFilter::All).unwrap().listed;

    assert_eq!(listed.len(), 20);
    let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    assert_eq!(ids(&listed), expected);
    assert!(listed.iter().all(|s| !s.checked));
}

#[test]
fn test_new_student_lifecycle() {
    let mut api = setup();

    // Create
    let draft = StudentDraft::new("Noa Levi", "204", "0541234567", "12 Herzl St");
    api.add_student(draft).unwrap();
    assert_eq!(api.count().unwrap().count, Some(21));

    // Check in
    api.toggle_students(&["204"]).unwrap();
    let checked = api.list_students(CheckedFilter::Checked).unwrap().listed;
    assert_eq!(ids(&checked), vec!["204"]);

    // Re-key and move house
    let patch = StudentPatch {
        id: Some("noa-204".into()),
        address: Some("7 Bialik St".into()),
        ..Default::default()
    };
    api.edit_student("204", patch).unwrap();
    assert!(api.get_student("204").is_none());
    let noa = api.get_student("noa-204").unwrap();
    assert_eq!(noa.address, "7 Bialik St");
    assert!(noa.checked);
    assert_eq!(noa.formatted_phone(), "054-1234567");

    // Position is still last
    let all = api.list_students(CheckedFilter::All).unwrap().listed;
    assert_eq!(all.last().unwrap().id, "noa-204");

    // Remove
    api.delete_students(&["noa-204"]).unwrap();
    assert!(api.get_student("noa-204").is_none());
    assert_eq!(api.count().unwrap().count, Some(20));
}

#[test]
fn test_add_rejections_leave_roster_untouched() {
    let mut api = setup();
    api.add_student(StudentDraft::new("Alice", "abc", "0501234567", "Main St"))
        .unwrap();
    let before = api.store().list_all();

    let err = api
        .add_student(StudentDraft::new("Al", "xyz", "12345678", "Main St"))
        .unwrap_err();
    match err {
        StudentError::Validation(v) => {
            assert_eq!(v.field, Field::Phone);
            assert_eq!(v.to_string(), "Phone number must have at least 9 digits");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    let err = api
        .add_student(StudentDraft::new("Alice Two", "abc", "0501234567", "Side St"))
        .unwrap_err();
    assert_eq!(err.to_string(), "A student with ID 'abc' already exists");

    assert_eq!(api.store().list_all(), before);
}

#[test]
fn test_checked_filters_partition_any_state() {
    let mut api = setup();
    api.toggle_students(&["1", "5", "9", "20"]).unwrap();
    api.delete_students(&["9"]).unwrap();

    let checked = api.list_students(CheckedFilter::Checked).unwrap().listed;
    let unchecked = api.list_students(CheckedFilter::Unchecked).unwrap().listed;
    let all = api.list_students(CheckedFilter::All).unwrap().listed;

    assert_eq!(ids(&checked), vec!["1", "5", "20"]);
    assert_eq!(checked.len() + unchecked.len(), all.len());
    for student in &all {
        assert!(checked.contains(student) ^ unchecked.contains(student));
    }
}

#[test]
fn test_fixture_backed_api() {
    let store = StoreFixture::new()
        .with_student("Alice", "alice")
        .with_checked_student("Bob", "bob")
        .store;
    let mut api = StudentApi::new(store, StudentsConfig::default());

    let result = api.toggle_students(&["alice", "bob", "carol"]).unwrap();
    assert_eq!(result.affected.len(), 2);
    assert!(result.has_warnings());

    let checked = api.list_students(CheckedFilter::Checked).unwrap().listed;
    assert_eq!(ids(&checked), vec!["alice"]);
}

#[test]
fn test_reset_after_clear() {
    let mut api = setup();
    api.clear().unwrap();
    assert!(api.get_student("1").is_none());
    assert_eq!(api.count().unwrap().count, Some(0));

    api.reset(None).unwrap();
    assert_eq!(
        api.store().list_all(),
        InMemoryStore::new().list_all()
    );
}
