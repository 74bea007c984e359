use super::DataStore;
use crate::error::{Result, StudentError};
use crate::model::{Student, DEFAULT_SEED_COUNT};
use tracing::{debug, warn};

/// `Vec`-backed store. Lookups are linear scans.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store seeded with the default 20 synthetic students.
    pub fn new() -> Self {
        Self::with_seed_count(DEFAULT_SEED_COUNT)
    }

    pub fn empty() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// A store seeded with students `1..=count`.
    pub fn with_seed_count(count: usize) -> Self {
        let mut store = Self::empty();
        store.seed(count);
        store
    }

    /// Drops every student and seeds `1..=count` again.
    pub fn reseed(&mut self, count: usize) {
        self.students.clear();
        self.seed(count);
    }

    fn seed(&mut self, count: usize) {
        self.students.extend((1..=count).map(Student::seeded));
        debug!(count, "seeded store");
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn list_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn get(&self, id: &str) -> Option<Student> {
        self.students.iter().find(|student| student.id == id).cloned()
    }

    fn exists(&self, id: &str) -> bool {
        self.students.iter().any(|student| student.id == id)
    }

    fn insert(&mut self, student: Student) -> Result<()> {
        if self.exists(&student.id) {
            warn!(id = %student.id, "rejected insert of duplicate id");
            return Err(StudentError::DuplicateId(student.id));
        }
        debug!(id = %student.id, "inserting student");
        self.students.push(student);
        Ok(())
    }

    fn update(&mut self, original_id: &str, student: Student) -> Result<bool> {
        let Some(index) = self.position(original_id) else {
            return Ok(false);
        };

        if student.id != original_id && self.exists(&student.id) {
            warn!(from = original_id, to = %student.id, "rejected re-key onto existing id");
            return Err(StudentError::DuplicateId(student.id));
        }

        debug!(id = original_id, new_id = %student.id, "updating student");
        self.students[index] = student;
        Ok(true)
    }

    fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.students.remove(index);
                debug!(id, "deleted student");
                true
            }
            None => false,
        }
    }

    fn count(&self) -> usize {
        self.students.len()
    }

    fn clear(&mut self) {
        debug!(count = self.students.len(), "clearing store");
        self.students.clear();
    }

    fn filter_by_checked(&self, checked: bool) -> Vec<Student> {
        self.students
            .iter()
            .filter(|student| student.checked == checked)
            .cloned()
            .collect()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for stores in a known state.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Starts from an empty store.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::empty(),
            }
        }

        /// Starts from the default seeded store.
        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, name: &str, id: &str) -> Self {
            let student = Student::new(name, id, "0501234567", format!("{} Street", name));
            self.store.insert(student).unwrap();
            self
        }

        pub fn with_checked_student(mut self, name: &str, id: &str) -> Self {
            let student =
                Student::new(name, id, "0521234567", format!("{} Avenue", name)).with_checked(true);
            self.store.insert(student).unwrap();
            self
        }
    }
}
