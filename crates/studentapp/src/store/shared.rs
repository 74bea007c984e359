use super::DataStore;
use crate::error::Result;
use crate::model::Student;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable, thread-safe handle around any [`DataStore`].
///
/// One mutex guards the whole collection. Each trait method takes the lock
/// once, so `update` and `toggle_checked` (which look a student up and then
/// write it back) cannot interleave with another writer.
#[derive(Debug, Default)]
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataStore> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access, for compound operations that must
    /// happen atomically (e.g. check `exists` then `insert`).
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl<S: DataStore> DataStore for SharedStore<S> {
    fn list_all(&self) -> Vec<Student> {
        self.inner.lock().list_all()
    }

    fn get(&self, id: &str) -> Option<Student> {
        self.inner.lock().get(id)
    }

    fn exists(&self, id: &str) -> bool {
        self.inner.lock().exists(id)
    }

    fn insert(&mut self, student: Student) -> Result<()> {
        self.inner.lock().insert(student)
    }

    fn update(&mut self, original_id: &str, student: Student) -> Result<bool> {
        self.inner.lock().update(original_id, student)
    }

    fn delete(&mut self, id: &str) -> bool {
        self.inner.lock().delete(id)
    }

    fn count(&self) -> usize {
        self.inner.lock().count()
    }

    fn clear(&mut self) {
        self.inner.lock().clear()
    }

    fn toggle_checked(&mut self, id: &str) -> bool {
        self.inner.lock().toggle_checked(id)
    }

    fn filter_by_checked(&self, checked: bool) -> Vec<Student> {
        self.inner.lock().filter_by_checked(checked)
    }
}
