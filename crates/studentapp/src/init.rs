//! # Context Initialization
//!
//! Clients do not build stores or read configuration themselves. They call
//! [`initialize`] once at startup and keep the returned [`StudentsContext`] for
//! the rest of the session:
//!
//! 1. Load [`StudentsConfig`] from the environment and `students.toml` in the
//!    given directory.
//! 2. Apply the caller's seed-count override, if any.
//! 3. Build a freshly seeded [`InMemoryStore`] and hand it to a [`StudentApi`].
//!
//! Nothing is read back from disk after this point, and nothing is ever
//! written: the roster lives and dies with the context.

use crate::api::StudentApi;
use crate::config::StudentsConfig;
use crate::error::Result;
use crate::store::memory::InMemoryStore;
use std::path::Path;
use tracing::debug;

pub struct StudentsContext {
    pub api: StudentApi<InMemoryStore>,
    pub config: StudentsConfig,
}

pub fn initialize(config_dir: &Path, seed_override: Option<usize>) -> Result<StudentsContext> {
    let mut config = StudentsConfig::load(config_dir)?;
    if let Some(seed_count) = seed_override {
        config.seed_count = seed_count;
    }
    debug!(
        dir = %config_dir.display(),
        seed_count = config.seed_count,
        "initializing roster"
    );

    Ok(context_with(config))
}

/// Builds a context from an already resolved configuration.
pub fn context_with(config: StudentsConfig) -> StudentsContext {
    let store = InMemoryStore::with_seed_count(config.seed_count);
    let api = StudentApi::new(store, config.clone());
    StudentsContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::store::DataStore;
    use std::fs;

    #[test]
    fn test_context_with_seeds_configured_count() {
        let ctx = context_with(StudentsConfig {
            seed_count: 7,
            ..Default::default()
        });
        assert_eq!(ctx.api.store().count(), 7);
        assert_eq!(ctx.config.seed_count, 7);
    }

    #[test]
    fn test_seed_override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "seed_count = 3\n").unwrap();

        let ctx = initialize(dir.path(), Some(5)).unwrap();
        assert_eq!(ctx.api.store().count(), 5);
        assert_eq!(ctx.api.config().seed_count, 5);
    }
}
