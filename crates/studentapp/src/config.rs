//! # Configuration
//!
//! Studentapp configuration is managed by [`confique`], which layers values from
//! environment variables, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `STUDENTS_SEED_COUNT`, `STUDENTS_DEFAULT_IMAGE`.
//! 2. **Config file**: `students.toml` in the directory given to [`StudentsConfig::load`].
//!    A missing file is not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_count` | `20` | Synthetic students created when a roster starts |
//! | `default_image` | `student` | Image handle for students added without one |

use crate::error::{Result, StudentError};
use crate::model::{ImageRef, DEFAULT_IMAGE, DEFAULT_SEED_COUNT};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "students.toml";

/// Configuration for studentapp, stored in `students.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentsConfig {
    /// Number of synthetic students a new roster is seeded with.
    #[config(default = 20, env = "STUDENTS_SEED_COUNT")]
    pub seed_count: usize,

    /// Image handle given to students created without one.
    #[config(default = "student", env = "STUDENTS_DEFAULT_IMAGE")]
    pub default_image: String,
}

impl Default for StudentsConfig {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }
}

impl StudentsConfig {
    /// Loads configuration from the environment and `dir/students.toml`.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|e| StudentError::Config(e.to_string()))
    }

    /// Loads configuration from one file only, ignoring the environment.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| StudentError::Config(e.to_string()))
    }

    /// A commented sample `students.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    pub fn default_image(&self) -> ImageRef {
        ImageRef::new(self.default_image.clone())
    }
}
