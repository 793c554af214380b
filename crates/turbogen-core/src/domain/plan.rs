//! The result of one generation run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entity::EntityKind;

/// What a successful `CreateEntity` produced.
///
/// Pure data - the CLI decides how to present it (human lines or JSON).
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub kind: EntityKind,
    pub name: String,
    /// Resolved output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to `output_dir`, in creation order.
    pub files: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn new(kind: EntityKind, name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            name: name.into(),
            output_dir: output_dir.into(),
            files: Vec::new(),
        }
    }

    pub(crate) fn record_file(&mut self, relative: impl Into<PathBuf>) {
        self.files.push(relative.into());
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Absolute path of one written file.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.output_dir.join(relative)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
