//! Entity generator - the `CreateEntity` use case.
//!
//! Coordinates one generation run:
//! 1. Normalize the name
//! 2. Resolve the output directory (pure layout rule)
//! 3. Create it
//! 4. Render every template in the kind's spec and write it out
//!
//! The first failing file aborts the run. There is no rollback: files
//! already written stay on disk, and the error identifies the operation and
//! path that failed.

use std::path::{Component, Path};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateProvider},
    domain::{
        EntityData, EntityKind, ScaffoldReport,
        error::DomainError,
        layout::{self, path_contains},
        validation::ROOT_MARKERS,
    },
    error::TurbogenResult,
};

/// Main generation service.
///
/// Holds the two driven ports; presentation stays in the CLI layer, so the
/// service is fully exercisable against in-memory adapters.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateProvider>,
}

impl GeneratorService {
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Box<dyn TemplateProvider>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Create one entity under `cwd`.
    ///
    /// `name` is normalized to lower-case; if it carries path components,
    /// only the final one names the entity. Returns the report of written
    /// files on success.
    #[instrument(skip_all, fields(kind = %kind, name = %name))]
    pub fn create_entity(
        &self,
        kind: EntityKind,
        name: &str,
        cwd: &Path,
    ) -> TurbogenResult<ScaffoldReport> {
        let name = normalize_name(name);

        let out_dir = layout::output_dir(kind, &name, cwd);
        self.filesystem.create_dir_all(&out_dir)?;
        debug!(dir = %out_dir.display(), "output directory ready");

        // PACKAGE is the base name of the directory the files land in.
        let package = base_name(&out_dir);
        let data = EntityData::new(&name, package);

        let mut report = ScaffoldReport::new(kind, &name, &out_dir);

        for entry in layout::template_entries(kind, &name) {
            let dest = out_dir.join(&entry.output);
            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let raw = self.templates.read(&entry.resource)?;
            let rendered = data.render(&raw, &entry.resource)?;
            self.filesystem.write_file(&dest, &rendered)?;

            debug!(file = %entry.output.display(), "created");
            report.record_file(entry.output);
        }

        info!(
            files = report.file_count(),
            dir = %report.output_dir.display(),
            "entity created"
        );
        Ok(report)
    }
}

/// Lower-case the final path component of the raw name.
fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let base = Path::new(trimmed)
        .components()
        .next_back()
        .and_then(|c| match c {
            Component::Normal(os) => os.to_str(),
            _ => None,
        })
        .unwrap_or(trimmed);
    base.to_lowercase()
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ── workspace context ─────────────────────────────────────────────────────────

/// Validate that `cwd` is an acceptable place to create `kind`.
///
/// - `app`/`package`: the cwd must look like a monorepo root (one of
///   [`ROOT_MARKERS`] present) or its path must mention the pluralized kind.
/// - nested kinds: the cwd path must mention `apps`.
///
/// This is advisory path-sniffing, not a structural guarantee: it inspects
/// the path string and directory-entry existence only, never project
/// metadata.
pub fn validate_workspace_context(
    kind: EntityKind,
    cwd: &Path,
    fs: &dyn Filesystem,
) -> Result<(), DomainError> {
    if kind.is_top_level() {
        if is_monorepo_root(cwd, fs) || path_contains(cwd, kind.plural()) {
            return Ok(());
        }
        return Err(DomainError::WrongLocation {
            kind: kind.to_string(),
            cwd: cwd.to_path_buf(),
            expected: format!(
                "the monorepo root (containing turbo.json) or the {} directory",
                kind.plural()
            ),
        });
    }

    if path_contains(cwd, "apps") {
        return Ok(());
    }
    Err(DomainError::WrongLocation {
        kind: kind.to_string(),
        cwd: cwd.to_path_buf(),
        expected: format!("within an app directory, e.g. cd apps/my-app && turbogen create {kind} <name>"),
    })
}

fn is_monorepo_root(dir: &Path, fs: &dyn Filesystem) -> bool {
    ROOT_MARKERS
        .iter()
        .any(|marker| fs.exists(&dir.join(marker)))
}

// ── tests ─────────────────────────────────────────────────────────────────────
