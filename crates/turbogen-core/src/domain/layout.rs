//! Output-path layout rules and per-kind template specs.
//!
//! Everything here is a pure function of `(kind, name, cwd)`: no
//! filesystem access, no randomness. Re-running with the same inputs in the
//! same directory resolves the same paths and overwrites.

use std::path::{Path, PathBuf};

use crate::domain::entity::EntityKind;

/// One template to render: a bundled resource name and the path it lands
/// at, relative to the resolved output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub resource: String,
    pub output: PathBuf,
}

impl TemplateEntry {
    fn new(resource: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            resource: resource.into(),
            output: output.into(),
        }
    }
}

/// Resolve the output directory for an entity.
///
/// - `app`: `cwd/name` when the cwd path already mentions `apps`, else
///   `cwd/apps/name`.
/// - `package`: `cwd/name/src` when the cwd mentions `packages`, else
///   `cwd/packages/name/src`.
/// - nested kinds: `cwd/<kind>s/name` when the cwd mentions `src`, else
///   `cwd/src/<kind>s/name`.
pub fn output_dir(kind: EntityKind, name: &str, cwd: &Path) -> PathBuf {
    match kind {
        EntityKind::App => {
            if path_contains(cwd, "apps") {
                cwd.join(name)
            } else {
                cwd.join("apps").join(name)
            }
        }
        EntityKind::Package => {
            if path_contains(cwd, "packages") {
                cwd.join(name).join("src")
            } else {
                cwd.join("packages").join(name).join("src")
            }
        }
        EntityKind::Controller | EntityKind::Service | EntityKind::Middleware => {
            if path_contains(cwd, "src") {
                cwd.join(kind.plural()).join(name)
            } else {
                cwd.join("src").join(kind.plural()).join(name)
            }
        }
    }
}

/// Output file name for single-template kinds.
pub fn output_file_name(kind: EntityKind, name: &str) -> String {
    match kind {
        EntityKind::App | EntityKind::Package => "index.ts".to_string(),
        other => format!("{name}.{other}.ts"),
    }
}

/// The template set for one entity kind.
///
/// `App` expands to the fixed ten-file application skeleton; every other
/// kind is a single template keyed by the kind name.
pub fn template_entries(kind: EntityKind, name: &str) -> Vec<TemplateEntry> {
    match kind {
        EntityKind::App => vec![
            TemplateEntry::new("app/src/routes/v1/router.ts.tmpl", "src/routes/v1/router.ts"),
            TemplateEntry::new("app/src/index.ts.tmpl", "src/index.ts"),
            TemplateEntry::new("app/Dockerfile.tmpl", "Dockerfile"),
            TemplateEntry::new("app/eslint.config.js.tmpl", "eslint.config.js"),
            TemplateEntry::new("app/package.json.tmpl", "package.json"),
            TemplateEntry::new(
                "app/sonar-project.properties.tmpl",
                "sonar-project.properties",
            ),
            TemplateEntry::new("app/tsconfig.json.tmpl", "tsconfig.json"),
            TemplateEntry::new("app/vitest.config.ts.tmpl", "vitest.config.ts"),
            TemplateEntry::new(
                "controller.tmpl",
                format!("src/controllers/{name}/{name}.controller.ts"),
            ),
            TemplateEntry::new(
                "service.tmpl",
                format!("src/services/{name}/{name}.service.ts"),
            ),
        ],
        other => vec![TemplateEntry::new(
            format!("{other}.tmpl"),
            output_file_name(other, name),
        )],
    }
}

/// Substring check on the rendered path.
///
/// Known weakness, preserved on purpose: this matches anywhere in the path
/// string, so a directory literally named `my-apps-backup` satisfies the
/// `apps` check. See the workspace-context validation for the same caveat.
pub fn path_contains(path: &Path, needle: &str) -> bool {
    path.to_string_lossy().contains(needle)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_at_root_goes_under_apps() {
        let dir = output_dir(EntityKind::App, "payments", Path::new("/repo"));
        assert_eq!(dir, PathBuf::from("/repo/apps/payments"));
    }

    #[test]
    fn app_inside_apps_stays_put() {
        let dir = output_dir(EntityKind::App, "payments", Path::new("/repo/apps"));
        assert_eq!(dir, PathBuf::from("/repo/apps/payments"));
    }

    #[test]
    fn package_gets_src_suffix() {
        assert_eq!(
            output_dir(EntityKind::Package, "utils", Path::new("/repo")),
            PathBuf::from("/repo/packages/utils/src")
        );
        assert_eq!(
            output_dir(EntityKind::Package, "utils", Path::new("/repo/packages")),
            PathBuf::from("/repo/packages/utils/src")
        );
    }

    #[test]
    fn nested_kinds_land_under_src() {
        assert_eq!(
            output_dir(EntityKind::Service, "checkout", Path::new("/repo/apps/orders")),
            PathBuf::from("/repo/apps/orders/src/services/checkout")
        );
        assert_eq!(
            output_dir(
                EntityKind::Controller,
                "billing",
                Path::new("/repo/apps/orders/src")
            ),
            PathBuf::from("/repo/apps/orders/src/controllers/billing")
        );
        assert_eq!(
            output_dir(
                EntityKind::Middleware,
                "auth",
                Path::new("/repo/apps/orders")
            ),
            PathBuf::from("/repo/apps/orders/src/middlewares/auth")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = output_dir(EntityKind::Service, "checkout", Path::new("/repo/apps/x"));
        let b = output_dir(EntityKind::Service, "checkout", Path::new("/repo/apps/x"));
        assert_eq!(a, b);
    }

    #[test]
    fn output_file_names() {
        assert_eq!(output_file_name(EntityKind::App, "shop"), "index.ts");
        assert_eq!(output_file_name(EntityKind::Package, "utils"), "index.ts");
        assert_eq!(
            output_file_name(EntityKind::Service, "checkout"),
            "checkout.service.ts"
        );
        assert_eq!(
            output_file_name(EntityKind::Middleware, "auth"),
            "auth.middleware.ts"
        );
    }

    #[test]
    fn app_template_set_has_ten_entries() {
        let entries = template_entries(EntityKind::App, "shop");
        assert_eq!(entries.len(), 10);
        // The controller and service entries are the only name-dependent ones.
        assert!(entries.iter().any(|e| {
            e.output == PathBuf::from("src/controllers/shop/shop.controller.ts")
        }));
        assert!(entries.iter().any(|e| {
            e.output == PathBuf::from("src/services/shop/shop.service.ts")
        }));
    }

    #[test]
    fn single_template_kinds_have_one_entry() {
        let entries = template_entries(EntityKind::Middleware, "auth");
        assert_eq!(
            entries,
            vec![TemplateEntry::new("middleware.tmpl", "auth.middleware.ts")]
        );
    }

    #[test]
    fn path_contains_is_a_plain_substring_check() {
        // Pinned behavior, including the false positive on look-alike names.
        assert!(path_contains(Path::new("/home/me/my-apps-backup"), "apps"));
        assert!(!path_contains(Path::new("/home/me/work"), "apps"));
    }
}
