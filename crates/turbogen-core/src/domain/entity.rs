//! The closed set of scaffoldable entity kinds.
//!
//! Every per-kind decision in the tool (output-path rule, template set,
//! display metadata) is keyed on [`EntityKind`]. Adding a new kind means
//! adding one enum variant and one [`ENTITY_KINDS`] row; the compiler then
//! points at every match that needs a case.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A scaffoldable entity kind.
///
/// Closed set; not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    App,
    Package,
    Controller,
    Service,
    Middleware,
}

impl EntityKind {
    /// Canonical lowercase name, as used in CLI arguments and template
    /// resource names (`controller` → `controller.tmpl`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Package => "package",
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Middleware => "middleware",
        }
    }

    /// Pluralized name, used both as a directory name (`src/services/`) and
    /// as the path substring the workspace-context check sniffs for.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::App => "apps",
            Self::Package => "packages",
            Self::Controller => "controllers",
            Self::Service => "services",
            Self::Middleware => "middlewares",
        }
    }

    /// `true` for kinds that live directly under the monorepo root
    /// (`apps/`, `packages/`); `false` for kinds nested inside an app's
    /// `src/` tree.
    pub fn is_top_level(&self) -> bool {
        matches!(self, Self::App | Self::Package)
    }

    /// Display metadata for this kind.
    pub fn info(&self) -> &'static EntityKindInfo {
        // The table is ordered to match the enum; the debug assert keeps the
        // two in sync if a variant is ever added.
        let info = &ENTITY_KINDS[*self as usize];
        debug_assert_eq!(info.kind, *self);
        info
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app" => Ok(Self::App),
            "package" => Ok(Self::Package),
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            "middleware" => Ok(Self::Middleware),
            other => Err(DomainError::UnknownEntityKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Display metadata for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityKindInfo {
    pub kind: EntityKind,
    /// Human-readable label shown in the interactive picker.
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Lookup table of all kinds, in enum-discriminant order.
pub const ENTITY_KINDS: [EntityKindInfo; 5] = [
    EntityKindInfo {
        kind: EntityKind::App,
        label: "Application",
        description: "Create a new application",
        icon: "\u{1F4F1}", // 📱
    },
    EntityKindInfo {
        kind: EntityKind::Package,
        label: "Package",
        description: "Create a new package",
        icon: "\u{1F4E6}", // 📦
    },
    EntityKindInfo {
        kind: EntityKind::Controller,
        label: "Controller",
        description: "Create a new controller",
        icon: "\u{1F3AE}", // 🎮
    },
    EntityKindInfo {
        kind: EntityKind::Service,
        label: "Service",
        description: "Create a new service",
        icon: "\u{2699}\u{fe0f}", // ⚙️
    },
    EntityKindInfo {
        kind: EntityKind::Middleware,
        label: "Middleware",
        description: "Create a new middleware",
        icon: "\u{1F517}", // 🔗
    },
];

// ── tests ─────────────────────────────────────────────────────────────────────
