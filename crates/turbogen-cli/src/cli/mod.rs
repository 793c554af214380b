//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use turbogen_core::domain::EntityKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "turbogen",
    bin_name = "turbogen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Scaffolding for turborepo monorepos",
    long_about = "Turbogen stamps out apps, packages, and in-app entities \
                  consistent with your monorepo's conventions.",
    after_help = "EXAMPLES:\n\
        \x20 turbogen create app payments\n\
        \x20 turbogen create service checkout\n\
        \x20 turbogen new\n\
        \x20 turbogen completions bash > /usr/share/bash-completion/completions/turbogen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new entity of a given kind.
    #[command(
        visible_alias = "c",
        about = "Create a new entity",
        after_help = "EXAMPLES:\n\
            \x20 turbogen create app payments       # from the monorepo root\n\
            \x20 turbogen create package logger     # from the monorepo root\n\
            \x20 turbogen create service checkout   # from within apps/<app>"
    )]
    Create(CreateArgs),

    /// Interactive creation: pick a kind, type a name.
    #[command(
        visible_alias = "n",
        about = "Interactive creation of new entities"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 turbogen completions bash > ~/.local/share/bash-completion/completions/turbogen\n\
            \x20 turbogen completions zsh  > ~/.zfunc/_turbogen\n\
            \x20 turbogen completions fish > ~/.config/fish/completions/turbogen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `turbogen create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub entity: CreateEntityCommand,
}

/// One subcommand per entity kind, each taking exactly one name.
#[derive(Debug, Subcommand)]
pub enum CreateEntityCommand {
    /// Create a new app (📱).
    App {
        /// Name of the app.
        name: String,
    },
    /// Create a new package (📦).
    Package {
        /// Name of the package.
        name: String,
    },
    /// Create a new controller (🎮).
    Controller {
        /// Name of the controller.
        name: String,
    },
    /// Create a new service (⚙️).
    Service {
        /// Name of the service.
        name: String,
    },
    /// Create a new middleware (🔗).
    Middleware {
        /// Name of the middleware.
        name: String,
    },
}

impl CreateEntityCommand {
    /// The core kind plus the raw user-supplied name.
    pub fn split(&self) -> (EntityKind, &str) {
        match self {
            Self::App { name } => (EntityKind::App, name),
            Self::Package { name } => (EntityKind::Package, name),
            Self::Controller { name } => (EntityKind::Controller, name),
            Self::Service { name } => (EntityKind::Service, name),
            Self::Middleware { name } => (EntityKind::Middleware, name),
        }
    }
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `turbogen new` (none today; kept as a struct so flags can
/// be added without touching the dispatch).
#[derive(Debug, Args)]
pub struct NewArgs {}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `turbogen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
