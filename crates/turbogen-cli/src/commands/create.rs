//! Implementation of `turbogen create <kind> <name>`.
//!
//! Responsibility: validate the request, wire the adapters, call the core
//! generator, and display results. No scaffolding logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use turbogen_adapters::{BuiltinTemplates, LocalFilesystem};
use turbogen_core::{
    application::{ApplicationError, GeneratorService, validate_workspace_context},
    domain::{EntityKind, ScaffoldReport, validate_entity_name},
    error::TurbogenError,
};

use crate::{
    cli::{OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `turbogen create` command.
///
/// Dispatch sequence:
/// 1. Validate the name (before any filesystem operation)
/// 2. Determine and validate the working directory for this kind
/// 3. Wire adapters and run the generator
/// 4. Print the report (human lines or JSON) and next-steps guidance
#[instrument(skip_all, fields(kind = %kind, name = %name))]
pub fn execute(
    kind: EntityKind,
    name: &str,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Name rule first: 0-2 characters never touch the disk.
    validate_entity_name(name).map_err(TurbogenError::from)?;

    // 2. Where are we, and is that an acceptable place for this kind?
    let cwd = current_dir()?;
    let filesystem = LocalFilesystem::new();
    validate_workspace_context(kind, &cwd, &filesystem).map_err(TurbogenError::from)?;

    debug!(cwd = %cwd.display(), "workspace context accepted");

    // Decorative lines stay out of JSON mode so stdout parses cleanly.
    if output.format() != OutputFormat::Json {
        output.info(&format!("Creating new {kind}: {name} {}", kind.info().icon))?;
    }

    // 3. Generate.
    let service = GeneratorService::new(Box::new(filesystem), Box::new(BuiltinTemplates::new()));

    let spinner = output.spinner(&format!("Creating {} structure", kind));
    let result = service.create_entity(kind, name, &cwd);
    spinner.finish_and_clear();

    let report = result.map_err(CliError::Core)?;
    info!(files = report.file_count(), "create completed");

    // 4. Present.
    match output.format() {
        OutputFormat::Json => print_json(&report),
        _ => print_human(kind, &report, global, output),
    }
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Core(
            ApplicationError::CwdUnavailable {
                reason: e.to_string(),
            }
            .into(),
        )
    })
}

fn print_json(report: &ScaffoldReport) -> CliResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| CliError::Core(TurbogenError::Internal {
            message: format!("report serialization failed: {e}"),
        }))?;
    println!("{json}");
    Ok(())
}

fn print_human(
    kind: EntityKind,
    report: &ScaffoldReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    for file in &report.files {
        output.print(&format!("  \u{1F4DD} Created {}", file.display()))?;
    }

    output.success(&format!(
        "Successfully created {kind} '{}' {}",
        report.name,
        kind.info().icon
    ))?;
    output.print(&format!(
        "\u{1F4C1} Location: {}",
        report.output_dir.display()
    ))?;

    // App scaffolds get the getting-started block.
    if kind == EntityKind::App && !global.quiet {
        output.print("")?;
        output.print("To get started:")?;
        output.print(&format!("  cd {}", report.name))?;
        output.print("  pnpm install")?;
        output.print("  pnpm dev")?;
    }

    Ok(())
}
