//! Implementation of `turbogen new` - interactive creation.
//!
//! Presents the five entity kinds as a selectable list (label, description,
//! icon), prompts for a validated name, then funnels into the same create
//! path as the direct command.
//!
//! Compiled behind the `interactive` feature (on by default); a build
//! without it reports the feature as unavailable instead of failing to
//! parse the subcommand.

use crate::{cli::global::GlobalArgs, error::CliResult, output::OutputManager};

#[cfg(feature = "interactive")]
pub fn execute(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use turbogen_core::domain::{ENTITY_KINDS, validate_entity_name};

    use crate::{commands::create, error::CliError};

    let theme = ColorfulTheme::default();

    let items: Vec<String> = ENTITY_KINDS
        .iter()
        .map(|info| format!("{} {} ({})", info.icon, info.label, info.description))
        .collect();

    // Esc / Ctrl+C resolve to None - treat as a user cancel, not an error.
    let selection = Select::with_theme(&theme)
        .with_prompt("What would you like to create?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    let Some(index) = selection else {
        return Err(CliError::Cancelled);
    };
    let info = &ENTITY_KINDS[index];

    let name: String = Input::with_theme(&theme)
        .with_prompt(format!("Enter name for the new {}", info.label))
        .validate_with(|input: &String| -> Result<(), String> {
            validate_entity_name(input).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_error)?;

    create::execute(info.kind, &name, global, output)
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> crate::error::CliError {
    crate::error::CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(err),
    }
}

#[cfg(not(feature = "interactive"))]
pub fn execute(_global: &GlobalArgs, _output: &OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
