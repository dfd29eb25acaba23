//! Interactive wizard: `dialoguer` presentation over the core preferences.
//!
//! Deliberately thin: every answer goes straight into a
//! [`Preferences`] record and all consequences are decided in
//! `a11ykit-core`, so the prompt layer stays swappable.

use a11ykit_core::{IntoEnumIterator, Preferences, Tool};
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

/// Collects the user's choices. Every tool is preselected and both confirms
/// default to yes, so plain Enter accepts a full setup.
///
/// # Errors
/// Returns an error when a prompt is aborted or the terminal is unusable.
pub fn collect() -> Result<Preferences> {
    let theme = ColorfulTheme::default();

    let labels: Vec<&str> = Tool::iter().map(Tool::label).collect();
    let defaults = vec![true; labels.len()];
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Which accessibility checks do you want? (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .context("tool selection aborted")?;
    let tools: Vec<Tool> = Tool::iter()
        .enumerate()
        .filter_map(|(index, tool)| picked.contains(&index).then_some(tool))
        .collect();

    let lint = Confirm::with_theme(&theme)
        .with_prompt("Add eslint-plugin-jsx-a11y to your ESLint config?")
        .default(true)
        .interact()
        .context("prompt aborted")?;

    let ci = if tools.is_empty() {
        // a workflow without checks would only build
        false
    } else {
        Confirm::with_theme(&theme)
            .with_prompt("Generate a GitHub Actions workflow (.github/workflows/accessibility.yml)?")
            .default(true)
            .interact()
            .context("prompt aborted")?
    };

    Ok(Preferences::new(&tools, ci, lint))
}
