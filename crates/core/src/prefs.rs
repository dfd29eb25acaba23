//! The user-preferences record collected by the wizard.

use crate::eslint;
use crate::tools::Tool;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Choices collected from the user before any file is touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected checkers, in registry order, without duplicates.
    pub tools: Vec<Tool>,
    /// Generate `.github/workflows/accessibility.yml`.
    pub ci: bool,
    /// Wire `eslint-plugin-jsx-a11y` into the lint config.
    pub lint: bool,
}

impl Preferences {
    /// Builds a record from raw wizard answers, normalizing the tool list to
    /// registry order and dropping duplicates.
    #[must_use]
    pub fn new(tools: &[Tool], ci: bool, lint: bool) -> Self {
        let tools = Tool::iter().filter(|tool| tools.contains(tool)).collect();
        Self { tools, ci, lint }
    }

    #[must_use]
    pub fn selected(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    /// True when there is nothing at all to scaffold.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && !self.lint
    }

    /// Dev dependencies implied by the selection.
    #[must_use]
    pub fn packages(&self) -> Vec<&'static str> {
        let mut packages: Vec<&'static str> = self.tools.iter().map(|tool| tool.package()).collect();
        if self.lint {
            packages.push(eslint::PLUGIN_PACKAGE);
        }
        packages
    }
}
