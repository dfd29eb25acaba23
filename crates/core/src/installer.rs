//! Runs the package manager's install command for the computed package set.

use crate::error::{Result, ScaffoldError};
use crate::project::Project;
use std::process::{Command, Stdio};

/// Thin seam around the package manager process. The command's output is
/// inherited so the user sees the install progress directly.
#[derive(Debug)]
pub struct Installer<'a> {
    project: &'a Project,
}

impl<'a> Installer<'a> {
    #[must_use]
    pub const fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// The full command line, for echoing before the run.
    #[must_use]
    pub fn command_line(&self, packages: &[&str]) -> String {
        let manager = self.project.manager;
        let mut parts = vec![manager.binary().to_owned()];
        parts.extend(manager.install_dev_args(packages));
        parts.join(" ")
    }

    /// Installs `packages` as dev dependencies in the project root.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::CommandLaunch`] when the manager binary
    /// cannot be started and [`ScaffoldError::CommandFailed`] when it exits
    /// non-zero.
    pub fn install_dev(&self, packages: &[&str]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let manager = self.project.manager;
        let status = Command::new(manager.binary())
            .args(manager.install_dev_args(packages))
            .current_dir(self.project.root())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::CommandLaunch {
                command: manager.binary().to_owned(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: self.command_line(packages),
                status,
            });
        }
        Ok(())
    }
}
