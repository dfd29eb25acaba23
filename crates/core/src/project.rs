//! Target-project discovery: where is it, and which package manager owns it.

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use strum_macros::Display;

/// The package manager in charge of the target project, inferred from the
/// lock file present next to `package.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Infers the manager from lock files. Projects without a lock file (or
    /// with only `package-lock.json`) get npm.
    #[must_use]
    pub fn detect(dir: &Path) -> Self {
        if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
            Self::Bun
        } else if dir.join("pnpm-lock.yaml").exists() {
            Self::Pnpm
        } else if dir.join("yarn.lock").exists() {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Arguments that install the given packages as dev dependencies.
    #[must_use]
    pub fn install_dev_args(self, packages: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Self::Npm => vec!["install".to_owned(), "--save-dev".to_owned()],
            Self::Pnpm => vec!["add".to_owned(), "--save-dev".to_owned()],
            Self::Yarn | Self::Bun => vec!["add".to_owned(), "--dev".to_owned()],
        };
        args.extend(packages.iter().map(|package| (*package).to_owned()));
        args
    }

    /// Prefix for invoking a `package.json` script, used in generated text.
    #[must_use]
    pub const fn run_prefix(self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Pnpm => "pnpm run",
            Self::Yarn => "yarn run",
            Self::Bun => "bun run",
        }
    }

    /// Reproducible install command for the generated workflow.
    #[must_use]
    pub const fn ci_install(self) -> &'static str {
        match self {
            Self::Npm => "npm ci",
            Self::Pnpm => "pnpm install --frozen-lockfile",
            Self::Yarn => "yarn install --frozen-lockfile",
            Self::Bun => "bun install --frozen-lockfile",
        }
    }

    /// Cache key for `actions/setup-node`. Bun ships its own setup action
    /// and has no setup-node cache integration.
    #[must_use]
    pub const fn cache_hint(self) -> Option<&'static str> {
        match self {
            Self::Npm => Some("npm"),
            Self::Pnpm => Some("pnpm"),
            Self::Yarn => Some("yarn"),
            Self::Bun => None,
        }
    }
}

/// A front-end project we are allowed to mutate.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    pub manager: PackageManager,
}

impl Project {
    /// Checks that `dir` holds a `package.json` and detects the package
    /// manager. This runs before any prompt so a wrong directory fails fast.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::ManifestMissing`] when `dir` has no
    /// `package.json`.
    pub fn discover(dir: &Path) -> Result<Self> {
        if !dir.join("package.json").is_file() {
            return Err(ScaffoldError::ManifestMissing(dir.to_path_buf()));
        }
        Ok(Self { root: dir.to_path_buf(), manager: PackageManager::detect(dir) })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lock_files_pick_the_manager() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);

        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);

        // pnpm wins over yarn, bun wins over everything
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
        fs::write(dir.path().join("bun.lockb"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Bun);
    }

    #[test]
    fn discover_requires_a_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = Project::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestMissing(_)));

        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert_eq!(project.manager, PackageManager::Npm);
        assert!(project.manifest_path().ends_with("package.json"));
    }

    #[test]
    fn install_args_per_manager() {
        let packages = ["pa11y", "lighthouse"];
        assert_eq!(
            PackageManager::Npm.install_dev_args(&packages),
            vec!["install", "--save-dev", "pa11y", "lighthouse"]
        );
        assert_eq!(
            PackageManager::Yarn.install_dev_args(&packages),
            vec!["add", "--dev", "pa11y", "lighthouse"]
        );
        assert_eq!(PackageManager::Pnpm.install_dev_args(&packages)[0], "add");
    }
}
