//! Core logic for the a11ykit scaffolder.
//!
//! Everything in this crate is prompt-free: the CLI collects a
//! [`Preferences`] record from the user and this crate applies it to a
//! project on disk: installing packages through the detected package
//! manager, adding `package.json` scripts, patching the ESLint config and
//! rendering the GitHub Actions workflow. Keeping the logic here lets the
//! wizard stay a thin presentation layer and keeps every mutation testable
//! against a scratch directory.

pub mod error;
pub mod eslint;
pub mod installer;
pub mod manifest;
pub mod prefs;
pub mod project;
pub mod tools;
pub mod workflow;

pub use crate::error::ScaffoldError;
pub use crate::prefs::Preferences;
pub use crate::project::{PackageManager, Project};
pub use crate::tools::Tool;

// Re-exported so callers can iterate `Tool` without naming strum themselves.
pub use strum::IntoEnumIterator;
