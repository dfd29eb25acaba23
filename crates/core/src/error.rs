use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Error types for the scaffolding pipeline.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory does not look like a Node.js project.
    #[error("no package.json found in '{}': run a11ykit from your project root", .0.display())]
    ManifestMissing(PathBuf),

    /// A JSON file we need to edit could not be parsed.
    #[error("'{}' is not valid JSON: {source}", .path.display())]
    InvalidJson { path: PathBuf, source: serde_json::Error },

    /// A JSON file parsed but does not have the shape we can safely edit.
    #[error("'{}' has an unexpected shape: {reason}", .path.display())]
    MalformedManifest { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The package manager binary could not be started at all.
    #[error("failed to launch '{command}' (is it installed and on your PATH?): {source}")]
    CommandLaunch { command: String, source: std::io::Error },

    /// The package manager ran but reported failure.
    #[error("'{command}' exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("workflow rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
