//! `package.json` mutation: the `scripts` entries for the selected tools.

use crate::error::{Result, ScaffoldError};
use crate::prefs::Preferences;
use crate::project::{PackageManager, Project};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Name of the aggregate script chaining every selected check.
pub const AGGREGATE_SCRIPT: &str = "a11y";

/// One script insertion, with the value it displaced (if any) so the CLI
/// can warn about overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptChange {
    pub name: String,
    pub command: String,
    pub previous: Option<String>,
}

/// Adds the per-tool scripts (and the aggregate `a11y` script when two or
/// more tools are selected) to the project's `package.json`.
///
/// Everything else in the manifest is preserved; the file is rewritten
/// pretty-printed with a trailing newline.
///
/// # Errors
/// Fails when the manifest cannot be read, is not valid JSON, or its
/// `scripts` field is not an object.
pub fn add_scripts(project: &Project, prefs: &Preferences) -> Result<Vec<ScriptChange>> {
    let path = project.manifest_path();
    let mut manifest = read_json(&path)?;
    let changes = insert_scripts(&mut manifest, &path, prefs, project.manager)?;
    if !changes.is_empty() {
        write_json(&path, &manifest)?;
    }
    Ok(changes)
}

fn insert_scripts(
    manifest: &mut Value,
    path: &Path,
    prefs: &Preferences,
    manager: PackageManager,
) -> Result<Vec<ScriptChange>> {
    let root = manifest.as_object_mut().ok_or_else(|| ScaffoldError::MalformedManifest {
        path: path.to_path_buf(),
        reason: "top level is not a JSON object".to_owned(),
    })?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::MalformedManifest {
            path: path.to_path_buf(),
            reason: "'scripts' is not a JSON object".to_owned(),
        })?;

    let mut changes = Vec::new();
    for tool in &prefs.tools {
        changes.push(set_script(scripts, tool.script_name(), tool.local_command()));
    }

    // A one-tool chain would just alias the tool's own script.
    if prefs.tools.len() >= 2 {
        let chain = prefs
            .tools
            .iter()
            .map(|tool| format!("{} {}", manager.run_prefix(), tool.script_name()))
            .collect::<Vec<_>>()
            .join(" && ");
        changes.push(set_script(scripts, AGGREGATE_SCRIPT, &chain));
    }

    Ok(changes)
}

fn set_script(scripts: &mut Map<String, Value>, name: &str, command: &str) -> ScriptChange {
    let previous = scripts
        .insert(name.to_owned(), Value::String(command.to_owned()))
        .and_then(|old| old.as_str().map(ToOwned::to_owned));
    ScriptChange { name: name.to_owned(), command: command.to_owned(), previous }
}

/// Reads a JSON file, attributing parse failures to the file.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|source| ScaffoldError::InvalidJson { path: path.to_path_buf(), source })
}

/// Writes a JSON value pretty-printed with a trailing newline.
pub(crate) fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(value)
        .map_err(|source| ScaffoldError::InvalidJson { path: path.to_path_buf(), source })?;
    rendered.push('\n');
    fs::write(path, rendered)?;
    Ok(())
}
