//! ESLint config patch: wire in `eslint-plugin-jsx-a11y`.

use crate::error::Result;
use crate::manifest::{read_json, write_json};
use crate::project::Project;
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// The package installed alongside the patch.
pub const PLUGIN_PACKAGE: &str = "eslint-plugin-jsx-a11y";

const PLUGIN_NAME: &str = "jsx-a11y";
const PRESET: &str = "plugin:jsx-a11y/recommended";

/// Configs written in JavaScript. ESLint prefers these over JSON ones, and
/// we cannot edit code safely, so finding one means the user wires the
/// plugin in by hand.
const JS_CONFIGS: &[&str] =
    &[".eslintrc.js", ".eslintrc.cjs", "eslint.config.js", "eslint.config.mjs", "eslint.config.ts"];

/// JSON configs we can patch in place, in ESLint's resolution order.
const JSON_CONFIGS: &[&str] = &[".eslintrc.json", ".eslintrc"];

/// What the lint patch actually did, for the CLI report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintPatch {
    /// An existing JSON config (or the `eslintConfig` manifest block) was
    /// patched.
    Updated(PathBuf),
    /// No config existed; a fresh `.eslintrc.json` was written.
    Created(PathBuf),
    /// A JavaScript config was found and left alone.
    ManualStepRequired(PathBuf),
}

/// Adds the `jsx-a11y` plugin and its recommended preset to the project's
/// ESLint configuration. Idempotent: entries already present are not
/// duplicated.
///
/// # Errors
/// Fails when an existing config cannot be read, parsed, or written back.
pub fn apply(project: &Project) -> Result<LintPatch> {
    for name in JS_CONFIGS {
        let path = project.root().join(name);
        if path.is_file() {
            return Ok(LintPatch::ManualStepRequired(path));
        }
    }

    for name in JSON_CONFIGS {
        let path = project.root().join(name);
        if path.is_file() {
            let mut config = read_json(&path)?;
            patch_config(&mut config);
            write_json(&path, &config)?;
            return Ok(LintPatch::Updated(path));
        }
    }

    let manifest_path = project.manifest_path();
    let mut manifest = read_json(&manifest_path)?;
    if let Some(config) = manifest.get_mut("eslintConfig") {
        patch_config(config);
        write_json(&manifest_path, &manifest)?;
        return Ok(LintPatch::Updated(manifest_path));
    }

    let path = project.root().join(".eslintrc.json");
    write_json(&path, &json!({ "extends": [PRESET], "plugins": [PLUGIN_NAME] }))?;
    Ok(LintPatch::Created(path))
}

/// The manual instructions printed when a JS config blocks the patch.
#[must_use]
pub fn manual_instructions() -> [String; 2] {
    [format!("plugins: [\"{PLUGIN_NAME}\"]"), format!("extends: [\"{PRESET}\"]")]
}

fn patch_config(config: &mut Value) {
    // A non-object config is unusable by ESLint anyway; start fresh.
    if !config.is_object() {
        *config = Value::Object(Map::new());
    }
    push_unique(config, "extends", PRESET);
    push_unique(config, "plugins", PLUGIN_NAME);
}

/// Appends `value` to the array at `key`, creating the array if missing and
/// normalizing a bare string (legal for `extends`) into a one-element array.
fn push_unique(config: &mut Value, key: &str, value: &str) {
    let Some(obj) = config.as_object_mut() else { return };
    let entry = obj.entry(key).or_insert_with(|| Value::Array(Vec::new()));

    if let Value::String(existing) = entry {
        *entry = Value::Array(vec![Value::String(existing.clone())]);
    }

    if let Value::Array(items) = entry {
        if !items.iter().any(|item| item.as_str() == Some(value)) {
            items.push(Value::String(value.to_owned()));
        }
    }
}
