//! Full scaffolding pass against a scratch project directory.

use a11ykit_core::eslint::{self, LintPatch};
use a11ykit_core::{manifest, workflow};
use a11ykit_core::{PackageManager, Preferences, Project, ScaffoldError, Tool};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scratch_project(lock_file: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let manifest = json!({
        "name": "demo-app",
        "version": "0.1.0",
        "scripts": { "build": "vite build" }
    });
    fs::write(
        dir.path().join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
    if let Some(name) = lock_file {
        fs::write(dir.path().join(name), "").unwrap();
    }
    dir
}

fn read_manifest(root: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap()
}

#[test]
fn full_pass_on_a_pnpm_project() {
    let dir = scratch_project(Some("pnpm-lock.yaml"));
    let project = Project::discover(dir.path()).unwrap();
    assert_eq!(project.manager, PackageManager::Pnpm);

    let prefs = Preferences::new(&[Tool::Axe, Tool::Lighthouse], true, true);
    assert_eq!(
        prefs.packages(),
        vec!["@axe-core/cli", "lighthouse", "eslint-plugin-jsx-a11y"]
    );

    let changes = manifest::add_scripts(&project, &prefs).unwrap();
    assert_eq!(changes.len(), 3); // two tools + aggregate
    let rewritten = read_manifest(dir.path());
    assert_eq!(rewritten["scripts"]["build"], "vite build");
    assert_eq!(
        rewritten["scripts"]["a11y"],
        "pnpm run a11y:axe && pnpm run a11y:lighthouse"
    );

    let patch = eslint::apply(&project).unwrap();
    assert_eq!(patch, LintPatch::Created(dir.path().join(".eslintrc.json")));

    let path = workflow::write(project.root(), &prefs, project.manager).unwrap();
    let doc = fs::read_to_string(path).unwrap();
    assert!(doc.contains("  axe:"));
    assert!(doc.contains("  lighthouse:"));
    assert!(!doc.contains("  pa11y:"));
    assert!(doc.contains("pnpm install --frozen-lockfile"));
}

#[test]
fn manifest_rewrite_keeps_a_trailing_newline() {
    let dir = scratch_project(None);
    let project = Project::discover(dir.path()).unwrap();

    manifest::add_scripts(&project, &Preferences::new(&[Tool::Pa11y], false, false)).unwrap();
    let raw = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(raw.ends_with("}\n"));
}

#[test]
fn eslint_patch_prefers_an_existing_json_config() {
    let dir = scratch_project(None);
    fs::write(dir.path().join(".eslintrc.json"), "{\"extends\": \"react-app\"}\n").unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let patch = eslint::apply(&project).unwrap();
    assert_eq!(patch, LintPatch::Updated(dir.path().join(".eslintrc.json")));

    let config: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap())
            .unwrap();
    assert_eq!(config["extends"], json!(["react-app", "plugin:jsx-a11y/recommended"]));

    // a second run changes nothing
    eslint::apply(&project).unwrap();
    let again: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap())
            .unwrap();
    assert_eq!(again, config);
}

#[test]
fn eslint_patch_refuses_javascript_configs() {
    let dir = scratch_project(None);
    fs::write(dir.path().join(".eslintrc.js"), "module.exports = {};\n").unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let patch = eslint::apply(&project).unwrap();
    assert_eq!(patch, LintPatch::ManualStepRequired(dir.path().join(".eslintrc.js")));
    // the config was left untouched
    assert_eq!(
        fs::read_to_string(dir.path().join(".eslintrc.js")).unwrap(),
        "module.exports = {};\n"
    );
}

#[test]
fn eslint_patch_uses_the_manifest_block_when_present() {
    let dir = scratch_project(None);
    let project = Project::discover(dir.path()).unwrap();
    let mut manifest = read_manifest(dir.path());
    manifest["eslintConfig"] = json!({ "plugins": ["react"] });
    fs::write(dir.path().join("package.json"), manifest.to_string()).unwrap();

    let patch = eslint::apply(&project).unwrap();
    assert_eq!(patch, LintPatch::Updated(dir.path().join("package.json")));

    let rewritten = read_manifest(dir.path());
    assert_eq!(rewritten["eslintConfig"]["plugins"], json!(["react", "jsx-a11y"]));
    assert_eq!(rewritten["scripts"]["build"], "vite build");
}

#[test]
fn invalid_manifest_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), "{ not json").unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let err =
        manifest::add_scripts(&project, &Preferences::new(&[Tool::Axe], false, false)).unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidJson { .. }));
    assert!(err.to_string().contains("package.json"));
}
