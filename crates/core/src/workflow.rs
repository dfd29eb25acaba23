//! GitHub Actions workflow generator.
//!
//! Renders `.github/workflows/accessibility.yml` as templated text: a
//! `build` job, one job per selected tool (each `needs: build` and uploads a
//! `<tool>-report` artifact), and a `summary` job whose `needs` list names
//! exactly the selected tool jobs and which posts a single, updatable PR
//! comment from the collected reports. Which blocks appear is decided purely
//! by set membership; no YAML model, no runtime data.

use crate::error::Result;
use crate::prefs::Preferences;
use crate::project::PackageManager;
use crate::tools::Tool;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the workflow lands, relative to the project root.
pub const WORKFLOW_PATH: &str = ".github/workflows/accessibility.yml";

const NODE_VERSION: &str = "20";
const SITE_ARTIFACT: &str = "site";
const COMMENT_MARKER: &str = "<!-- a11ykit-report -->";

/// Comment-upsert tail of the summary script. `marker`, `lines` and `fs`
/// are bound by the preceding fragments.
const UPSERT_COMMENT_JS: &str = concat!(
    "const body = lines.join('\\n');\n",
    "const { data: comments } = await github.rest.issues.listComments({\n",
    "  owner: context.repo.owner,\n",
    "  repo: context.repo.repo,\n",
    "  issue_number: context.issue.number,\n",
    "});\n",
    "const existing = comments.find((comment) => comment.body.startsWith(marker));\n",
    "if (existing) {\n",
    "  await github.rest.issues.updateComment({\n",
    "    owner: context.repo.owner,\n",
    "    repo: context.repo.repo,\n",
    "    comment_id: existing.id,\n",
    "    body,\n",
    "  });\n",
    "} else {\n",
    "  await github.rest.issues.createComment({\n",
    "    owner: context.repo.owner,\n",
    "    repo: context.repo.repo,\n",
    "    issue_number: context.issue.number,\n",
    "    body,\n",
    "  });\n",
    "}",
);

/// Renders the workflow and writes it, creating parent directories. An
/// existing file is replaced.
///
/// # Errors
/// Returns an error if the directories or the file cannot be written.
pub fn write(root: &Path, prefs: &Preferences, manager: PackageManager) -> Result<PathBuf> {
    let path = root.join(WORKFLOW_PATH);
    ensure_parent_dir(&path)?;
    fs::write(&path, render(prefs, manager)?)?;
    Ok(path)
}

/// Renders the workflow document for the given selection. Pure: same
/// preferences and manager, same text.
///
/// # Errors
/// Formatting into the output buffer is infallible in practice; the
/// signature follows the renderer convention used across the crate.
pub fn render(prefs: &Preferences, manager: PackageManager) -> Result<String> {
    let mut w = String::new();
    let has_summary = !prefs.tools.is_empty();

    writeln!(w, "# Generated by a11ykit. Re-run `a11ykit` to update it after changing tools.")?;
    writeln!(w, "name: Accessibility")?;
    writeln!(w)?;
    w.push_str("on:\n  pull_request:\n  push:\n    branches: [main]\n\n");

    writeln!(w, "permissions:")?;
    writeln!(w, "  contents: read")?;
    if has_summary {
        // needed by the summary job's PR comment
        writeln!(w, "  pull-requests: write")?;
    }
    writeln!(w)?;

    w.push_str("concurrency:\n  group: a11y-${{ github.ref }}\n  cancel-in-progress: true\n\n");

    writeln!(w, "jobs:")?;
    render_build_job(&mut w, manager)?;
    for tool in &prefs.tools {
        render_tool_job(&mut w, *tool, manager)?;
    }
    if has_summary {
        render_summary_job(&mut w, &prefs.tools)?;
    }

    Ok(w)
}

fn render_build_job(w: &mut String, manager: PackageManager) -> Result<()> {
    writeln!(w, "  build:")?;
    writeln!(w, "    runs-on: ubuntu-latest")?;
    writeln!(w, "    steps:")?;
    render_setup_steps(w, manager)?;
    writeln!(w, "      - name: Build")?;
    writeln!(w, "        run: {} build", manager.run_prefix())?;
    writeln!(w, "      - name: Upload built site")?;
    writeln!(w, "        uses: actions/upload-artifact@v4")?;
    writeln!(w, "        with:")?;
    writeln!(w, "          name: {SITE_ARTIFACT}")?;
    writeln!(w, "          path: |")?;
    writeln!(w, "            dist")?;
    writeln!(w, "            build")?;
    writeln!(w, "          if-no-files-found: error")?;
    Ok(())
}

fn render_tool_job(w: &mut String, tool: Tool, manager: PackageManager) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "  {}:", tool.job_id())?;
    writeln!(w, "    runs-on: ubuntu-latest")?;
    writeln!(w, "    needs: build")?;
    writeln!(w, "    steps:")?;
    render_setup_steps(w, manager)?;
    writeln!(w, "      - name: Download built site")?;
    writeln!(w, "        uses: actions/download-artifact@v4")?;
    writeln!(w, "        with:")?;
    writeln!(w, "          name: {SITE_ARTIFACT}")?;
    writeln!(w, "          path: site")?;
    writeln!(w, "      - name: Serve built site")?;
    writeln!(w, "        run: |")?;
    writeln!(w, "          npx serve -s site -l 3000 &")?;
    writeln!(w, "          npx wait-on http://localhost:3000")?;
    writeln!(w, "      - name: Run {tool}")?;
    writeln!(w, "        run: {}", tool.ci_command())?;
    writeln!(w, "      - name: Upload report")?;
    writeln!(w, "        if: always()")?;
    writeln!(w, "        uses: actions/upload-artifact@v4")?;
    writeln!(w, "        with:")?;
    writeln!(w, "          name: {}", tool.artifact())?;
    writeln!(w, "          path: {}", tool.report_file())?;
    Ok(())
}

fn render_summary_job(w: &mut String, tools: &[Tool]) -> Result<()> {
    let needs = tools.iter().map(|tool| tool.job_id()).collect::<Vec<_>>().join(", ");

    writeln!(w)?;
    writeln!(w, "  summary:")?;
    writeln!(w, "    runs-on: ubuntu-latest")?;
    writeln!(w, "    needs: [{needs}]")?;
    // always(): report even when a check found violations and failed its job
    w.push_str("    if: ${{ always() && github.event_name == 'pull_request' }}\n");
    writeln!(w, "    steps:")?;
    writeln!(w, "      - name: Download reports")?;
    writeln!(w, "        uses: actions/download-artifact@v4")?;
    writeln!(w, "        with:")?;
    writeln!(w, "          path: reports")?;
    writeln!(w, "      - name: Comment on the pull request")?;
    writeln!(w, "        uses: actions/github-script@v7")?;
    writeln!(w, "        with:")?;
    writeln!(w, "          script: |")?;
    writeln!(w, "{}", indent(&summary_script(tools), "            "))?;
    Ok(())
}

/// Checkout plus package-manager setup and a reproducible install; shared by
/// every job.
fn render_setup_steps(w: &mut String, manager: PackageManager) -> Result<()> {
    writeln!(w, "      - uses: actions/checkout@v4")?;
    if manager == PackageManager::Pnpm {
        writeln!(w, "      - uses: pnpm/action-setup@v4")?;
        writeln!(w, "        with:")?;
        writeln!(w, "          version: 10")?;
    }
    if manager == PackageManager::Bun {
        writeln!(w, "      - uses: oven-sh/setup-bun@v2")?;
    } else {
        writeln!(w, "      - uses: actions/setup-node@v4")?;
        writeln!(w, "        with:")?;
        writeln!(w, "          node-version: '{NODE_VERSION}'")?;
        if let Some(cache) = manager.cache_hint() {
            writeln!(w, "          cache: {cache}")?;
        }
    }
    writeln!(w, "      - name: Install dependencies")?;
    writeln!(w, "        run: {}", manager.ci_install())?;
    Ok(())
}

/// The `actions/github-script` body: one row per selected tool, then the
/// comment upsert keyed by the hidden marker.
fn summary_script(tools: &[Tool]) -> String {
    let mut script = String::new();
    script.push_str("const fs = require('fs');\n");
    script.push_str(&format!("const marker = '{COMMENT_MARKER}';\n"));
    script.push_str("const lines = [marker, '## Accessibility report', ''];\n");
    script.push_str("lines.push('| Check | Result |');\n");
    script.push_str("lines.push('| --- | --- |');\n");
    for tool in tools {
        script.push_str(tool.summary_row_js());
        script.push('\n');
    }
    script.push_str(UPSERT_COMMENT_JS);
    script
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{prefix}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(tools: &[Tool]) -> Preferences {
        Preferences::new(tools, true, false)
    }

    #[test]
    fn only_selected_tools_get_jobs() {
        let doc = render(&prefs(&[Tool::Axe]), PackageManager::Npm).unwrap();

        assert!(doc.contains("\n  axe:\n"));
        assert!(doc.contains("npx axe http://localhost:3000"));
        assert!(doc.contains("name: axe-report"));

        assert!(!doc.contains("\n  pa11y:\n"));
        assert!(!doc.contains("pa11y-report"));
        assert!(!doc.contains("lighthouse"));
    }

    #[test]
    fn summary_needs_exactly_the_selected_jobs() {
        let doc = render(&prefs(&[Tool::Axe, Tool::Lighthouse]), PackageManager::Npm).unwrap();
        assert!(doc.contains("needs: [axe, lighthouse]"));

        let all = render(
            &prefs(&[Tool::Axe, Tool::Pa11y, Tool::Lighthouse]),
            PackageManager::Npm,
        )
        .unwrap();
        assert!(all.contains("needs: [axe, pa11y, lighthouse]"));
    }

    #[test]
    fn tool_jobs_depend_on_build() {
        let doc = render(&prefs(&[Tool::Pa11y]), PackageManager::Npm).unwrap();
        let pa11y_job = doc.split("\n  pa11y:\n").nth(1).unwrap();
        assert!(pa11y_job.starts_with("    runs-on: ubuntu-latest\n    needs: build\n"));
    }

    #[test]
    fn summary_script_rows_follow_the_selection() {
        let doc = render(&prefs(&[Tool::Lighthouse]), PackageManager::Npm).unwrap();
        assert!(doc.contains("lighthouse-report.json"));
        assert!(doc.contains(COMMENT_MARKER));
        assert!(!doc.contains("axe-report.json"));
        assert!(!doc.contains("pa11y-report.json"));
    }

    #[test]
    fn manager_setup_varies() {
        let pnpm = render(&prefs(&[Tool::Axe]), PackageManager::Pnpm).unwrap();
        assert!(pnpm.contains("pnpm/action-setup@v4"));
        assert!(pnpm.contains("cache: pnpm"));
        assert!(pnpm.contains("pnpm install --frozen-lockfile"));

        let bun = render(&prefs(&[Tool::Axe]), PackageManager::Bun).unwrap();
        assert!(bun.contains("oven-sh/setup-bun@v2"));
        assert!(!bun.contains("actions/setup-node"));
    }

    #[test]
    fn empty_selection_renders_no_summary() {
        let doc = render(&prefs(&[]), PackageManager::Npm).unwrap();
        assert!(doc.contains("  build:"));
        assert!(!doc.contains("summary:"));
        assert!(!doc.contains("pull-requests: write"));
    }

    #[test]
    fn write_creates_the_workflows_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &prefs(&[Tool::Axe]), PackageManager::Npm).unwrap();

        assert!(path.ends_with(WORKFLOW_PATH));
        let doc = fs::read_to_string(path).unwrap();
        assert!(doc.starts_with("# Generated by a11ykit."));
    }
}
