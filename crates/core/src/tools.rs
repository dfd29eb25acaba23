//! The fixed registry of supported accessibility checkers.
//!
//! Every downstream artifact (installed packages, `package.json` scripts,
//! workflow jobs, artifact names, documentation links) is a static lookup
//! keyed by [`Tool`]. Set membership alone decides which blocks appear in
//! the generated output.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A supported accessibility checker.
///
/// Declaration order is the canonical order: prompts, scripts, workflow jobs
/// and summary rows all follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tool {
    Axe,
    Pa11y,
    Lighthouse,
}

impl Tool {
    /// The npm package installed as a dev dependency.
    #[must_use]
    pub const fn package(self) -> &'static str {
        match self {
            Self::Axe => "@axe-core/cli",
            Self::Pa11y => "pa11y",
            Self::Lighthouse => "lighthouse",
        }
    }

    /// Name of the `package.json` script written for this tool.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::Axe => "a11y:axe",
            Self::Pa11y => "a11y:pa11y",
            Self::Lighthouse => "a11y:lighthouse",
        }
    }

    /// Shell command behind the local script, pointed at a dev server.
    #[must_use]
    pub const fn local_command(self) -> &'static str {
        match self {
            Self::Axe => "axe http://localhost:3000 --exit",
            Self::Pa11y => "pa11y http://localhost:3000",
            Self::Lighthouse => {
                "lighthouse http://localhost:3000 --only-categories=accessibility --chrome-flags=\"--headless\""
            },
        }
    }

    /// CI variant of the command: same check, but the result is written to
    /// [`Self::report_file`] so the summary job can pick it up.
    #[must_use]
    pub const fn ci_command(self) -> &'static str {
        match self {
            Self::Axe => "npx axe http://localhost:3000 --save axe-report.json --exit",
            Self::Pa11y => "npx pa11y http://localhost:3000 --reporter json > pa11y-report.json",
            Self::Lighthouse => {
                "npx lighthouse http://localhost:3000 --only-categories=accessibility --output json --output-path lighthouse-report.json --chrome-flags=\"--headless --no-sandbox\""
            },
        }
    }

    /// Workflow job id. Also the key other jobs reference in `needs`.
    #[must_use]
    pub const fn job_id(self) -> &'static str {
        match self {
            Self::Axe => "axe",
            Self::Pa11y => "pa11y",
            Self::Lighthouse => "lighthouse",
        }
    }

    /// Name of the uploaded report artifact.
    #[must_use]
    pub const fn artifact(self) -> &'static str {
        match self {
            Self::Axe => "axe-report",
            Self::Pa11y => "pa11y-report",
            Self::Lighthouse => "lighthouse-report",
        }
    }

    /// File the CI command writes its JSON report to.
    #[must_use]
    pub const fn report_file(self) -> &'static str {
        match self {
            Self::Axe => "axe-report.json",
            Self::Pa11y => "pa11y-report.json",
            Self::Lighthouse => "lighthouse-report.json",
        }
    }

    /// Where to read up on the tool.
    #[must_use]
    pub const fn docs(self) -> &'static str {
        match self {
            Self::Axe => "https://github.com/dequelabs/axe-core-npm/tree/develop/packages/cli",
            Self::Pa11y => "https://pa11y.org/",
            Self::Lighthouse => "https://developer.chrome.com/docs/lighthouse/accessibility/",
        }
    }

    /// One-line label shown in the selection prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Axe => "axe: fast rule-based checks from Deque's axe-core",
            Self::Pa11y => "pa11y: WCAG runner built on HTML_CodeSniffer",
            Self::Lighthouse => "Lighthouse: Chrome's accessibility audit with a 0-100 score",
        }
    }

    /// JavaScript fragment (unindented) the summary job runs to turn this
    /// tool's report file into a markdown table row.
    #[must_use]
    pub const fn summary_row_js(self) -> &'static str {
        match self {
            Self::Axe => concat!(
                "try {\n",
                "  const axe = JSON.parse(fs.readFileSync('reports/axe-report/axe-report.json', 'utf8'));\n",
                "  const violations = axe.reduce((n, page) => n + page.violations.length, 0);\n",
                "  lines.push('| axe | ' + (violations === 0 ? 'no violations' : violations + ' violation(s)') + ' |');\n",
                "} catch {\n",
                "  lines.push('| axe | report missing |');\n",
                "}",
            ),
            Self::Pa11y => concat!(
                "try {\n",
                "  const pa11y = JSON.parse(fs.readFileSync('reports/pa11y-report/pa11y-report.json', 'utf8'));\n",
                "  lines.push('| pa11y | ' + (pa11y.length === 0 ? 'no issues' : pa11y.length + ' issue(s)') + ' |');\n",
                "} catch {\n",
                "  lines.push('| pa11y | report missing |');\n",
                "}",
            ),
            Self::Lighthouse => concat!(
                "try {\n",
                "  const lh = JSON.parse(fs.readFileSync('reports/lighthouse-report/lighthouse-report.json', 'utf8'));\n",
                "  const score = Math.round(lh.categories.accessibility.score * 100);\n",
                "  lines.push('| Lighthouse | ' + score + ' / 100 |');\n",
                "} catch {\n",
                "  lines.push('| Lighthouse | report missing |');\n",
                "}",
            ),
        }
    }
}
