//! Reads Cucumber JSON report files and renders a standalone HTML summary.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::result::{ComprarError, ComprarResult};

/// One feature entry in a Cucumber JSON report
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature name from the `Feature:` line
    #[serde(default)]
    pub name: String,
    /// Path of the `.feature` file
    #[serde(default)]
    pub uri: String,
    /// Scenarios and backgrounds, in source order
    #[serde(default)]
    pub elements: Vec<Scenario>,
}

/// One scenario (or background) inside a feature
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Scenario name from the `Scenario:` line
    #[serde(default)]
    pub name: String,
    /// Element kind, `"scenario"` or `"background"`
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Executed steps, in execution order
    #[serde(default)]
    pub steps: Vec<StepRecord>,
}

/// One executed step with its result
#[derive(Debug, Clone, Deserialize)]
pub struct StepRecord {
    /// Gherkin keyword (`Given `, `When `, `Then `, `And `)
    #[serde(default)]
    pub keyword: String,
    /// Step text after the keyword
    #[serde(default)]
    pub name: String,
    /// Outcome recorded by the runner
    pub result: StepResult,
}

/// Step outcome as recorded by the JSON writer
#[derive(Debug, Clone, Deserialize)]
pub struct StepResult {
    /// `"passed"`, `"failed"`, or `"skipped"`
    pub status: String,
    /// Step duration in nanoseconds
    #[serde(default)]
    pub duration: u64,
    /// Panic or assertion message for failed steps
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Scenario {
    /// A scenario fails if any of its steps did not pass
    #[must_use]
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.result.status == "passed")
    }

    /// Total duration across steps, in nanoseconds
    #[must_use]
    pub fn duration_ns(&self) -> u64 {
        self.steps.iter().map(|s| s.result.duration).sum()
    }

    /// First error message among the failed steps, if any
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.steps
            .iter()
            .find_map(|s| s.result.error_message.as_deref())
    }
}

/// Aggregated counts across every parsed feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of feature files parsed
    pub features: usize,
    /// Scenarios tallied (backgrounds excluded)
    pub scenarios: usize,
    /// Scenarios with every step passed
    pub passed: usize,
    /// Scenarios with at least one non-passing step
    pub failed: usize,
    /// Total step time across all scenarios, in nanoseconds
    pub duration_ns: u64,
}

impl Summary {
    /// Tally the scenarios of a set of features
    #[must_use]
    pub fn tally(features: &[Feature]) -> Self {
        let mut summary = Self {
            features: features.len(),
            ..Self::default()
        };
        for feature in features {
            for scenario in feature.elements.iter().filter(|e| e.kind != "background") {
                summary.scenarios += 1;
                if scenario.passed() {
                    summary.passed += 1;
                } else {
                    summary.failed += 1;
                }
                summary.duration_ns += scenario.duration_ns();
            }
        }
        summary
    }

    /// Pass rate in percent, 100 when nothing ran
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.scenarios == 0 {
            return 100.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.passed as f64 / self.scenarios as f64 * 100.0
        }
    }
}

/// Parse one Cucumber JSON report file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a Cucumber
/// JSON document.
pub fn parse_file(path: &Path) -> ComprarResult<Vec<Feature>> {
    let raw = fs::read_to_string(path)?;
    parse_str(&raw)
}

/// Parse a Cucumber JSON document from a string
///
/// # Errors
///
/// Returns an error if the document is not valid Cucumber JSON.
pub fn parse_str(raw: &str) -> ComprarResult<Vec<Feature>> {
    serde_json::from_str(raw).map_err(|e| ComprarError::Report {
        message: format!("malformed cucumber json: {e}"),
    })
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_duration(ns: u64) -> String {
    let ms = ns / 1_000_000;
    if ms >= 1000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{ms}ms")
    }
}

/// Metadata printed in the report header
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Browser flavor the run used
    pub browser: String,
    /// Host OS and architecture
    pub platform: String,
    /// Environment label from the suite configuration
    pub environment: String,
    /// UTC timestamp of report generation
    pub generated_at: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            browser: "chromium".to_owned(),
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            environment: "QA".to_owned(),
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Render the parsed features as a self-contained HTML page
#[must_use]
pub fn render_html(features: &[Feature], meta: &ReportMeta) -> String {
    let summary = Summary::tally(features);
    let mut rows = String::new();
    for feature in features {
        for scenario in feature.elements.iter().filter(|e| e.kind != "background") {
            let status = if scenario.passed() { "passed" } else { "failed" };
            let error = scenario
                .first_error()
                .map(|m| format!("<pre>{}</pre>", escape_html(m)))
                .unwrap_or_default();
            rows.push_str(&format!(
                "<tr class=\"{status}\"><td>{}</td><td>{}</td><td>{status}</td><td>{}</td><td>{error}</td></tr>\n",
                escape_html(&feature.name),
                escape_html(&scenario.name),
                format_duration(scenario.duration_ns()),
            ));
        }
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Test Report</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; color: #222; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; vertical-align: top; }}
tr.passed td:nth-child(3) {{ color: #1a7f37; font-weight: bold; }}
tr.failed td:nth-child(3) {{ color: #cf222e; font-weight: bold; }}
pre {{ margin: 0; white-space: pre-wrap; font-size: 0.8rem; }}
.meta {{ color: #555; margin-bottom: 1rem; }}
.totals {{ margin-bottom: 1.5rem; }}
</style>
</head>
<body>
<h1>Test Report</h1>
<p class="meta">Browser: {browser} &middot; Platform: {platform} &middot; Environment: {environment} &middot; Generated: {generated}</p>
<p class="totals">{features} features, {scenarios} scenarios: <strong>{passed} passed</strong>, <strong>{failed} failed</strong> ({rate:.1}% pass rate, {duration})</p>
<table>
<thead><tr><th>Feature</th><th>Scenario</th><th>Status</th><th>Duration</th><th>Error</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        browser = escape_html(&meta.browser),
        platform = escape_html(&meta.platform),
        environment = escape_html(&meta.environment),
        generated = escape_html(&meta.generated_at),
        features = summary.features,
        scenarios = summary.scenarios,
        passed = summary.passed,
        failed = summary.failed,
        rate = summary.pass_rate(),
        duration = format_duration(summary.duration_ns),
    )
}
