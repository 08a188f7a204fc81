//! Scenario artifact management.
//!
//! All run output lands under a fixed `test-results/` tree; per-scenario
//! files are keyed by the scenario name (spaces replaced with
//! underscores) plus a millisecond timestamp. Two identically named
//! scenarios finishing in the same millisecond would collide; accepted.

use crate::result::ComprarResult;
use std::path::{Path, PathBuf};

/// Root of the output tree
pub const OUTPUT_ROOT: &str = "test-results";

/// Directory for failure screenshots
#[must_use]
pub fn screenshots_dir() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("screenshots")
}

/// Directory for action-trace archives
#[must_use]
pub fn traces_dir() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("traces")
}

/// Directory for video capture (created for tree stability; unused by the
/// CDP driver)
#[must_use]
pub fn videos_dir() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("videos")
}

/// Directory for the consolidated HTML report
#[must_use]
pub fn html_report_dir() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("html-report")
}

/// Path of the Cucumber JSON report
#[must_use]
pub fn json_report_path() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("cucumber-report.json")
}

/// Path of the JUnit XML report
#[must_use]
pub fn junit_report_path() -> PathBuf {
    Path::new(OUTPUT_ROOT).join("cucumber-report.xml")
}

/// Create the whole output tree
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn ensure_output_tree() -> ComprarResult<()> {
    for dir in [
        screenshots_dir(),
        traces_dir(),
        videos_dir(),
        html_report_dir(),
    ] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Artifact file stem for a scenario at a given timestamp
#[must_use]
pub fn stem_at(scenario_name: &str, timestamp_ms: i64) -> String {
    format!("{}_{timestamp_ms}", scenario_name.replace(' ', "_"))
}

/// Artifact file stem for a scenario, stamped with the current time
#[must_use]
pub fn stem(scenario_name: &str) -> String {
    stem_at(scenario_name, chrono::Utc::now().timestamp_millis())
}

/// Write a failure screenshot, creating directories as needed
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_screenshot(file_stem: &str, png: &[u8]) -> ComprarResult<PathBuf> {
    let dir = screenshots_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{file_stem}.png"));
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Path for a scenario's trace archive
#[must_use]
pub fn trace_path(file_stem: &str) -> PathBuf {
    traces_dir().join(format!("{file_stem}.json"))
}
