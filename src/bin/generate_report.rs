//! Renders an HTML summary from the Cucumber JSON reports left behind by
//! a test run.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use comprar::config::Config;
use comprar::report::{self, Feature, ReportMeta};
use comprar::result::ComprarResult;

#[derive(Debug, Parser)]
#[command(name = "generate-report", about = "Render an HTML report from Cucumber JSON output")]
struct Args {
    /// Directory scanned for *.json report files
    #[arg(long, default_value = "test-results")]
    json_dir: PathBuf,

    /// Directory the HTML report is written to
    #[arg(long, default_value = "test-results/html-report")]
    out_dir: PathBuf,
}

fn main() -> ComprarResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let mut features: Vec<Feature> = Vec::new();
    let mut sources = 0usize;
    for entry in fs::read_dir(&args.json_dir)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        match report::parse_file(&path) {
            Ok(parsed) => {
                sources += 1;
                features.extend(parsed);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable report"),
        }
    }

    if sources == 0 {
        warn!(dir = %args.json_dir.display(), "no cucumber json reports found");
    }

    let meta = ReportMeta {
        browser: config.flavor.as_str().to_owned(),
        environment: config.env_label.clone(),
        ..ReportMeta::default()
    };
    let html = report::render_html(&features, &meta);

    fs::create_dir_all(&args.out_dir)?;
    let out_path = args.out_dir.join("index.html");
    fs::write(&out_path, html)?;
    info!(path = %out_path.display(), features = features.len(), "html report written");
    Ok(())
}
