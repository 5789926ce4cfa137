use std::fs;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, warn};

use cip_dose::{NormalizeOptions, components_frame, normalize_table, packages_frame};
use cip_ingest::{IngestOptions, read_cip_ucd};
use cip_output::{OutputOptions, write_outputs};

use crate::types::{RunConfig, RunResult};

const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

fn stage_spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Reads the source export, normalizes it and writes both tables.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("run", source = %config.source.display());
    let _guard = span.enter();
    let start = Instant::now();
    let spinner = stage_spinner(config.progress);

    spinner.set_message("reading source");
    let source = read_cip_ucd(&config.source, &IngestOptions::default())
        .with_context(|| format!("read {}", config.source.display()))?;

    spinner.set_message("normalizing labels");
    let options = NormalizeOptions::default()
        .with_parallel(config.parallel)
        .with_label_column(config.label_column.clone());
    let tables = normalize_table(&source.data, &options).context("normalize source table")?;
    let mut report = tables.report.clone();
    report.source_sha256 = Some(source.sha256.clone());
    if report.has_identifier_overflows() {
        warn!(
            columns = ?report.identifier_overflows,
            "some identifiers are wider than their column"
        );
    }

    let outputs = if config.dry_run {
        info!("dry run, no tables written");
        None
    } else {
        spinner.set_message("writing tables");
        let packages = packages_frame(&tables).context("build package table")?;
        let components = components_frame(&tables).context("build component table")?;
        let output_options = OutputOptions::default().with_format(config.format);
        let paths = write_outputs(&packages, &components, &config.outdir, &output_options)
            .with_context(|| format!("write outputs to {}", config.outdir.display()))?;
        Some(paths)
    };

    if let Some(path) = &config.report_path {
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    spinner.finish_and_clear();
    info!(
        duration_ms = start.elapsed().as_millis(),
        packages = report.packages,
        "run complete"
    );

    Ok(RunResult {
        source: config.source.clone(),
        encoding: source.encoding,
        source_rows: source.data.height(),
        report,
        outputs,
        report_path: config.report_path.clone(),
    })
}
