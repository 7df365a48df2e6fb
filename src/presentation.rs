// src/presentation.rs
use crate::config::{AppConfig, OutputFormat, ReportOptions};
use crate::error::Result;
use filecount_engine::collector::TallySet;
use filecount_engine::{Tally, Totals};
use std::fmt::Display;
use std::path::PathBuf;

/// Lines echoed by `-v` before any file is processed: `"{index}:\t{arg}"`.
pub fn render_verbose(inputs: &[PathBuf]) -> String {
    inputs
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("{i}:\t{}\n", arg.display()))
        .collect()
}

/// Render a finished run in the configured format and order.
///
/// # Errors
/// Only serialization failures of the json/yaml formats.
pub fn render(set: &TallySet, config: &AppConfig) -> Result<String> {
    let tallies = set.ordered(config.engine.order);
    match config.report.format {
        OutputFormat::Table => {
            let totals = config.report.total_row.then(|| set.totals());
            Ok(render_table(&tallies, &config.report, totals))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&tallies)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&tallies)?),
    }
}

fn render_table(tallies: &[&Tally], report: &ReportOptions, totals: Option<Totals>) -> String {
    let mut out = String::new();
    for tally in tallies {
        push_counts(&mut out, report, tally.lines(), tally.words(), tally.chars());
        if let Some(ratios) = tally.ratios() {
            out.push_str(&format!(
                "{} {} ",
                ratio_cell(ratios.chars_per_word),
                ratio_cell(ratios.chars_per_line)
            ));
        }
        out.push_str(&format!("{}\n", tally.path().display()));
    }

    if let Some(totals) = totals {
        push_counts(&mut out, report, totals.lines, totals.words, totals.chars);
        out.push_str(&format!("TOTAL ({} files)\n", totals.files));
    }
    out
}

fn push_counts(
    out: &mut String,
    report: &ReportOptions,
    lines: impl Display,
    words: impl Display,
    chars: impl Display,
) {
    if report.lines {
        out.push_str(&format!("{lines:>5} "));
    }
    if report.words {
        out.push_str(&format!("{words:>5} "));
    }
    if report.chars {
        out.push_str(&format!("{chars:>5} "));
    }
}

fn ratio_cell(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
