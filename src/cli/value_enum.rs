// src/cli/value_enum.rs
use clap::ValueEnum;
use filecount_engine::options::{OrderMode, RatioPolicy};

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => Self::Table,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOrder {
    /// Lexicographic by path
    Sorted,
    /// As given on the command line
    Input,
}

impl From<CliOrder> for OrderMode {
    fn from(value: CliOrder) -> Self {
        match value {
            CliOrder::Sorted => Self::Sorted,
            CliOrder::Input => Self::Input,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliRatioPolicy {
    /// Print `-` for the undefined ratio
    Skip,
    /// Abort the run
    Fail,
}

impl From<CliRatioPolicy> for RatioPolicy {
    fn from(value: CliRatioPolicy) -> Self {
        match value {
            CliRatioPolicy::Skip => Self::Skip,
            CliRatioPolicy::Fail => Self::Fail,
        }
    }
}

/// Converted together with `--chunk-size` in `config.rs`.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReadMode {
    Chunked,
    Whole,
}
