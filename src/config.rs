// src/config.rs
use crate::cli::{Args, CliReadMode};
use crate::error::{AppError, Result};
use filecount_engine::config::{
    Config, ConfigBuilder, ReadOptions, ReadOptionsBuilder, WalkOptions, WalkOptionsBuilder,
};
use filecount_engine::error::EngineError;
use filecount_engine::options::ReadMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Which columns the reporter prints and how.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReportOptions {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub format: OutputFormat,
    pub total_row: bool,
}

/// Everything the binary needs: engine config plus presentation switches.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub report: ReportOptions,
    pub verbose: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let walk = walk_options_from_args(&args)?;
        let read = read_options_from_args(&args)?;

        let engine = Config::from_builder(
            ConfigBuilder::default()
                .inputs(args.paths)
                .walk(walk)
                .read(read)
                .jobs(args.jobs)
                .aggregate(args.aggregate)
                .ratio_policy(args.ratio_policy)
                .order(args.order),
        )?;

        let report = ReportOptions {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
            format: args.format.into(),
            total_row: args.total,
        };

        Ok(Self {
            engine,
            report,
            verbose: args.verbose,
        })
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    WalkOptionsBuilder::default()
        .recursive(args.recursive)
        .follow_links(args.follow)
        .max_depth(args.max_depth)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()).into())
}

fn read_options_from_args(args: &Args) -> Result<ReadOptions> {
    let mode = match args.read_mode {
        CliReadMode::Chunked => ReadMode::Chunked(args.chunk_size),
        CliReadMode::Whole => ReadMode::Whole,
    };
    ReadOptionsBuilder::default()
        .mode(mode)
        .count_trailing_word(args.count_trailing_word)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()).into())
}
