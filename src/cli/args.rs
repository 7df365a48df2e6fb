// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use filecount_engine::options::DEFAULT_CHUNK_SIZE;

use super::value_enum::{CliOrder, CliOutputFormat, CliRatioPolicy, CliReadMode};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "filecount",
    version = crate::VERSION,
    about = "Count characters, words and lines across files, one concurrent task per file"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print the character (byte) count
    #[arg(short = 'c', long = "chars", help_heading = "Fields")]
    pub chars: bool,

    /// Print the word count
    #[arg(short = 'w', long = "words", help_heading = "Fields")]
    pub words: bool,

    /// Print the line count
    #[arg(short = 'l', long = "lines", help_heading = "Fields")]
    pub lines: bool,

    /// Print each argument's index and value before processing
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Walk directory arguments recursively, scoring regular files only
    #[arg(short = 'r', long, help_heading = "Input")]
    pub recursive: bool,

    /// Follow symbolic links while walking
    #[arg(long, requires = "recursive", help_heading = "Input")]
    pub follow: bool,

    /// Maximum walk depth (0 = the argument itself)
    #[arg(long, requires = "recursive", help_heading = "Input")]
    pub max_depth: Option<usize>,

    /// How file contents are read
    #[arg(long, value_enum, default_value = "chunked", help_heading = "Reading")]
    pub read_mode: CliReadMode,

    /// Chunk size in bytes for `--read-mode chunked`
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, help_heading = "Reading")]
    pub chunk_size: usize,

    /// Count a final word that is not followed by whitespace
    #[arg(long, help_heading = "Reading")]
    pub count_trailing_word: bool,

    /// Maximum number of files scored at once (default: one thread per file)
    #[arg(short = 'j', long, help_heading = "Pipeline")]
    pub jobs: Option<usize>,

    /// Derive chars-per-word and chars-per-line ratios
    #[arg(short = 'a', long, help_heading = "Pipeline")]
    pub aggregate: bool,

    /// What to do when a ratio's divisor is zero
    #[arg(long, value_enum, default_value = "skip", help_heading = "Pipeline")]
    pub ratio_policy: CliRatioPolicy,

    /// Output row order
    #[arg(long, value_enum, default_value = "sorted", help_heading = "Output")]
    pub order: CliOrder,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Append a TOTAL row (table format)
    #[arg(long, help_heading = "Output")]
    pub total: bool,

    /// Files to count (directories need --recursive)
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags_combine() {
        let args = Args::try_parse_from(["filecount", "-lwc", "-v", "a.txt", "b.txt"]).unwrap();
        assert!(args.lines && args.words && args.chars && args.verbose);
        assert_eq!(args.paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn paths_are_required() {
        assert!(Args::try_parse_from(["filecount", "-l"]).is_err());
    }

    #[test]
    fn follow_requires_recursive() {
        assert!(Args::try_parse_from(["filecount", "--follow", "dir"]).is_err());
        assert!(Args::try_parse_from(["filecount", "-r", "--follow", "dir"]).is_ok());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
