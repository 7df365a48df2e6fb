// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliOrder, CliOutputFormat, CliRatioPolicy, CliReadMode};
