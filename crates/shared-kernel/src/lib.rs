// crates/shared-kernel/src/lib.rs
//! Value objects shared by the `filecount` engine and CLI.

pub mod value_objects;

pub use value_objects::{CharCount, LineCount, Ratios, Tally, Totals, WordCount};
