// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod tally;

pub use counts::{CharCount, LineCount, WordCount};
pub use tally::{Ratios, Tally, Totals};
