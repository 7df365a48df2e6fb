// crates/engine/src/lib.rs
//! Concurrent character/word/line counting.
//!
//! [`run`] wires the pipeline: input expansion, one scorer per file, the
//! optional ratio stage, and the collector.

pub mod aggregator;
pub mod byte_source;
pub mod cancel;
pub mod collector;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod scorer;

pub use filecount_shared_kernel::{Ratios, Tally, Totals};

use crate::cancel::CancelToken;
use crate::collector::TallySet;
use crate::config::Config;
use crate::error::{EngineError, Result};
use std::thread::JoinHandle;

/// Run the counting pipeline to completion.
///
/// Either every file is tallied or nothing is returned: the first failure
/// cancels the remaining scorers and becomes the error of the whole run.
///
/// # Errors
/// The first [`EngineError`] raised by input expansion, a scorer, or the ratio
/// stage.
pub fn run(config: &Config) -> Result<TallySet> {
    let paths = filesystem::expand_inputs(&config.inputs, &config.walk)?;
    let cancel = CancelToken::new();

    let (raw, watcher) = coordinator::fan_out(paths.clone(), config, &cancel)?;

    let (results, aggregator) = if config.aggregate {
        let (rx, handle) = aggregator::spawn(raw, config.channel_capacity, config.ratio_policy, &cancel)
            .inspect_err(|_| cancel.cancel())?;
        (rx, Some(handle))
    } else {
        (raw, None)
    };

    let collected = collector::collect(results, paths, &cancel);

    join(watcher)?;
    if let Some(handle) = aggregator {
        join(handle)?;
    }
    collected
}

fn join(handle: JoinHandle<()>) -> Result<()> {
    handle.join().map_err(|_| EngineError::WorkerPanicked)
}
