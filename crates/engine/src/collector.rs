use crate::cancel::CancelToken;
use crate::coordinator::ScoreResult;
use crate::error::{EngineError, Result};
use crate::options::OrderMode;
use crossbeam_channel::Receiver;
use filecount_shared_kernel::{Tally, Totals};
use hashbrown::HashMap;
use std::path::{Path, PathBuf};

/// Finished tallies keyed by path, plus the order the inputs were given in.
#[derive(Debug, Clone, Default)]
pub struct TallySet {
    tallies: HashMap<PathBuf, Tally>,
    input_order: Vec<PathBuf>,
}

impl TallySet {
    pub fn with_input_order(input_order: Vec<PathBuf>) -> Self {
        Self {
            tallies: HashMap::with_capacity(input_order.len()),
            input_order,
        }
    }

    /// Insert a tally, returning the one it replaced.
    pub fn insert(&mut self, tally: Tally) -> Option<Tally> {
        self.tallies.insert(tally.path().to_path_buf(), tally)
    }

    pub fn get(&self, path: &Path) -> Option<&Tally> {
        self.tallies.get(path)
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Tallies in reporting order.
    ///
    /// `Sorted` compares the raw path strings, not path components, so
    /// `a-b` sorts before `a/b`.
    pub fn ordered(&self, order: OrderMode) -> Vec<&Tally> {
        match order {
            OrderMode::Sorted => {
                let mut tallies: Vec<_> = self.tallies.values().collect();
                tallies.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));
                tallies
            }
            OrderMode::Input => self
                .input_order
                .iter()
                .filter_map(|path| self.tallies.get(path))
                .collect(),
        }
    }

    pub fn totals(&self) -> Totals {
        self.tallies.values().collect()
    }
}

/// Drain `results` until every sender is gone.
///
/// The first real error cancels the run and is returned once the channel has
/// closed; cancellation fallout from other tasks never replaces it.
pub fn collect(
    results: Receiver<ScoreResult>,
    input_order: Vec<PathBuf>,
    cancel: &CancelToken,
) -> Result<TallySet> {
    let mut set = TallySet::with_input_order(input_order);
    let mut first_error: Option<EngineError> = None;

    for item in results {
        match item {
            Ok(tally) => {
                set.insert(tally);
            }
            Err(err) => {
                cancel.cancel();
                let replace = first_error
                    .as_ref()
                    .is_none_or(|seen| seen.is_cancellation() && !err.is_cancellation());
                if replace {
                    first_error = Some(err);
                } else {
                    tracing::debug!(error = %err, "discarding follow-up error");
                }
            }
        }
    }

    match first_error {
        Some(err) => {
            tracing::warn!(error = %err, collected = set.len(), "run aborted");
            Err(err)
        }
        None => Ok(set),
    }
}
