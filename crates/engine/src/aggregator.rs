use crate::cancel::CancelToken;
use crate::coordinator::ScoreResult;
use crate::error::{EngineError, Result};
use crate::options::{RatioKind, RatioPolicy};
use crossbeam_channel::Receiver;
use filecount_shared_kernel::{Ratios, Tally};
use std::path::Path;
use std::thread::{self, JoinHandle};

/// Attach `chars / words` and `chars / lines` (truncating) to a tally.
///
/// # Errors
/// With [`RatioPolicy::Fail`], a zero divisor yields [`EngineError::ZeroDivision`].
pub fn derive_ratios(tally: Tally, policy: RatioPolicy) -> Result<Tally> {
    let chars = tally.chars().value();
    let ratios = Ratios {
        chars_per_word: ratio(
            chars,
            tally.words().value(),
            policy,
            tally.path(),
            RatioKind::CharsPerWord,
        )?,
        chars_per_line: ratio(
            chars,
            tally.lines().value(),
            policy,
            tally.path(),
            RatioKind::CharsPerLine,
        )?,
    };
    Ok(tally.with_ratios(ratios))
}

fn ratio(
    chars: usize,
    divisor: usize,
    policy: RatioPolicy,
    path: &Path,
    kind: RatioKind,
) -> Result<Option<usize>> {
    match (chars.checked_div(divisor), policy) {
        (Some(value), _) => Ok(Some(value)),
        (None, RatioPolicy::Skip) => Ok(None),
        (None, RatioPolicy::Fail) => Err(EngineError::ZeroDivision {
            path: path.to_path_buf(),
            ratio: kind,
        }),
    }
}

/// Second pipeline stage: re-emit every raw result with ratios attached.
///
/// Errors from upstream pass through untouched. A ratio failure raises
/// `cancel` like any scorer failure would.
pub fn spawn(
    raw: Receiver<ScoreResult>,
    capacity: usize,
    policy: RatioPolicy,
    cancel: &CancelToken,
) -> Result<(Receiver<ScoreResult>, JoinHandle<()>)> {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    let cancel = cancel.clone();

    let handle = thread::Builder::new()
        .name("filecount-aggregator".into())
        .spawn(move || {
            for item in raw {
                let derived = item.and_then(|tally| derive_ratios(tally, policy));
                if let Err(err) = &derived
                    && !err.is_cancellation()
                {
                    cancel.cancel();
                }
                if tx.send(derived).is_err() {
                    break;
                }
            }
        })
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    Ok((rx, handle))
}
