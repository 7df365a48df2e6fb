use crate::cancel::CancelToken;
use crate::config::{Config, ReadOptions};
use crate::error::{EngineError, Result};
use crate::scorer::score_file;
use crossbeam_channel::{Receiver, Sender};
use filecount_shared_kernel::Tally;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

pub type ScoreResult = Result<Tally>;

/// Launch one scorer per path and return the results channel.
///
/// The returned watcher thread waits until every scorer has finished, then
/// drops the last sender so the receiver's iteration ends. With
/// `config.jobs == None` each path gets its own OS thread; otherwise the
/// scorers share a rayon pool of that many threads.
///
/// # Errors
/// Fails only if the worker pool or the watcher thread cannot be created.
pub fn fan_out(
    paths: Vec<PathBuf>,
    config: &Config,
    cancel: &CancelToken,
) -> Result<(Receiver<ScoreResult>, JoinHandle<()>)> {
    let (tx, rx) = crossbeam_channel::bounded(config.channel_capacity);

    let pool = config
        .jobs
        .map(|jobs| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .thread_name(|i| format!("filecount-scorer-{i}"))
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))
        })
        .transpose()?;

    let read = config.read.clone();
    let cancel = cancel.clone();

    let watcher = thread::Builder::new()
        .name("filecount-watcher".into())
        .spawn(move || {
            let jobs = pool.as_ref().map(rayon::ThreadPool::current_num_threads);
            tracing::debug!(files = paths.len(), ?jobs, "fan-out");
            match pool {
                Some(pool) => score_on_pool(&pool, &paths, &read, &cancel, &tx),
                None => score_unbounded(&paths, &read, &cancel, &tx),
            }
            // Every scorer has returned; closing the channel releases the drain loop.
            drop(tx);
            tracing::debug!(files = paths.len(), "all scorers finished");
        })
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    Ok((rx, watcher))
}

fn score_unbounded(
    paths: &[PathBuf],
    read: &ReadOptions,
    cancel: &CancelToken,
    tx: &Sender<ScoreResult>,
) {
    thread::scope(|s| {
        for path in paths {
            let spawned = thread::Builder::new()
                .name(format!("score:{}", path.display()))
                .spawn_scoped(s, move || score_and_send(path, read, cancel, tx));
            if let Err(e) = spawned {
                cancel.cancel();
                let _ = tx.send(Err(EngineError::ThreadPool(e.to_string())));
                break;
            }
        }
    });
}

fn score_on_pool(
    pool: &rayon::ThreadPool,
    paths: &[PathBuf],
    read: &ReadOptions,
    cancel: &CancelToken,
    tx: &Sender<ScoreResult>,
) {
    pool.scope(|s| {
        for path in paths {
            s.spawn(move |_| score_and_send(path, read, cancel, tx));
        }
    });
}

fn score_and_send(path: &Path, read: &ReadOptions, cancel: &CancelToken, tx: &Sender<ScoreResult>) {
    let result = if cancel.is_cancelled() {
        Err(EngineError::Cancelled {
            path: path.to_path_buf(),
        })
    } else {
        score_file(path, read, cancel)
    };

    if let Err(err) = &result
        && !err.is_cancellation()
    {
        tracing::debug!(path = %path.display(), error = %err, "scorer failed; cancelling run");
        cancel.cancel();
    }

    // A closed receiver means the run is already being torn down.
    let _ = tx.send(result);
}
