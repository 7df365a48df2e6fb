use crate::config::WalkOptions;
use crate::error::Result;
use hashbrown::HashSet;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Turn the command-line inputs into the flat list of files to score.
///
/// Without `recursive`, inputs are taken verbatim. With it, every input is
/// walked and only regular files are kept; directories, symlinks (unless
/// `follow_links`) and special files are skipped. Walk order is by file name
/// within each directory. Duplicates keep their first position.
///
/// # Errors
/// Any walk failure (missing root, unreadable directory) is returned as
/// [`EngineError::Walk`](crate::error::EngineError::Walk).
pub fn expand_inputs(inputs: &[PathBuf], options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::with_capacity(inputs.len());
    let mut files = Vec::with_capacity(inputs.len());
    let mut push = |path: PathBuf| {
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for input in inputs {
        if options.recursive {
            walk_root(input, options, &mut push)?;
        } else {
            push(input.clone());
        }
    }

    tracing::debug!(inputs = inputs.len(), files = files.len(), "expanded inputs");
    Ok(files)
}

fn walk_root(root: &Path, options: &WalkOptions, push: &mut impl FnMut(PathBuf)) -> Result<()> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            push(entry.into_path());
        } else {
            tracing::trace!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }
    Ok(())
}
