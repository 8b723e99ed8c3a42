/// Sorter module — moves every file under a root into category folders.
///
/// A run has three phases, each finishing before the next starts:
/// - **List:** [`lister::list_files`] walks the tree on a bounded pool.
/// - **Move:** one pool task per misplaced file, joined by a rayon scope.
/// - **Prune:** [`prune::prune_empty_dirs`] removes folders emptied by the moves.
///
/// Failed moves are logged and recorded in the [`SortReport`]; they never stop
/// sibling moves.
pub mod lister;
pub mod mover;
pub mod prune;

use crate::error::{DeclutterError, Result};
use crate::model::Category;
use crate::workers::build_pool;
use parking_lot::Mutex;
use prune::PruneReport;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// A file that could not be moved, with the reason.
#[derive(Debug, Clone)]
pub struct MoveFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one [`sort_folder`] run.
#[derive(Debug, Clone, Default)]
pub struct SortReport {
    /// Canonical root the run operated on.
    pub root: PathBuf,
    /// Regular files found anywhere under the root.
    pub files_seen: usize,
    /// Files not already in their category folder.
    pub scheduled: usize,
    /// Moves that completed.
    pub moved: usize,
    pub failed: Vec<MoveFailure>,
    pub elapsed: Duration,
}

impl SortReport {
    /// True when the run moved nothing.
    pub fn nothing_to_sort(&self) -> bool {
        self.moved == 0
    }
}

/// Create `root/<category>` for every category. Existing folders are fine.
///
/// Returns the categories whose folder could not be created (for example a
/// regular file already holds the name), each with the reason. Those
/// categories are skipped; the rest of the run goes ahead.
pub fn ensure_category_dirs(root: &Path) -> HashMap<Category, String> {
    let mut unavailable = HashMap::new();
    for category in Category::ALL {
        let dir = root.join(category.dir_name());
        if let Err(e) = fs::create_dir_all(&dir) {
            let err = DeclutterError::io(&dir, e);
            warn!("Skipping category {category}: {err}");
            unavailable.insert(category, err.to_string());
        }
    }
    unavailable
}

/// Sort every file under `root` into its category folder.
///
/// `workers` bounds the I/O pool used for listing and moving (`0` = one per
/// core). Errors only when the root cannot be resolved or read. Files whose
/// category folder cannot be created are recorded as failed moves.
pub fn sort_folder(root: &Path, workers: usize) -> Result<SortReport> {
    let start = Instant::now();
    let root = fs::canonicalize(root).map_err(|e| DeclutterError::io(root, e))?;
    let pool = build_pool(workers, "declutter-io")?;

    let files = lister::list_files(&root, &pool)?;
    let unavailable = ensure_category_dirs(&root);

    let mut report = SortReport {
        root: root.clone(),
        files_seen: files.len(),
        ..SortReport::default()
    };
    let outcome = Mutex::new((0usize, Vec::<MoveFailure>::new()));
    // Target paths already handed to a task. Two same-named files bound for
    // one folder would otherwise race past the existence check in `move_into`.
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    // The scope is the completion barrier: it returns only after every
    // spawned move has finished.
    pool.scope(|s| {
        for entry in files.iter().filter(|entry| !entry.is_sorted(&root)) {
            report.scheduled += 1;
            let dest = entry.destination_dir(&root);
            if let Some(reason) = unavailable.get(&entry.category) {
                warn!("Could not move {}: {reason}", entry.path.display());
                outcome.lock().1.push(MoveFailure {
                    path: entry.path.clone(),
                    reason: reason.clone(),
                });
                continue;
            }
            if let Some(name) = entry.path.file_name() {
                let target = dest.join(name);
                if !claimed.insert(target.clone()) {
                    let err = DeclutterError::DestinationExists(target);
                    warn!("Could not move {}: {err}", entry.path.display());
                    outcome.lock().1.push(MoveFailure {
                        path: entry.path.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            }
            let outcome = &outcome;
            s.spawn(move |_| match mover::move_into(&entry.path, &dest) {
                Ok(_) => {
                    info!(
                        "Moved file {} to folder {}",
                        entry.path.display(),
                        dest.display()
                    );
                    outcome.lock().0 += 1;
                }
                Err(err) => {
                    warn!("Could not move {}: {err}", entry.path.display());
                    outcome.lock().1.push(MoveFailure {
                        path: entry.path.clone(),
                        reason: err.to_string(),
                    });
                }
            });
        }
    });

    let (moved, failed) = outcome.into_inner();
    report.moved = moved;
    report.failed = failed;
    report.elapsed = start.elapsed();

    info!(
        "Total execution time: {:.2} seconds",
        report.elapsed.as_secs_f64()
    );
    if report.nothing_to_sort() {
        info!("Nothing to sort. All files are already sorted.");
    }
    Ok(report)
}

/// Sort `root`, then prune the folders the moves left empty.
///
/// Pruning starts only after [`sort_folder`] has returned, so no directory is
/// checked for emptiness while a move out of it is still in flight.
pub fn sort_and_prune(root: &Path, workers: usize) -> Result<(SortReport, PruneReport)> {
    let report = sort_folder(root, workers)?;
    let pruned = prune::prune_empty_dirs(&report.root);
    Ok((report, pruned))
}
