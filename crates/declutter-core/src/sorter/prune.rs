/// Empty-directory pruning, run after all moves have finished.
///
/// Depth-first: `walkdir` yields each directory only after its contents, so a
/// chain of nested empty folders disappears in one pass. The root is never a
/// candidate.
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Directories removed by one prune pass, deepest first.
#[derive(Debug, Default, Clone)]
pub struct PruneReport {
    pub removed: Vec<PathBuf>,
}

/// Remove every empty directory below `root`.
pub fn prune_empty_dirs(root: &Path) -> PruneReport {
    let mut report = PruneReport::default();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .follow_links(false);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error walking {} while pruning: {err}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_dir() || !is_empty_dir(entry.path()) {
            continue;
        }
        match fs::remove_dir(entry.path()) {
            Ok(()) => {
                info!("Empty folder {} was removed.", entry.path().display());
                report.removed.push(entry.into_path());
            }
            Err(err) => warn!(
                "Could not remove empty folder {}: {err}",
                entry.path().display()
            ),
        }
    }
    report
}

fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_empty_sibling_keeps_populated_one() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        fs::create_dir_all(a.join("b")).unwrap();
        fs::create_dir_all(a.join("c")).unwrap();
        fs::write(a.join("c").join("keep.txt"), b"x").unwrap();

        let report = prune_empty_dirs(tmp.path());

        assert_eq!(report.removed, vec![a.join("b")]);
        assert!(!a.join("b").exists());
        assert!(a.join("c").exists());
        assert!(a.exists());
    }

    #[test]
    fn nested_empty_chain_is_removed_bottom_up() {
        let tmp = TempDir::new().unwrap();
        let chain = tmp.path().join("x").join("y").join("z");
        fs::create_dir_all(&chain).unwrap();

        let report = prune_empty_dirs(tmp.path());

        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.removed[0], chain);
        assert_eq!(report.removed[2], tmp.path().join("x"));
        assert!(!tmp.path().join("x").exists());
    }

    #[test]
    fn root_is_never_removed() {
        let tmp = TempDir::new().unwrap();
        let report = prune_empty_dirs(tmp.path());
        assert!(report.removed.is_empty());
        assert!(tmp.path().exists());
    }

    #[test]
    fn missing_root_is_logged_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let report = prune_empty_dirs(&tmp.path().join("nope"));
        assert!(report.removed.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::create_dir(outside.path().join("hollow")).unwrap();
        std::os::unix::fs::symlink(outside.path(), tmp.path().join("link")).unwrap();

        let report = prune_empty_dirs(tmp.path());

        assert!(report.removed.is_empty());
        assert!(outside.path().join("hollow").is_dir());
    }
}
