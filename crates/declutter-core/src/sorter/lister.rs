/// Recursive file lister.
///
/// Each directory level reads its own entries, then fans its subdirectories
/// out onto the pool with `par_iter` and merges the owned result vectors on
/// the way back up. `par_iter` blocks until every child finishes, so a level
/// never returns before its whole subtree is listed. Rayon's work-stealing
/// deques queue the tasks, so deep trees never spawn more threads than the
/// pool holds.
///
/// Only regular files are returned. Symlinks are neither listed nor followed,
/// which also keeps the walk free of cycles.
use crate::error::{DeclutterError, Result};
use crate::model::FileEntry;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List every regular file below `root`, at any depth.
///
/// Fails only when `root` itself cannot be read. Unreadable subtrees are
/// logged and skipped.
pub fn list_files(root: &Path, pool: &ThreadPool) -> Result<Vec<FileEntry>> {
    let entries = fs::read_dir(root).map_err(|e| DeclutterError::io(root, e))?;
    let files = pool.install(|| list_entries(root, entries));
    debug!("Listed {} files under {}", files.len(), root.display());
    Ok(files)
}

fn list_dir(dir: &Path) -> Vec<FileEntry> {
    match fs::read_dir(dir) {
        Ok(entries) => list_entries(dir, entries),
        Err(err) => {
            warn!("Skipping unreadable directory {}: {err}", dir.display());
            Vec::new()
        }
    }
}

fn list_entries(dir: &Path, entries: ReadDir) -> Vec<FileEntry> {
    let mut files = Vec::new();
    let mut subdirs: Vec<PathBuf> = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        // DirEntry::file_type does not follow symlinks.
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                warn!("Skipping {}: {err}", entry.path().display());
                continue;
            }
        };

        if file_type.is_file() {
            files.push(FileEntry::new(entry.path()));
        } else if file_type.is_dir() {
            subdirs.push(entry.path());
        } else {
            debug!("Skipping non-regular entry {}", entry.path().display());
        }
    }

    let nested = subdirs
        .par_iter()
        .map(|sub| list_dir(sub))
        .reduce(Vec::new, merge);
    merge(files, nested)
}

/// Append the smaller vector onto the larger one.
fn merge(mut a: Vec<FileEntry>, mut b: Vec<FileEntry>) -> Vec<FileEntry> {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    a.append(&mut b);
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::workers::build_pool;
    use tempfile::TempDir;

    #[test]
    fn lists_nested_files_with_categories() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(tmp.path().join("top.mp3"), b"x").unwrap();
        fs::write(deep.join("deep.PDF"), b"x").unwrap();

        let pool = build_pool(2, "lister-test").unwrap();
        let mut files = list_files(tmp.path(), &pool).unwrap();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, deep.join("deep.PDF"));
        assert_eq!(files[0].category, Category::Documents);
        assert_eq!(files[1].category, Category::Audio);
    }

    #[test]
    fn empty_directories_contribute_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("x").join("y")).unwrap();

        let pool = build_pool(1, "lister-test").unwrap();
        assert!(list_files(tmp.path(), &pool).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let pool = build_pool(1, "lister-test").unwrap();
        let err = list_files(&tmp.path().join("gone"), &pool).unwrap_err();
        assert!(matches!(err, DeclutterError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("real").join("a.txt"), b"x").unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("real").join("loop")).unwrap();

        let pool = build_pool(2, "lister-test").unwrap();
        let files = list_files(tmp.path(), &pool).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn merge_keeps_every_entry() {
        let a = vec![FileEntry::new("1.txt".into())];
        let b = vec![FileEntry::new("2.txt".into()), FileEntry::new("3.txt".into())];
        assert_eq!(merge(a, b).len(), 3);
    }

    /// One unreadable subtree is skipped; its siblings are still listed.
    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir_all(tmp.path().join("open")).unwrap();
        fs::create_dir(&locked).unwrap();
        fs::write(tmp.path().join("top.txt"), b"x").unwrap();
        fs::write(tmp.path().join("open").join("song.ogg"), b"x").unwrap();
        fs::write(locked.join("secret.pdf"), b"x").unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users read through mode 000; nothing to test then.
        let privileged = fs::read_dir(&locked).is_ok();

        let pool = build_pool(2, "lister-test").unwrap();
        let result = list_files(tmp.path(), &pool);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if privileged {
            return;
        }

        let mut names: Vec<_> = result
            .unwrap()
            .into_iter()
            .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["song.ogg", "top.txt"]);
    }
}
