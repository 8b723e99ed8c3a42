/// A regular file found by the lister, with its category resolved once.
use super::category::Category;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the file as discovered under the walk root.
    pub path: PathBuf,
    /// Category computed from the file name at listing time.
    pub category: Category,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let category = Category::of_path(&path);
        Self { path, category }
    }

    /// The folder this file should end up in, given the sort root.
    pub fn destination_dir(&self, root: &Path) -> PathBuf {
        root.join(self.category.dir_name())
    }

    /// Whether the file already sits directly in its destination folder.
    ///
    /// Only the immediate parent is compared, so `root/other/x/y.bin` counts
    /// as unsorted and is moved up into `root/other`.
    pub fn is_sorted(&self, root: &Path) -> bool {
        self.path.parent() == Some(self.destination_dir(root).as_path())
    }
}
