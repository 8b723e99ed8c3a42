/// File categorisation based on file extensions.
///
/// Every file maps to exactly one [`Category`]; anything the table does not
/// know lands in [`Category::Other`]. The category also names the folder the
/// file is sorted into, directly under the sort root.
use std::fmt;
use std::path::Path;

/// Broad file categories, one destination folder each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Audio,
    Video,
    Images,
    Documents,
    Archives,
    Other,
}

impl Category {
    /// All categories, the fallback last.
    pub const ALL: [Category; 6] = [
        Self::Audio,
        Self::Video,
        Self::Images,
        Self::Documents,
        Self::Archives,
        Self::Other,
    ];

    /// Name of the destination folder under the sort root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Images => "images",
            Self::Documents => "documents",
            Self::Archives => "archives",
            Self::Other => "other",
        }
    }

    /// Lowercase extensions (without the dot) that belong to this category.
    ///
    /// Empty for [`Category::Other`], which is the fallback.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Audio => &["mp3", "ogg", "wav", "amr"],
            Self::Video => &["avi", "mp4", "mov", "mkv"],
            Self::Images => &["jpeg", "png", "jpg", "svg"],
            Self::Documents => &["doc", "docs", "txt", "pdf", "xlsx", "pptx"],
            Self::Archives => &["zip", "gz", "tar"],
            Self::Other => &[],
        }
    }

    /// Classify a file by the final extension of its name.
    ///
    /// Names without an extension, including dot-files like `.bashrc`, are
    /// [`Category::Other`].
    pub fn of_path(path: &Path) -> Category {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(categorise_extension)
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Longest extension in the table. Anything longer is `Other` without a lookup.
const MAX_EXT_LEN: usize = 8;

/// Categorise a bare extension (no leading dot), case-insensitively.
///
/// Lowercases into a fixed stack buffer instead of allocating a `String`.
pub fn categorise_extension(ext: &str) -> Category {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_EXT_LEN {
        return Category::Other;
    }

    let mut lower = [0u8; MAX_EXT_LEN];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
        Ok(s) => s,
        Err(_) => return Category::Other,
    };

    Category::ALL
        .into_iter()
        .find(|cat| cat.extensions().contains(&lower_str))
        .unwrap_or(Category::Other)
}
