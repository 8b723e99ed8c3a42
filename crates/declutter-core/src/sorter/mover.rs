/// Single-file moves with a cross-device fallback.
use crate::error::{DeclutterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Move `file` into `dest_dir`, keeping its file name.
///
/// Never overwrites: an existing target is [`DeclutterError::DestinationExists`].
/// A rename that crosses filesystems falls back to copy then delete.
/// Returns the new path of the file.
pub fn move_into(file: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| {
        DeclutterError::io(
            file,
            std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let target = dest_dir.join(name);

    if fs::symlink_metadata(&target).is_ok() {
        return Err(DeclutterError::DestinationExists(target));
    }

    match fs::rename(file, &target) {
        Ok(()) => Ok(target),
        Err(err) if err.kind() == ErrorKind::CrossesDevices => {
            copy_then_remove(file, &target)?;
            Ok(target)
        }
        Err(err) => Err(DeclutterError::io(file, err)),
    }
}

fn copy_then_remove(file: &Path, target: &Path) -> Result<()> {
    if let Err(err) = fs::copy(file, target) {
        // Leave nothing half-written behind.
        let _ = fs::remove_file(target);
        return Err(DeclutterError::io(target, err));
    }
    fs::remove_file(file).map_err(|e| DeclutterError::io(file, e))
}
