//! Filesystem helpers shared by the embedders.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::error::EmbedError;

/// Default cap on the size of an asset read into memory.
pub const MAX_ASSET_BYTES: u64 = 256 * 1024 * 1024; // 256 MiB

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>, EmbedError> {
    let metadata = fs::metadata(path).map_err(EmbedError::io(path))?;
    let len = metadata.len();
    if len > max_bytes {
        return Err(EmbedError::InputTooLarge {
            path: path.to_path_buf(),
            len,
            max: max_bytes,
        });
    }
    fs::read(path).map_err(EmbedError::io(path))
}

/// Replace `path` with whatever `emit` writes.
///
/// Output goes to a temporary file next to `path` and is renamed over it only
/// once `emit` has succeeded and the buffer is flushed. On any error the
/// temporary file is dropped and an existing `path` is left untouched.
///
/// A symlinked `path` is written through: its target is replaced and the
/// link stays. The header keeps the mode of the file it replaces; a new
/// header gets `0666` minus the umask.
pub fn write_atomic<F>(path: &Path, emit: F) -> Result<(), EmbedError>
where
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let target = resolve_target(path);
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let tmp = create_temp(dir).map_err(EmbedError::io(dir))?;
    if let Ok(existing) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(EmbedError::io(tmp.path()))?;
    }

    {
        let mut writer = BufWriter::new(tmp.as_file());
        emit(&mut writer).map_err(EmbedError::io(path))?;
        writer.flush().map_err(EmbedError::io(path))?;
    }

    tmp.persist(&target).map_err(|e| EmbedError::Io {
        path: target.clone(),
        source: e.error,
    })?;

    Ok(())
}

/// Compare `expected` against the current contents of `path`.
pub fn check_contents(path: &Path, expected: &[u8]) -> Result<(), EmbedError> {
    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist yet", path.display());
            return Err(EmbedError::OutOfSync {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(EmbedError::io(path)(e)),
    };

    if existing != expected {
        return Err(EmbedError::OutOfSync {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Follow `path` through any symlinks; a path that does not resolve (new
/// file, dangling link) is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

// Temp files default to 0600. Ask for 0666 and let open(2) apply the umask.
#[cfg(unix)]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
