//! Filesystem collaborator used by the artifact store.

use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// The filesystem operations the cache depends on.
///
/// Implemented over `std::fs` by [`StdFileSystem`]; hosts with their own filesystem
/// abstraction (or tests) provide another implementation.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn delete(&self, path: &Path) -> io::Result<()>;

    /// Modification time in whole seconds since the Unix epoch.
    fn modified_time(&self, path: &Path) -> io::Result<i64>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn modified_time(&self, path: &Path) -> io::Result<i64> {
        let modified = std::fs::metadata(path)?.modified()?;
        // Times before the epoch are clamped to it.
        let seconds = modified.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
        i64::try_from(seconds).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        (**self).delete(path)
    }

    fn modified_time(&self, path: &Path) -> io::Result<i64> {
        (**self).modified_time(path)
    }
}
