//! Size-rotated line file.
//!
//! Trace export appends one JSON document per line. Once the file grows past
//! `max_bytes` it is renamed to `<name>.<utc timestamp>` and a fresh file is
//! started; only the newest `keep` backups survive.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated backups to keep.
pub const DEFAULT_KEEP: usize = 2;

/// Appends lines to a file, rotating it by size.
///
/// The handle is opened lazily and guarded by a mutex, so one instance can be
/// shared by the exporter across threads.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotating, opening or writing the file, or an
    /// `Other` error if the lock was poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let size = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if size > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "trace path has no file name"))?;

        fs::rename(&self.path, self.path.with_file_name(format!("{file_name}.{stamp}")))?;
        self.prune_backups(file_name)
    }

    /// Deletes all but the newest `keep` backups.
    ///
    /// Backup names embed a sortable timestamp, so lexical order is age order.
    fn prune_backups(&self, file_name: &str) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };

        let prefix = format!("{file_name}.");
        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        backups.sort();
        let excess = backups.len().saturating_sub(self.keep);
        for old in backups.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&old) {
                tracing::debug!(path = %old.display(), error = %e, "failed to prune trace backup");
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}
