//! In-memory attribute store

use super::{strip_line_terminator, AttributeStore};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    failing: HashSet<PathBuf>,
    reads: usize,
    writes: usize,
}

/// [`AttributeStore`] that keeps attribute files in a map
///
/// Useful for exercising identification and backlight logic without real
/// hardware. Missing files read as `NotFound`; paths registered with
/// [`MemoryStore::fail_on`] fail every access. Read and write calls are
/// counted, including failed ones.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`MemoryStore::insert`]
    pub fn with_attribute(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Set the content of an attribute file
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.lock().files.insert(path.into(), content.into());
    }

    /// Raw content of an attribute file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Make every read and write of `path` fail
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.lock().failing.insert(path.into());
    }

    /// Number of read calls seen so far
    pub fn reads(&self) -> usize {
        self.lock().reads
    }

    /// Number of write calls seen so far
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn injected_failure(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::Other,
        format!("injected failure on {}", path.display()),
    )
}

impl AttributeStore for MemoryStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        let mut inner = self.lock();
        inner.reads += 1;

        if inner.failing.contains(path) {
            return Err(injected_failure(path));
        }

        match inner.files.get(path) {
            Some(content) => {
                let first = content.split_inclusive('\n').next().unwrap_or("");
                Ok(strip_line_terminator(first).to_string())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut inner = self.lock();
        inner.writes += 1;

        if inner.failing.contains(path) {
            return Err(injected_failure(path));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
