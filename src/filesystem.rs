//! Filesystem access used by the writer.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Trait for the filesystem operations the writer needs.
pub trait Filesystem {
    /// Creates a directory. An already existing directory is not an error.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates or overwrites a file with the given content.
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// Filesystem implementation on top of `std::fs`.
///
/// Files are written to a hidden sibling first and renamed into place, so a
/// failed write never leaves a truncated target behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        debug!("Creating directory: {}", path.display());
        // create_dir_all fails with AlreadyExists when the path is a file.
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let staging = staging_path(path);
        if let Err(e) = fs::write(&staging, content) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        fs::rename(&staging, path).inspect_err(|_| {
            let _ = fs::remove_file(&staging);
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
