//! I/O boundary
//!
//! Where save bytes come from and where they go. The codec modules never
//! touch the filesystem; only these collaborators do.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SaveError};

/// Supplies a save's file name and raw bytes
pub trait ByteSource {
    fn read(&mut self) -> Result<(String, Vec<u8>)>;
}

/// Persists exported bytes under a file name
pub trait ByteSink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Reads a save from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn read(&mut self) -> Result<(String, Vec<u8>)> {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                SaveError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} does not name a file", self.path.display()),
                ))
            })?;

        let bytes = fs::read(&self.path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());

        Ok((name, bytes))
    }
}

/// Writes a save into a directory, optionally keeping a `.bak` of the old file
///
/// The `.bak` is only created when none exists yet, so it keeps the file as
/// it was before the first edit.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    backup: bool,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, backup: bool) -> Self {
        Self {
            dir: dir.into(),
            backup,
        }
    }

    /// Sink for a save read from `source`: the configured output directory,
    /// or the source's own directory when none is set
    pub fn from_config(config: &Config, source: &Path) -> Self {
        let dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        Self::new(dir, config.backup)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the pristine copy of `name` is kept
    pub fn backup_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.bak", name))
    }

    /// Path a save named `name` is written to
    pub fn target(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ByteSink for FileSink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.target(name);

        if self.backup && target.exists() && !self.backup_path(name).exists() {
            let backup = self.backup_path(name);
            fs::copy(&target, &backup)?;
            tracing::info!("Backed up {} to {}", target.display(), backup.display());
        }

        fs::write(&target, bytes)?;
        tracing::info!("Wrote {} bytes to {}", bytes.len(), target.display());
        Ok(())
    }
}

/// In-memory sink collecting every write, newest last
impl ByteSink for Vec<(String, Vec<u8>)> {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
