use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content and was left untouched
    Unchanged,
}

/// A translated output file
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Files whose current content already matches are not rewritten, so
    /// their modification time is preserved for downstream Pascal builds.
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() && std::fs::read(&self.path)? == self.content.as_bytes() {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
