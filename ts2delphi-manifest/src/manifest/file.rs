use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A ts2delphi.toml file with both raw content and parsed manifest.
///
/// Relative project paths resolve against the directory holding the file.
#[derive(Debug, Clone)]
pub struct ProjectToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ProjectToml {
    /// Open and parse a ts2delphi.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the parsed manifest for applying overrides.
    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    /// Directory containing the manifest.
    pub fn root_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Absolute-or-relative input root.
    pub fn input_dir(&self) -> PathBuf {
        self.root_dir().join(&self.manifest.project.input)
    }

    /// Absolute-or-relative output root.
    pub fn output_dir(&self) -> PathBuf {
        self.root_dir().join(&self.manifest.project.output)
    }
}
