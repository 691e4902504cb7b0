//! On-disk layout of a split collection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{CollectionError, CollectionResult};
use crate::fragments::REQUEST_TAG;

/// A directory holding the fragments of one collection.
#[derive(Debug, Clone)]
pub struct CollectionDir {
    root_path: PathBuf,
}

impl CollectionDir {
    /// Create the fragment directory for `name` under `parent`.
    ///
    /// The directory is created world-writable on unix. Fails if it
    /// already exists.
    pub fn create(parent: impl AsRef<Path>, name: &str) -> CollectionResult<Self> {
        validate_name(name)?;
        let root_path = parent.as_ref().join(name);

        if root_path.exists() {
            return Err(CollectionError::AlreadyExists(root_path));
        }

        info!("Creating collection directory {:?}", root_path);
        create_dir(&root_path).map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => CollectionError::AlreadyExists(root_path.clone()),
            _ => CollectionError::Write {
                path: root_path.clone(),
                source,
            },
        })?;

        Ok(Self { root_path })
    }

    /// Open an existing fragment directory.
    pub fn open(path: impl AsRef<Path>) -> CollectionResult<Self> {
        let root_path = path.as_ref().to_path_buf();

        if !root_path.is_dir() {
            return Err(CollectionError::NotFound(root_path));
        }

        Ok(Self { root_path })
    }

    /// Get the directory path.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Path of the fragment with the given file name.
    pub fn fragment_path(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }

    /// Request fragment files, sorted by file name.
    pub fn request_fragment_paths(&self) -> CollectionResult<Vec<PathBuf>> {
        let pattern = format!(
            "{}/{}:*",
            glob::Pattern::escape(&self.root_path.to_string_lossy()),
            REQUEST_TAG
        );
        debug!("Searching for request fragments with {}", pattern);

        let mut paths = Vec::new();
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => warn!("Skipping unreadable entry {:?}: {}", e.path(), e.error()),
            }
        }

        Ok(paths)
    }
}

/// Check that a collection name can serve as a directory name.
pub fn validate_name(name: &str) -> CollectionResult<()> {
    if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CollectionError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(unix)]
fn create_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(0o777).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir(path)
}
