//! Splitting a collection file into a fragment directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CollectionResult;
use crate::fragments::decompose;
use crate::layout::CollectionDir;
use crate::models::Collection;
use crate::reader::FragmentReader;
use crate::writer::FragmentWriter;

/// Options for splitting a collection.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Directory in which the collection directory is created.
    pub output_dir: PathBuf,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl SplitOptions {
    /// Create default split options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parent directory of the collection directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

/// Outcome of a split.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// The created collection directory.
    pub directory: PathBuf,
    /// Number of request items in the source collection.
    pub items: usize,
    /// Number of distinct fragment files written.
    pub files_written: usize,
}

impl SplitResult {
    /// Items whose fragment was overwritten by a later item.
    pub fn collisions(&self) -> usize {
        (self.items + 4).saturating_sub(self.files_written)
    }
}

/// Splits collections into fragment directories.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    /// Create a splitter with the given options.
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Read a collection file and split it.
    pub fn split_file(&self, path: impl AsRef<Path>) -> CollectionResult<SplitResult> {
        let collection = FragmentReader::read_collection_file(path)?;
        self.split(&collection)
    }

    /// Split an in-memory collection.
    ///
    /// Nothing is rolled back on failure: fragments written before the
    /// error stay on disk.
    pub fn split(&self, collection: &Collection) -> CollectionResult<SplitResult> {
        let fragments = decompose(collection)?;
        let dir = CollectionDir::create(&self.options.output_dir, collection.name())?;

        info!(
            "Saving {} fragments for collection {}",
            fragments.len(),
            collection.name()
        );
        let files_written = FragmentWriter::write_all(&dir, &fragments)?;

        Ok(SplitResult {
            directory: dir.root_path().to_path_buf(),
            items: collection.item.len(),
            files_written,
        })
    }
}
