//! Writing fragments to a collection directory.

use std::fs;

use tracing::{debug, warn};

use crate::error::{CollectionError, CollectionResult};
use crate::fragments::{Fragment, FragmentSet};
use crate::layout::CollectionDir;

/// Writer for fragment files.
pub struct FragmentWriter;

impl FragmentWriter {
    /// Write one fragment, replacing any file of the same name.
    pub fn write_fragment(dir: &CollectionDir, fragment: &Fragment) -> CollectionResult<()> {
        let path = dir.fragment_path(&fragment.name);
        if path.exists() {
            warn!(
                "Fragment {} already written; the later item replaces it",
                fragment.name
            );
        }
        debug!("Writing fragment to {:?}", path);

        fs::write(&path, &fragment.contents).map_err(|source| CollectionError::Write { path, source })
    }

    /// Write every fragment of a set in order. Stops at the first failure.
    ///
    /// Returns the number of distinct files on disk afterwards.
    pub fn write_all(dir: &CollectionDir, fragments: &FragmentSet) -> CollectionResult<usize> {
        let mut written = std::collections::BTreeSet::new();
        for fragment in fragments.iter() {
            Self::write_fragment(dir, fragment)?;
            written.insert(fragment.name.as_str());
        }
        Ok(written.len())
    }
}
