//! Reading collections and fragments.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{CollectionError, CollectionResult};
use crate::fragments::{AUTH_FRAGMENT, EVENT_FRAGMENT, INFO_FRAGMENT, VARIABLES_FRAGMENT};
use crate::layout::CollectionDir;
use crate::models::{Auth, Collection, CollectionInfo, Event, Item, Variable};

/// Reader for collection files and fragment directories.
pub struct FragmentReader;

impl FragmentReader {
    /// Read and decode a complete collection file.
    pub fn read_collection_file(path: impl AsRef<Path>) -> CollectionResult<Collection> {
        let path = path.as_ref();
        info!("Reading collection file {:?}", path);

        let bytes = Self::read_bytes(path)?;
        Self::decode(path, &bytes)
    }

    /// Reassemble a collection from its fragment directory.
    ///
    /// The info, auth, event and variables fragments are required. Request
    /// fragments that cannot be read or parsed are replaced by an empty
    /// item so the item count always matches the file count.
    pub fn read_collection(dir: &CollectionDir) -> CollectionResult<Collection> {
        info!("Sourcing collection from {:?}", dir.root_path());

        let info = Self::read_info(dir)?;
        let auth = Self::read_auth(dir)?;
        let events = Self::read_events(dir)?;
        let variables = Self::read_variables(dir)?;
        let items = Self::read_items(dir)?;

        debug!(
            "Reassembled {} items, {} events, {} variables",
            items.len(),
            events.len(),
            variables.len()
        );
        Ok(Collection::from_parts(info, auth, events, variables, items))
    }

    /// Read the info fragment.
    pub fn read_info(dir: &CollectionDir) -> CollectionResult<CollectionInfo> {
        let path = dir.fragment_path(INFO_FRAGMENT);
        Self::decode(&path, &Self::read_bytes(&path)?)
    }

    /// Read the collection auth fragment.
    pub fn read_auth(dir: &CollectionDir) -> CollectionResult<Auth> {
        let path = dir.fragment_path(AUTH_FRAGMENT);
        Self::decode(&path, &Self::read_bytes(&path)?)
    }

    /// Read the collection event fragment.
    pub fn read_events(dir: &CollectionDir) -> CollectionResult<Vec<Event>> {
        let path = dir.fragment_path(EVENT_FRAGMENT);
        Self::decode_list(&path, &Self::read_bytes(&path)?)
    }

    /// Read the collection variables fragment.
    pub fn read_variables(dir: &CollectionDir) -> CollectionResult<Vec<Variable>> {
        let path = dir.fragment_path(VARIABLES_FRAGMENT);
        Self::decode_list(&path, &Self::read_bytes(&path)?)
    }

    /// Read every request fragment in file name order.
    pub fn read_items(dir: &CollectionDir) -> CollectionResult<Vec<Item>> {
        let paths = dir.request_fragment_paths()?;
        let items = paths
            .iter()
            .map(|path| match Self::read_item(path) {
                Ok(item) => item,
                Err(e) => {
                    warn!("{}; leaving an empty item in its place", e);
                    Item::default()
                }
            })
            .collect();

        Ok(items)
    }

    /// Read a single request fragment.
    pub fn read_item(path: impl AsRef<Path>) -> CollectionResult<Item> {
        let path = path.as_ref();
        debug!("Reading request fragment {:?}", path);
        Self::decode(path, &Self::read_bytes(path)?)
    }

    fn read_bytes(path: &Path) -> CollectionResult<Vec<u8>> {
        fs::read(path).map_err(|source| CollectionError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn decode<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> CollectionResult<T> {
        serde_json::from_slice(bytes).map_err(|source| CollectionError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a list fragment. An empty file or `null` is an empty list.
    fn decode_list<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> CollectionResult<Vec<T>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let list: Option<Vec<T>> = Self::decode(path, bytes)?;
        Ok(list.unwrap_or_default())
    }
}
