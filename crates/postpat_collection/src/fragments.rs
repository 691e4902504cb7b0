//! Fragment naming and the split direction.
//!
//! A collection decomposes into four fixed fragments plus one fragment per
//! request item:
//!
//! | file name                  | contents                    |
//! |----------------------------|-----------------------------|
//! | `info:collection`          | [`CollectionInfo`]          |
//! | `auth:collection`          | [`Auth`]                    |
//! | `event:collection`         | list of [`Event`]           |
//! | `variables:collection`     | list of [`Variable`]        |
//! | `Request:<name>:<method>`  | [`Item`]                    |
//!
//! [`CollectionInfo`]: crate::models::CollectionInfo
//! [`Auth`]: crate::models::Auth
//! [`Event`]: crate::models::Event
//! [`Variable`]: crate::models::Variable

use serde::Serialize;

use crate::error::{CollectionError, CollectionResult};
use crate::models::{Collection, Item};

/// File name of the info fragment.
pub const INFO_FRAGMENT: &str = "info:collection";

/// File name of the collection auth fragment.
pub const AUTH_FRAGMENT: &str = "auth:collection";

/// File name of the collection event fragment.
pub const EVENT_FRAGMENT: &str = "event:collection";

/// File name of the collection variables fragment.
pub const VARIABLES_FRAGMENT: &str = "variables:collection";

/// Leading tag of every request fragment name.
pub const REQUEST_TAG: &str = "Request";

/// Fragment name for a request item: `Request:<name>:<method>`.
///
/// Two items with the same name and method map to the same fragment.
pub fn request_fragment_name(item: &Item) -> String {
    format!("{}:{}:{}", REQUEST_TAG, item.name, item.request.method)
}

/// One named, JSON-encoded unit of a split collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub contents: Vec<u8>,
}

impl Fragment {
    fn encode<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> CollectionResult<Self> {
        let name = name.into();
        let contents = serde_json::to_vec(value).map_err(|source| CollectionError::Encode {
            name: name.clone(),
            source,
        })?;
        Ok(Self { name, contents })
    }
}

/// Every fragment of one collection, in write order.
#[derive(Debug, Clone)]
pub struct FragmentSet {
    pub info: Fragment,
    pub auth: Fragment,
    pub event: Fragment,
    pub variables: Fragment,
    /// One fragment per item, in item order. Names may repeat.
    pub requests: Vec<Fragment>,
}

impl FragmentSet {
    /// Iterate over all fragments, fixed fragments first.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        [&self.info, &self.event, &self.auth, &self.variables]
            .into_iter()
            .chain(self.requests.iter())
    }

    /// Total number of fragments, counting duplicate request names.
    pub fn len(&self) -> usize {
        4 + self.requests.len()
    }

    /// A fragment set is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Decompose a collection into its fragments.
pub fn decompose(collection: &Collection) -> CollectionResult<FragmentSet> {
    let requests = collection
        .item
        .iter()
        .map(|item| Fragment::encode(request_fragment_name(item), item))
        .collect::<CollectionResult<Vec<_>>>()?;

    Ok(FragmentSet {
        info: Fragment::encode(INFO_FRAGMENT, &collection.info)?,
        auth: Fragment::encode(AUTH_FRAGMENT, &collection.auth)?,
        event: Fragment::encode(EVENT_FRAGMENT, &collection.event)?,
        variables: Fragment::encode(VARIABLES_FRAGMENT, &collection.variable)?,
        requests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CollectionInfo, Request, Url};

    fn item(name: &str, method: &str) -> Item {
        Item {
            name: name.to_string(),
            request: Request {
                method: method.to_string(),
                url: Url::raw(format!("http://localhost/{}", name)),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_request_fragment_name() {
        assert_eq!(request_fragment_name(&item("Ping", "GET")), "Request:Ping:GET");
    }

    #[test]
    fn test_decompose_empty_collection() {
        let collection = Collection {
            info: CollectionInfo {
                name: "Empty".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let set = decompose(&collection).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.requests.is_empty());
        assert_eq!(set.event.contents, b"[]");
        assert_eq!(set.variables.contents, b"[]");

        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![INFO_FRAGMENT, EVENT_FRAGMENT, AUTH_FRAGMENT, VARIABLES_FRAGMENT]
        );
    }

    #[test]
    fn test_decompose_keeps_item_order_and_duplicates() {
        let collection = Collection {
            item: vec![item("B", "GET"), item("A", "POST"), item("B", "GET")],
            ..Default::default()
        };

        let set = decompose(&collection).unwrap();
        let names: Vec<_> = set.requests.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Request:B:GET", "Request:A:POST", "Request:B:GET"]);

        let decoded: Item = serde_json::from_slice(&set.requests[1].contents).unwrap();
        assert_eq!(decoded, collection.item[1]);
    }
}
