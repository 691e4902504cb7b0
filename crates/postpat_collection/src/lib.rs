//! # postpat_collection
//!
//! Postman collection model and the fragment layout used by postpat.
//!
//! A collection file is split into a directory named after the collection
//! with one file per logical part, so collections can be reviewed and
//! merged under version control:
//!
//! - `info:collection` - name, description and schema
//! - `auth:collection` - collection level auth
//! - `event:collection` - collection level scripts
//! - `variables:collection` - collection variables
//! - `Request:<name>:<method>` - one file per request item
//!
//! ## Example
//!
//! ```rust,no_run
//! use postpat_collection::{CollectionDir, FragmentReader, SplitOptions, Splitter};
//!
//! // Split a collection export into ./My API/
//! let splitter = Splitter::new(SplitOptions::new().with_output_dir("."));
//! let result = splitter.split_file("My API.postman_collection.json").unwrap();
//!
//! // Read it back
//! let dir = CollectionDir::open(&result.directory).unwrap();
//! let collection = FragmentReader::read_collection(&dir).unwrap();
//! assert_eq!(collection.name(), "My API");
//! ```

pub mod error;
pub mod fragments;
pub mod layout;
pub mod models;
pub mod reader;
pub mod splitter;
pub mod writer;

pub use error::{CollectionError, CollectionResult};
pub use fragments::{decompose, request_fragment_name, Fragment, FragmentSet};
pub use layout::{validate_name, CollectionDir};
pub use models::*;
pub use reader::FragmentReader;
pub use splitter::{SplitOptions, SplitResult, Splitter};
pub use writer::FragmentWriter;
