//! # postpat_render
//!
//! Turns a split collection directory back into a single Postman
//! collection file.
//!
//! Rendering goes through a Handlebars template rather than a serializer:
//! every event script and variable receives a fresh id from an injected
//! [`IdGenerator`], and the `_postman_id` and schema URI are fixed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use postpat_render::{JoinOptions, Joiner, UuidGenerator};
//!
//! let ids = UuidGenerator;
//! let joiner = Joiner::new(JoinOptions::new(), &ids);
//! let result = joiner.join("My API").unwrap();
//! println!("wrote {:?}", result.output_path);
//! ```

pub mod error;
pub mod ids;
pub mod join;
pub mod renderer;

pub use error::{RenderError, RenderResult};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use join::{output_file_name, JoinOptions, JoinResult, Joiner};
pub use renderer::{end_item, quote, CollectionRenderer, COLLECTION_TEMPLATE, POSTMAN_ID};
