//! Joining a fragment directory back into a collection file.

use std::fs;
use std::path::{Path, PathBuf};

use postpat_collection::{validate_name, CollectionDir, FragmentReader};
use tracing::info;

use crate::error::{RenderError, RenderResult};
use crate::ids::IdGenerator;
use crate::renderer::{CollectionRenderer, COLLECTION_TEMPLATE};

/// Prefix of every joined output file name.
pub const OUTPUT_PREFIX: &str = "Test-";

/// Suffix of every joined output file name.
pub const OUTPUT_SUFFIX: &str = ".postman_collection.json";

/// Output file name for a collection: `Test-<name>.postman_collection.json`.
pub fn output_file_name(name: &str) -> String {
    format!("{}{}{}", OUTPUT_PREFIX, name, OUTPUT_SUFFIX)
}

/// Options for joining a collection.
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Directory the output file is written to.
    pub output_dir: PathBuf,
    /// Template file replacing the bundled template.
    pub template: Option<PathBuf>,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            template: None,
        }
    }
}

impl JoinOptions {
    /// Create default join options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Render with a template file instead of the bundled one.
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }
}

/// Outcome of a join.
#[derive(Debug, Clone)]
pub struct JoinResult {
    /// Path of the written collection file.
    pub output_path: PathBuf,
    /// Number of items in the written collection.
    pub items: usize,
}

/// Joins fragment directories into collection files.
pub struct Joiner<'a> {
    options: JoinOptions,
    ids: &'a dyn IdGenerator,
}

impl<'a> Joiner<'a> {
    /// Create a joiner drawing fresh ids from `ids`.
    pub fn new(options: JoinOptions, ids: &'a dyn IdGenerator) -> Self {
        Self { options, ids }
    }

    /// Reassemble the collection in `directory`, render it and write the
    /// output file.
    ///
    /// The output file is only created once rendering has succeeded.
    pub fn join(&self, directory: impl AsRef<Path>) -> RenderResult<JoinResult> {
        let dir = CollectionDir::open(directory)?;
        let collection = FragmentReader::read_collection(&dir)?;
        validate_name(collection.name())?;

        let template = self.load_template()?;
        let renderer = CollectionRenderer::with_template(self.ids, &template)?;
        let rendered = renderer.render(&collection)?;

        let output_path = self
            .options
            .output_dir
            .join(output_file_name(collection.name()));
        info!("Writing collection file to {:?}", output_path);
        fs::write(&output_path, rendered).map_err(|source| RenderError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(JoinResult {
            output_path,
            items: collection.item.len(),
        })
    }

    fn load_template(&self) -> RenderResult<String> {
        match &self.options.template {
            Some(path) => fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
                path: path.clone(),
                source,
            }),
            None => Ok(COLLECTION_TEMPLATE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use tempfile::tempdir;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("Foo"), "Test-Foo.postman_collection.json");
    }

    #[test]
    fn test_join_missing_directory() {
        let temp = tempdir().unwrap();
        let ids = SequentialIds::new("id");
        let joiner = Joiner::new(JoinOptions::new().with_output_dir(temp.path()), &ids);

        let result = joiner.join(temp.path().join("missing"));
        assert!(matches!(result, Err(RenderError::Collection(_))));
    }

    #[test]
    fn test_missing_template_file() {
        let temp = tempdir().unwrap();
        let ids = SequentialIds::new("id");
        let options = JoinOptions::new().with_template(Some(temp.path().join("nope.hbs")));

        let result = Joiner::new(options, &ids).load_template();
        assert!(matches!(result, Err(RenderError::TemplateRead { .. })));
    }
}
