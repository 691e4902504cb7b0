//! Template rendering of reassembled collections.
//!
//! Output comes from a Handlebars template that writes literal JSON around
//! each value. Event scripts and variables get an id at render time; ids
//! are not part of the model. Helpers available to templates:
//!
//! - `quote value` - a complete JSON string literal for `value`
//! - `end_item index length` - `","` unless `index` is the last position
//! - `count list` - length of a list
//! - `uuid` - a fresh id from the renderer's [`IdGenerator`]

use handlebars::{
    handlebars_helper, no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output,
    RenderContext,
};
use postpat_collection::{Collection, Event, Item, Variable, SCHEMA_V2_1};
use serde::Serialize;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::ids::IdGenerator;

/// Bundled template for v2.1 collections.
pub const COLLECTION_TEMPLATE: &str = include_str!("../templates/collection.json.hbs");

/// Fixed `_postman_id` written into every rendered collection.
pub const POSTMAN_ID: &str = "00208b92-7c63-48a2-ae29-4c26bf59c41c";

const TEMPLATE_NAME: &str = "collection";

/// Separator after the element at `index` of a list of `length` elements.
pub fn end_item(index: u64, length: u64) -> &'static str {
    if length > 0 && index == length - 1 {
        ""
    } else {
        ","
    }
}

/// Quote and escape a value as a JSON string literal.
pub fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

handlebars_helper!(end_item_helper: |index: u64, length: u64| end_item(index, length));
handlebars_helper!(quote_helper: |value: str| quote(value));
handlebars_helper!(count_helper: |list: array| list.len());

/// Writes one fresh id per invocation.
struct UuidHelper<'a> {
    ids: &'a dyn IdGenerator,
}

impl HelperDef for UuidHelper<'_> {
    fn call<'reg: 'rc, 'rc>(
        &self,
        _: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        out.write(&self.ids.next_id())?;
        Ok(())
    }
}

/// What the template sees.
#[derive(Serialize)]
struct CollectionView<'a> {
    postman_id: &'static str,
    info: InfoView<'a>,
    item: &'a [Item],
    event: &'a [Event],
    variable: &'a [Variable],
}

#[derive(Serialize)]
struct InfoView<'a> {
    name: &'a str,
    description: Option<&'a str>,
    schema: &'static str,
}

impl<'a> CollectionView<'a> {
    fn new(collection: &'a Collection) -> Self {
        Self {
            postman_id: POSTMAN_ID,
            info: InfoView {
                name: &collection.info.name,
                description: collection.info.description.as_deref(),
                schema: SCHEMA_V2_1,
            },
            item: &collection.item,
            event: &collection.event,
            variable: &collection.variable,
        }
    }
}

/// Renders collections through a template.
pub struct CollectionRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> CollectionRenderer<'a> {
    /// Create a renderer using the bundled template.
    pub fn new(ids: &'a dyn IdGenerator) -> RenderResult<Self> {
        Self::with_template(ids, COLLECTION_TEMPLATE)
    }

    /// Create a renderer with a custom template.
    ///
    /// Rendering is strict: a template that references a field the
    /// collection does not have fails instead of printing nothing.
    pub fn with_template(ids: &'a dyn IdGenerator, template: &str) -> RenderResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("uuid", Box::new(UuidHelper { ids }));
        handlebars.register_helper("end_item", Box::new(end_item_helper));
        handlebars.register_helper("quote", Box::new(quote_helper));
        handlebars.register_helper("count", Box::new(count_helper));

        handlebars
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        Ok(Self { handlebars })
    }

    /// Render a collection to text.
    pub fn render(&self, collection: &Collection) -> RenderResult<String> {
        debug!(
            "Rendering collection {} with {} items",
            collection.name(),
            collection.item.len()
        );
        self.handlebars
            .render(TEMPLATE_NAME, &CollectionView::new(collection))
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}
