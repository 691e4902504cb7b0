//! Data models for Postman collections.
//!
//! Only the fields the split/join round trip cares about are modeled.
//! Every field is optional on input and decodes to its zero value when
//! missing, and a JSON `null` in place of a list decodes to an empty list.

use serde::{Deserialize, Deserializer, Serialize};

/// Schema URI of the only collection format postpat targets.
pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root of a Postman collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub info: CollectionInfo,
    #[serde(deserialize_with = "nullable")]
    pub item: Vec<Item>,
    #[serde(deserialize_with = "nullable")]
    pub auth: Auth,
    #[serde(deserialize_with = "nullable")]
    pub event: Vec<Event>,
    #[serde(deserialize_with = "nullable")]
    pub variable: Vec<Variable>,
}

impl Collection {
    /// Assemble a collection from its decoded fragments.
    pub fn from_parts(
        info: CollectionInfo,
        auth: Auth,
        event: Vec<Event>,
        variable: Vec<Variable>,
        item: Vec<Item>,
    ) -> Self {
        Self {
            info,
            item,
            auth,
            event,
            variable,
        }
    }

    /// Collection name, used for the fragment directory and output file.
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// Collection name, description and schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: String,
}

/// A single request entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub event: Vec<Event>,
    #[serde(deserialize_with = "nullable")]
    pub request: Request,
}

/// The HTTP request of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "nullable")]
    pub auth: Auth,
    pub method: String,
    #[serde(deserialize_with = "nullable")]
    pub header: Vec<KeyValue>,
    #[serde(deserialize_with = "nullable")]
    pub body: Body,
    #[serde(deserialize_with = "nullable")]
    pub url: Url,
}

/// Authentication settings, shared by collections and requests.
///
/// Only the list matching `type` is expected to be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth {
    #[serde(rename = "type")]
    pub auth_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub basic: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub bearer: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub digest: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub oauth1: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub oauth2: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub hawk: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub awsv4: Vec<Variable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub ntlm: Vec<Variable>,
}

impl Auth {
    /// Entries of the mechanism named by `type`.
    ///
    /// Returns an empty slice for `noauth`, an empty type, or a mechanism
    /// postpat does not model.
    pub fn entries(&self) -> &[Variable] {
        match self.auth_type.as_str() {
            "basic" => &self.basic,
            "bearer" => &self.bearer,
            "digest" => &self.digest,
            "oauth1" => &self.oauth1,
            "oauth2" => &self.oauth2,
            "hawk" => &self.hawk,
            "awsv4" => &self.awsv4,
            "ntlm" => &self.ntlm,
            _ => &[],
        }
    }
}

/// A lifecycle hook such as `prerequest` or `test`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub listen: String,
    #[serde(deserialize_with = "nullable")]
    pub script: Script,
}

/// Script lines attached to an event. Lines are opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(deserialize_with = "nullable")]
    pub exec: Vec<String>,
}

/// A collection variable, also used for auth and form parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub var_type: String,
}

impl Variable {
    /// Create a string-typed variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            var_type: "string".to_string(),
        }
    }
}

/// A header or query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    #[serde(deserialize_with = "nullable")]
    pub formdata: Vec<Variable>,
    #[serde(deserialize_with = "nullable")]
    pub urlencoded: Vec<Variable>,
}

/// Request URL.
///
/// Accepts both the object form and the plain string form Postman uses
/// for URLs that were never edited in the URL builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UrlRepr")]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    pub query: Vec<KeyValue>,
}

impl Url {
    /// A URL known only by its raw text.
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Default::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlRepr {
    Raw(String),
    Parts(UrlParts),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct UrlParts {
    raw: String,
    #[serde(deserialize_with = "nullable")]
    host: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    path: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    query: Vec<KeyValue>,
}

impl From<UrlRepr> for Url {
    fn from(repr: UrlRepr) -> Self {
        match repr {
            UrlRepr::Raw(raw) => Url::raw(raw),
            UrlRepr::Parts(parts) => Url {
                raw: parts.raw,
                host: parts.host,
                path: parts.path,
                query: parts.query,
            },
        }
    }
}

/// Decode `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
