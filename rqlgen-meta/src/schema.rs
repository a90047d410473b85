/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for term metadata.
//!
//! - [`TermInfo`]: per-term record with the protocol id and optional hints,
//!   kept in file order
//! - [`TermMetadata`]: the persisted, ordered mapping of term names to records
//! - [`TargetMetadata`]: a language-adjusted copy used only for rendering

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use rqlgen_core::error::MetadataError;
use serde_json::{Map, Value};

const ID: &str = "id";
const ALIAS: &str = "alias";
const DEPRECATED: &str = "deprecated";
const INCLUDE_IN: &str = "include_in";

/// Metadata for a single term.
///
/// The record is kept as the JSON object it was read from, in file order,
/// with typed accessors for the keys the generator reads. Setters patch a
/// key in place, so unrelated keys (including `null` values) are written
/// back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TermInfo {
    fields: Map<String, Value>,
    id: i64,
}

impl TermInfo {
    /// Creates a minimal record holding only an id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        let mut fields = Map::new();
        fields.insert(ID.to_string(), Value::from(id));
        Self { fields, id }
    }

    /// Protocol-assigned term id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Overwrites the id, keeping its position in the record.
    pub fn set_id(&mut self, id: i64) {
        self.fields.insert(ID.to_string(), Value::from(id));
        self.id = id;
    }

    /// Name to use in generated code instead of the derived one.
    ///
    /// A missing or `null` alias reads as `None`.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.fields.get(ALIAS).and_then(Value::as_str)
    }

    /// Sets the alias, keeping its position if the key already exists.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.fields.insert(ALIAS.to_string(), Value::String(alias.into()));
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.set_alias(alias);
        self
    }

    /// Marks the term deprecated.
    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.fields
            .insert(DEPRECATED.to_string(), Value::Bool(deprecated));
        self
    }

    /// Sets the include tags.
    #[must_use]
    pub fn with_include_in<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(|tag| Value::String(tag.into())).collect();
        self.fields.insert(INCLUDE_IN.to_string(), Value::Array(tags));
        self
    }

    /// Returns true if the term is marked deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.fields
            .get(DEPRECATED)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Include tags of the classes that get a method for this term.
    pub fn include_in(&self) -> impl Iterator<Item = &str> {
        self.fields
            .get(INCLUDE_IN)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Gets any key of the record, including ones the generator ignores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the record's keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl TryFrom<Map<String, Value>> for TermInfo {
    type Error = MetadataError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let value = fields.get(ID).ok_or(MetadataError::MissingId)?;
        let id = value.as_i64().ok_or_else(|| MetadataError::InvalidId {
            value: value.to_string(),
        })?;
        Ok(Self { fields, id })
    }
}

impl From<TermInfo> for Map<String, Value> {
    fn from(info: TermInfo) -> Self {
        info.fields
    }
}

/// Persisted term metadata, ordered by first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermMetadata {
    terms: IndexMap<String, TermInfo>,
}

impl TermMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record, keeping the position of an existing key.
    pub fn insert(&mut self, name: impl Into<String>, info: TermInfo) -> Option<TermInfo> {
        self.terms.insert(name.into(), info)
    }

    /// Gets a record by term name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TermInfo> {
        self.terms.get(name)
    }

    /// Returns true if the term is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    /// Returns an iterator over records in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermInfo)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a mutable iterator over records in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut TermInfo)> {
        self.terms.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TermInfo)> for TermMetadata {
    fn from_iter<I: IntoIterator<Item = (K, TermInfo)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Term metadata adjusted for one output language.
///
/// Only serializable, never deserialized or written back to `term_info.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetMetadata {
    terms: IndexMap<String, TermInfo>,
}

impl TargetMetadata {
    pub(crate) fn insert(&mut self, name: impl Into<String>, info: TermInfo) {
        self.terms.insert(name.into(), info);
    }

    /// Gets a record by term name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TermInfo> {
        self.terms.get(name)
    }

    /// Returns true if the term is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
    }

    /// Returns an iterator over records in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermInfo)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
