/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for parsed protocol files.
//!
//! This module defines the structures that represent a parsed protocol:
//! - [`ProtoNode`]: either an integer value or a nested block
//! - [`ProtocolDefinition`]: an ordered mapping of names to nodes

use indexmap::IndexMap;
use rqlgen_core::error::ProtocolError;
use serde::{Deserialize, Serialize};

/// An entry in a protocol block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProtoNode {
    /// A `key = value` assignment.
    Value(i64),
    /// A nested `message` or `enum` block.
    Block(ProtocolDefinition),
}

impl ProtoNode {
    /// Returns the integer value, if this node is a value.
    #[must_use]
    pub const fn as_value(&self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Block(_) => None,
        }
    }

    /// Returns the nested block, if this node is a block.
    #[must_use]
    pub const fn as_block(&self) -> Option<&ProtocolDefinition> {
        match self {
            Self::Block(b) => Some(b),
            Self::Value(_) => None,
        }
    }
}

/// Ordered mapping from block or entry names to [`ProtoNode`]s.
///
/// Keys keep first-seen declaration order. Inserting an existing key replaces
/// its node but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolDefinition {
    entries: IndexMap<String, ProtoNode>,
}

impl ProtocolDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, returning the node it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, node: ProtoNode) -> Option<ProtoNode> {
        self.entries.insert(name.into(), node)
    }

    /// Gets a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProtoNode> {
        self.entries.get(name)
    }

    /// Gets a nested block by name.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&ProtocolDefinition> {
        self.get(name).and_then(ProtoNode::as_block)
    }

    /// Gets an integer value by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ProtoNode::as_value)
    }

    /// Resolves a nested block by following `path` from this definition.
    ///
    /// # Errors
    /// Returns `ProtocolError` if a segment is missing or names a value.
    pub fn block_at(&self, path: &[&str]) -> Result<&ProtocolDefinition, ProtocolError> {
        let mut current = self;
        for (depth, segment) in path.iter().enumerate() {
            let walked = || path[..=depth].join(".");
            current = match current.get(segment) {
                Some(ProtoNode::Block(b)) => b,
                Some(ProtoNode::Value(_)) => {
                    return Err(ProtocolError::NotABlock { path: walked() });
                }
                None => return Err(ProtocolError::MissingBlock { path: walked() }),
            };
        }
        Ok(current)
    }

    /// Returns an iterator over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProtoNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns an iterator over the integer entries in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, i64)> {
        self.iter()
            .filter_map(|(k, v)| v.as_value().map(|value| (k, value)))
    }

    /// Returns an iterator over entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ProtoNode)> for ProtocolDefinition {
    fn from_iter<I: IntoIterator<Item = (K, ProtoNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
