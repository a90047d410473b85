/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the rqlgen code generator.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across parsing, reconciliation and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`GenError`] as the error type.
pub type Result<T> = std::result::Result<T, GenError>;

/// Top-level error type for all rqlgen operations.
#[derive(Debug, Error)]
pub enum GenError {
    /// Error while parsing the protocol grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The protocol definition lacks a structure the generator relies on.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error while looking up or rendering a template.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Malformed JSON in the protocol cache or term metadata.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading inputs or writing outputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while parsing the line-oriented protocol grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A closing brace with no open block to close.
    #[error("unbalanced closing brace at line {line}")]
    UnbalancedClose {
        /// One-based line number of the brace.
        line: usize,
    },

    /// A `key = value` assignment whose value is not an integer literal.
    #[error("invalid integer value for {name} at line {line}: {value}")]
    InvalidValue {
        /// One-based line number of the assignment.
        line: usize,
        /// Name on the left-hand side.
        name: String,
        /// Offending literal.
        value: String,
    },
}

/// Errors raised when the parsed protocol does not have the expected shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// No entry exists at the given path.
    #[error("missing protocol block: {path}")]
    MissingBlock {
        /// Dotted path that was looked up.
        path: String,
    },

    /// The entry at the given path is a value, not a block.
    #[error("protocol entry is not a block: {path}")]
    NotABlock {
        /// Dotted path that was looked up.
        path: String,
    },
}

/// Errors raised when a term metadata record is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The record has no `id` key.
    #[error("term record has no id")]
    MissingId,

    /// The `id` key does not hold an integer.
    #[error("term id is not an integer: {value}")]
    InvalidId {
        /// Offending JSON value.
        value: String,
    },
}

/// Errors raised by the template renderer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The template file could not be loaded or compiled.
    #[error("failed to load template {name} from {path:?}: {reason}")]
    Template {
        /// Template name relative to the template root.
        name: String,
        /// Resolved template path.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },

    /// The template failed while rendering its context.
    #[error("failed to render template {name}: {reason}")]
    Render {
        /// Template name relative to the template root.
        name: String,
        /// Underlying failure.
        reason: String,
    },
}
