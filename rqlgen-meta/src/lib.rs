/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # rqlgen Meta
//!
//! Hand-maintained term metadata for the rqlgen code generator.
//!
//! This crate provides:
//! - **Schema definitions**: [`TermInfo`] records keyed by term name
//! - **Reconciliation**: keeping metadata ids in sync with the protocol
//! - **Target adjustments**: per-language renames and exclusions that are
//!   applied at render time and never persisted
//! - **Persistence**: reading and writing `term_info.json`

pub mod reconcile;
pub mod schema;
pub mod store;
pub mod target;

#[cfg(test)]
mod testing;

pub use reconcile::{TERM_TYPE_PATH, reconcile};
pub use schema::{TargetMetadata, TermInfo, TermMetadata};
pub use store::{load_metadata, write_metadata};
pub use target::{JavaTarget, TargetLanguage};
