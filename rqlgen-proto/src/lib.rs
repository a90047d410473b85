/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # rqlgen Proto
//!
//! Protocol grammar parsing and protocol-definition management for rqlgen.
//!
//! This crate provides:
//! - **Schema definitions**: [`ProtocolDefinition`], an ordered tree of blocks
//!   and integer values
//! - **Grammar parsing**: a single-pass line parser for `message`/`enum`
//!   blocks and `key = value` entries
//! - **Caching**: JSON persistence of the parsed tree so later runs can skip
//!   the grammar file

pub mod cache;
pub mod parser;
pub mod schema;

pub use cache::{load_cache, load_or_parse, write_cache};
pub use parser::{ProtoParser, parse_reader, parse_str};
pub use schema::{ProtoNode, ProtocolDefinition};
