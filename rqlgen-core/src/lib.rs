/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # rqlgen Core
//!
//! Error definitions and naming helpers shared by every rqlgen crate.
//!
//! This crate provides:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Naming helpers**: `camel` and `dromedary` conversions of
//!   underscore-delimited protocol names

pub mod error;
pub mod naming;

pub use error::{GenError, MetadataError, ParseError, ProtocolError, RenderError, Result};
pub use naming::{camel, dromedary};
