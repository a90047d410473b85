/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # rqlgen Codegen
//!
//! Build-time generation of the Java driver's protocol enums and AST classes.
//!
//! This crate ties the protocol parser and the term metadata together and
//! feeds them to Handlebars templates, writing one file per enum and per
//! term with a generated-file header.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rqlgen_codegen::{Generator, GeneratorConfig};
//!
//! let report = Generator::new(GeneratorConfig::default()).run()?;
//! ```

pub mod config;
pub mod generator;
pub mod render;

pub use config::GeneratorConfig;
pub use generator::{GenerationReport, Generator};
pub use render::{TemplateRenderer, autogenerated_header};
