/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # rqlgen
//!
//! Code generator for the Java driver of the ql2 query protocol.
//!
//! Reads the protocol grammar (`ql2.proto`) and the hand-maintained term
//! metadata (`term_info.json`), keeps the two in sync, and renders the
//! driver's protocol enums and AST classes from templates.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rqlgen::prelude::*;
//!
//! init_logging();
//! let report = Generator::new(GeneratorConfig::default()).run()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Error definitions and naming helpers
//! - [`proto`]: Protocol grammar parsing and caching
//! - [`meta`]: Term metadata reconciliation and target adjustments
//! - [`codegen`]: Template rendering and the generation pipeline

use tracing_subscriber::EnvFilter;

pub mod core {
    //! Error definitions and naming helpers.
    pub use rqlgen_core::*;
}

pub mod proto {
    //! Protocol grammar parsing and caching.
    pub use rqlgen_proto::*;
}

pub mod meta {
    //! Term metadata reconciliation and target adjustments.
    pub use rqlgen_meta::*;
}

pub mod codegen {
    //! Template rendering and the generation pipeline.
    pub use rqlgen_codegen::*;
}

/// Installs the `tracing` subscriber used by the binary.
///
/// Logs at `INFO` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .try_init();
}

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// `INFO` when they are absent, empty or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::init_logging;
    pub use rqlgen_codegen::{GenerationReport, Generator, GeneratorConfig, TemplateRenderer};
    pub use rqlgen_core::{GenError, Result};
    pub use rqlgen_meta::{JavaTarget, TargetLanguage, TermInfo, TermMetadata};
    pub use rqlgen_proto::{ProtoNode, ProtocolDefinition};
}
