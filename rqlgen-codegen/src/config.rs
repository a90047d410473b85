/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Generator configuration.
//!
//! All paths default to the layout of the Java driver checkout, relative to
//! the directory the generator runs in.

use std::path::{Path, PathBuf};

/// Default root of the generated Java package.
pub const DEFAULT_PACKAGE_DIR: &str = "./src/main/java/com/rethinkdb";

/// Default template root.
pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";

/// Default protocol grammar file.
pub const DEFAULT_PROTO_FILE: &str = "../../src/rdb_protocol/ql2.proto";

/// Default protocol cache.
pub const DEFAULT_PROTO_JSON: &str = "./proto_basic.json";

/// Default term metadata file.
pub const DEFAULT_META_JSON: &str = "./term_info.json";

/// Default tool name written into generated-file headers.
pub const DEFAULT_TOOL_NAME: &str = "rqlgen";

/// Configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the generated Java package.
    pub package_dir: PathBuf,
    /// Directory templates are looked up in.
    pub template_dir: PathBuf,
    /// Protocol grammar file.
    pub proto_file: PathBuf,
    /// Cached parse of the protocol grammar.
    pub proto_json: PathBuf,
    /// Hand-maintained term metadata.
    pub meta_json: PathBuf,
    /// Name written into generated-file headers.
    pub tool_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from(DEFAULT_PACKAGE_DIR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            proto_file: PathBuf::from(DEFAULT_PROTO_FILE),
            proto_json: PathBuf::from(DEFAULT_PROTO_JSON),
            meta_json: PathBuf::from(DEFAULT_META_JSON),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package directory.
    #[must_use]
    pub fn with_package_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.package_dir = dir.into();
        self
    }

    /// Sets the template directory.
    #[must_use]
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Sets the protocol grammar file.
    #[must_use]
    pub fn with_proto_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.proto_file = path.into();
        self
    }

    /// Sets the protocol cache file.
    #[must_use]
    pub fn with_proto_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.proto_json = path.into();
        self
    }

    /// Sets the term metadata file.
    #[must_use]
    pub fn with_meta_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.meta_json = path.into();
        self
    }

    /// Sets the tool name used in headers.
    #[must_use]
    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    /// Points every input and output at one root directory, keeping the
    /// default layout underneath it.
    #[must_use]
    pub fn rooted_at(root: &Path) -> Self {
        Self::default()
            .with_package_dir(root.join("src/main/java/com/rethinkdb"))
            .with_template_dir(root.join("templates"))
            .with_proto_file(root.join("ql2.proto"))
            .with_proto_json(root.join("proto_basic.json"))
            .with_meta_json(root.join("term_info.json"))
    }

    /// Output directory of the protocol enums.
    #[must_use]
    pub fn proto_dir(&self) -> PathBuf {
        self.package_dir.join("proto")
    }

    /// Output directory of the AST classes.
    #[must_use]
    pub fn ast_gen_dir(&self) -> PathBuf {
        self.package_dir.join("ast").join("gen")
    }
}
