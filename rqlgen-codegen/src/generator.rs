/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Java driver source generator.
//!
//! Runs the whole pipeline: load the protocol, reconcile term metadata,
//! render the protocol enums, then render one AST class per term.

use crate::config::GeneratorConfig;
use crate::render::TemplateRenderer;
use rqlgen_core::error::Result;
use rqlgen_meta::{
    JavaTarget, TargetLanguage, TargetMetadata, load_metadata, reconcile, write_metadata,
};
use rqlgen_proto::{ProtocolDefinition, load_or_parse};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Template used for protocol enums.
pub const ENUM_TEMPLATE: &str = "Enum.java";

/// Template used for AST classes.
pub const AST_TEMPLATE: &str = "AstSubclass.java";

/// Protocol enums to generate: class name and location in the protocol.
pub const ENUMS: [(&str, [&str; 2]); 8] = [
    ("Version", ["VersionDummy", "Version"]),
    ("Protocol", ["VersionDummy", "Protocol"]),
    ("QueryType", ["Query", "QueryType"]),
    ("FrameType", ["Frame", "FrameType"]),
    ("ResponseType", ["Response", "ResponseType"]),
    ("ResponseNote", ["Response", "ResponseNote"]),
    ("DatumType", ["Datum", "DatumType"]),
    ("TermType", ["Term", "TermType"]),
];

/// Superclass of AST classes not listed in [`SPECIAL_SUPERCLASSES`].
pub const DEFAULT_SUPERCLASS: &str = "RqlQuery";

/// Classes that extend the AST root directly.
pub const SPECIAL_SUPERCLASSES: [(&str, &str); 3] =
    [("DB", "RqlAst"), ("RqlQuery", "RqlAst"), ("TopLevel", "RqlAst")];

/// Structural classes rendered before the term classes: class name and
/// include tag.
const STRUCTURAL_CLASSES: [(&str, &str); 2] = [("RqlQuery", "query"), ("TopLevel", "top")];

/// Files produced by a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Whether `term_info.json` was rewritten.
    pub metadata_updated: bool,
    /// Rendered enum files.
    pub enum_files: Vec<PathBuf>,
    /// Rendered AST class files.
    pub class_files: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EnumItem<'a> {
    name: &'a str,
    value: i64,
}

#[derive(Debug, Serialize)]
struct EnumContext<'a> {
    classname: &'a str,
    items: Vec<EnumItem<'a>>,
}

#[derive(Debug, Serialize)]
struct AstContext<'a> {
    term_type: Option<&'a str>,
    classname: &'a str,
    meta: &'a TargetMetadata,
    include_in: &'a str,
    superclass: &'a str,
}

/// Code generator for the Java driver.
#[derive(Debug)]
pub struct Generator<T: TargetLanguage = JavaTarget> {
    config: GeneratorConfig,
    renderer: TemplateRenderer,
    target: T,
}

impl Generator<JavaTarget> {
    /// Creates a generator for the Java driver.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let renderer = TemplateRenderer::new(&config.template_dir, &config.tool_name);
        Self {
            config,
            renderer,
            target: JavaTarget,
        }
    }
}

impl<T: TargetLanguage> Generator<T> {
    /// Replaces the target-language constraints.
    #[must_use]
    pub fn with_target<U: TargetLanguage>(self, target: U) -> Generator<U> {
        Generator {
            config: self.config,
            renderer: self.renderer,
            target,
        }
    }

    /// Replaces the template renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// Returns `GenError` on the first failure; nothing is retried and files
    /// rendered before the failure are left in place.
    pub fn run(&mut self) -> Result<GenerationReport> {
        let proto = load_or_parse(&self.config.proto_file, &self.config.proto_json)?;
        let term_meta = load_metadata(&self.config.meta_json)?;

        let reconciled = reconcile(&proto, &term_meta)?;
        let metadata_updated = reconciled != term_meta;
        if metadata_updated {
            write_metadata(&self.config.meta_json, &reconciled)?;
        }

        let enum_files = self.render_enums(&proto)?;
        let target_meta = self.target.transform(&reconciled);
        let class_files = self.render_ast_subclasses(&target_meta)?;

        info!(
            "Generated {} enums and {} classes",
            enum_files.len(),
            class_files.len()
        );

        Ok(GenerationReport {
            metadata_updated,
            enum_files,
            class_files,
        })
    }

    /// Renders the fixed set of protocol enums.
    ///
    /// # Errors
    /// Returns `GenError` if an enum block is missing or rendering fails.
    pub fn render_enums(&mut self, proto: &ProtocolDefinition) -> Result<Vec<PathBuf>> {
        let mut files = Vec::with_capacity(ENUMS.len());
        for (classname, path) in ENUMS {
            let block = proto.block_at(&path)?;
            files.push(self.render_enum(classname, block)?);
        }
        Ok(files)
    }

    /// Renders one enum class from a protocol block.
    ///
    /// # Errors
    /// Returns `GenError` if rendering fails.
    pub fn render_enum(
        &mut self,
        classname: &str,
        block: &ProtocolDefinition,
    ) -> Result<PathBuf> {
        let context = EnumContext {
            classname,
            items: block
                .values()
                .map(|(name, value)| EnumItem { name, value })
                .collect(),
        };
        self.renderer.render(
            ENUM_TEMPLATE,
            &self.config.proto_dir(),
            &format!("{classname}.java"),
            &context,
        )
    }

    /// Renders the structural classes and one class per non-deprecated term.
    ///
    /// # Errors
    /// Returns `GenError` if rendering fails.
    pub fn render_ast_subclasses(&mut self, meta: &TargetMetadata) -> Result<Vec<PathBuf>> {
        let mut files = Vec::with_capacity(meta.len() + STRUCTURAL_CLASSES.len());

        for (classname, include_in) in STRUCTURAL_CLASSES {
            files.push(self.render_ast_subclass(None, classname, include_in, meta)?);
        }

        for (term_name, info) in meta.iter() {
            if info.is_deprecated() {
                continue;
            }
            let classname = rqlgen_core::camel(term_name);
            let include_in = term_name.to_lowercase();
            let file = self.render_ast_subclass(Some(term_name), &classname, &include_in, meta)?;
            files.push(file);
        }

        Ok(files)
    }

    fn render_ast_subclass(
        &mut self,
        term_type: Option<&str>,
        classname: &str,
        include_in: &str,
        meta: &TargetMetadata,
    ) -> Result<PathBuf> {
        let superclass_key = term_type.unwrap_or(classname);
        let context = AstContext {
            term_type,
            classname,
            meta,
            include_in,
            superclass: superclass_for(superclass_key),
        };
        self.renderer.render(
            AST_TEMPLATE,
            &self.config.ast_gen_dir(),
            &format!("{classname}.java"),
            &context,
        )
    }
}

/// Returns the superclass for a term or structural class name.
fn superclass_for(name: &str) -> &'static str {
    SPECIAL_SUPERCLASSES
        .iter()
        .find(|(special, _)| *special == name)
        .map_or(DEFAULT_SUPERCLASS, |(_, superclass)| *superclass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rqlgen_meta::{TermInfo, TermMetadata};
    use std::fs;
    use std::path::Path;

    const GRAMMAR: &str = r#"
syntax = "proto2";

message VersionDummy {
    enum Version {
        V0_1 = 0x3f61ba36;
        V1_0 = 0x34c2bdc3;
    }
    enum Protocol {
        PROTOBUF = 0x271ffc41;
        JSON = 0x7e6970c7;
    }
}

message Query {
    enum QueryType {
        START = 1;
        CONTINUE = 2;
        STOP = 3;
    }
    optional QueryType type = 1;
}

message Frame {
    enum FrameType {
        POS = 1;
        OPT = 2;
    }
}

message Response {
    enum ResponseType {
        SUCCESS_ATOM = 1;
        CLIENT_ERROR = 16;
    }
    enum ResponseNote {
        SEQUENCE_FEED = 1;
    }
}

message Datum {
    enum DatumType {
        R_NULL = 1;
        R_BOOL = 2;
    }
}

message Term {
    enum TermType {
        DATUM = 1;
        MAKE_ARRAY = 2;
        DB = 14;
        TABLE = 15;
        GET_FIELD = 31;
        ROW = 13;
        DEFAULT = 92;
        BRACKET = 170;
        OLD_TERM = 200;
    }
}
"#;

    const TERM_INFO: &str = r#"{
    "DATUM": {"id": 1},
    "MAKE_ARRAY": {"id": 2},
    "DB": {"id": 14, "include_in": ["top"]},
    "TABLE": {"id": 15, "include_in": ["db", "top"]},
    "GET_FIELD": {"id": 31, "include_in": ["query"]},
    "ROW": {"id": 13, "include_in": ["top"]},
    "DEFAULT": {"id": 90, "include_in": ["query"]},
    "BRACKET": {"id": 170, "include_in": ["query"]},
    "OLD_TERM": {"id": 200, "deprecated": true}
}
"#;

    fn workspace() -> (tempfile::TempDir, GeneratorConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::rooted_at(dir.path());

        fs::write(&config.proto_file, GRAMMAR).unwrap();
        fs::write(&config.meta_json, TERM_INFO).unwrap();

        let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("../templates");
        fs::create_dir_all(&config.template_dir).unwrap();
        for template in [ENUM_TEMPLATE, AST_TEMPLATE] {
            fs::copy(templates.join(template), config.template_dir.join(template)).unwrap();
        }

        (dir, config)
    }

    fn generator(config: GeneratorConfig) -> Generator {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let renderer = TemplateRenderer::new(&config.template_dir, "rqlgen").with_date(date);
        Generator::new(config).with_renderer(renderer)
    }

    fn read(path: PathBuf) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_superclass_for() {
        assert_eq!(superclass_for("DB"), "RqlAst");
        assert_eq!(superclass_for("TopLevel"), "RqlAst");
        assert_eq!(superclass_for("TABLE"), "RqlQuery");
    }

    #[test]
    fn test_run_renders_everything() {
        let (_dir, config) = workspace();
        let report = generator(config.clone()).run().unwrap();

        assert_eq!(report.enum_files.len(), ENUMS.len());
        for (classname, _) in ENUMS {
            assert!(config.proto_dir().join(format!("{classname}.java")).is_file());
        }

        let classes: Vec<_> = report
            .class_files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            classes,
            [
                "RqlQuery.java",
                "TopLevel.java",
                "Datum.java",
                "MakeArray.java",
                "Db.java",
                "Table.java",
                "GetField.java",
                "Default.java",
                "Bracket.java",
            ]
        );
        assert!(config.proto_json.is_file());
    }

    #[test]
    fn test_metadata_is_reconciled_and_persisted() {
        let (_dir, config) = workspace();
        let report = generator(config.clone()).run().unwrap();
        assert!(report.metadata_updated);

        let meta = load_metadata(&config.meta_json).unwrap();
        assert_eq!(meta.get("DEFAULT").map(TermInfo::id), Some(92));
        // Target adjustments are not persisted.
        assert_eq!(meta.get("DEFAULT").unwrap().alias(), None);
        assert!(meta.contains("ROW"));

        let second = generator(config).run().unwrap();
        assert!(!second.metadata_updated);
    }

    #[test]
    fn test_enum_contents() {
        let (_dir, config) = workspace();
        generator(config.clone()).run().unwrap();

        let text = read(config.proto_dir().join("QueryType.java"));
        assert!(text.starts_with("// Autogenerated by rqlgen on 2026-10-19.\n"));
        assert!(text.contains("// ../../../../../../../templates/Enum.java\n"));
        assert!(text.contains("public enum QueryType {"));
        assert!(text.contains("START(1),"));
        assert!(text.contains("STOP(3);"));
        assert!(text.contains("case 2: return QueryType.CONTINUE;"));

        let version = read(config.proto_dir().join("Version.java"));
        assert!(version.contains("V0_1(1063369270),"));
    }

    #[test]
    fn test_empty_enum_is_valid_java() {
        let (_dir, config) = workspace();
        let mut generator = generator(config);
        let path = generator
            .render_enum("Empty", &ProtocolDefinition::new())
            .unwrap();

        let text = read(path);
        let body = &text[text.find("public enum Empty {").unwrap()..];
        let constants = &body[..body.find("public final int value;").unwrap()];
        assert_eq!(constants.trim_end(), "public enum Empty {\n\n    ;");
    }

    #[test]
    fn test_populated_enum_has_no_extra_separator() {
        let (_dir, config) = workspace();
        generator(config.clone()).run().unwrap();

        let text = read(config.proto_dir().join("FrameType.java"));
        assert!(text.contains("    POS(1),\n    OPT(2);\n\n    public final int value;"));
    }

    #[test]
    fn test_class_contents() {
        let (_dir, config) = workspace();
        generator(config.clone()).run().unwrap();
        let ast = config.ast_gen_dir();

        let query = read(ast.join("RqlQuery.java"));
        assert!(query.contains("public class RqlQuery extends RqlAst {"));
        assert!(query.contains("public GetField getField(Object... exprs) {"));
        assert!(query.contains("public Default default_(Object... exprs) {"));
        assert!(query.contains("public Bracket field(Object... exprs) {"));
        assert!(query.contains("return new GetField(this, new Arguments(exprs), null);"));

        let top = read(ast.join("TopLevel.java"));
        assert!(top.contains("public Db db(Object... exprs) {"));
        assert!(top.contains("return new Db(new Arguments(exprs), null);"));
        assert!(!top.contains(" row("));

        let db = read(ast.join("Db.java"));
        assert!(db.contains("public class Db extends RqlAst {"));
        assert!(db.contains("super(prev, TermType.DB, args, optargs);"));
        assert!(db.contains("public Table table(Object... exprs) {"));

        let table = read(ast.join("Table.java"));
        assert!(table.contains("public class Table extends RqlQuery {"));
    }

    #[test]
    fn test_denylisted_and_deprecated_terms_have_no_class() {
        let (_dir, config) = workspace();
        generator(config.clone()).run().unwrap();
        let ast = config.ast_gen_dir();

        assert!(!ast.join("Row.java").exists());
        assert!(!ast.join("OldTerm.java").exists());
    }

    #[test]
    fn test_missing_enum_block() {
        let (_dir, config) = workspace();
        let mut generator = generator(config);
        let proto = rqlgen_proto::parse_str("message Term {\n enum TermType {\n A = 1;\n }\n}")
            .unwrap();
        let err = generator.render_enums(&proto).unwrap_err();
        assert!(matches!(err, rqlgen_core::GenError::Protocol(_)));
    }

    #[test]
    fn test_custom_target() {
        struct NoConstraints;
        impl TargetLanguage for NoConstraints {
            fn reserved_words(&self) -> &[&str] {
                &[]
            }
            fn denylist(&self) -> &[&str] {
                &[]
            }
            fn marker(&self) -> char {
                '_'
            }
        }

        let (_dir, config) = workspace();
        let mut generator = generator(config.clone()).with_target(NoConstraints);
        let meta: TermMetadata = [("ROW", TermInfo::new(13))].into_iter().collect();
        let target_meta = generator.target.transform(&meta);
        let files = generator.render_ast_subclasses(&target_meta).unwrap();

        assert_eq!(files.len(), 3);
        assert!(config.ast_gen_dir().join("Row.java").is_file());
    }
}
