/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Protocol-definition cache.
//!
//! The parsed grammar is stored as pretty-printed JSON with keys in
//! declaration order. When the cache exists it is loaded instead of
//! re-parsing the grammar file.

use crate::parser::parse_reader;
use crate::schema::ProtocolDefinition;
use rqlgen_core::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Loads the cached definition, or parses the grammar and creates the cache.
///
/// # Arguments
/// * `grammar` - Path to the protocol grammar file
/// * `cache` - Path to the JSON cache
///
/// # Errors
/// Returns `GenError` if the cache is malformed, or if the grammar cannot be
/// read or parsed, or if the new cache cannot be written.
pub fn load_or_parse(grammar: &Path, cache: &Path) -> Result<ProtocolDefinition> {
    if cache.is_file() {
        return load_cache(cache);
    }

    info!(
        "{} doesn't exist, creating from {}",
        cache.display(),
        grammar.display()
    );
    let proto = parse_reader(BufReader::new(File::open(grammar)?))?;
    write_cache(cache, &proto)?;
    Ok(proto)
}

/// Loads a protocol definition from a JSON cache file.
///
/// # Errors
/// Returns `GenError` if the file cannot be read or is not valid JSON.
pub fn load_cache(path: &Path) -> Result<ProtocolDefinition> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a protocol definition to a JSON cache file with 2-space indent.
///
/// # Errors
/// Returns `GenError` if the file cannot be written.
pub fn write_cache(path: &Path, proto: &ProtocolDefinition) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, proto)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GRAMMAR: &str = "message Term {
  enum TermType {
    DATUM = 1;
    DB = 14;
  }
}
";

    #[test]
    fn test_missing_cache_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let grammar = dir.path().join("ql2.proto");
        let cache = dir.path().join("proto_basic.json");
        fs::write(&grammar, GRAMMAR).unwrap();

        let proto = load_or_parse(&grammar, &cache).unwrap();
        assert!(cache.is_file());
        assert_eq!(
            proto.block_at(&["Term", "TermType"]).unwrap().value("DB"),
            Some(14)
        );

        let text = fs::read_to_string(&cache).unwrap();
        assert!(text.starts_with("{\n  \"Term\": {\n    \"TermType\": {"));
    }

    #[test]
    fn test_existing_cache_skips_grammar() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("proto_basic.json");
        fs::write(&cache, r#"{"Term": {"TermType": {"DATUM": 1}}}"#).unwrap();

        // The grammar file does not exist; only the cache is read.
        let proto = load_or_parse(&dir.path().join("missing.proto"), &cache).unwrap();
        let items: Vec<_> = proto
            .block_at(&["Term", "TermType"])
            .unwrap()
            .values()
            .collect();
        assert_eq!(items, [("DATUM", 1)]);
    }

    #[test]
    fn test_cache_round_trip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("proto_basic.json");
        let proto = crate::parser::parse_str("enum E {\n Z = 1\n A = 2\n M = 3\n}").unwrap();

        write_cache(&cache, &proto).unwrap();
        let loaded = load_cache(&cache).unwrap();
        let names: Vec<_> = loaded.block("E").unwrap().names().collect();
        assert_eq!(names, ["Z", "A", "M"]);
    }

    #[test]
    fn test_missing_grammar_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_or_parse(
            &dir.path().join("missing.proto"),
            &dir.path().join("proto_basic.json"),
        );
        assert!(matches!(result, Err(rqlgen_core::GenError::Io(_))));
    }
}
