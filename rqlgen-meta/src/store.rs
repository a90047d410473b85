/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Reading and writing `term_info.json`.

use crate::schema::TermMetadata;
use rqlgen_core::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Loads term metadata from a JSON file.
///
/// # Errors
/// Returns `GenError` if the file is missing or malformed.
pub fn load_metadata(path: &Path) -> Result<TermMetadata> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes term metadata as JSON with 4-space indent.
///
/// # Errors
/// Returns `GenError` if the file cannot be written.
pub fn write_metadata(path: &Path, meta: &TermMetadata) -> Result<()> {
    info!("Writing {} terms to {}", meta.len(), path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    meta.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
