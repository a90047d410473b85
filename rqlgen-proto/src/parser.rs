/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Line-oriented protocol grammar parser.
//!
//! Each line is checked against three patterns in fixed priority order:
//! 1. block open: `message Name {` or `enum Name {`
//! 2. assignment: `NAME = value`
//! 3. block close: `}`
//!
//! Lines matching none of them (comments, blank lines, `syntax`, `optional`
//! field declarations, ...) are ignored. Blocks still open at end of input
//! are closed implicitly.

use crate::schema::{ProtoNode, ProtocolDefinition};
use regex::Regex;
use rqlgen_core::error::{ParseError, Result};
use std::io::BufRead;
use std::mem;
use std::sync::LazyLock;
use tracing::debug;

static BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(message|enum) (?P<name>\w+) \{").expect("block-open pattern is valid")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>\w+)\s*=\s*(?P<value>\w+)").expect("assignment pattern is valid")
});

static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\}").expect("block-close pattern is valid"));

/// Incremental parser building a [`ProtocolDefinition`] one line at a time.
///
/// Open blocks are kept on an explicit stack: each frame holds the parent
/// mapping and the name the child is bound under.
#[derive(Debug, Default)]
pub struct ProtoParser {
    current: ProtocolDefinition,
    parents: Vec<(ProtocolDefinition, String)>,
    line: usize,
}

impl ProtoParser {
    /// Creates a parser with an empty root mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of blocks currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Feeds one line of grammar text.
    ///
    /// # Errors
    /// Returns `ParseError` on a closing brace with no open block, or on an
    /// assignment whose value is not an integer literal.
    pub fn feed_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.line += 1;

        if let Some(caps) = BLOCK_OPEN.captures(line) {
            self.open_block(&caps["name"]);
        } else if let Some(caps) = ASSIGNMENT.captures(line) {
            let (name, literal) = (&caps["name"], &caps["value"]);
            let value = parse_int_literal(literal).ok_or_else(|| ParseError::InvalidValue {
                line: self.line,
                name: name.to_string(),
                value: literal.to_string(),
            })?;
            self.current.insert(name, ProtoNode::Value(value));
        } else if BLOCK_CLOSE.is_match(line) {
            self.close_block()?;
        }

        Ok(())
    }

    /// Closes every block still open and returns the root mapping.
    #[must_use]
    pub fn finish(mut self) -> ProtocolDefinition {
        if !self.parents.is_empty() {
            debug!(open = self.parents.len(), "closing blocks left open at end of input");
        }
        while let Some((parent, name)) = self.parents.pop() {
            self.attach(parent, name);
        }
        self.current
    }

    fn open_block(&mut self, name: &str) {
        debug!(line = self.line, name, "open block");
        // Bind an empty block now so the parent keeps declaration order.
        self.current
            .insert(name, ProtoNode::Block(ProtocolDefinition::new()));
        let parent = mem::take(&mut self.current);
        self.parents.push((parent, name.to_string()));
    }

    fn close_block(&mut self) -> std::result::Result<(), ParseError> {
        let (parent, name) = self
            .parents
            .pop()
            .ok_or(ParseError::UnbalancedClose { line: self.line })?;
        self.attach(parent, name);
        Ok(())
    }

    fn attach(&mut self, parent: ProtocolDefinition, name: String) {
        let child = mem::replace(&mut self.current, parent);
        self.current.insert(name, ProtoNode::Block(child));
    }
}

/// Parses grammar text held in memory.
///
/// # Errors
/// Returns `ParseError` if a line is malformed in a way that cannot be skipped.
pub fn parse_str(text: &str) -> std::result::Result<ProtocolDefinition, ParseError> {
    let mut parser = ProtoParser::new();
    for line in text.lines() {
        parser.feed_line(line)?;
    }
    Ok(parser.finish())
}

/// Parses grammar text from a buffered reader.
///
/// # Errors
/// Returns `GenError::Io` on read failure or `GenError::Parse` on malformed input.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ProtocolDefinition> {
    let mut parser = ProtoParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?)?;
    }
    Ok(parser.finish())
}

/// Parses an integer literal honoring `0x`, `0o` and `0b` base prefixes.
///
/// A bare leading zero also selects octal, so `017` is 15. Underscore digit
/// separators are accepted.
fn parse_int_literal(literal: &str) -> Option<i64> {
    let cleaned = literal.replace('_', "");
    let (digits, radix) = match cleaned.get(..2) {
        Some("0x" | "0X") => (&cleaned[2..], 16),
        Some("0o" | "0O") => (&cleaned[2..], 8),
        Some("0b" | "0B") => (&cleaned[2..], 2),
        Some(_) if cleaned.starts_with('0') => (&cleaned[1..], 8),
        _ => (cleaned.as_str(), 10),
    };

    i64::from_str_radix(digits, radix).ok()
}
