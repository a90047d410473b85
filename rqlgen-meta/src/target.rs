/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Target-language metadata adjustments.
//!
//! Generated method names must not collide with the output language's
//! reserved words, and some terms are better served by a native construct.
//! A [`TargetLanguage`] describes those constraints and derives a
//! [`TargetMetadata`] from the shared [`TermMetadata`] without touching it.

use crate::schema::{TargetMetadata, TermInfo, TermMetadata};
use rqlgen_core::naming::dromedary;
use tracing::info;

/// Naming constraints of one output language.
pub trait TargetLanguage {
    /// Identifiers that cannot be used as method names.
    fn reserved_words(&self) -> &[&str];

    /// Method names whose terms are not generated at all.
    fn denylist(&self) -> &[&str];

    /// Character appended to an alias that collides with a reserved word.
    fn marker(&self) -> char;

    /// Aliases applied to specific terms regardless of collisions.
    fn fixed_aliases(&self) -> &[(&str, &str)] {
        &[]
    }

    /// Derives the language-adjusted metadata.
    ///
    /// Per term, in order: denylisted terms are dropped; a name or alias
    /// colliding with a reserved word gets the alias with the marker
    /// appended; then any fixed alias for the term is applied.
    fn transform(&self, meta: &TermMetadata) -> TargetMetadata {
        let mut adjusted = TargetMetadata::default();

        for (name, info) in meta.iter() {
            if is_called(name, info, self.denylist()) {
                info!("Skipping {}, not generated for this target", name);
                continue;
            }

            let mut info = info.clone();
            if is_called(name, &info, self.reserved_words()) {
                let mut alias = info.alias().map_or_else(|| dromedary(name), str::to_string);
                alias.push(self.marker());
                info!("Alias for {} will be {}", name, alias);
                info.set_alias(alias);
            }

            if let Some((_, alias)) = self.fixed_aliases().iter().find(|(term, _)| *term == name) {
                info.set_alias(*alias);
            }

            adjusted.insert(name, info);
        }

        adjusted
    }
}

/// Returns true if the term's derived method name or its alias is in `words`.
fn is_called(name: &str, info: &TermInfo, words: &[&str]) -> bool {
    let method = dromedary(name);
    words
        .iter()
        .any(|w| *w == method || info.alias() == Some(*w))
}

/// Java driver constraints.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTarget;

impl JavaTarget {
    /// Java keywords.
    pub const KEYWORDS: [&'static str; 50] = [
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
    ];

    /// `row` is covered by Java 8 lambdas.
    pub const DENYLIST: [&'static str; 1] = ["row"];

    /// `BRACKET` reads better as `field` in Java.
    pub const FIXED_ALIASES: [(&'static str, &'static str); 1] = [("BRACKET", "field")];
}

impl TargetLanguage for JavaTarget {
    fn reserved_words(&self) -> &[&str] {
        &Self::KEYWORDS
    }

    fn denylist(&self) -> &[&str] {
        &Self::DENYLIST
    }

    fn marker(&self) -> char {
        '_'
    }

    fn fixed_aliases(&self) -> &[(&str, &str)] {
        &Self::FIXED_ALIASES
    }
}
