/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Naming conventions for generated identifiers.
//!
//! Protocol names are `SCREAMING_SNAKE_CASE`. Generated Java code needs
//! `CamelCase` class names and `dromedaryCase` method names.

/// Converts an underscore-delimited name to CamelCase.
///
/// Each word is title-cased: a letter is upper-cased when it follows a
/// non-letter (or starts the word) and lower-cased otherwise.
#[must_use]
pub fn camel(name: &str) -> String {
    name.split('_').map(title).collect()
}

/// Converts an underscore-delimited name to dromedaryCase.
///
/// The first word is lower-cased, the remaining words are title-cased.
#[must_use]
pub fn dromedary(name: &str) -> String {
    let mut words = name.split('_');
    let mut result = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        result.push_str(&title(word));
    }
    result
}

/// Title-cases a single word.
fn title(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut prev_cased = false;

    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            result.push(c);
            prev_cased = false;
        }
    }

    result
}
