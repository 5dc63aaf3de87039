//! Identifier validity for argument names written in comment headers.

use regex::Regex;
use std::sync::LazyLock;

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Decides whether a header argument name is a usable identifier.
pub trait IdentifierValidator {
    fn is_valid(&self, text: &str) -> bool;
}

/// Script-language identifiers: a letter, `_` or `$`, then letters, digits, `_` or `$`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptIdentifiers;

impl IdentifierValidator for ScriptIdentifiers {
    fn is_valid(&self, text: &str) -> bool {
        RE_IDENTIFIER.is_match(text)
    }
}

impl<F> IdentifierValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, text: &str) -> bool {
        self(text)
    }
}
