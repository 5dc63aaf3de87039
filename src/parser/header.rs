//! Header line grammar: `[returnType] name[(arglist)]`.
//!
//! The first eligible comment line may restate the declaration's signature.
//! A header only applies when its name matches the declaration.

use super::args::parse_args;
use crate::identifier::IdentifierValidator;
use crate::model::Argument;

/// Signature restated by a comment header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub return_type: String,
    /// `None` when the header had no parentheses: keep the scanner's parameters
    pub arguments: Option<Vec<Argument>>,
    pub variadic: bool,
}

/// Parse `text` as a header for the declaration called `name`.
pub fn parse_header(text: &str, name: &str, identifiers: &dyn IdentifierValidator) -> Option<Header> {
    let (head, tail) = match text.split_once('(') {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    };

    let words: Vec<&str> = head.split_whitespace().collect();
    let return_type = match words.as_slice() {
        [last] if *last == name => "",
        [first, last] if *last == name => *first,
        _ => return None,
    };

    let mut header = Header {
        return_type: return_type.to_string(),
        ..Default::default()
    };

    if let Some(tail) = tail {
        let inner = tail.strip_suffix(')')?;
        let list = parse_args(inner, identifiers)?;
        header.arguments = Some(list.arguments);
        header.variadic = list.variadic;
    }

    Some(header)
}
