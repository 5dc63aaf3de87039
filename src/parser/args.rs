//! Argument list micro-grammar: `int x, [bool y], ...`.

use crate::identifier::IdentifierValidator;
use crate::model::Argument;

/// Parsed argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList {
    pub arguments: Vec<Argument>,
    /// `...` appeared somewhere in the list
    pub variadic: bool,
}

/// Parse the text between the parentheses of a header.
///
/// Returns `None` as soon as a single entry is malformed: an empty entry,
/// more than two words, or a name rejected by `identifiers`.
pub fn parse_args(text: &str, identifiers: &dyn IdentifierValidator) -> Option<ArgList> {
    let mut list = ArgList::default();

    if text.trim().is_empty() {
        return Some(list);
    }

    for item in text.split(',').map(str::trim) {
        if item == "..." {
            list.variadic = true;
            continue;
        }

        let (item, optional) = strip_optional(item);

        let words: Vec<&str> = item.split_whitespace().collect();
        let (type_name, name) = match words.as_slice() {
            [name] => ("", *name),
            [type_name, name] => (*type_name, *name),
            _ => return None,
        };

        if !identifiers.is_valid(name) {
            return None;
        }

        list.arguments.push(Argument {
            name: name.to_string(),
            type_name: type_name.to_string(),
            optional,
            description: None,
        });
    }

    Some(list)
}

/// `[x]` → (`x`, true). Bare `[]` is not an optional marker.
fn strip_optional(item: &str) -> (&str, bool) {
    if item.len() > 2 {
        if let Some(inner) = item.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return (inner, true);
        }
    }
    (item, false)
}
