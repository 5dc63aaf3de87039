//! `@tag` directive interpretation.

use super::Context;
use crate::model::{FieldDoc, FunctionRecord};

/// Apply one directive (the comment text after `@`) to `function`.
///
/// Unknown tags are accepted silently.
pub fn interpret(text: &str, function: &mut FunctionRecord, ctx: &mut Context<'_>, lineno: u32) {
    let (tag, rest) = match text.split_once(' ') {
        Some((tag, rest)) => (tag, Some(rest)),
        None => (text, None),
    };

    match tag {
        "arg" => {
            let Some((name, desc)) = rest.and_then(|r| r.split_once(' ')) else {
                ctx.warn(&missing_content(tag), lineno);
                return;
            };
            match function.arguments.iter_mut().find(|a| a.name == name) {
                Some(argument) => {
                    let description = argument.description.get_or_insert_with(String::new);
                    if !description.is_empty() {
                        description.push('\n');
                    }
                    description.push_str(desc);
                    function.has_described_arguments = true;
                }
                None => ctx.warn(
                    &format!("unknown argument for @arg function comment: {}", name),
                    lineno,
                ),
            }
        }
        "field" => {
            let Some((name, desc)) = rest.and_then(|r| r.split_once(' ')) else {
                ctx.warn(&missing_content(tag), lineno);
                return;
            };
            match function.fields.iter_mut().find(|f| f.name == name) {
                Some(field) => {
                    field.description.push('\n');
                    field.description.push_str(desc);
                }
                None => function.fields.push(FieldDoc {
                    name: name.to_string(),
                    description: desc.to_string(),
                }),
            }
        }
        "see" => match rest {
            Some(reference) => function.see_also.push(reference.to_string()),
            None => ctx.warn(&missing_content(tag), lineno),
        },
        "abstract" => function.is_abstract = true,
        "private" => function.is_private = true,
        "deprecated" => function.is_deprecated = true,
        _ => {}
    }
}

fn missing_content(tag: &str) -> String {
    format!("missing content for @{} function comment", tag)
}
