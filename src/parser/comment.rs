//! Comment block assembly — line-by-line state machine.
//!
//! Each comment line above a declaration is one of:
//!
//! - a `//` line, skipped entirely
//! - the header attempt (the first other line, consumed whether or not it parses)
//! - a directive (`@tag ...`)
//! - description text, grouped into paragraphs that directives interrupt

use super::directive::interpret;
use super::header::parse_header;
use super::Context;
use crate::model::{DeclareRecord, FunctionRecord};

#[derive(Default)]
struct BlockState {
    header_attempted: bool,
    in_paragraph: bool,
    /// Leading whitespace of the first description line
    common_indent: Option<String>,
    paragraphs: Vec<String>,
}

/// Build the documentation record for one declaration.
pub fn document_function(declare: &DeclareRecord, ctx: &mut Context<'_>) -> FunctionRecord {
    let mut function = FunctionRecord::from_declare(declare);
    let mut state = BlockState::default();

    for comment in &declare.comments {
        let original = comment.text.as_str();
        let text = original.trim_start();

        if text.starts_with("//") {
            continue;
        }

        if !state.header_attempted {
            state.header_attempted = true;
            if let Some(header) = parse_header(text, &declare.name, ctx.identifiers) {
                if let Some(arguments) = header.arguments {
                    function.arguments = arguments;
                }
                function.return_type = header.return_type;
                function.variadic = header.variadic;
            }
            continue;
        }

        if let Some(directive) = text.strip_prefix('@') {
            state.in_paragraph = false;
            if !directive.is_empty() {
                interpret(directive, &mut function, ctx, comment.line);
            }
            continue;
        }

        push_description(&mut state, original, text);
    }

    if !state.paragraphs.is_empty() {
        function.description = Some(state.paragraphs.join("\n\n"));
    }

    function
}

fn push_description(state: &mut BlockState, original: &str, trimmed: &str) {
    let indent = state
        .common_indent
        .get_or_insert_with(|| original[..original.len() - trimmed.len()].to_string());
    let line = original.strip_prefix(indent.as_str()).unwrap_or(original);

    match state.paragraphs.last_mut() {
        Some(paragraph) if state.in_paragraph => {
            paragraph.push('\n');
            paragraph.push_str(line);
        }
        _ => {
            state.in_paragraph = true;
            state.paragraphs.push(line.to_string());
        }
    }
}
