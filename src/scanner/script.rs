//! Script source scanner.
//!
//! Finds `function name(params)` declarations (names may be `Class::method`)
//! and the `/* ... */` block ending on the line directly above each one.
//! Comment lines are handed over raw, without any marker stripping: only
//! bare-line blocks are supported, JSDoc ` * ` gutters stay part of the text.

use crate::model::{CommentLine, DeclareRecord};
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNC_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*",
        r"([A-Za-z_$][\w$]*(?:::[A-Za-z_$][\w$]*)*)\s*\(([^)]*)\)"
    ))
    .unwrap()
});

/// A finished comment block and the index of its closing line.
struct Block {
    lines: Vec<CommentLine>,
    end: usize,
}

/// Scan a script source into declarations.
pub fn scan(input: &str) -> Vec<DeclareRecord> {
    let lines: Vec<&str> = input.lines().collect();
    let mut declares = Vec::new();

    let mut open: Option<Vec<CommentLine>> = None;
    let mut last_block: Option<Block> = None;

    for (i, line) in lines.iter().enumerate() {
        let lineno = i as u32 + 1;

        if let Some(mut block) = open.take() {
            match line.find("*/") {
                Some(pos) => {
                    push_comment(&mut block, &line[..pos], lineno);
                    last_block = Some(Block { lines: block, end: i });
                }
                None => {
                    block.push(CommentLine::new(line.trim_end(), lineno));
                    open = Some(block);
                }
            }
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("/*") {
            // `/**` openers carry no text of their own; `/**/` is an empty block
            let rest = if rest.starts_with("*/") {
                rest
            } else {
                rest.strip_prefix('*').unwrap_or(rest)
            };
            let mut block = Vec::new();
            match rest.find("*/") {
                Some(pos) => {
                    push_comment(&mut block, &rest[..pos], lineno);
                    last_block = Some(Block { lines: block, end: i });
                }
                None => {
                    push_comment(&mut block, rest, lineno);
                    open = Some(block);
                }
            }
            continue;
        }

        if let Some(caps) = RE_FUNC_DECL.captures(line) {
            let comments = match last_block.take() {
                Some(block) if i > 0 && block.end == i - 1 => block.lines,
                _ => Vec::new(),
            };
            declares.push(DeclareRecord {
                name: caps[1].to_string(),
                parameter_names: parameter_names(&caps[2]),
                source_code: source_span(&lines, i),
                declaration_line: lineno,
                comments,
            });
        }
    }

    declares
}

/// Text on a delimiter line only counts when it is not blank.
fn push_comment(block: &mut Vec<CommentLine>, text: &str, lineno: u32) {
    if !text.trim().is_empty() {
        block.push(CommentLine::new(text.trim_end(), lineno));
    }
}

/// Bare parameter names: defaults, type annotations and rest markers removed.
fn parameter_names(params: &str) -> Vec<String> {
    params
        .split(',')
        .filter_map(|param| {
            let param = param.trim();
            let param = param.strip_prefix("...").unwrap_or(param);
            let param = param.split('=').next().unwrap_or(param);
            let param = param.split(':').next().unwrap_or(param);
            let param = param.trim().trim_end_matches('?');
            if param.is_empty() {
                None
            } else {
                Some(param.to_string())
            }
        })
        .collect()
}

/// Source text from the declaration line through its balanced closing brace.
fn source_span(lines: &[&str], start: usize) -> String {
    let mut depth: i32 = 0;
    let mut opened = false;

    for (j, line) in lines.iter().enumerate().skip(start) {
        // A body must open on the declaration line or the one after it
        if !opened && j > start + 1 {
            break;
        }
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if opened && depth <= 0 {
            return lines[start..=j].join("\n");
        }
    }

    if opened {
        // Unbalanced to end of input
        lines[start..].join("\n")
    } else {
        lines[start].to_string()
    }
}
