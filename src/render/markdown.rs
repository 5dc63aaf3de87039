//! GitHub-flavored markdown renderer.
//!
//! Layout: an index, then one `##` section per class (constructor first,
//! methods as `###` subsections), then one `##` section per function.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Documentation) -> Result<String> {
        let mut output = String::new();

        if !doc.is_empty() {
            output.push_str("## Index\n\n");
            for class in &doc.classes {
                output.push_str(&toc::render_toc_item(&class.name, 0));
                output.push('\n');
                for method in &class.methods {
                    output.push_str(&toc::render_toc_item(&method.name, 1));
                    output.push('\n');
                }
            }
            for func in &doc.functions {
                output.push_str(&toc::render_toc_item(&func.name, 0));
                output.push('\n');
            }
            output.push('\n');
        }

        for class in &doc.classes {
            output.push_str(&render_function(&class.constructor, 2));
            output.push('\n');
            for method in &class.methods {
                output.push_str(&render_function(method, 3));
                output.push('\n');
            }
        }

        for func in &doc.functions {
            output.push_str(&render_function(func, 2));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one function, constructor or method at the given heading level.
fn render_function(func: &FunctionRecord, level: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{} {}\n", "#".repeat(level), func.name));

    let badges = render_badges(func);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    lines.push(format!("`{}`", func.signature()));
    lines.push(String::new());

    if let Some(ref desc) = func.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }

    if func.has_described_arguments {
        lines.push("#### Arguments\n".to_string());
        for arg in &func.arguments {
            lines.push(format!("* {}", render_arg(arg)));
        }
        lines.push(String::new());
    }

    if !func.fields.is_empty() {
        lines.push("#### Fields\n".to_string());
        for field in &func.fields {
            lines.push(format!(
                "* **{}**: {}",
                field.name,
                field.description.replace('\n', "\n  ")
            ));
        }
        lines.push(String::new());
    }

    if !func.see_also.is_empty() {
        lines.push("#### See also\n".to_string());
        for see in &func.see_also {
            lines.push(format!("* {}", toc::render_toc_link(see)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `x int desc` → `**x** (int): desc`, optional arguments marked as such.
fn render_arg(arg: &Argument) -> String {
    let mut qualifiers: Vec<&str> = Vec::new();
    if !arg.type_name.is_empty() {
        qualifiers.push(&arg.type_name);
    }
    if arg.optional {
        qualifiers.push("optional");
    }

    let mut out = format!("**{}**", arg.name);
    if !qualifiers.is_empty() {
        out.push_str(&format!(" ({})", qualifiers.join(", ")));
    }
    if let Some(ref desc) = arg.description {
        out.push_str(": ");
        out.push_str(&desc.replace('\n', "\n  "));
    }
    out
}

/// Lifecycle and visibility badges: `> *`abstract`* *`private`* *`deprecated`*`.
fn render_badges(func: &FunctionRecord) -> String {
    let badges: Vec<&str> = [
        (func.is_abstract, "*`abstract`*"),
        (func.is_private, "*`private`*"),
        (func.is_deprecated, "*`deprecated`*"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, badge)| *badge)
    .collect();

    if badges.is_empty() {
        return String::new();
    }

    format!("> {}", badges.join(" "))
}
