//! Comment interpretation — turns declarations into documented functions and classes.

pub mod args;
pub mod classes;
pub mod comment;
pub mod directive;
pub mod header;

pub use classes::extract_classes;
pub use comment::document_function;

use crate::diagnostics::DiagnosticSink;
use crate::identifier::IdentifierValidator;
use crate::model::{DeclareRecord, Documentation};

/// Collaborators shared by every declaration of one source file.
pub struct Context<'a> {
    /// Source file name reported with diagnostics
    pub filename: Option<&'a str>,
    pub identifiers: &'a dyn IdentifierValidator,
    pub sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Context<'a> {
    pub fn new(
        filename: Option<&'a str>,
        identifiers: &'a dyn IdentifierValidator,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            filename,
            identifiers,
            sink,
        }
    }

    pub(crate) fn warn(&mut self, message: &str, lineno: u32) {
        self.sink.warn(message, self.filename, Some(lineno));
    }
}

/// Document every declaration, then group constructors and methods into classes.
pub fn document_all(declares: &[DeclareRecord], ctx: &mut Context<'_>) -> Documentation {
    let functions = declares
        .iter()
        .map(|declare| document_function(declare, ctx))
        .collect();
    extract_classes(functions)
}
