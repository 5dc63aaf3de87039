//! dokus — build documentation models from annotated function comments.
//!
//! The first comment line may restate the signature (`string foo(int x, [bool y])`),
//! following lines are free text, and `@tag` lines carry argument and field
//! descriptions, cross-references and visibility flags. Functions named like their
//! return type become classes; `Class::method` functions become their methods.

pub mod diagnostics;
pub mod identifier;
pub mod model;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod toc;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use identifier::{IdentifierValidator, ScriptIdentifiers};
pub use model::{
    Argument, ClassRecord, CommentLine, DeclareRecord, Documentation, FieldDoc, FunctionRecord,
};
pub use parser::{document_all, document_function, extract_classes, Context};
