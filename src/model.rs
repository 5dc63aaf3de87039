//! Data model for documented functions and classes — format-agnostic.

use serde::{Deserialize, Serialize};

/// One raw comment line as handed over by a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLine {
    pub text: String,
    pub line: u32,
}

impl CommentLine {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// A declaration found by a scanner, together with the comment block above it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareRecord {
    pub name: String,
    #[serde(default)]
    pub parameter_names: Vec<String>,
    #[serde(default)]
    pub source_code: String,
    #[serde(default)]
    pub declaration_line: u32,
    #[serde(default)]
    pub comments: Vec<CommentLine>,
}

/// A single function argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    /// Declared type, empty when unknown
    #[serde(rename = "type")]
    pub type_name: String,
    pub optional: bool,
    /// @arg text, newline-joined when repeated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Argument {
    /// Untyped, required argument as supplied by a scanner.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// @field entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    pub description: String,
}

/// A single documented function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub return_type: String,
    pub variadic: bool,
    pub source_code: String,
    pub declaration_line: u32,
    /// Description paragraphs joined by a blank line
    pub description: Option<String>,
    /// @field entries, unique by name
    pub fields: Vec<FieldDoc>,
    /// @see entries
    pub see_also: Vec<String>,
    pub is_abstract: bool,
    pub is_private: bool,
    pub is_deprecated: bool,
    /// Set once any @arg matched an argument
    pub has_described_arguments: bool,
}

impl FunctionRecord {
    /// Start a record from a declaration: untyped arguments, nothing documented yet.
    pub fn from_declare(declare: &DeclareRecord) -> Self {
        Self {
            name: declare.name.clone(),
            arguments: declare
                .parameter_names
                .iter()
                .map(Argument::untyped)
                .collect(),
            source_code: declare.source_code.clone(),
            declaration_line: declare.declaration_line,
            ..Default::default()
        }
    }

    /// Human-readable signature: `string foo(int x, [bool y], ...)`.
    pub fn signature(&self) -> String {
        let mut params: Vec<String> = self
            .arguments
            .iter()
            .map(|arg| {
                let param = if arg.type_name.is_empty() {
                    arg.name.clone()
                } else {
                    format!("{} {}", arg.type_name, arg.name)
                };
                if arg.optional {
                    format!("[{}]", param)
                } else {
                    param
                }
            })
            .collect();
        if self.variadic {
            params.push("...".to_string());
        }

        let head = if self.return_type.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.return_type, self.name)
        };
        format!("{}({})", head, params.join(", "))
    }
}

/// A class assembled from a constructor-shaped function and its `Class::method` functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub constructor: FunctionRecord,
    pub methods: Vec<FunctionRecord>,
}

impl ClassRecord {
    pub fn from_constructor(constructor: FunctionRecord) -> Self {
        Self {
            name: constructor.name.clone(),
            constructor,
            methods: Vec::new(),
        }
    }

    pub fn add_method(&mut self, method: FunctionRecord) {
        self.methods.push(method);
    }
}

/// Complete documentation model for one input: classes plus remaining top-level functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    pub classes: Vec<ClassRecord>,
    pub functions: Vec<FunctionRecord>,
}

impl Documentation {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty()
    }
}
