//! Diagnostic side-channel for comment interpretation.
//!
//! The parser never fails on malformed comments; it reports through a
//! [`DiagnosticSink`] and keeps going.

/// Receiver for non-fatal warnings raised while documenting a declaration.
pub trait DiagnosticSink {
    fn warn(&mut self, message: &str, filename: Option<&str>, lineno: Option<u32>);
}

/// A recorded warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub filename: Option<String>,
    pub lineno: Option<u32>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.filename, self.lineno) {
            (Some(file), Some(line)) => write!(f, "{}:{}: {}", file, line, self.message),
            (Some(file), None) => write!(f, "{}: {}", file, self.message),
            (None, Some(line)) => write!(f, "line {}: {}", line, self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

/// Emits every warning as a `tracing` event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, message: &str, filename: Option<&str>, lineno: Option<u32>) {
        tracing::warn!(file = filename, line = lineno, "{}", message);
    }
}

/// Keeps every warning in memory; optionally forwards to `tracing` as well.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
    forward: bool,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also log through [`TracingSink`].
    pub fn forwarding() -> Self {
        Self {
            diagnostics: Vec::new(),
            forward: true,
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&mut self, message: &str, filename: Option<&str>, lineno: Option<u32>) {
        if self.forward {
            TracingSink.warn(message, filename, lineno);
        }
        self.diagnostics.push(Diagnostic {
            message: message.to_string(),
            filename: filename.map(str::to_string),
            lineno,
        });
    }
}
