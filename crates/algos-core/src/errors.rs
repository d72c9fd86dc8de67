//! Structured error types shared across the algos crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AlgoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex ids, sizes, bounds).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the toolkit.
///
/// Expected negative outcomes (no cycle, no Eulerian path, unreachable vertex)
/// are ordinary return values and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AlgoError {
    /// Malformed graph input: out-of-range vertex ids, non-square matrices,
    /// unknown edge identifiers.
    #[error("invalid graph: {0}")]
    InvalidGraph(ErrorInfo),
    /// Well-formed graph, but the query parameters cannot be honoured
    /// (start vertex out of range, weight above the declared bound, ...).
    #[error("invalid query: {0}")]
    InvalidQuery(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl AlgoError {
    /// Builds an [`AlgoError::InvalidGraph`] from a code and message.
    pub fn invalid_graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        AlgoError::InvalidGraph(ErrorInfo::new(code, message))
    }

    /// Builds an [`AlgoError::InvalidQuery`] from a code and message.
    pub fn invalid_query(code: impl Into<String>, message: impl Into<String>) -> Self {
        AlgoError::InvalidQuery(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AlgoError::InvalidGraph(info) | AlgoError::InvalidQuery(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the wrapped payload.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            AlgoError::InvalidGraph(info) => {
                AlgoError::InvalidGraph(info.with_context(key, value))
            }
            AlgoError::InvalidQuery(info) => {
                AlgoError::InvalidQuery(info.with_context(key, value))
            }
        }
    }

    /// Sets a hint on the wrapped payload.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            AlgoError::InvalidGraph(info) => AlgoError::InvalidGraph(info.with_hint(hint)),
            AlgoError::InvalidQuery(info) => AlgoError::InvalidQuery(info.with_hint(hint)),
        }
    }
}
