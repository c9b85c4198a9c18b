//! Structured configuration issues.
//!
//! Config validation never fails outright: it collects every detected
//! problem with a severity so the caller can decide whether to abort or
//! fall back to defaults.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A threshold is NaN or outside `[0, 1]`.
    ThresholdOutOfRange { field: String },
    /// The fallback threshold is stricter than the primary threshold,
    /// so the fallback pass can never admit anything new.
    FallbackAbovePrimary,
    /// A registry entry has an empty model id.
    EmptyModelId,
    /// The same model id is registered more than once.
    DuplicateModelId { id: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
