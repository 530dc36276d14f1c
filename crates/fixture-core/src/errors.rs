//! Error codes and diagnostic messages for fixture synthesis.
//!
//! # Error Taxonomy
//!
//! | Phase | Purpose | Error Codes |
//! |-------|---------|-------------|
//! | Description | Parse types, catalogs and configuration | E101-E103 |
//! | Synthesis | Produce a value for a descriptor | E201-E203 |
//! | Conversion | Turn a synthesized value into a Rust type | E301 |
//!
//! Synthesis is all-or-nothing: a failure anywhere in the recursive call tree
//! is returned to the caller of `resolve` and no partial value is produced.

use fixture_types::{Classifier, SubstitutionError, TypeParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a fixture request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Parsing type strings, catalog files and configuration
    Description,
    /// Running the resolver chain
    Synthesis,
    /// Converting values into typed results
    Conversion,
}

impl Phase {
    pub fn short_name(&self) -> &'static str {
        match self {
            Phase::Description => "description",
            Phase::Synthesis => "synthesis",
            Phase::Conversion => "conversion",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Specific error codes within each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// E101: Type string could not be parsed
    #[serde(rename = "E101")]
    InvalidTypeDescriptor,

    /// E102: Catalog document is malformed
    #[serde(rename = "E102")]
    InvalidCatalog,

    /// E103: Configuration values are inconsistent
    #[serde(rename = "E103")]
    InvalidConfig,

    /// E201: No synthesizer in the chain can produce the type
    #[serde(rename = "E201")]
    TypeNotSupported,

    /// E202: Class has no eligible constructor and no fallback
    #[serde(rename = "E202")]
    NoUsableConstructor,

    /// E203: Generic substitution hit a classifier kind the engine does not model
    #[serde(rename = "E203")]
    UnsupportedClassifierKind,

    /// E301: Value shape does not match the requested Rust type
    #[serde(rename = "E301")]
    ValueMismatch,
}

impl ErrorCode {
    /// Get the numeric code (e.g., 101, 201, etc.)
    pub fn numeric_code(&self) -> u16 {
        match self {
            ErrorCode::InvalidTypeDescriptor => 101,
            ErrorCode::InvalidCatalog => 102,
            ErrorCode::InvalidConfig => 103,
            ErrorCode::TypeNotSupported => 201,
            ErrorCode::NoUsableConstructor => 202,
            ErrorCode::UnsupportedClassifierKind => 203,
            ErrorCode::ValueMismatch => 301,
        }
    }

    /// Get the phase this error belongs to
    pub fn phase(&self) -> Phase {
        match self.numeric_code() / 100 {
            1 => Phase::Description,
            2 => Phase::Synthesis,
            _ => Phase::Conversion,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidTypeDescriptor => "type descriptor could not be parsed",
            ErrorCode::InvalidCatalog => "catalog document is invalid",
            ErrorCode::InvalidConfig => "configuration is invalid",
            ErrorCode::TypeNotSupported => "type is not supported",
            ErrorCode::NoUsableConstructor => "no usable constructor",
            ErrorCode::UnsupportedClassifierKind => "unsupported classifier kind",
            ErrorCode::ValueMismatch => "value does not match requested type",
        }
    }

    /// Get the string code (e.g., "E101", "E201", etc.)
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric_code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_string(), self.description())
    }
}

/// Complete failure information for a fixture request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub phase: Phase,
    pub code: ErrorCode,
    /// Human-readable error message with context
    pub message: String,
    /// Type involved in the failure, in descriptor syntax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

pub type FixtureResult<T> = Result<T, Failure>;

impl Failure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            phase: code.phase(),
            code,
            message: message.into(),
            type_name: None,
        }
    }

    /// Attach the type the failure is about.
    pub fn with_type(mut self, type_name: impl fmt::Display) -> Self {
        self.type_name = Some(type_name.to_string());
        self
    }

    pub fn type_not_supported(classifier: &Classifier) -> Self {
        Self::new(
            ErrorCode::TypeNotSupported,
            format!("no synthesizer can produce {}", classifier),
        )
        .with_type(classifier)
    }

    pub fn no_usable_constructor(classifier: &Classifier) -> Self {
        Self::new(
            ErrorCode::NoUsableConstructor,
            format!(
                "{} has no non-private constructor and no singleton or zero-argument fallback",
                classifier
            ),
        )
        .with_type(classifier)
    }

    pub fn unsupported_classifier_kind(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedClassifierKind, message)
    }

    pub fn value_mismatch(expected: &str, found: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ValueMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCatalog, message)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, message)
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.phase,
            self.code.code_string(),
            self.message
        )
    }
}

impl std::error::Error for Failure {}

impl From<TypeParseError> for Failure {
    fn from(err: TypeParseError) -> Self {
        Failure::new(ErrorCode::InvalidTypeDescriptor, err.reason).with_type(err.input)
    }
}

impl From<SubstitutionError> for Failure {
    fn from(err: SubstitutionError) -> Self {
        Failure::unsupported_classifier_kind(err.to_string())
    }
}
