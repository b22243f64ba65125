use crate::unit::{CharClass, Unit};
use std::fmt;
use thiserror::Error;

/// Which namespace a definition lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    CharSet,
    Translit,
    Diacritics,
    Language,
}

impl DefinitionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::CharSet => "char set",
            DefinitionKind::Translit => "translit table",
            DefinitionKind::Diacritics => "diacritics map",
            DefinitionKind::Language => "language",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural errors. Every variant aborts the compilation run; there is no
/// partial artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("{kind} `{name}` referenced by `{referrer}` is never declared")]
    UndefinedReference {
        kind: DefinitionKind,
        name: String,
        referrer: String,
    },

    #[error("language `{code}`: {unit:?} is both {first} and {second}")]
    ClassOverlap {
        code: String,
        unit: Unit,
        first: CharClass,
        second: CharClass,
    },

    #[error("cyclic reference: {}", .path.join(" -> "))]
    CyclicReference { path: Vec<String> },

    #[error("{kind} `{name}` is declared more than once")]
    DuplicateDefinition { kind: DefinitionKind, name: String },

    #[error("malformed definition `{name}`: {reason}")]
    MalformedDefinition { name: String, reason: String },

    #[error("too many {kind} tables for a 16-bit handle")]
    TooManyTables { kind: DefinitionKind },
}

impl CompileError {
    pub(crate) fn undefined(
        kind: DefinitionKind,
        name: impl Into<String>,
        referrer: impl Into<String>,
    ) -> Self {
        CompileError::UndefinedReference {
            kind,
            name: name.into(),
            referrer: referrer.into(),
        }
    }

    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CompileError::MalformedDefinition {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Raised when a regenerated artifact is compared against the canonical copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("artifact mismatch at line {line}: expected {expected:?}, found {found:?}")]
    ArtifactMismatch {
        line: usize,
        expected: String,
        found: String,
    },
}
