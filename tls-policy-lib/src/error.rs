use std::fmt;

use thiserror::Error;

/// Which naming vocabulary a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    CipherSuite,
    Curve,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::CipherSuite => f.write_str("cipher suite"),
            NameKind::Curve => f.write_str("curve"),
        }
    }
}

/// Errors that can occur while resolving a TLS policy
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("{kind} '{name}' is not recognized")]
    NameNotRecognized { kind: NameKind, name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TLS error: {0}")]
    Tls(String),
}

impl PolicyError {
    pub(crate) fn unknown_suite(name: impl Into<String>) -> Self {
        Self::NameNotRecognized { kind: NameKind::CipherSuite, name: name.into() }
    }

    pub(crate) fn unknown_curve(name: impl Into<String>) -> Self {
        Self::NameNotRecognized { kind: NameKind::Curve, name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, PolicyError>;
