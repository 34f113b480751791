#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tls;

pub use config::{load_from_path, load_from_str, Config, LoggingConfig, TlsPolicyOptions};
pub use error::{NameKind, PolicyError, Result};
pub use tls::{
    default_cipher_suites, default_curve_preferences, CipherSuiteEntry, CurveId, CurveRegistry,
    ResolvedTlsPolicy, RustlsSuiteSource, SuiteRegistry, SupportedSuiteSource,
};
