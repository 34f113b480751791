pub mod cipher_suites;
pub mod curves;
pub mod policy;

pub use cipher_suites::{
    default_cipher_suites, Authentication, BulkCipher, CipherSuiteEntry, HashAlgorithm,
    KeyExchange, RustlsSuiteSource, SuiteProfile, SuiteRegistry, SupportedSuiteSource,
    DEFAULT_SUITE_PROFILES,
};
pub use curves::{default_curve_preferences, CurveEntry, CurveId, CurveRegistry, CURVES};
pub use policy::ResolvedTlsPolicy;
