use serde::Deserialize;

/// Operator-supplied cipher suite and curve selection
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TlsPolicyOptions {
    /// Allowed cipher suites (by name), most preferred first
    ///
    /// Default: empty (uses the built-in default suite list)
    /// See `SuiteRegistry::entries()` for the names the runtime knows.
    #[serde(default)]
    pub cipher_suites: Vec<String>,
    /// Elliptic curve preferences (key exchange groups)
    ///
    /// Specifies the order of preference for elliptic curves used in ECDHE key exchange.
    /// The first curve in the list is preferred.
    /// Options: "X25519", "CurveP256", "CurveP384", "CurveP521"
    ///
    /// Default: empty (uses the built-in default curve order)
    #[serde(default)]
    pub curve_preferences: Vec<String>,
}
