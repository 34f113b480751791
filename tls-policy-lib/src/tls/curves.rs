//! Elliptic curves (key exchange groups) an operator may name.
//!
//! Unlike cipher suites, the candidate set is small and stable, so it is a
//! fixed list instead of something read from the crypto runtime.

use ahash::AHashMap;
use tokio_rustls::rustls::NamedGroup;

/// IANA named-group codepoint of a curve
pub type CurveId = NamedGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveEntry {
    pub name: &'static str,
    pub id: CurveId,
}

/// Every curve that can be named in a policy
///
/// **Total: 4 curves**
pub const CURVES: [CurveEntry; 4] = [
    // Curve25519 - faster than P-256, comparable or better margin
    CurveEntry { name: "X25519", id: NamedGroup::X25519 },
    // NIST curves
    CurveEntry { name: "CurveP256", id: NamedGroup::secp256r1 },
    CurveEntry { name: "CurveP384", id: NamedGroup::secp384r1 },
    CurveEntry { name: "CurveP521", id: NamedGroup::secp521r1 },
];

const DEFAULT_CURVE_PREFERENCES: [CurveId; 4] =
    [NamedGroup::X25519, NamedGroup::secp256r1, NamedGroup::secp384r1, NamedGroup::secp521r1];

/// Curve preference order used when the operator configures none.
///
/// The handshake engine picks the first mutually supported curve, so fastest
/// and most modern comes first, strongest but slowest last.
pub fn default_curve_preferences() -> &'static [CurveId] {
    &DEFAULT_CURVE_PREFERENCES
}

/// Registered name of a curve
pub fn curve_name(id: CurveId) -> Option<&'static str> {
    CURVES.iter().find(|curve| curve.id == id).map(|curve| curve.name)
}

/// Exact, case-sensitive name -> curve map
#[derive(Debug, Clone)]
pub struct CurveRegistry {
    by_name: AHashMap<&'static str, CurveId>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self { by_name: CURVES.iter().map(|curve| (curve.name, curve.id)).collect() }
    }

    pub fn resolve_curve_name(&self, name: &str) -> Option<CurveId> {
        self.by_name.get(name).copied()
    }

    /// Registered name of a curve, for log output
    pub fn curve_name(&self, id: CurveId) -> Option<&'static str> {
        curve_name(id)
    }

    pub fn names(&self) -> Vec<&'static str> {
        CURVES.iter().map(|curve| curve.name).collect()
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_curves() {
        let registry = CurveRegistry::new();
        assert_eq!(registry.resolve_curve_name("X25519"), Some(NamedGroup::X25519));
        assert_eq!(registry.resolve_curve_name("CurveP256"), Some(NamedGroup::secp256r1));
        assert_eq!(registry.resolve_curve_name("CurveP384"), Some(NamedGroup::secp384r1));
        assert_eq!(registry.resolve_curve_name("CurveP521"), Some(NamedGroup::secp521r1));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let registry = CurveRegistry::new();
        assert_eq!(registry.resolve_curve_name("x25519"), None);
        assert_eq!(registry.resolve_curve_name("X25519 "), None);
        assert_eq!(registry.resolve_curve_name("P-256"), None);
        assert_eq!(registry.resolve_curve_name(""), None);
    }

    #[test]
    fn test_default_curve_order() {
        assert_eq!(
            default_curve_preferences(),
            &[
                NamedGroup::X25519,
                NamedGroup::secp256r1,
                NamedGroup::secp384r1,
                NamedGroup::secp521r1,
            ]
        );
    }

    #[test]
    fn test_curve_name_for_every_default() {
        let registry = CurveRegistry::new();
        let names: Vec<&str> =
            default_curve_preferences().iter().filter_map(|id| registry.curve_name(*id)).collect();
        assert_eq!(names, vec!["X25519", "CurveP256", "CurveP384", "CurveP521"]);
    }
}
