use tls_policy_lib::tls::cipher_suites::{
    default_cipher_suites, RustlsSuiteSource, SuiteRegistry, SupportedSuiteSource,
};
use tls_policy_lib::tls::curves::{default_curve_preferences, CurveRegistry};
use tokio_rustls::rustls::NamedGroup;

#[test]
fn test_round_trip_for_every_catalog_entry() {
    let registry = SuiteRegistry::build(&RustlsSuiteSource);
    let source = RustlsSuiteSource;
    let catalog: Vec<_> =
        source.secure_suites().into_iter().chain(source.insecure_suites()).collect();
    assert!(!catalog.is_empty());

    for entry in catalog {
        let id = registry.resolve_suite_name(&entry.name);
        assert_eq!(id, Some(entry.id), "no id for {}", entry.name);
        assert_eq!(registry.resolve_suite_id(entry.id), Some(entry.name.as_str()));
    }
}

#[test]
fn test_unknown_name_is_not_found() {
    let registry = SuiteRegistry::rustls();
    assert_eq!(registry.resolve_suite_name("does-not-exist"), None);
    assert_eq!(registry.resolve_suite_name(""), None);
    assert_eq!(registry.resolve_suite_id(0), None);
}

#[test]
fn test_rustls_catalog_covers_tls13_and_tls12() {
    let registry = SuiteRegistry::rustls();
    assert_eq!(registry.resolve_suite_name("TLS13_AES_128_GCM_SHA256"), Some(0x1301));
    assert_eq!(registry.resolve_suite_name("TLS13_AES_256_GCM_SHA384"), Some(0x1302));
    assert_eq!(registry.resolve_suite_name("TLS13_CHACHA20_POLY1305_SHA256"), Some(0x1303));
    assert_eq!(registry.resolve_suite_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"), Some(0xc02f));
}

#[test]
fn test_default_suites_resolve_in_order() {
    let registry = SuiteRegistry::rustls();
    let names: Vec<&str> = default_cipher_suites()
        .iter()
        .map(|id| registry.resolve_suite_id(*id).unwrap_or(""))
        .collect();

    assert_eq!(
        names,
        vec![
            "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
            "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
            "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
            "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
            "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        ]
    );
}

#[test]
fn test_default_curves_in_order() {
    assert_eq!(
        default_curve_preferences().to_vec(),
        vec![
            NamedGroup::X25519,
            NamedGroup::secp256r1,
            NamedGroup::secp384r1,
            NamedGroup::secp521r1,
        ]
    );
}

#[test]
fn test_curve_lookup_is_case_sensitive() {
    let curves = CurveRegistry::new();
    assert_eq!(curves.resolve_curve_name("X25519"), Some(NamedGroup::X25519));
    assert_eq!(curves.resolve_curve_name("x25519"), None);
    assert_eq!(curves.resolve_curve_name("curvep256"), None);
}

#[test]
fn test_build_is_idempotent() {
    let first = SuiteRegistry::build(&RustlsSuiteSource);
    let second = SuiteRegistry::build(&RustlsSuiteSource);
    assert_eq!(first, second);
    assert_eq!(first.len(), second.entries().len());
    assert_eq!(&first, SuiteRegistry::rustls());
}
