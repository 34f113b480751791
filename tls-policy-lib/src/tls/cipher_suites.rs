use std::sync::LazyLock;

use ahash::AHashMap;
use tokio_rustls::rustls::crypto::aws_lc_rs;
use tokio_rustls::rustls::CipherSuite;
use tracing::{debug, warn};

/// A cipher suite as exposed by a crypto runtime: display name and IANA codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherSuiteEntry {
    pub name: String,
    pub id: u16,
}

impl CipherSuiteEntry {
    pub fn new(name: impl Into<String>, id: u16) -> Self {
        Self { name: name.into(), id }
    }
}

impl From<CipherSuite> for CipherSuiteEntry {
    fn from(suite: CipherSuite) -> Self {
        Self { name: format!("{suite:?}"), id: u16::from(suite) }
    }
}

/// Catalog of cipher suites a crypto runtime can negotiate.
///
/// The runtime splits its suites in two: the ones it still considers safe and
/// the ones it only keeps around for legacy peers. The registry takes both.
pub trait SupportedSuiteSource {
    fn secure_suites(&self) -> Vec<CipherSuiteEntry>;
    fn insecure_suites(&self) -> Vec<CipherSuiteEntry>;
}

/// Suite catalog of rustls with the aws-lc-rs crypto provider.
///
/// rustls ships no legacy suites, so the insecure catalog is always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustlsSuiteSource;

impl SupportedSuiteSource for RustlsSuiteSource {
    fn secure_suites(&self) -> Vec<CipherSuiteEntry> {
        aws_lc_rs::ALL_CIPHER_SUITES
            .iter()
            .map(|suite| CipherSuiteEntry::from(suite.suite()))
            .collect()
    }

    fn insecure_suites(&self) -> Vec<CipherSuiteEntry> {
        Vec::new()
    }
}

/// Bidirectional name <-> id map over every suite a runtime knows about.
///
/// Built once, read-only afterwards. Both maps are only ever written together
/// so each name has exactly one id and each id exactly one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteRegistry {
    name_to_id: AHashMap<String, u16>,
    id_to_name: AHashMap<u16, String>,
}

static RUSTLS_REGISTRY: LazyLock<SuiteRegistry> =
    LazyLock::new(|| SuiteRegistry::build(&RustlsSuiteSource));

impl SuiteRegistry {
    /// Builds the registry from the union of the secure and insecure catalogs.
    ///
    /// Nothing is filtered here; deciding which suites are acceptable is up to
    /// the policy consumer. An empty catalog gives an empty registry.
    pub fn build<S: SupportedSuiteSource + ?Sized>(source: &S) -> Self {
        let secure = source.secure_suites();
        let insecure = source.insecure_suites();
        let (secure_count, insecure_count) = (secure.len(), insecure.len());

        let capacity = secure_count.saturating_add(insecure_count);
        let mut registry = Self {
            name_to_id: AHashMap::with_capacity(capacity),
            id_to_name: AHashMap::with_capacity(capacity),
        };
        for entry in secure.into_iter().chain(insecure) {
            registry.insert(entry);
        }

        debug!(
            secure = secure_count,
            insecure = insecure_count,
            registered = registry.len(),
            "cipher suite registry built"
        );
        registry
    }

    /// Process-wide registry over the rustls catalog, built on first use.
    pub fn rustls() -> &'static SuiteRegistry {
        &RUSTLS_REGISTRY
    }

    fn insert(&mut self, entry: CipherSuiteEntry) {
        let CipherSuiteEntry { name, id } = entry;

        // A runtime reporting the same name or id twice with different partners
        // would break the bijection; the later entry replaces the earlier pair.
        if let Some(prev_id) = self.name_to_id.insert(name.clone(), id) {
            if prev_id != id {
                warn!(
                    cipher_suite = %name,
                    prev_id,
                    id,
                    "cipher suite name re-registered with a new id"
                );
                self.id_to_name.remove(&prev_id);
            }
        }
        if let Some(prev_name) = self.id_to_name.insert(id, name.clone()) {
            if prev_name != name {
                warn!(
                    cipher_suite = %name,
                    %prev_name,
                    id,
                    "cipher suite id re-registered with a new name"
                );
                self.name_to_id.remove(&prev_name);
            }
        }
    }

    /// Numeric identifier for a suite name, `None` if the runtime doesn't know it.
    pub fn resolve_suite_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    /// Display name for a numeric identifier, `None` if the runtime doesn't know it.
    pub fn resolve_suite_id(&self, id: u16) -> Option<&str> {
        self.id_to_name.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    /// All registered entries, ordered by id.
    pub fn entries(&self) -> Vec<CipherSuiteEntry> {
        let mut entries: Vec<CipherSuiteEntry> = self
            .id_to_name
            .iter()
            .map(|(id, name)| CipherSuiteEntry::new(name.as_str(), *id))
            .collect();
        entries.sort_by_key(|entry| entry.id);
        entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchange {
    Ecdhe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication {
    Ecdsa,
    Rsa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkCipher {
    Aes128Gcm,
    Aes256Gcm,
    ChaCha20Poly1305,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
}

/// A default suite spelled out both as its IANA codepoint and as the
/// algorithms it stands for, so it can be re-resolved against a runtime that
/// names suites differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteProfile {
    pub id: u16,
    pub name: &'static str,
    pub key_exchange: KeyExchange,
    pub authentication: Authentication,
    pub bulk_cipher: BulkCipher,
    pub hash: HashAlgorithm,
}

const fn ecdhe(
    id: u16,
    name: &'static str,
    authentication: Authentication,
    bulk_cipher: BulkCipher,
    hash: HashAlgorithm,
) -> SuiteProfile {
    SuiteProfile { id, name, key_exchange: KeyExchange::Ecdhe, authentication, bulk_cipher, hash }
}

/// Default suites, most preferred first.
///
/// AES-128-GCM leads (cheapest with AES hardware), ChaCha20-Poly1305 follows
/// (cheapest without it) and AES-256-GCM closes as the slower, stronger fallback.
/// ECDSA before RSA within each tier.
pub const DEFAULT_SUITE_PROFILES: [SuiteProfile; 6] = [
    ecdhe(
        0xc02b,
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        Authentication::Ecdsa,
        BulkCipher::Aes128Gcm,
        HashAlgorithm::Sha256,
    ),
    ecdhe(
        0xc02f,
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        Authentication::Rsa,
        BulkCipher::Aes128Gcm,
        HashAlgorithm::Sha256,
    ),
    ecdhe(
        0xcca9,
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        Authentication::Ecdsa,
        BulkCipher::ChaCha20Poly1305,
        HashAlgorithm::Sha256,
    ),
    ecdhe(
        0xcca8,
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Authentication::Rsa,
        BulkCipher::ChaCha20Poly1305,
        HashAlgorithm::Sha256,
    ),
    ecdhe(
        0xc02c,
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        Authentication::Ecdsa,
        BulkCipher::Aes256Gcm,
        HashAlgorithm::Sha384,
    ),
    ecdhe(
        0xc030,
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        Authentication::Rsa,
        BulkCipher::Aes256Gcm,
        HashAlgorithm::Sha384,
    ),
];

const DEFAULT_CIPHER_SUITES: [u16; 6] = [
    DEFAULT_SUITE_PROFILES[0].id,
    DEFAULT_SUITE_PROFILES[1].id,
    DEFAULT_SUITE_PROFILES[2].id,
    DEFAULT_SUITE_PROFILES[3].id,
    DEFAULT_SUITE_PROFILES[4].id,
    DEFAULT_SUITE_PROFILES[5].id,
];

/// Cipher suites offered when the operator configures none.
///
/// Fixed on purpose: if a runtime stops shipping one of these, resolving the
/// defaults against its registry fails instead of quietly shrinking the list.
pub fn default_cipher_suites() -> &'static [u16] {
    &DEFAULT_CIPHER_SUITES
}
