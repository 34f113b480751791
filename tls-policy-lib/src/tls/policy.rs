use std::sync::Arc;

use tokio_rustls::rustls::crypto::{aws_lc_rs, CryptoProvider};
use tokio_rustls::rustls::{
    CipherSuite, ConfigBuilder, ServerConfig, SupportedCipherSuite, WantsVerifier,
};
use tracing::{debug, warn};

use crate::config::TlsPolicyOptions;
use crate::error::{PolicyError, Result};
use crate::tls::cipher_suites::{SuiteRegistry, DEFAULT_SUITE_PROFILES};
use crate::tls::curves::{curve_name, default_curve_preferences, CurveId, CurveRegistry};

/// Cipher suites and curves a server offers, as identifiers, most preferred first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTlsPolicy {
    pub cipher_suites: Vec<u16>,
    pub curve_preferences: Vec<CurveId>,
}

impl ResolvedTlsPolicy {
    /// Resolves operator options against the registries.
    ///
    /// An empty list falls back to the built-in defaults. Names keep their
    /// configured order; repeats are dropped. Any name the registries don't know
    /// fails the whole resolution with [`PolicyError::NameNotRecognized`].
    pub fn resolve(
        options: &TlsPolicyOptions,
        suites: &SuiteRegistry,
        curves: &CurveRegistry,
    ) -> Result<Self> {
        let cipher_suites = if options.cipher_suites.is_empty() {
            default_suites(suites)?
        } else {
            resolve_suite_names(&options.cipher_suites, suites)?
        };

        let curve_preferences = if options.curve_preferences.is_empty() {
            default_curve_preferences().to_vec()
        } else {
            resolve_curve_names(&options.curve_preferences, curves)?
        };

        debug!(
            cipher_suites = cipher_suites.len(),
            curves = curve_preferences.len(),
            "tls policy resolved"
        );
        Ok(Self { cipher_suites, curve_preferences })
    }

    /// The built-in default posture
    pub fn defaults(suites: &SuiteRegistry) -> Result<Self> {
        Ok(Self {
            cipher_suites: default_suites(suites)?,
            curve_preferences: default_curve_preferences().to_vec(),
        })
    }

    /// Narrows and reorders a rustls provider to this policy.
    ///
    /// When the policy names no TLS 1.3 suite, the provider's TLS 1.3 suites are
    /// kept in front and the list only governs TLS 1.2. Suites and curves the
    /// provider cannot offer are skipped; if none of the listed suites or none
    /// of the listed curves is offered, the error names everything skipped.
    pub fn apply_to_provider(&self, provider: CryptoProvider) -> Result<CryptoProvider> {
        let offered_id = |suite: &SupportedCipherSuite| u16::from(suite.suite());

        let names_tls13 = provider
            .cipher_suites
            .iter()
            .any(|s| s.tls13().is_some() && self.cipher_suites.contains(&offered_id(s)));

        let mut cipher_suites: Vec<SupportedCipherSuite> = Vec::new();
        if !names_tls13 {
            cipher_suites.extend(provider.cipher_suites.iter().filter(|s| s.tls13().is_some()));
        }
        let mut skipped_suites = Vec::new();
        for id in &self.cipher_suites {
            match provider.cipher_suites.iter().find(|s| offered_id(s) == *id) {
                Some(suite) => cipher_suites.push(*suite),
                None => {
                    let name = format!("{:?}", CipherSuite::from(*id));
                    warn!(
                        cipher_suite = %name,
                        "cipher suite not offered by crypto provider, skipped"
                    );
                    skipped_suites.push(name);
                }
            }
        }
        let none_offered =
            !self.cipher_suites.is_empty() && skipped_suites.len() == self.cipher_suites.len();
        if none_offered || cipher_suites.is_empty() {
            return Err(PolicyError::Tls(format!(
                "no configured cipher suite is offered by the crypto provider: {}",
                skipped_suites.join(", ")
            )));
        }

        let mut kx_groups = Vec::with_capacity(self.curve_preferences.len());
        let mut skipped_curves = Vec::new();
        for curve in &self.curve_preferences {
            match provider.kx_groups.iter().find(|g| g.name() == *curve) {
                Some(group) => kx_groups.push(*group),
                None => {
                    let name = curve_name(*curve)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{curve:?}"));
                    warn!(curve = %name, "curve not offered by crypto provider, skipped");
                    skipped_curves.push(name);
                }
            }
        }
        if kx_groups.is_empty() {
            return Err(PolicyError::Tls(format!(
                "no configured curve is offered by the crypto provider: {}",
                skipped_curves.join(", ")
            )));
        }

        Ok(CryptoProvider { cipher_suites, kx_groups, ..provider })
    }

    /// Server config builder over the aws-lc-rs provider narrowed to this policy.
    ///
    /// Certificates and client auth are left to the caller.
    pub fn build_server_config(&self) -> Result<ConfigBuilder<ServerConfig, WantsVerifier>> {
        let provider = self.apply_to_provider(aws_lc_rs::default_provider())?;
        ServerConfig::builder_with_provider(Arc::new(provider))
            .with_safe_default_protocol_versions()
            .map_err(|e| PolicyError::Tls(format!("Failed to build TLS config: {e}")))
    }
}

fn default_suites(suites: &SuiteRegistry) -> Result<Vec<u16>> {
    DEFAULT_SUITE_PROFILES
        .iter()
        .map(|profile| match suites.resolve_suite_id(profile.id) {
            Some(_) => Ok(profile.id),
            None => Err(PolicyError::unknown_suite(profile.name)),
        })
        .collect()
}

fn resolve_suite_names(names: &[String], suites: &SuiteRegistry) -> Result<Vec<u16>> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let id = suites.resolve_suite_name(name).ok_or_else(|| PolicyError::unknown_suite(name))?;
        if ids.contains(&id) {
            debug!(cipher_suite = %name, "duplicate cipher suite ignored");
            continue;
        }
        ids.push(id);
    }
    Ok(ids)
}

fn resolve_curve_names(names: &[String], curves: &CurveRegistry) -> Result<Vec<CurveId>> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let id = curves.resolve_curve_name(name).ok_or_else(|| PolicyError::unknown_curve(name))?;
        if ids.contains(&id) {
            debug!(curve = %name, "duplicate curve ignored");
            continue;
        }
        ids.push(id);
    }
    Ok(ids)
}
