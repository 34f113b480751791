#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;
use tls_policy_lib::telemetry::init_tracing;
use tls_policy_lib::{load_from_path, Config, CurveRegistry, ResolvedTlsPolicy, SuiteRegistry};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve TLS cipher suite and curve policy")]
struct Cli {
    /// Path to configuration TOML file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE", env = "TLS_POLICY_CONFIG")]
    config: Option<PathBuf>,

    /// List every known cipher suite and curve instead of resolving a policy
    #[arg(long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_from_path(path),
        None => Ok(Config::default()),
    };
    let logging = loaded.as_ref().map(|cfg| cfg.logging.clone()).unwrap_or_default();
    if let Err(err) = init_tracing(&logging) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(%err, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let suites = SuiteRegistry::rustls();
    let curves = CurveRegistry::new();

    if cli.list {
        for entry in suites.entries() {
            println!("{:#06x} {}", entry.id, entry.name);
        }
        for name in curves.names() {
            println!("{name}");
        }
        return;
    }

    match ResolvedTlsPolicy::resolve(&cfg.tls, suites, &curves) {
        Ok(policy) => {
            info!(
                cipher_suites = policy.cipher_suites.len(),
                curves = policy.curve_preferences.len(),
                "tls policy resolved"
            );
            for id in &policy.cipher_suites {
                println!("{:#06x} {}", id, suites.resolve_suite_id(*id).unwrap_or("unknown"));
            }
            for curve in &policy.curve_preferences {
                println!("{}", curves.curve_name(*curve).unwrap_or("unknown"));
            }
        }
        Err(err) => {
            error!(%err, "invalid tls policy");
            std::process::exit(1);
        }
    }
}
