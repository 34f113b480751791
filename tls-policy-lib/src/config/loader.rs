use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{PolicyError, Result};

/// Reads and validates a TOML config file
pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let path = p.as_ref();
    let txt = fs::read_to_string(path).map_err(|e| {
        PolicyError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    load_from_str(&txt)
}

/// Parses and validates TOML config text
pub fn load_from_str(txt: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(txt)
        .map_err(|e| PolicyError::Config(format!("Failed to parse config: {e}")))?;
    validate_config(&cfg)?;
    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.logging.level.trim().is_empty() {
        return Err(PolicyError::Config("logging.level cannot be empty".to_string()));
    }
    if cfg.tls.cipher_suites.iter().any(|s| s.trim().is_empty()) {
        return Err(PolicyError::Config("Cipher suite name cannot be empty".to_string()));
    }
    if cfg.tls.curve_preferences.iter().any(|c| c.trim().is_empty()) {
        return Err(PolicyError::Config("Curve name cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_suite_name() {
        let mut cfg = Config::default();
        cfg.tls.cipher_suites = vec!["  ".to_string()];
        assert!(matches!(validate_config(&cfg), Err(PolicyError::Config(_))));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_load_from_str_partial_tables() -> Result<()> {
        let cfg = load_from_str("[tls]\ncurve_preferences = [\"X25519\"]\n")?;
        assert_eq!(cfg.logging, crate::config::LoggingConfig::default());
        assert!(cfg.tls.cipher_suites.is_empty());
        assert_eq!(cfg.tls.curve_preferences, vec!["X25519"]);
        Ok(())
    }
}
