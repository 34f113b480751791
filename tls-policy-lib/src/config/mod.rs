mod loader;
mod tls;
mod types;

pub use loader::{load_from_path, load_from_str};
pub use tls::TlsPolicyOptions;
pub use types::{Config, LoggingConfig};
