//! Runtime server configuration.
//!
//! Layered, lowest priority first: built-in defaults, the TOML file given with
//! `--config` (optional), then `CONTACTS_*` environment variables
//! (e.g. `CONTACTS_PORT=9000`, `CONTACTS_STORE_PATH=/var/lib/contacts.db`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Path prefix the contact routes are nested under. `/` mounts them at the
  /// root next to the greeting.
  pub api_prefix: String,
}

impl ServerConfig {
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000)?
      .set_default("store_path", "contacts.db")?
      .set_default("api_prefix", "/api")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("CONTACTS"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("contacts.db"));
    assert_eq!(cfg.api_prefix, "/api");
    assert_eq!(cfg.address(), "127.0.0.1:8000");
  }

  #[test]
  fn tilde_paths_are_left_alone_without_prefix() {
    assert_eq!(expand_tilde(Path::new("/tmp/c.db")), PathBuf::from("/tmp/c.db"));
    assert_eq!(expand_tilde(Path::new("c~/x.db")), PathBuf::from("c~/x.db"));
  }

  #[test]
  fn tilde_expands_to_home() {
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/contacts.db")),
        PathBuf::from(home).join("contacts.db")
      );
    }
  }
}
