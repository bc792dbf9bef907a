pub mod schema;

pub use schema::PaletteConfig;

use band_core::{ColorError, Result};
use std::path::{Path, PathBuf};

/// Load palette configuration from a TOML file.  Returns
/// `PaletteConfig::default()` if the file doesn't exist so callers always
/// have the reference palette.
pub fn load(path: impl AsRef<Path>) -> Result<PaletteConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using the default palette.",
            path.display()
        );
        return Ok(PaletteConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ColorError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| ColorError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("colorband").join("colorband.toml")
}
