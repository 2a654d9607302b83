mod validate;

pub use validate::Validate;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads a config from a YAML file, falling back to `Default` when the file
/// does not exist. A file that exists but fails to parse or validate is an
/// error rather than a silent fallback.
pub fn load_yaml_file<TConfig>(path: &Path) -> Result<TConfig, String>
where
    TConfig: DeserializeOwned + Validate + Default,
{
    if !path.exists() {
        return Ok(TConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
