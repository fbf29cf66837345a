mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/wiscar-fit/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("wiscar-fit"))
}

/// Get the default config file path (~/.config/wiscar-fit/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/wiscar-fit/config.yaml) and falls back to the built-in
///   configuration when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Ok(path) if path.exists() => path,
            _ => {
                debug!("no config file, using built-in questionnaire");
                return Ok(Config::default());
            }
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Write the built-in configuration to `path` as YAML, atomically.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let yaml = serde_saphyr::to_string(&Config::builtin())
        .map_err(|e| anyhow::anyhow!("Failed to serialize default config: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let path = env::temp_dir().join("wiscar_fit_test_missing_config.yaml");
        let _ = fs::remove_file(&path);

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_write_then_load_default_config() {
        let path = env::temp_dir().join("wiscar_fit_test_default_config.yaml");
        let _ = fs::remove_file(&path);

        write_default_config(&path, false).unwrap();
        let loaded = load_config(Some(path.clone())).unwrap();
        assert_eq!(loaded, Config::builtin());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let path = env::temp_dir().join("wiscar_fit_test_existing_config.yaml");
        fs::write(&path, "{}").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        write_default_config(&path, true).unwrap();
        assert_eq!(load_config(Some(path.clone())).unwrap(), Config::builtin());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let path = env::temp_dir().join("wiscar_fit_test_invalid_config.yaml");
        fs::write(&path, "catalog: [oops").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&path);
    }
}
