use super::types::Settings;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/bvac/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("bvac")
}

/// Get the default settings file path (~/.config/bvac/settings.json)
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}

/// Load settings from a JSON file
///
/// If the file doesn't exist, returns the defaults.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open settings file at {}", path.display()))?;

    let settings: Settings = serde_json::from_reader(file).context("Failed to load settings")?;

    // Version check
    if settings.version != 1 {
        anyhow::bail!("Unsupported settings version: {}", settings.version);
    }

    Ok(settings)
}

/// Save settings to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted
/// state. Creates the parent directory if it doesn't exist.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, settings).context("Failed to serialize settings")?;

    file.commit().context("Failed to save settings")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_path = env::temp_dir().join("bvac_test_missing.json");
        // Ensure it doesn't exist
        let _ = std::fs::remove_file(&temp_path);

        let settings = load_settings(&temp_path).unwrap();
        assert_eq!(settings.version, 1);
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("bvac_test_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut settings = Settings::new();
        settings.dark_mode = false;

        save_settings(&temp_path, &settings).unwrap();
        let loaded = load_settings(&temp_path).unwrap();

        assert_eq!(loaded.version, 1);
        assert!(!loaded.dark_mode);

        // Cleanup
        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let temp_path = env::temp_dir().join("bvac_test_version.json");
        std::fs::write(&temp_path, r#"{"version": 2, "dark_mode": true}"#).unwrap();

        let result = load_settings(&temp_path);
        assert!(result.is_err());

        let _ = std::fs::remove_file(&temp_path);
    }
}
