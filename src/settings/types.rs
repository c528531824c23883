use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub version: u32,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with the defaults: version 1, dark mode on
    pub fn new() -> Self {
        Self {
            version: 1,
            dark_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_dark_mode() {
        let settings = Settings::new();
        assert_eq!(settings.version, 1);
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_missing_dark_mode_field_defaults_on() {
        let settings: Settings = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::new();
        settings.dark_mode = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
