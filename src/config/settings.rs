use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::audit::ExtractMode;
use crate::error::{AuditError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// `1` forwards the latest user/context pair for audit; any other value
    /// forwards the latest user message only.
    pub all_dialog_record: i64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            all_dialog_record: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;
        let settings = Self::load_from(&config_path)?;
        tracing::info!(path = %config_path, "loaded configuration");
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn extract_mode(&self) -> ExtractMode {
        ExtractMode::from_flag(self.audit.all_dialog_record)
    }

    fn find_config_file() -> Result<String> {
        let possible_names = ["custom-config.toml", "config.toml"];

        for name in &possible_names {
            if Path::new(name).exists() {
                return Ok(name.to_string());
            }
        }

        Err(AuditError::Config(
            "Configuration file not found. Please create custom-config.toml or config.toml"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_full_config() {
        let file = write_config(
            r#"
[audit]
all_dialog_record = 1

[moderation]
base_url = "https://moderation.internal"
api_key = "sk-test"
timeout_secs = 5
"#,
        );

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.audit.all_dialog_record, 1);
        assert_eq!(settings.extract_mode(), ExtractMode::AllDialog);
        assert_eq!(settings.moderation.base_url, "https://moderation.internal");
        assert_eq!(settings.moderation.timeout_secs, 5);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file = write_config("");

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.audit.all_dialog_record, 0);
        assert_eq!(settings.extract_mode(), ExtractMode::LastUserOnly);
        assert_eq!(settings.moderation.base_url, "https://api.openai.com");
        assert_eq!(settings.moderation.timeout_secs, 30);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let file = write_config("[moderation]\napi_key = \"sk-live\"\n");

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.moderation.api_key, "sk-live");
        assert_eq!(settings.moderation.base_url, "https://api.openai.com");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let file = write_config("audit = [nonsense");
        assert!(Settings::load_from(file.path()).is_err());
    }
}
