use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted appearance preferences.
///
/// Screens treat this store as read-only; the settings screen is the only
/// writer. Colors are stored as hex strings so the file stays hand-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Draw the status bar fully transparent instead of a themed color.
    #[serde(default)]
    pub transparent_status_bar: bool,
    /// Primary accent color; its luminance selects the light or dark style.
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    /// Window background color.
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transparent_status_bar: false,
            primary_color: default_primary_color(),
            background_color: default_background_color(),
        }
    }
}

fn default_primary_color() -> String {
    "#eceff1".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

/// Default config file location (`~/.config/lectern/config.toml`).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
        .join("lectern")
        .join("config.toml")
}

impl Config {
    /// Load configuration from file or create the default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Set secure permissions (600: owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }
}
