//! Gallery configuration

use crate::input::DEFAULT_SWIPE_THRESHOLD;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main gallery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub scan: ScanConfig,
    pub input: InputConfig,
    pub preload: PreloadConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            input: InputConfig::default(),
            preload: PreloadConfig::default(),
        }
    }
}

/// Folder scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Image extensions (lowercase, without dot) included in a scan.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "webp", "bmp", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Input handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum horizontal travel for a touch swipe to navigate.
    pub swipe_threshold: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Neighbor preloading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    pub enabled: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl GalleryConfig {
    /// Load configuration from file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "FaveGallery", "FaveGallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_common_image_extensions() {
        let config = GalleryConfig::default();
        assert!(config.scan.extensions.contains(&"jpg".to_string()));
        assert!(config.scan.extensions.contains(&"webp".to_string()));
        assert_eq!(config.input.swipe_threshold, 50.0);
        assert!(config.preload.enabled);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: GalleryConfig = toml::from_str(
            r#"
            [input]
            swipe_threshold = 80.0
        "#,
        )
        .unwrap();

        assert_eq!(config.input.swipe_threshold, 80.0);
        assert!(config.preload.enabled);
        assert!(!config.scan.extensions.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = GalleryConfig::default();
        config.preload.enabled = false;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: GalleryConfig = toml::from_str(&serialized).unwrap();
        assert!(!restored.preload.enabled);
    }
}
