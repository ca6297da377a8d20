//! Site configuration
//!
//! Embedded from `assets/site.json` at compile time. Every field has a default,
//! so a partial or broken document still yields a working site.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::models::Theme;
use crate::domain::services::TransitionTimings;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_config_fallback;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Skin used when storage holds nothing usable.
    pub default: Theme,
    /// Local storage key of the persisted preference.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: Theme::Terracotta,
            storage_key: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    pub theme: ThemeConfig,
    pub transition: TransitionTimings,
    /// Element whose scroll offset is reset after each transition.
    pub main_scroll_container_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Lennard Kaye".to_string(),
            theme: ThemeConfig::default(),
            transition: TransitionTimings::default(),
            main_scroll_container_id: "main-content".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.theme.storage_key.is_empty() {
            return Err(AppError::Config("theme.storage_key is empty".to_string()));
        }
        if self.main_scroll_container_id.is_empty() {
            return Err(AppError::Config(
                "main_scroll_container_id is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Embedded configuration, falling back to defaults on a bad document.
    pub fn embedded() -> Self {
        Self::from_json(SITE_JSON).unwrap_or_else(|e| {
            log_config_fallback(&e.to_string());
            Self::default()
        })
    }
}

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::embedded);

/// Process-wide configuration.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
