use serde::Deserialize;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// The two skins of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Terracotta,
    Scandinavian,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Terracotta => "terracotta",
            Theme::Scandinavian => "scandinavian",
        }
    }

    /// Class set on the document root; terracotta is the unclassed base skin.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Terracotta => None,
            Theme::Scandinavian => Some("theme-scandinavian"),
        }
    }

    pub fn is_scandinavian(&self) -> bool {
        matches!(self, Theme::Scandinavian)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Terracotta => Theme::Scandinavian,
            Theme::Scandinavian => Theme::Terracotta,
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terracotta" => Ok(Theme::Terracotta),
            "scandinavian" => Ok(Theme::Scandinavian),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }
}

/// Swap a terracotta asset for its scandinavian counterpart when that skin is active.
///
/// `/assets/terracotta/hero.png` becomes `/assets/scandinavian/hero.png`.
pub fn themed_asset(path: &str, theme: Theme) -> String {
    if theme.is_scandinavian() && path.contains("/terracotta/") {
        path.replacen("/terracotta/", "/scandinavian/", 1)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("terracotta".parse::<Theme>().unwrap(), Theme::Terracotta);
        assert_eq!("scandinavian".parse::<Theme>().unwrap(), Theme::Scandinavian);
        assert!(matches!(
            "dark".parse::<Theme>(),
            Err(AppError::UnknownTheme(name)) if name == "dark"
        ));
    }

    #[test]
    fn test_toggle_and_root_class() {
        assert_eq!(Theme::Terracotta.toggled(), Theme::Scandinavian);
        assert_eq!(Theme::Scandinavian.toggled(), Theme::Terracotta);
        assert_eq!(Theme::Terracotta.root_class(), None);
        assert_eq!(Theme::Scandinavian.root_class(), Some("theme-scandinavian"));
    }

    #[test]
    fn test_themed_asset() {
        let path = "/assets/terracotta/hero.png";
        assert_eq!(themed_asset(path, Theme::Terracotta), path);
        assert_eq!(
            themed_asset(path, Theme::Scandinavian),
            "/assets/scandinavian/hero.png"
        );
        assert_eq!(
            themed_asset("/assets/projects/cbs.png", Theme::Scandinavian),
            "/assets/projects/cbs.png"
        );
    }
}
