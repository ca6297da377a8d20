use crate::domain::models::Theme;
use crate::shared::logging::{log_storage_error, log_theme_change};
use crate::shared::services::ThemeStorage;

/// Current skin plus its persistence.
///
/// `load` reads the saved preference; `set` is the only way to change the
/// theme and always writes it back. Storage failures are logged, never fatal.
pub struct ThemeStore<S: ThemeStorage> {
    theme: Theme,
    key: String,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Store holding `default` without touching storage yet.
    pub fn new(storage: S, key: impl Into<String>, default: Theme) -> Self {
        Self {
            theme: default,
            key: key.into(),
            storage,
        }
    }

    /// `new` followed by `load`.
    pub fn init(storage: S, key: impl Into<String>, default: Theme) -> Self {
        let mut store = Self::new(storage, key, default);
        store.load();
        store
    }

    /// Adopt the saved preference, if there is a valid one. Does not write back.
    pub fn load(&mut self) -> Theme {
        match self.storage.load(&self.key) {
            Ok(Some(saved)) => match saved.parse::<Theme>() {
                Ok(theme) => self.theme = theme,
                Err(e) => log_storage_error("load", &e.to_string()),
            },
            Ok(None) => {}
            Err(e) => log_storage_error("load", &e.to_string()),
        }
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.save(&self.key, theme.as_str()) {
            log_storage_error("save", &e.to_string());
        }
        log_theme_change(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
