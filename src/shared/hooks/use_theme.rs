use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::site_config;
use crate::domain::models::Theme;
use crate::shared::services::{PreferenceStorage, ThemeStore};
use crate::shared::utils::apply_theme_class;

/// Theme state shared through context.
///
/// `theme` is the reactive value components read; the store behind it owns
/// persistence. All writes go through [`ThemeContext::set`].
#[derive(Clone)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    store: Rc<RefCell<ThemeStore<PreferenceStorage>>>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn is_scandinavian(&self) -> bool {
        self.theme().is_scandinavian()
    }

    pub fn set(&self, theme: Theme) {
        let mut signal = self.theme;
        self.store.borrow_mut().set(theme);
        signal.set(theme);
    }

    pub fn toggle(&self) {
        let next = self.theme().toggled();
        self.set(next);
    }
}

/// Create the theme store and provide it to the tree. Call once, at the root.
pub fn use_theme_provider() -> ThemeContext {
    use_theme_provider_with(PreferenceStorage::default)
}

fn use_theme_provider_with(storage: impl FnOnce() -> PreferenceStorage) -> ThemeContext {
    let default = site_config().theme.default;
    let store = use_hook(|| {
        Rc::new(RefCell::new(ThemeStore::new(
            storage(),
            site_config().theme.storage_key.clone(),
            default,
        )))
    });
    // First render uses the configured default so it matches the server render.
    let mut theme = use_signal(|| default);

    // Saved preference is read once, after mount.
    let loader = store.clone();
    use_effect(move || {
        let saved = loader.borrow_mut().load();
        theme.set(saved);
    });

    // Re-runs on every theme change.
    use_effect(move || {
        apply_theme_class(theme());
    });

    use_context_provider(|| ThemeContext { theme, store })
}

/// Theme of the surrounding provider.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::services::MemoryStorage;
    use dioxus::core::NoOpMutations;
    use std::time::Duration;

    thread_local! {
        static RENDERED: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
    }

    fn saved_scandinavian() -> Element {
        let theme = use_theme_provider_with(|| MemoryStorage::with_item("theme", "scandinavian"));
        RENDERED.with(|rendered| rendered.borrow_mut().push(theme.theme()));
        rsx! {}
    }

    #[tokio::test]
    async fn test_saved_theme_applies_after_first_render() {
        let mut dom = VirtualDom::new(saved_scandinavian);
        dom.rebuild_in_place();
        assert_eq!(
            RENDERED.with(|rendered| rendered.borrow().clone()),
            vec![Theme::Terracotta]
        );

        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(500)) => panic!("saved theme never loaded"),
        }
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(
            RENDERED.with(|rendered| rendered.borrow().last().copied()),
            Some(Theme::Scandinavian)
        );
    }
}
