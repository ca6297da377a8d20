// Custom Dioxus hooks
pub mod use_page_tokens;
pub mod use_theme;
pub mod use_transition;

pub use use_page_tokens::{use_page_tokens, use_page_tokens_provider};
pub use use_theme::{use_theme, use_theme_provider, ThemeContext};
pub use use_transition::{use_transition, use_transition_provider, TransitionHandle};
