// Utility functions
// Timers, DOM side effects, markdown rendering

pub mod dom;
pub mod markdown;
pub mod timers;

pub use dom::{apply_theme_class, reset_scroll_top};
pub use markdown::render_markdown;
pub use timers::{sleep, Cancel, TimerId, TimerSet};
