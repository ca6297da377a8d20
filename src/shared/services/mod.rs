// Shared services
// Theme persistence lives here so hooks stay thin and the store stays testable.
pub mod storage;
pub mod theme_store;

pub use storage::{BrowserStorage, MemoryStorage, PreferenceStorage, ThemeStorage};
pub use theme_store::ThemeStore;
