pub mod sidebar;
pub mod transition_layout;

pub use sidebar::Sidebar;
pub use transition_layout::TransitionLayout;
