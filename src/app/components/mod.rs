pub mod card;
pub mod common;
pub mod nav_link;
pub mod theme_image;
pub mod theme_toggle;

pub use card::Tile;
pub use common::{NotFoundMessage, PageHeading, Prose, TechTags};
pub use nav_link::{is_internal_path, is_nav_active, TransitionLink};
pub use theme_image::ThemeImage;
pub use theme_toggle::AtmosphereControl;
