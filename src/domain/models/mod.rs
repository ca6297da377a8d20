// Domain models (static site entities)
// Pure Rust, no framework dependencies

pub mod route;
pub mod content;
pub mod theme;
pub mod motion;

pub use route::{find_route, Direction, RouteDescriptor, NAV_ORDER};
pub use content::{
    find_other_project, find_project, find_thought, referenced_images, OtherProject, Project, Recommendation,
    RecommendationKind, SocialLink, Thought, ThoughtSize, TileSize, OTHER_PROJECTS, PROJECTS,
    HOME_VISUAL, RECOMMENDATIONS, RECOMMENDATION_VISUAL, SOCIAL_LINKS, THOUGHTS, THOUGHT_VISUAL,
};
pub use theme::{themed_asset, Theme};
pub use motion::{CubicBezier, MotionToken, PageTokens};
