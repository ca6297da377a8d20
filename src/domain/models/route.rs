use std::cmp::Ordering;

/// Entry of the primary navigation cycle.
///
/// `order` decides the direction the overlay travels in; `overlay_color` is the
/// colour the overlay takes when this route is the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub order: u8,
    pub display_name: &'static str,
    pub overlay_color: &'static str,
}

/// Primary navigation, in sidebar order. Orders are unique.
pub static NAV_ORDER: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/",
        order: 0,
        display_name: "Home",
        overlay_color: "#6A5ACD",
    },
    RouteDescriptor {
        path: "/projects",
        order: 1,
        display_name: "Projects",
        overlay_color: "#4682B4",
    },
    RouteDescriptor {
        path: "/thoughts",
        order: 2,
        display_name: "Thoughts",
        overlay_color: "#4CAF50",
    },
    RouteDescriptor {
        path: "/recommendations",
        order: 3,
        display_name: "Recommendations",
        overlay_color: "#FF7043",
    },
];

/// Resolve a path against the primary navigation. Detail pages
/// (`/projects/42`) are deliberately not part of it.
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    NAV_ORDER.iter().find(|route| route.path == path)
}

/// Which way a navigation moves through the primary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn between(from: &RouteDescriptor, to: &RouteDescriptor) -> Direction {
        match to.order.cmp(&from.order) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => Direction::None,
        }
    }

    /// Direction between two paths, `None` when either is outside the primary order.
    pub fn between_paths(from: &str, to: &str) -> Option<Direction> {
        Some(Direction::between(find_route(from)?, find_route(to)?))
    }

    pub fn sign(&self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }

    /// Edge the overlay slides in from. Forward navigation rises from the bottom.
    pub fn enter_edge(&self) -> &'static str {
        if self.sign() > 0 { "bottom" } else { "top" }
    }

    /// Edge the overlay leaves through once the new page is in place.
    pub fn exit_edge(&self) -> &'static str {
        if self.sign() < 0 { "bottom" } else { "top" }
    }
}
