//! Structured logging for the portfolio site
//!
//! Provides consistent, contextual logging for navigation and theme changes.
//! Uses tracing structured fields; the subscriber is installed by the entry point.

use crate::domain::models::{Direction, Theme};
use crate::domain::services::NavigationOutcome;

/// Operation tag attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    Transition,
    RouteObserve,
    Theme,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::Transition => "transition",
            LogOperation::RouteObserve => "route_observe",
            LogOperation::Theme => "theme",
            LogOperation::Config => "config",
        }
    }
}

/// Log the outcome of a navigation request
pub fn log_navigation_outcome(target: &str, outcome: &NavigationOutcome) {
    match outcome {
        NavigationOutcome::SamePath => tracing::trace!(
            operation = LogOperation::Navigation.as_str(),
            target = target,
            "Already on requested page"
        ),
        NavigationOutcome::Busy => tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            target = target,
            "Navigation dropped, transition in flight"
        ),
        NavigationOutcome::Immediate { path } => tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            target = path.as_str(),
            "Navigating without transition"
        ),
        NavigationOutcome::Animated {
            direction,
            generation,
        } => tracing::debug!(
            operation = LogOperation::Navigation.as_str(),
            target = target,
            direction = direction.sign(),
            generation = generation,
            "Transition started"
        ),
    }
}

/// Log a transition phase change
pub fn log_transition_step(step: &str, generation: u64, path: &str) {
    tracing::trace!(
        operation = LogOperation::Transition.as_str(),
        step = step,
        generation = generation,
        path = path,
        "Transition step"
    );
}

/// Log a route the router could not parse
pub fn log_invalid_route(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Transition.as_str(),
        path = path,
        error = error,
        "Cannot navigate to unparsable route"
    );
}

/// Log direction inferred from a route change the overlay did not drive
pub fn log_route_observed(path: &str, inferred: Option<Direction>) {
    tracing::debug!(
        operation = LogOperation::RouteObserve.as_str(),
        path = path,
        direction = inferred.map(|d| d.sign()),
        "Route change observed"
    );
}

/// Log a theme change
pub fn log_theme_change(theme: Theme) {
    tracing::info!(
        operation = LogOperation::Theme.as_str(),
        theme = theme.as_str(),
        "Theme changed"
    );
}

/// Log a storage failure (never fatal)
pub fn log_storage_error(action: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Theme.as_str(),
        action = action,
        error = error,
        "Theme storage error"
    );
}

/// Log a rejected configuration document
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid site configuration, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Transition.as_str(), "transition");
        assert_eq!(LogOperation::RouteObserve.as_str(), "route_observe");
        assert_eq!(LogOperation::Theme.as_str(), "theme");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
