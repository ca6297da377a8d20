//! Page transition state machine
//!
//! Drives the overlay that hides a page swap. A navigation between two pages of
//! the primary order walks through
//!
//! ```text
//! Idle -> Covering -> Committed -> Uncovering -> Idle
//! ```
//!
//! - `Covering`: overlay slides in, old content fades out.
//! - `Committed`: overlay covers the viewport, the router now shows the new page.
//! - `Uncovering`: overlay slides out. No longer counts as transitioning.
//!
//! The machine never touches a timer or the router itself. Callers feed it
//! events (overlay animation finished, fallback timer fired) and act on what it
//! returns. Every event carries the generation of the transition it belongs to,
//! so a late event from an earlier transition is ignored.

use serde::Deserialize;
use std::time::Duration;

use crate::domain::models::{find_route, Direction, NAV_ORDER};

/// Fallback durations for the overlay choreography.
///
/// The overlay's animation-end events normally advance the machine; these
/// delays only fire the same events when the browser does not report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// From request to route commit (overlay presumed covering).
    pub commit_delay_ms: u64,
    /// From commit to the end of the transition (overlay starts leaving).
    pub settle_delay_ms: u64,
    /// Overlay exit animation.
    pub exit_duration_ms: u64,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            commit_delay_ms: 350,
            settle_delay_ms: 250,
            exit_duration_ms: 400,
        }
    }
}

impl TransitionTimings {
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    /// Upper bound on how long the overlay can stay on screen.
    pub fn max_in_flight(&self) -> Duration {
        self.commit_delay() + self.settle_delay() + self.exit_duration()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Covering,
    Committed,
    Uncovering,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Idle => "idle",
            TransitionPhase::Covering => "covering",
            TransitionPhase::Committed => "committed",
            TransitionPhase::Uncovering => "uncovering",
        }
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Already on the requested page.
    SamePath,
    /// Another transition is in flight; the request is dropped.
    Busy,
    /// Not part of the primary order: navigate right away, no overlay.
    Immediate { path: String },
    /// Overlay transition started.
    Animated {
        direction: Direction,
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMachine {
    phase: TransitionPhase,
    direction: Direction,
    current_path: String,
    previous_path: String,
    pending_path: Option<String>,
    overlay_color: &'static str,
    generation: u64,
}

impl TransitionMachine {
    pub fn new(startup_path: impl Into<String>) -> Self {
        let startup_path = startup_path.into();
        let overlay_color = find_route(&startup_path)
            .unwrap_or(&NAV_ORDER[0])
            .overlay_color;

        Self {
            phase: TransitionPhase::Idle,
            direction: Direction::None,
            previous_path: startup_path.clone(),
            current_path: startup_path,
            pending_path: None,
            overlay_color,
            generation: 0,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True from the request until the settle step; the exit animation does not count.
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Covering | TransitionPhase::Committed
        )
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn previous_path(&self) -> &str {
        &self.previous_path
    }

    pub fn pending_path(&self) -> Option<&str> {
        self.pending_path.as_deref()
    }

    pub fn overlay_color(&self) -> &'static str {
        self.overlay_color
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request_navigation(&mut self, target: &str) -> NavigationOutcome {
        if target == self.current_path {
            return NavigationOutcome::SamePath;
        }
        if self.is_transitioning() {
            return NavigationOutcome::Busy;
        }

        let (Some(from), Some(to)) = (find_route(&self.current_path), find_route(target)) else {
            self.current_path = target.to_string();
            return NavigationOutcome::Immediate {
                path: target.to_string(),
            };
        };

        self.generation += 1;
        self.direction = Direction::between(from, to);
        self.overlay_color = to.overlay_color;
        self.pending_path = Some(target.to_string());
        self.phase = TransitionPhase::Covering;

        NavigationOutcome::Animated {
            direction: self.direction,
            generation: self.generation,
        }
    }

    /// Overlay fully covers the content. Returns the path the router must show now.
    pub fn overlay_covered(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation || self.phase != TransitionPhase::Covering {
            return None;
        }
        let path = self.pending_path.clone()?;
        self.current_path = path.clone();
        self.phase = TransitionPhase::Committed;
        Some(path)
    }

    /// New page is in place. Returns true when the content region must scroll to top.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != TransitionPhase::Committed {
            return false;
        }
        self.previous_path = self.current_path.clone();
        self.pending_path = None;
        self.phase = TransitionPhase::Uncovering;
        true
    }

    /// Overlay left the screen.
    pub fn overlay_exited(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != TransitionPhase::Uncovering {
            return false;
        }
        self.phase = TransitionPhase::Idle;
        true
    }

    /// Route change seen by the router observer, whoever caused it.
    ///
    /// Only acts while no transition is in flight: the commit step changes the
    /// route itself, and back/forward presses during an overlay are left to
    /// the commit. Returns the inferred direction when one could be computed.
    pub fn observe_route(&mut self, path: &str) -> Option<Direction> {
        if self.is_transitioning() || path == self.previous_path {
            return None;
        }

        let inferred = Direction::between_paths(&self.previous_path, path);
        if let Some(direction) = inferred {
            self.direction = direction;
        }
        self.previous_path = path.to_string();
        self.current_path = path.to_string();
        inferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(machine: &mut TransitionMachine, target: &str) -> u64 {
        match machine.request_navigation(target) {
            NavigationOutcome::Animated { generation, .. } => generation,
            other => panic!("expected animated transition, got {:?}", other),
        }
    }

    fn run_to_idle(machine: &mut TransitionMachine, generation: u64) {
        assert!(machine.overlay_covered(generation).is_some());
        assert!(machine.settle(generation));
        assert!(machine.overlay_exited(generation));
    }

    #[test]
    fn test_new_machine_starts_idle_on_startup_route() {
        let machine = TransitionMachine::new("/projects");
        assert_eq!(machine.phase(), TransitionPhase::Idle);
        assert!(!machine.is_transitioning());
        assert_eq!(machine.direction(), Direction::None);
        assert_eq!(machine.current_path(), "/projects");
        assert_eq!(machine.previous_path(), "/projects");
        assert_eq!(machine.pending_path(), None);
        assert_eq!(machine.overlay_color(), "#4682B4");
    }

    #[test]
    fn test_forward_navigation_scenario() {
        let mut machine = TransitionMachine::new("/");
        let outcome = machine.request_navigation("/thoughts");
        assert_eq!(
            outcome,
            NavigationOutcome::Animated {
                direction: Direction::Forward,
                generation: 1
            }
        );
        assert!(machine.is_transitioning());
        assert_eq!(machine.direction().sign(), 1);
        assert_eq!(machine.pending_path(), Some("/thoughts"));
        assert_eq!(machine.overlay_color(), "#4CAF50");

        assert_eq!(machine.overlay_covered(1), Some("/thoughts".to_string()));
        assert_eq!(machine.current_path(), "/thoughts");
        assert!(machine.is_transitioning());

        assert!(machine.settle(1));
        assert!(!machine.is_transitioning());
        assert_eq!(machine.previous_path(), "/thoughts");
        assert_eq!(machine.pending_path(), None);
        assert!(machine.is_overlay_visible());

        assert!(machine.overlay_exited(1));
        assert_eq!(machine.phase(), TransitionPhase::Idle);
        assert!(!machine.is_overlay_visible());
    }

    #[test]
    fn test_backward_navigation_scenario() {
        let mut machine = TransitionMachine::new("/recommendations");
        start(&mut machine, "/");
        assert_eq!(machine.direction(), Direction::Backward);
        assert_eq!(machine.direction().sign(), -1);
    }

    #[test]
    fn test_direction_for_all_known_pairs() {
        for a in NAV_ORDER.iter() {
            for b in NAV_ORDER.iter().filter(|b| b.order > a.order) {
                let mut machine = TransitionMachine::new(a.path);
                start(&mut machine, b.path);
                assert_eq!(machine.direction(), Direction::Forward);

                let mut machine = TransitionMachine::new(b.path);
                start(&mut machine, a.path);
                assert_eq!(machine.direction(), Direction::Backward);
            }
        }
    }

    #[test]
    fn test_detail_path_navigates_immediately() {
        let mut machine = TransitionMachine::new("/projects");
        let outcome = machine.request_navigation("/projects/42");
        assert_eq!(
            outcome,
            NavigationOutcome::Immediate {
                path: "/projects/42".to_string()
            }
        );
        assert!(!machine.is_transitioning());
        assert_eq!(machine.phase(), TransitionPhase::Idle);
        assert_eq!(machine.current_path(), "/projects/42");
        assert_eq!(machine.generation(), 0);
    }

    #[test]
    fn test_leaving_a_detail_page_is_immediate() {
        let mut machine = TransitionMachine::new("/thoughts/1");
        assert!(matches!(
            machine.request_navigation("/thoughts"),
            NavigationOutcome::Immediate { .. }
        ));
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_same_path_is_noop_in_every_phase() {
        let mut machine = TransitionMachine::new("/");
        assert_eq!(machine.request_navigation("/"), NavigationOutcome::SamePath);

        let generation = start(&mut machine, "/projects");
        // Covering: current path is still the page being left.
        let before = machine.clone();
        assert_eq!(machine.request_navigation("/"), NavigationOutcome::SamePath);
        assert_eq!(machine, before);

        machine.overlay_covered(generation);
        let before = machine.clone();
        assert_eq!(
            machine.request_navigation("/projects"),
            NavigationOutcome::SamePath
        );
        assert_eq!(machine, before);

        machine.settle(generation);
        let before = machine.clone();
        assert_eq!(
            machine.request_navigation("/projects"),
            NavigationOutcome::SamePath
        );
        assert_eq!(machine, before);
    }

    #[test]
    fn test_requests_while_transitioning_are_rejected() {
        let mut machine = TransitionMachine::new("/");
        let generation = start(&mut machine, "/thoughts");
        let before = machine.clone();

        assert_eq!(
            machine.request_navigation("/recommendations"),
            NavigationOutcome::Busy
        );
        assert_eq!(
            machine.request_navigation("/projects/42"),
            NavigationOutcome::Busy
        );
        assert_eq!(machine, before);

        machine.overlay_covered(generation);
        let before = machine.clone();
        assert_eq!(machine.request_navigation("/"), NavigationOutcome::Busy);
        assert_eq!(machine, before);
    }

    #[test]
    fn test_double_request_completes_one_transition() {
        let mut machine = TransitionMachine::new("/");
        let generation = start(&mut machine, "/thoughts");
        // Second click lands on the link of the page being left.
        assert_eq!(
            machine.request_navigation("/thoughts"),
            NavigationOutcome::Busy
        );
        run_to_idle(&mut machine, generation);
        assert_eq!(machine.generation(), 1);
        assert_eq!(machine.current_path(), "/thoughts");
        assert_eq!(machine.overlay_covered(generation), None);
    }

    #[test]
    fn test_request_accepted_while_overlay_exits() {
        let mut machine = TransitionMachine::new("/");
        let first = start(&mut machine, "/projects");
        machine.overlay_covered(first);
        machine.settle(first);
        assert_eq!(machine.phase(), TransitionPhase::Uncovering);

        let second = start(&mut machine, "/recommendations");
        assert_eq!(second, first + 1);
        assert_eq!(machine.direction(), Direction::Forward);

        // Late exit event of the first transition must not end the second one.
        assert!(!machine.overlay_exited(first));
        assert_eq!(machine.phase(), TransitionPhase::Covering);
    }

    #[test]
    fn test_events_out_of_order_are_ignored() {
        let mut machine = TransitionMachine::new("/");
        let generation = start(&mut machine, "/projects");
        assert!(!machine.settle(generation));
        assert!(!machine.overlay_exited(generation));
        assert_eq!(machine.phase(), TransitionPhase::Covering);

        assert!(machine.overlay_covered(generation).is_some());
        // Animation-end and fallback timer both report the cover.
        assert_eq!(machine.overlay_covered(generation), None);
        assert_eq!(machine.phase(), TransitionPhase::Committed);
    }

    #[test]
    fn test_transition_always_returns_to_idle() {
        let mut machine = TransitionMachine::new("/");
        for target in ["/projects", "/recommendations", "/", "/thoughts"] {
            let generation = start(&mut machine, target);
            run_to_idle(&mut machine, generation);
            assert!(!machine.is_transitioning());
            assert_eq!(machine.phase(), TransitionPhase::Idle);
            assert_eq!(machine.previous_path(), target);
        }
    }

    #[test]
    fn test_observe_route_infers_direction_when_idle() {
        let mut machine = TransitionMachine::new("/recommendations");
        assert_eq!(machine.observe_route("/projects"), Some(Direction::Backward));
        assert_eq!(machine.direction(), Direction::Backward);
        assert_eq!(machine.previous_path(), "/projects");
        assert_eq!(machine.current_path(), "/projects");
        assert!(!machine.is_overlay_visible());

        assert_eq!(machine.observe_route("/thoughts"), Some(Direction::Forward));
        assert_eq!(machine.direction(), Direction::Forward);
    }

    #[test]
    fn test_observe_route_with_unknown_side_keeps_direction() {
        let mut machine = TransitionMachine::new("/");
        machine.observe_route("/thoughts");
        assert_eq!(machine.observe_route("/thoughts/2"), None);
        assert_eq!(machine.direction(), Direction::Forward);
        assert_eq!(machine.previous_path(), "/thoughts/2");
    }

    #[test]
    fn test_observe_route_ignored_while_transitioning() {
        let mut machine = TransitionMachine::new("/");
        let generation = start(&mut machine, "/thoughts");
        assert_eq!(machine.observe_route("/projects"), None);
        assert_eq!(machine.previous_path(), "/");
        assert_eq!(machine.direction(), Direction::Forward);

        machine.overlay_covered(generation);
        // The commit's own route change.
        assert_eq!(machine.observe_route("/thoughts"), None);
        machine.settle(generation);
        assert_eq!(machine.observe_route("/thoughts"), None);
        assert_eq!(machine.previous_path(), "/thoughts");
    }

    #[test]
    fn test_immediate_navigation_then_observed() {
        let mut machine = TransitionMachine::new("/projects");
        machine.request_navigation("/projects/42");
        assert_eq!(machine.observe_route("/projects/42"), None);
        assert_eq!(machine.previous_path(), "/projects/42");
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_timings_bound_in_flight_time() {
        let timings = TransitionTimings::default();
        assert_eq!(timings.commit_delay(), Duration::from_millis(350));
        assert_eq!(timings.settle_delay(), Duration::from_millis(250));
        assert_eq!(timings.max_in_flight(), Duration::from_millis(1000));
    }

    #[test]
    fn test_timings_partial_json_keeps_defaults() {
        let timings: TransitionTimings =
            serde_json::from_str(r#"{ "commit_delay_ms": 300 }"#).unwrap();
        assert_eq!(timings.commit_delay_ms, 300);
        assert_eq!(timings.settle_delay_ms, 250);
        assert_eq!(timings.exit_duration_ms, 400);
    }
}
