//! Page transition orchestration for Dioxus
//!
//! Wraps [`TransitionMachine`] in a signal and wires its outputs to the router,
//! the scroll container and a set of tracked timers. Links call
//! [`TransitionHandle::navigate`] directly; there is no document-level click
//! listener.

use dioxus::core::{current_scope_id, Runtime, Task};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::domain::models::Direction;
use crate::domain::services::{
    NavigationOutcome, TransitionMachine, TransitionPhase, TransitionTimings,
};
use crate::shared::logging::{log_navigation_outcome, log_route_observed, log_transition_step};
use crate::shared::utils::{reset_scroll_top, sleep, TimerSet};

/// Hands a path to the router.
pub type CommitFn = Rc<dyn Fn(&str)>;

/// Navigation entry point shared with every link through context.
///
/// Timers run in the layout's scope, never in the scope of the link that
/// started the navigation: the commit unmounts that link.
#[derive(Clone)]
pub struct TransitionHandle {
    scope: ScopeId,
    machine: Signal<TransitionMachine>,
    timers: Rc<RefCell<TimerSet<Task>>>,
    timings: TransitionTimings,
    scroll_container_id: Rc<str>,
    commit: CommitFn,
}

impl TransitionHandle {
    pub fn phase(&self) -> TransitionPhase {
        self.machine.read().phase()
    }

    pub fn is_transitioning(&self) -> bool {
        self.machine.read().is_transitioning()
    }

    pub fn direction(&self) -> Direction {
        self.machine.read().direction()
    }

    pub fn overlay_color(&self) -> &'static str {
        self.machine.read().overlay_color()
    }

    /// Request a page change. Dropped while another transition is in flight.
    pub fn navigate(&self, target: &str) {
        let mut machine = self.machine;
        let outcome = machine.write().request_navigation(target);
        log_navigation_outcome(target, &outcome);

        match outcome {
            NavigationOutcome::Immediate { path } => (self.commit)(&path),
            NavigationOutcome::Animated { generation, .. } => {
                self.schedule(self.timings.commit_delay(), move |handle| {
                    handle.overlay_covered(generation)
                });
            }
            NavigationOutcome::SamePath | NavigationOutcome::Busy => {}
        }
    }

    /// Overlay reported (or is presumed) fully covering: swap the page.
    pub fn overlay_covered(&self, generation: u64) {
        let mut machine = self.machine;
        let Some(path) = machine.write().overlay_covered(generation) else {
            return;
        };
        log_transition_step("commit", generation, &path);
        (self.commit)(&path);
        self.schedule(self.timings.settle_delay(), move |handle| {
            handle.settle(generation)
        });
    }

    fn settle(&self, generation: u64) {
        let mut machine = self.machine;
        if !machine.write().settle(generation) {
            return;
        }
        log_transition_step("settle", generation, machine.read().current_path());
        reset_scroll_top(&self.scroll_container_id);
        self.schedule(self.timings.exit_duration(), move |handle| {
            handle.overlay_exited(generation)
        });
    }

    pub fn overlay_exited(&self, generation: u64) {
        let mut machine = self.machine;
        if machine.write().overlay_exited(generation) {
            log_transition_step("idle", generation, machine.read().current_path());
        }
    }

    /// `animationend` on the overlay element.
    pub fn on_overlay_animation_end(&self) {
        let (phase, generation) = {
            let machine = self.machine.read();
            (machine.phase(), machine.generation())
        };
        match phase {
            TransitionPhase::Covering => self.overlay_covered(generation),
            TransitionPhase::Uncovering => self.overlay_exited(generation),
            TransitionPhase::Idle | TransitionPhase::Committed => {}
        }
    }

    /// Router reports the path now on screen.
    pub fn observe_route(&self, path: &str) {
        let mut machine = self.machine;
        if machine.peek().previous_path() == path {
            return;
        }
        let inferred = machine.write().observe_route(path);
        log_route_observed(path, inferred);
    }

    fn schedule(&self, delay: Duration, callback: impl FnOnce(TransitionHandle) + 'static) {
        let id = self.timers.borrow_mut().reserve();
        let handle = self.clone();
        let task = Runtime::current().spawn(self.scope, async move {
            sleep(delay).await;
            handle.timers.borrow_mut().finish(id);
            callback(handle);
        });
        self.timers.borrow_mut().track(id, task);
    }
}

/// Create the transition machine for the layout and provide it to descendants.
///
/// `startup_path` seeds the machine; `commit` performs the real route change.
pub fn use_transition_provider(
    startup_path: String,
    timings: TransitionTimings,
    scroll_container_id: &str,
    commit: impl Fn(&str) + 'static,
) -> TransitionHandle {
    let scope = current_scope_id();
    let machine = use_signal(|| TransitionMachine::new(startup_path));
    let timers = use_hook(|| Rc::new(RefCell::new(TimerSet::<Task>::default())));
    let scroll_container_id: Rc<str> = use_hook(|| Rc::from(scroll_container_id));
    let commit: CommitFn = use_hook(|| Rc::new(commit) as CommitFn);

    let handle = use_context_provider(|| TransitionHandle {
        scope,
        machine,
        timers: timers.clone(),
        timings,
        scroll_container_id,
        commit,
    });

    use_drop(move || {
        let cancelled = timers.borrow_mut().cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "Cancelled pending transition timers on unmount");
        }
    });

    handle
}

/// Transition handle of the enclosing layout.
pub fn use_transition() -> TransitionHandle {
    use_context::<TransitionHandle>()
}
