// Business logic services
// Framework-agnostic, 100% testable

pub mod transition;
pub use transition::{NavigationOutcome, TransitionMachine, TransitionPhase, TransitionTimings};
