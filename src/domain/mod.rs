// Domain layer: site content, route table and the transition machine.
// Pure Rust, no framework dependencies.
pub mod models;
pub mod services;
