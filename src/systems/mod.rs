//! Application systems
//!
//! Frame-level drivers that tie the library crates together.

mod simulation;

pub use simulation::{SimulationResult, SimulationSystem};
