//! Collaborators the rules draw on but do not own.
//!
//! Currently this is the random source. Keeping it behind a trait lets the
//! runtime seed a real generator while tests script exact outcomes.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
