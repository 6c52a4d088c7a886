//! # Gridlife - Evolutionary Grid Simulation
//!
//! A population of creatures lives on a 2D grid of food cells. Every tick they
//! eat, move, fight or pair with their neighbours, split, age and die. Each
//! creature is driven by two tiny neural networks, and children inherit
//! mutated or spliced copies of their parents' networks.
//!
//! ## Features
//!
//! - Single-hidden-layer tanh networks with neuron-slice crossover
//! - Food colour field from Perlin noise; creatures digest matching food best
//! - Deterministic runs from a seed, or scripted randomness in tests
//! - Snapshot/restore of evolved genomes as JSON
//! - Real-time visualization with egui/macroquad and a headless runner
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - The tick loop and placement rules
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::decider`] - Sensing and action decoding
//! - [`simulation::grid`] - Cells and neighbourhood queries
//! - [`simulation::snapshot`] - Genome persistence

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural network implementation for creature deciders.
    pub mod brain;
    /// Per-tick statistics.
    pub mod census;
    /// Creature state and identifiers.
    pub mod creature;
    /// Movement and interaction deciders.
    pub mod decider;
    /// Main simulation engine.
    pub mod ecosystem;
    /// Randomness abstraction.
    pub mod entropy;
    /// Error type.
    pub mod error;
    /// Event logging for UI display.
    pub mod event_log;
    /// The grid of food cells.
    pub mod grid;
    /// Simulation parameters.
    pub mod params;
    /// Genome snapshot and restore.
    pub mod snapshot;
}
