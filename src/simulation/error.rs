//! Error type shared by the simulation engine and its networks.

use thiserror::Error;

use super::brain::NetShape;
use super::creature::CreatureId;

/// Errors raised by the simulation.
///
/// Occupancy and shape variants signal broken invariants and abort the
/// current operation. Running out of free cells is not an error; see
/// [`super::ecosystem::SpawnOutcome`].
#[derive(Debug, Error)]
pub enum SimError {
    /// A creature was about to be placed on a cell that already holds one.
    #[error("cell ({x}, {y}) is already occupied by creature {occupant}")]
    CellOccupied {
        /// Column of the target cell.
        x: usize,
        /// Row of the target cell.
        y: usize,
        /// Creature currently standing there.
        occupant: CreatureId,
    },

    /// A placement targeted the border ring or a cell outside the grid.
    #[error("cell ({x}, {y}) is outside the habitable interior")]
    OutsideInterior {
        /// Column of the target cell.
        x: usize,
        /// Row of the target cell.
        y: usize,
    },

    /// The engine holds no live creature with this id.
    #[error("unknown creature {0}")]
    UnknownCreature(CreatureId),

    /// A neuron carries the wrong number of weights for its network.
    #[error("neuron {index} has {actual} {layer} weights, expected {expected}")]
    NeuronShape {
        /// Index of the offending hidden neuron.
        index: usize,
        /// Either `"input"` or `"output"`.
        layer: &'static str,
        /// Weight count implied by the network shape.
        expected: usize,
        /// Weight count actually found.
        actual: usize,
    },

    /// The declared hidden count disagrees with the neurons supplied.
    #[error("network declares {declared} hidden neurons but carries {actual}")]
    HiddenCount {
        /// Declared hidden neuron count.
        declared: usize,
        /// Number of neurons present.
        actual: usize,
    },

    /// Two networks that must share a shape do not.
    #[error("network shapes differ: {left} vs {right}")]
    ShapeMismatch {
        /// Shape of the first network.
        left: NetShape,
        /// Shape of the second network.
        right: NetShape,
    },

    /// An input vector does not match the network's input count.
    #[error("expected {expected} network inputs, got {actual}")]
    InputLength {
        /// Input count of the network.
        expected: usize,
        /// Length of the vector supplied.
        actual: usize,
    },

    /// Rejected configuration.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Grid and creature collection disagree about who stands where.
    #[error("occupancy invariant broken: {0}")]
    Occupancy(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias used throughout the simulation.
pub type Result<T> = std::result::Result<T, SimError>;
