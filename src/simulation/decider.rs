//! Movement and interaction deciders.
//!
//! A decider wraps one [`Net`] of a fixed shape, encodes what a creature
//! senses into the network inputs and decodes the outputs into a discrete
//! action: the action whose output is largest, with ties going to the lowest
//! index.

use serde::{Deserialize, Serialize};

use super::brain::{Net, NetShape};
use super::creature::Creature;
use super::entropy::Entropy;
use super::error::{Result, SimError};
use super::grid::Cell;

/// Radius of the square neighbourhood a creature senses and acts in.
pub const NEIGHBORHOOD_RADIUS: usize = 1;

/// Number of cells in a full neighbourhood.
pub const NEIGHBORHOOD_CELLS: usize = (2 * NEIGHBORHOOD_RADIUS + 1) * (2 * NEIGHBORHOOD_RADIUS + 1);

/// A step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveAction {
    /// Stay put.
    Nothing,
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl MoveAction {
    /// Actions in network output order.
    pub const ALL: [MoveAction; 5] = [
        MoveAction::Nothing,
        MoveAction::Up,
        MoveAction::Down,
        MoveAction::Left,
        MoveAction::Right,
    ];

    /// Grid offset `(dx, dy)` of this action.
    pub fn delta(self) -> (i64, i64) {
        match self {
            MoveAction::Nothing => (0, 0),
            MoveAction::Up => (0, -1),
            MoveAction::Down => (0, 1),
            MoveAction::Left => (-1, 0),
            MoveAction::Right => (1, 0),
        }
    }
}

/// What a creature wants to do with a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractAction {
    /// Leave the neighbour alone.
    Nothing,
    /// Fight; the weaker creature dies.
    Attack,
    /// Reproduce together.
    Pair,
}

impl InteractAction {
    /// Actions in network output order.
    pub const ALL: [InteractAction; 3] = [
        InteractAction::Nothing,
        InteractAction::Attack,
        InteractAction::Pair,
    ];
}

/// Index of the first maximum of `outputs`.
fn argmax(outputs: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in outputs.iter().enumerate().skip(1) {
        if *value > outputs[best] {
            best = i;
        }
    }
    best
}

fn check_shape(net: &Net, expected: NetShape) -> Result<()> {
    let actual = net.shape();
    if actual.inputs != expected.inputs || actual.outputs != expected.outputs {
        return Err(SimError::ShapeMismatch {
            left: actual,
            right: expected,
        });
    }
    Ok(())
}

/// Picks a step from the food data of the surrounding cells.
///
/// Inputs: one noise value in `[-0.5, 0.5)`, then for each neighbourhood cell
/// in row-major order the distance between its food colour and the creature's
/// colour followed by its food amount.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDecider {
    net: Net,
}

impl MovementDecider {
    /// Network input count.
    pub const INPUTS: usize = 1 + 2 * NEIGHBORHOOD_CELLS;
    /// Network output count.
    pub const OUTPUTS: usize = MoveAction::ALL.len();

    /// Network shape for a given hidden layer width.
    pub fn shape(hidden: usize) -> NetShape {
        NetShape {
            inputs: Self::INPUTS,
            hidden,
            outputs: Self::OUTPUTS,
        }
    }

    /// Creates a decider with random weights.
    pub fn new_random<E: Entropy>(hidden: usize, scale: f64, entropy: &mut E) -> Self {
        Self {
            net: Net::new_random(Self::shape(hidden), scale, entropy),
        }
    }

    /// Wraps an existing network, checking its input and output counts.
    pub fn from_net(net: Net) -> Result<Self> {
        check_shape(&net, Self::shape(net.shape().hidden))?;
        Ok(Self { net })
    }

    /// The wrapped network.
    pub fn net(&self) -> &Net {
        &self.net
    }

    /// Chooses a move for a creature of colour `color` standing among `cells`.
    pub fn decide<E: Entropy>(
        &self,
        color: f64,
        cells: &[&Cell],
        entropy: &mut E,
    ) -> Result<MoveAction> {
        let mut inputs = Vec::with_capacity(1 + 2 * cells.len());
        inputs.push(entropy.unit() - 0.5);
        for cell in cells {
            inputs.push((cell.food_color - color).abs());
            inputs.push(cell.food_amount);
        }

        let outputs = self.net.evaluate(&inputs)?;
        Ok(MoveAction::ALL[argmax(&outputs)])
    }

    /// Mutated copy for an asexual child.
    pub fn mutated<E: Entropy>(&self, rate: f64, entropy: &mut E) -> Self {
        Self {
            net: self.net.mutated(rate, entropy),
        }
    }

    /// Crossover child taking the first half of its hidden layer from `self`.
    pub fn merge<E: Entropy>(&self, other: &Self, rate: f64, entropy: &mut E) -> Result<Self> {
        Ok(Self {
            net: Net::crossover(&self.net, &other.net, rate, entropy)?,
        })
    }
}

/// Picks a reaction to a neighbouring creature.
///
/// Inputs: one noise value in `[-0.5, 0.5)`, the neighbour's HP and its colour.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionDecider {
    net: Net,
}

impl InteractionDecider {
    /// Network input count.
    pub const INPUTS: usize = 3;
    /// Network output count.
    pub const OUTPUTS: usize = InteractAction::ALL.len();

    /// Network shape for a given hidden layer width.
    pub fn shape(hidden: usize) -> NetShape {
        NetShape {
            inputs: Self::INPUTS,
            hidden,
            outputs: Self::OUTPUTS,
        }
    }

    /// Creates a decider with random weights.
    pub fn new_random<E: Entropy>(hidden: usize, scale: f64, entropy: &mut E) -> Self {
        Self {
            net: Net::new_random(Self::shape(hidden), scale, entropy),
        }
    }

    /// Wraps an existing network, checking its input and output counts.
    pub fn from_net(net: Net) -> Result<Self> {
        check_shape(&net, Self::shape(net.shape().hidden))?;
        Ok(Self { net })
    }

    /// The wrapped network.
    pub fn net(&self) -> &Net {
        &self.net
    }

    /// Chooses how to treat `other`.
    pub fn decide<E: Entropy>(&self, other: &Creature, entropy: &mut E) -> Result<InteractAction> {
        let inputs = [entropy.unit() - 0.5, other.hp, other.color];
        let outputs = self.net.evaluate(&inputs)?;
        Ok(InteractAction::ALL[argmax(&outputs)])
    }

    /// Mutated copy for an asexual child.
    pub fn mutated<E: Entropy>(&self, rate: f64, entropy: &mut E) -> Self {
        Self {
            net: self.net.mutated(rate, entropy),
        }
    }

    /// Crossover child taking the first half of its hidden layer from `self`.
    pub fn merge<E: Entropy>(&self, other: &Self, rate: f64, entropy: &mut E) -> Result<Self> {
        Ok(Self {
            net: Net::crossover(&self.net, &other.net, rate, entropy)?,
        })
    }
}
