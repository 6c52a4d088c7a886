//! Creature state.
//!
//! A creature is plain data: position, health, age, a colour that doubles as
//! its species marker, and the two deciders that drive it. All behaviour lives
//! in the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::decider::{InteractionDecider, MovementDecider};

/// Globally unique creature identifier.
///
/// It doubles as the handle cells use to point back at their occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulated creature.
///
/// Position is only assigned by the engine when the creature is placed on the
/// grid, which keeps `(x, y)` and the cell's occupant in step.
#[derive(Debug, Clone)]
pub struct Creature {
    /// Unique identifier.
    pub id: CreatureId,
    /// Health; the creature dies once it drops to zero.
    pub hp: f64,
    /// Ticks survived.
    pub age: u64,
    /// Species marker in roughly `[0, 1]`, compared against food colour.
    pub color: f64,
    /// Chooses where to step.
    pub movement: MovementDecider,
    /// Chooses how to treat neighbours.
    pub interaction: InteractionDecider,
    x: usize,
    y: usize,
    dead: bool,
}

impl Creature {
    /// Creates an unplaced creature with a fresh id.
    pub fn new(
        hp: f64,
        color: f64,
        movement: MovementDecider,
        interaction: InteractionDecider,
    ) -> Self {
        Self {
            id: CreatureId::new(),
            hp,
            age: 0,
            color,
            movement,
            interaction,
            x: 0,
            y: 0,
            dead: false,
        }
    }

    /// Grid column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Grid row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// `(x, y)` grid position.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Whether the creature has been removed from the simulation.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub(super) fn place(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    pub(super) fn kill(&mut self) {
        self.dead = true;
    }
}
