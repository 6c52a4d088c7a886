//! Saving and restoring the evolved population.
//!
//! Only genomes are persisted: colour and the weights of both deciders.
//! Positions, HP and age are not; restored creatures start fresh on random
//! free cells.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::brain::Net;
use super::creature::Creature;
use super::decider::{InteractionDecider, MovementDecider};
use super::ecosystem::{Simulation, SpawnOutcome};
use super::entropy::Entropy;
use super::error::{Result, SimError};

/// Heritable part of one creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeSnapshot {
    /// Species colour.
    pub color: f64,
    /// Movement decider weights.
    pub movement: Net,
    /// Interaction decider weights.
    pub interaction: Net,
}

impl From<&Creature> for GenomeSnapshot {
    fn from(creature: &Creature) -> Self {
        Self {
            color: creature.color,
            movement: creature.movement.net().clone(),
            interaction: creature.interaction.net().clone(),
        }
    }
}

/// Every genome alive at one point of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    /// RFC 3339 timestamp of the capture.
    pub saved_at: String,
    /// Completed ticks at capture time.
    pub tick: u64,
    /// Genomes in creature insertion order.
    pub genomes: Vec<GenomeSnapshot>,
}

impl PopulationSnapshot {
    /// Saves the snapshot to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a snapshot from a JSON file. Network shapes are checked while
    /// parsing.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl<E: Entropy> Simulation<E> {
    /// Captures the genomes of every live creature.
    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            saved_at: chrono::Utc::now().to_rfc3339(),
            tick: self.ticks(),
            genomes: self.creatures().map(GenomeSnapshot::from).collect(),
        }
    }

    /// Places every genome of `snapshot` on a random free cell with fresh
    /// random HP. Returns how many were placed; stops early when the grid is
    /// full.
    ///
    /// All genomes are checked against this simulation's decider shapes
    /// before anything is placed.
    pub fn restore(&mut self, snapshot: &PopulationSnapshot) -> Result<usize> {
        let hidden = self.params().hidden_neurons;
        let expected_movement = MovementDecider::shape(hidden);
        let expected_interaction = InteractionDecider::shape(hidden);

        let mut genomes = Vec::with_capacity(snapshot.genomes.len());
        for genome in &snapshot.genomes {
            for (net, expected) in [
                (&genome.movement, expected_movement),
                (&genome.interaction, expected_interaction),
            ] {
                if net.shape() != expected {
                    return Err(SimError::ShapeMismatch {
                        left: net.shape(),
                        right: expected,
                    });
                }
            }
            genomes.push((
                genome.color,
                MovementDecider::from_net(genome.movement.clone())?,
                InteractionDecider::from_net(genome.interaction.clone())?,
            ));
        }

        let mut restored = 0;
        for (color, movement, interaction) in genomes {
            if self.spawn_creature(color, movement, interaction)? == SpawnOutcome::NoFreeCells {
                log::warn!(
                    "grid full, restored {restored} of {} genomes",
                    snapshot.genomes.len()
                );
                break;
            }
            restored += 1;
        }
        Ok(restored)
    }
}
