//! Simulation parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};

/// Tunable constants of the simulation.
///
/// Missing fields in a config file fall back to [`Params::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Grid columns, including the border ring.
    pub width: usize,
    /// Grid rows, including the border ring.
    pub height: usize,
    /// Health cap of every creature.
    pub max_hp: f64,
    /// Health lost by every creature each tick.
    pub hp_decay_per_tick: f64,
    /// Food added each tick to every unoccupied cell.
    pub food_per_cell_per_tick: f64,
    /// Food cap of a cell. Cells start full.
    pub max_cell_food: f64,
    /// Creatures older than this die.
    pub max_age: u64,
    /// Exponent applied to the colour-match factor when feeding.
    pub appropriateness_scale: f64,
    /// Exponent of the age falloff `(1 / (age + 1))^e` when feeding.
    pub age_feeding_exponent: f64,
    /// Fraction of `max_hp` at which a creature splits.
    pub split_threshold: f64,
    /// Fraction of `max_hp` the pooled HP of a pair must reach to spawn a child.
    pub pair_threshold: f64,
    /// Hidden layer width of both deciders.
    pub hidden_neurons: usize,
    /// Random initial weights are drawn from `[-scale, scale)`.
    pub initial_weight_scale: f64,
    /// Per-weight perturbation range for splitting and crossover.
    pub mutation_rate: f64,
    /// Colour perturbation range of split children.
    pub color_drift: f64,
    /// Smoothing of the food colour noise field.
    pub food_color_smoothness: f64,
    /// Population seeded by front ends at startup.
    pub initial_creatures: usize,
    /// Seed for the default random source and the food colour field.
    pub seed: Option<u64>,
    /// Forward simulation events to the `log` facade.
    pub verbose: bool,
    /// Number of recent events kept for display.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            max_hp: 10.0,
            hp_decay_per_tick: 0.01,
            food_per_cell_per_tick: 0.2,
            max_cell_food: 4.0,
            max_age: 10_000,
            appropriateness_scale: 2.0,
            age_feeding_exponent: 1.0 / 6.0,
            split_threshold: 0.9,
            pair_threshold: 0.5,
            hidden_neurons: 8,
            initial_weight_scale: 0.1,
            mutation_rate: 0.02,
            color_drift: 0.1,
            food_color_smoothness: 30.0,
            initial_creatures: 300,
            seed: None,
            verbose: false,
            event_log_size: 20,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<()> {
        if self.width < 3 || self.height < 3 {
            return Err(SimError::InvalidParams(format!(
                "grid must be at least 3x3, got {}x{}",
                self.width, self.height
            )));
        }
        // Spawn HP is an integer in [ceil(max_hp / 2), floor(max_hp)]
        if self.max_hp.is_nan() || self.max_hp < 1.0 {
            return Err(SimError::InvalidParams(format!(
                "max_hp must be at least 1, got {}",
                self.max_hp
            )));
        }
        if self.max_cell_food < 0.0 || self.food_per_cell_per_tick < 0.0 {
            return Err(SimError::InvalidParams(
                "food amounts must not be negative".to_string(),
            ));
        }
        if self.hidden_neurons == 0 {
            return Err(SimError::InvalidParams(
                "deciders need at least one hidden neuron".to_string(),
            ));
        }
        if self.food_color_smoothness <= 0.0 {
            return Err(SimError::InvalidParams(format!(
                "food_color_smoothness must be positive, got {}",
                self.food_color_smoothness
            )));
        }
        for (name, value) in [
            ("hp_decay_per_tick", self.hp_decay_per_tick),
            ("initial_weight_scale", self.initial_weight_scale),
            ("mutation_rate", self.mutation_rate),
            ("color_drift", self.color_drift),
        ] {
            if value < 0.0 {
                return Err(SimError::InvalidParams(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// How well a creature of `color` digests food of `food_color`.
    pub fn appropriateness(&self, food_color: f64, color: f64) -> f64 {
        (1.0 - food_color - color)
            .abs()
            .powf(self.appropriateness_scale)
    }

    /// Feeding efficiency at `age`; young creatures feed best.
    pub fn age_feeding_coeff(&self, age: u64) -> f64 {
        (1.0 / (age as f64 + 1.0)).powf(self.age_feeding_exponent)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
