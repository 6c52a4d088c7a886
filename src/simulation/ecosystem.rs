//! Main ecosystem simulation.
//!
//! [`Simulation`] owns the grid, every creature and the random source. One
//! call to [`Simulation::tick`] runs the phases in a fixed order:
//!
//! 1. food grows on unoccupied cells
//! 2. creatures age
//! 3. HP decays; starved or too old creatures are removed
//! 4. creatures eat from their own cell
//! 5. neighbourhoods are snapshotted
//! 6. creatures move, wrapping across the border ring
//! 7. creatures interact with their snapshotted neighbours
//! 8. healthy creatures split
//!
//! Each phase walks the creatures in insertion order. A creature removed
//! mid-phase is skipped; a child born mid-phase waits for the next tick.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::census::{Census, PopulationSummary, TickReport};
use super::creature::{Creature, CreatureId};
use super::decider::{InteractAction, InteractionDecider, MoveAction, MovementDecider, NEIGHBORHOOD_RADIUS};
use super::entropy::Entropy;
use super::error::{Result, SimError};
use super::event_log::{EventKind, EventLog};
use super::grid::{Cell, Grid};
use super::params::Params;

/// Result of trying to seed a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The creature was placed.
    Spawned(CreatureId),
    /// Every interior cell is taken; nothing was placed.
    NoFreeCells,
}

/// How an encounter between two creatures ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Neither creature acted.
    Nothing,
    /// The loser was removed.
    Fight {
        /// Survivor.
        winner: CreatureId,
        /// Removed creature.
        loser: CreatureId,
    },
    /// Both parents gave up half their HP; a child was born if the pooled HP
    /// was high enough and there was room.
    Pair {
        /// The newborn, if any.
        child: Option<CreatureId>,
    },
}

/// Cells each creature could see right after feeding.
type Neighborhoods = HashMap<CreatureId, Vec<(usize, usize)>>;

/// The simulation engine.
///
/// Generic over its random source so tests can script every draw; the
/// default is a seedable [`StdRng`].
#[derive(Debug)]
pub struct Simulation<E = StdRng> {
    params: Params,
    grid: Grid,
    creatures: HashMap<CreatureId, Creature>,
    /// Live creature ids in insertion order.
    order: Vec<CreatureId>,
    entropy: E,
    event_log: EventLog,
    census: Census,
    ticks: u64,
}

impl Simulation<StdRng> {
    /// Creates an empty simulation seeded from `params.seed`, or from the OS
    /// when no seed is given.
    pub fn new(params: Params) -> Result<Self> {
        let entropy = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_entropy(params, entropy)
    }
}

impl<E: Entropy> Simulation<E> {
    /// Creates an empty simulation with a noise-generated grid, drawing the
    /// noise seed from `entropy`.
    pub fn with_entropy(params: Params, mut entropy: E) -> Result<Self> {
        params.validate()?;
        let noise_seed = entropy.range_inclusive(0, i64::from(u32::MAX)) as u32;
        let grid = Grid::new(
            params.width,
            params.height,
            params.food_color_smoothness,
            noise_seed,
            params.max_cell_food,
        );
        Self::with_grid(params, grid, entropy)
    }

    /// Creates an empty simulation on a prepared grid. The grid's size
    /// overrides `params.width` and `params.height`.
    pub fn with_grid(mut params: Params, grid: Grid, entropy: E) -> Result<Self> {
        params.width = grid.width();
        params.height = grid.height();
        params.validate()?;

        let event_log = EventLog::new(params.event_log_size, params.verbose);
        Ok(Self {
            params,
            grid,
            creatures: HashMap::new(),
            order: Vec::new(),
            entropy,
            event_log,
            census: Census::default(),
            ticks: 0,
        })
    }

    /// Active parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Live creatures in insertion order.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.order.iter().filter_map(|id| self.creatures.get(id))
    }

    /// Live creature ids in insertion order.
    pub fn creature_ids(&self) -> &[CreatureId] {
        &self.order
    }

    /// Creature by id.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    /// Creature standing on `(x, y)`.
    pub fn creature_at(&self, x: usize, y: usize) -> Option<&Creature> {
        self.grid
            .get(x, y)
            .and_then(Cell::occupant)
            .and_then(|id| self.creatures.get(&id))
    }

    /// Number of live creatures.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no creature is alive.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Recent notable events.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Tick statistics.
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// Aggregate view of the current population.
    pub fn summary(&self) -> PopulationSummary {
        let population = self.order.len();
        let (total_hp, total_age, total_color) = self.creatures().fold(
            (0.0, 0.0, 0.0),
            |(hp, age, color), creature| (hp + creature.hp, age + creature.age as f64, color + creature.color),
        );
        let mean = |total: f64| if population == 0 { 0.0 } else { total / population as f64 };

        PopulationSummary {
            population,
            total_hp,
            mean_hp: mean(total_hp),
            mean_age: mean(total_age),
            mean_color: mean(total_color),
            total_food: self.grid.total_food(),
        }
    }

    /// Whether `(x, y)` is an interior cell with nobody on it.
    pub fn is_cell_free(&self, x: usize, y: usize) -> bool {
        self.grid.is_interior(x, y) && !self.grid.cell(x, y).is_occupied()
    }

    /// First free cell within `radius` of `(x, y)`, scanning row by row.
    pub fn free_cell_near(&self, x: usize, y: usize, radius: usize) -> Option<(usize, usize)> {
        self.grid
            .coords_in_radius(x, y, radius)
            .into_iter()
            .find(|&(cx, cy)| self.is_cell_free(cx, cy))
    }

    /// Every free interior cell, row-major.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.grid
            .cells()
            .iter()
            .filter(|cell| !cell.is_occupied() && self.grid.is_interior(cell.x, cell.y))
            .map(|cell| (cell.x, cell.y))
            .collect()
    }

    /// Places `creature` on `(x, y)`, which must be free and interior.
    pub fn add_creature(&mut self, mut creature: Creature, x: usize, y: usize) -> Result<CreatureId> {
        if !self.grid.is_interior(x, y) {
            return Err(SimError::OutsideInterior { x, y });
        }
        if let Some(occupant) = self.grid.cell(x, y).occupant() {
            return Err(SimError::CellOccupied { x, y, occupant });
        }
        let id = creature.id;
        if self.creatures.contains_key(&id) {
            return Err(SimError::Occupancy(format!("creature {id} is already placed")));
        }

        creature.place(x, y);
        self.grid.cell_mut(x, y).set_occupant(Some(id));
        self.creatures.insert(id, creature);
        self.order.push(id);
        Ok(id)
    }

    /// Removes a creature from the grid and returns it, marked dead.
    pub fn remove_creature(&mut self, id: CreatureId) -> Result<Creature> {
        let (x, y) = self
            .creatures
            .get(&id)
            .map(Creature::position)
            .ok_or(SimError::UnknownCreature(id))?;
        if self.grid.cell(x, y).occupant() != Some(id) {
            return Err(SimError::Occupancy(format!(
                "creature {id} was not the occupant of ({x}, {y})"
            )));
        }

        self.grid.cell_mut(x, y).set_occupant(None);
        self.order.retain(|other| *other != id);
        let mut creature = self.creatures.remove(&id).ok_or(SimError::UnknownCreature(id))?;
        creature.kill();
        Ok(creature)
    }

    /// Moves a creature to `(x, y)`, which must be free and interior.
    pub fn move_creature(&mut self, id: CreatureId, x: usize, y: usize) -> Result<()> {
        if !self.grid.is_interior(x, y) {
            return Err(SimError::OutsideInterior { x, y });
        }
        if let Some(occupant) = self.grid.cell(x, y).occupant() {
            return Err(SimError::CellOccupied { x, y, occupant });
        }

        let creature = self.creatures.get_mut(&id).ok_or(SimError::UnknownCreature(id))?;
        let (from_x, from_y) = creature.position();
        creature.place(x, y);
        self.grid.cell_mut(from_x, from_y).set_occupant(None);
        self.grid.cell_mut(x, y).set_occupant(Some(id));
        Ok(())
    }

    /// Where a step from `(x, y)` lands. Stepping onto the border ring wraps
    /// to the opposite interior edge: column 0 maps to `width - 2`, column
    /// `width - 1` maps to 1, and rows likewise.
    pub fn step_target(&self, x: usize, y: usize, action: MoveAction) -> (usize, usize) {
        let (dx, dy) = action.delta();
        (
            wrap_around(x, dx, self.grid.width()),
            wrap_around(y, dy, self.grid.height()),
        )
    }

    /// Places a creature with the given genome on a random free cell, with
    /// random integer HP in `[max_hp / 2, max_hp]`.
    pub fn spawn_creature(
        &mut self,
        color: f64,
        movement: MovementDecider,
        interaction: InteractionDecider,
    ) -> Result<SpawnOutcome> {
        let free = self.free_cells();
        let Some(&(x, y)) = self.entropy.pick(&free) else {
            return Ok(SpawnOutcome::NoFreeCells);
        };

        let hp = self.spawn_hp();
        let id = self.add_creature(Creature::new(hp, color, movement, interaction), x, y)?;
        self.event_log.log(
            self.ticks,
            format!("Creature {id} spawned at ({x}, {y})"),
            EventKind::Spawn,
        );
        Ok(SpawnOutcome::Spawned(id))
    }

    /// Places a creature with random deciders and a uniform colour in
    /// `[0, 1)` on a random free cell.
    pub fn spawn_random_creature(&mut self) -> Result<SpawnOutcome> {
        let hidden = self.params.hidden_neurons;
        let scale = self.params.initial_weight_scale;
        let color = self.entropy.unit();
        let movement = MovementDecider::new_random(hidden, scale, &mut self.entropy);
        let interaction = InteractionDecider::new_random(hidden, scale, &mut self.entropy);
        self.spawn_creature(color, movement, interaction)
    }

    // Needs max_hp >= 1, which `Params::validate` enforces.
    fn spawn_hp(&mut self) -> f64 {
        let max_hp = self.params.max_hp;
        self.entropy
            .range_inclusive((max_hp / 2.0).ceil() as i64, max_hp.floor() as i64) as f64
    }

    /// Spawns up to `count` random creatures and returns how many were
    /// placed; stops early once the grid is full.
    pub fn spawn_random_creatures(&mut self, count: usize) -> Result<usize> {
        for spawned in 0..count {
            if self.spawn_random_creature()? == SpawnOutcome::NoFreeCells {
                return Ok(spawned);
            }
        }
        Ok(count)
    }

    /// Checks that creatures and cells agree about who stands where.
    pub fn verify_occupancy(&self) -> Result<()> {
        if self.order.len() != self.creatures.len() {
            return Err(SimError::Occupancy(format!(
                "{} ids in order but {} creatures",
                self.order.len(),
                self.creatures.len()
            )));
        }

        for id in &self.order {
            let creature = self.creatures.get(id).ok_or(SimError::UnknownCreature(*id))?;
            let (x, y) = creature.position();
            if creature.is_dead() {
                return Err(SimError::Occupancy(format!("creature {id} is dead but still listed")));
            }
            if !self.grid.is_interior(x, y) {
                return Err(SimError::OutsideInterior { x, y });
            }
            if self.grid.cell(x, y).occupant() != Some(*id) {
                return Err(SimError::Occupancy(format!(
                    "creature {id} stands on ({x}, {y}) but the cell does not point back"
                )));
            }
        }

        for cell in self.grid.cells() {
            let Some(id) = cell.occupant() else { continue };
            let creature = self.creatures.get(&id).ok_or(SimError::UnknownCreature(id))?;
            if creature.position() != (cell.x, cell.y) {
                return Err(SimError::Occupancy(format!(
                    "cell ({}, {}) points at creature {id} standing on {:?}",
                    cell.x,
                    cell.y,
                    creature.position()
                )));
            }
        }

        Ok(())
    }

    /// Advances the simulation by one tick.
    ///
    /// An error means an occupancy or network invariant broke; the engine
    /// state is then unspecified and the run should stop.
    pub fn tick(&mut self) -> Result<TickReport> {
        let mut report = TickReport {
            tick: self.ticks + 1,
            ..TickReport::default()
        };

        self.grow_food();
        self.age_creatures();
        self.remove_dying(&mut report)?;
        self.feed_creatures();
        let neighborhoods = self.snapshot_neighborhoods();
        self.move_creatures(&neighborhoods, &mut report)?;
        self.interact_creatures(&neighborhoods, &mut report)?;
        self.split_creatures(&mut report)?;

        self.ticks += 1;
        report.population = self.order.len();
        self.census.record(report);

        let summary = self.summary();
        self.event_log.trace(
            self.ticks,
            format_args!(
                "creatures: {} total hp: {:.2} births: {} deaths: {}",
                summary.population,
                summary.total_hp,
                report.births(),
                report.deaths()
            ),
        );
        Ok(report)
    }

    fn grow_food(&mut self) {
        let growth = self.params.food_per_cell_per_tick;
        let cap = self.params.max_cell_food;
        for cell in self.grid.cells_mut() {
            if !cell.is_occupied() {
                cell.food_amount = (cell.food_amount + growth).min(cap);
            }
        }
    }

    fn age_creatures(&mut self) {
        for creature in self.creatures.values_mut() {
            creature.age += 1;
        }
    }

    fn remove_dying(&mut self, report: &mut TickReport) -> Result<()> {
        let decay = self.params.hp_decay_per_tick;
        let max_age = self.params.max_age;

        for id in self.order.clone() {
            let Some(creature) = self.creatures.get_mut(&id) else {
                continue;
            };
            creature.hp -= decay;
            let starved = creature.hp <= 0.0;
            let too_old = creature.age > max_age;
            if !starved && !too_old {
                continue;
            }

            let creature = self.remove_creature(id)?;
            let cause = if starved {
                report.starved += 1;
                "starved"
            } else {
                report.died_of_age += 1;
                "died of age"
            };
            self.event_log.log(
                self.ticks,
                format!("Creature {id} {cause} at age {}", creature.age),
                EventKind::Death,
            );
        }
        Ok(())
    }

    fn feed_creatures(&mut self) {
        let max_hp = self.params.max_hp;
        for id in &self.order {
            let Some(creature) = self.creatures.get_mut(id) else {
                continue;
            };
            let cell = self.grid.cell_mut(creature.x(), creature.y());
            let eaten = cell.food_amount / 2.0;
            let gained = eaten
                * self.params.appropriateness(cell.food_color, creature.color)
                * self.params.age_feeding_coeff(creature.age);
            creature.hp = (creature.hp + gained).min(max_hp);
            cell.food_amount -= eaten;
        }
    }

    fn snapshot_neighborhoods(&self) -> Neighborhoods {
        self.creatures()
            .map(|creature| {
                let (x, y) = creature.position();
                (creature.id, self.grid.coords_in_radius(x, y, NEIGHBORHOOD_RADIUS))
            })
            .collect()
    }

    fn move_creatures(&mut self, neighborhoods: &Neighborhoods, report: &mut TickReport) -> Result<()> {
        for id in self.order.clone() {
            let (Some(around), Some(creature)) = (neighborhoods.get(&id), self.creatures.get(&id)) else {
                continue;
            };

            let cells: Vec<&Cell> = around.iter().map(|&(x, y)| self.grid.cell(x, y)).collect();
            let action = creature.movement.decide(creature.color, &cells, &mut self.entropy)?;
            if action == MoveAction::Nothing {
                continue;
            }

            let (x, y) = creature.position();
            let (tx, ty) = self.step_target(x, y, action);
            if self.is_cell_free(tx, ty) {
                self.move_creature(id, tx, ty)?;
                report.moves += 1;
            }
        }
        Ok(())
    }

    fn interact_creatures(&mut self, neighborhoods: &Neighborhoods, report: &mut TickReport) -> Result<()> {
        for id in self.order.clone() {
            let Some(around) = neighborhoods.get(&id) else {
                continue;
            };
            // Whoever stands in the snapshotted cells now, not who stood there then.
            let neighbors: Vec<CreatureId> = around
                .iter()
                .filter_map(|&(x, y)| self.grid.cell(x, y).occupant())
                .filter(|other| *other != id)
                .collect();

            for other in neighbors {
                match self.process_interaction(id, other)? {
                    Some(Interaction::Fight { .. }) => report.fights += 1,
                    Some(Interaction::Pair { child }) => {
                        report.pairings += 1;
                        if child.is_some() {
                            report.pair_births += 1;
                        }
                    }
                    Some(Interaction::Nothing) | None => {}
                }
            }
        }
        Ok(())
    }

    /// Lets `first` and `second` each pick an action towards the other and
    /// resolves the result. Returns `None` if either is gone.
    pub fn process_interaction(&mut self, first: CreatureId, second: CreatureId) -> Result<Option<Interaction>> {
        if first == second {
            return Ok(None);
        }
        let (Some(a), Some(b)) = (self.creatures.get(&first), self.creatures.get(&second)) else {
            return Ok(None);
        };
        if a.is_dead() || b.is_dead() {
            return Ok(None);
        }

        let first_action = a.interaction.decide(b, &mut self.entropy)?;
        let second_action = b.interaction.decide(a, &mut self.entropy)?;
        self.resolve_interaction(first, second, first_action, second_action)
            .map(Some)
    }

    /// Applies a pair of chosen actions. Any attack means a fight; otherwise
    /// any pair request means pairing.
    pub fn resolve_interaction(
        &mut self,
        first: CreatureId,
        second: CreatureId,
        first_action: InteractAction,
        second_action: InteractAction,
    ) -> Result<Interaction> {
        if first == second {
            return Ok(Interaction::Nothing);
        }
        if !self.creatures.contains_key(&first) {
            return Err(SimError::UnknownCreature(first));
        }
        if !self.creatures.contains_key(&second) {
            return Err(SimError::UnknownCreature(second));
        }

        let actions = [first_action, second_action];
        if actions.contains(&InteractAction::Attack) {
            self.fight(first, second)
        } else if actions.contains(&InteractAction::Pair) {
            self.pair(first, second)
        } else {
            Ok(Interaction::Nothing)
        }
    }

    fn hp_of(&self, id: CreatureId) -> Result<f64> {
        self.creatures
            .get(&id)
            .map(|creature| creature.hp)
            .ok_or(SimError::UnknownCreature(id))
    }

    fn fight(&mut self, first: CreatureId, second: CreatureId) -> Result<Interaction> {
        let first_hp = self.hp_of(first)?;
        let second_hp = self.hp_of(second)?;

        let (winner, loser) = if first_hp > second_hp {
            (first, second)
        } else if second_hp > first_hp {
            (second, first)
        } else {
            self.entropy.coin_flip((first, second), (second, first))
        };

        self.remove_creature(loser)?;
        self.event_log.log(
            self.ticks,
            format!("Creature {winner} killed {loser} ({first_hp:.2} vs {second_hp:.2} HP)"),
            EventKind::Combat,
        );
        Ok(Interaction::Fight { winner, loser })
    }

    fn pair(&mut self, first: CreatureId, second: CreatureId) -> Result<Interaction> {
        let (Some(a), Some(b)) = (self.creatures.get(&first), self.creatures.get(&second)) else {
            return Err(SimError::UnknownCreature(first));
        };
        let child_hp = a.hp / 2.0 + b.hp / 2.0;
        let child_color = (a.color + b.color) / 2.0;
        let (x, y) = a.position();

        for parent in [first, second] {
            if let Some(parent) = self.creatures.get_mut(&parent) {
                parent.hp /= 2.0;
            }
        }

        if child_hp < self.params.max_hp * self.params.pair_threshold {
            return Ok(Interaction::Pair { child: None });
        }
        let Some((cx, cy)) = self.free_cell_near(x, y, NEIGHBORHOOD_RADIUS) else {
            return Ok(Interaction::Pair { child: None });
        };

        let (Some(a), Some(b)) = (self.creatures.get(&first), self.creatures.get(&second)) else {
            return Err(SimError::UnknownCreature(first));
        };
        let rate = self.params.mutation_rate;
        let movement = {
            let forward = a.movement.merge(&b.movement, rate, &mut self.entropy)?;
            let backward = b.movement.merge(&a.movement, rate, &mut self.entropy)?;
            self.entropy.coin_flip(forward, backward)
        };
        let interaction = {
            let forward = a.interaction.merge(&b.interaction, rate, &mut self.entropy)?;
            let backward = b.interaction.merge(&a.interaction, rate, &mut self.entropy)?;
            self.entropy.coin_flip(forward, backward)
        };

        let child = self.add_creature(Creature::new(child_hp, child_color, movement, interaction), cx, cy)?;
        self.event_log.log(
            self.ticks,
            format!("Creatures {first} and {second} paired, child {child} at ({cx}, {cy})"),
            EventKind::Reproduction,
        );
        Ok(Interaction::Pair { child: Some(child) })
    }

    fn split_creatures(&mut self, report: &mut TickReport) -> Result<()> {
        let threshold = self.params.max_hp * self.params.split_threshold;
        let rate = self.params.mutation_rate;
        let drift = self.params.color_drift;

        for id in self.order.clone() {
            let Some(parent) = self.creatures.get(&id) else {
                continue;
            };
            if parent.hp < threshold {
                continue;
            }
            let (x, y) = parent.position();
            let Some((cx, cy)) = self.free_cell_near(x, y, NEIGHBORHOOD_RADIUS) else {
                continue;
            };

            let child_hp = parent.hp / 2.0;
            let color = parent.color + self.entropy.symmetric(drift);
            let movement = parent.movement.mutated(rate, &mut self.entropy);
            let interaction = parent.interaction.mutated(rate, &mut self.entropy);

            if let Some(parent) = self.creatures.get_mut(&id) {
                parent.hp = child_hp;
            }
            let child = self.add_creature(Creature::new(child_hp, color, movement, interaction), cx, cy)?;
            report.split_births += 1;
            self.event_log.log(
                self.ticks,
                format!("Creature {id} split, child {child} at ({cx}, {cy})"),
                EventKind::Reproduction,
            );
        }
        Ok(())
    }
}

/// Applies `delta` to `coord` on an axis of `size` cells, wrapping steps onto
/// the border ring to the opposite interior edge.
fn wrap_around(coord: usize, delta: i64, size: usize) -> usize {
    let target = coord as i64 + delta;
    if delta < 0 && target <= 0 {
        size - 2
    } else if delta > 0 && target >= size as i64 - 1 {
        1
    } else {
        target as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_creature(rng: &mut StdRng) -> Creature {
        Creature::new(
            5.0,
            0.5,
            MovementDecider::new_random(2, 0.1, rng),
            InteractionDecider::new_random(2, 0.1, rng),
        )
    }

    #[test]
    fn test_remove_with_stale_cell_leaves_state_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = Params {
            initial_creatures: 0,
            ..Params::default()
        };
        let mut simulation =
            Simulation::with_grid(params, Grid::uniform(5, 5, 0.5, 0.0), StdRng::seed_from_u64(1)).unwrap();
        let a = simulation.add_creature(test_creature(&mut rng), 1, 1).unwrap();
        let b = simulation.add_creature(test_creature(&mut rng), 2, 1).unwrap();

        simulation.grid.cell_mut(1, 1).set_occupant(Some(b));
        let result = simulation.remove_creature(a);

        assert!(matches!(result, Err(SimError::Occupancy(_))));
        assert!(simulation.creature(a).is_some());
        assert_eq!(simulation.creature_ids(), &[a, b]);
        assert_eq!(simulation.grid.cell(1, 1).occupant(), Some(b));
    }

    #[test]
    fn test_wrap_around_lands_on_opposite_interior_edge() {
        assert_eq!(wrap_around(1, -1, 6), 4);
        assert_eq!(wrap_around(4, 1, 6), 1);
        assert_eq!(wrap_around(2, 1, 6), 3);
        assert_eq!(wrap_around(3, 0, 6), 3);
    }
}
