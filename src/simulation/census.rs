//! Per-tick statistics and running totals.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first completed tick.
    pub tick: u64,
    /// Creatures that ran out of HP.
    pub starved: usize,
    /// Creatures that exceeded the maximum age.
    pub died_of_age: usize,
    /// Successful moves.
    pub moves: usize,
    /// Fights resolved (each removes one creature).
    pub fights: usize,
    /// Pairings resolved, with or without a child.
    pub pairings: usize,
    /// Children born from pairing.
    pub pair_births: usize,
    /// Children born from splitting.
    pub split_births: usize,
    /// Live creatures at the end of the tick.
    pub population: usize,
}

impl TickReport {
    /// Creatures removed during the tick.
    pub fn deaths(&self) -> usize {
        self.starved + self.died_of_age + self.fights
    }

    /// Creatures born during the tick.
    pub fn births(&self) -> usize {
        self.pair_births + self.split_births
    }
}

/// Running totals plus a window of recent tick reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Census {
    /// Sum of all reports so far; `tick` and `population` mirror the latest.
    pub totals: TickReport,
    /// Most recent reports, oldest first.
    pub recent: VecDeque<TickReport>,
    /// Maximum number of recent reports to keep
    pub max_history: usize,
}

impl Default for Census {
    fn default() -> Self {
        Self {
            totals: TickReport::default(),
            recent: VecDeque::new(),
            max_history: 100, // Track the last 100 ticks
        }
    }
}

impl Census {
    /// Adds a finished tick.
    pub fn record(&mut self, report: TickReport) {
        self.totals.tick = report.tick;
        self.totals.population = report.population;
        self.totals.starved += report.starved;
        self.totals.died_of_age += report.died_of_age;
        self.totals.moves += report.moves;
        self.totals.fights += report.fights;
        self.totals.pairings += report.pairings;
        self.totals.pair_births += report.pair_births;
        self.totals.split_births += report.split_births;

        self.recent.push_back(report);
        if self.recent.len() > self.max_history {
            self.recent.pop_front();
        }
    }

    /// Latest report, if any tick has run.
    pub fn last(&self) -> Option<&TickReport> {
        self.recent.back()
    }

    /// Average births per tick over the recent window.
    pub fn avg_births(&self) -> f64 {
        self.window_average(TickReport::births)
    }

    /// Average deaths per tick over the recent window.
    pub fn avg_deaths(&self) -> f64 {
        self.window_average(TickReport::deaths)
    }

    /// Average fights per tick over the recent window.
    pub fn avg_fights(&self) -> f64 {
        self.window_average(|report| report.fights)
    }

    fn window_average(&self, value: impl Fn(&TickReport) -> usize) -> f64 {
        if self.recent.is_empty() {
            0.0
        } else {
            self.recent.iter().map(value).sum::<usize>() as f64 / self.recent.len() as f64
        }
    }
}

/// Snapshot of the population for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Live creatures.
    pub population: usize,
    /// Sum of HP.
    pub total_hp: f64,
    /// Mean HP, zero when empty.
    pub mean_hp: f64,
    /// Mean age in ticks, zero when empty.
    pub mean_age: f64,
    /// Mean colour, zero when empty.
    pub mean_color: f64,
    /// Food on the whole grid.
    pub total_food: f64,
}
