use gridlife::simulation::creature::CreatureId;
use gridlife::simulation::ecosystem::Simulation;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

#[allow(clippy::struct_excessive_bools)]
pub struct UIState {
    pub hovered_creature_id: Option<CreatureId>,
    pub selected_creature_id: Option<CreatureId>,
    pub stats_panel_width: f32,
    pub creature_count_history: VecDeque<(f64, f64)>,
    pub births_history: VecDeque<(f64, f64)>,
    pub mean_hp_history: VecDeque<(f64, f64)>,
    last_update_tick: u64,
    update_interval: u64,
    pub save_requested: bool,
    pub load_requested: bool,
    pub reset_requested: bool,
    pub spawn_requested: bool,
    pub spawn_count: usize,
    pub paused: bool,
    pub status_message: Option<String>,
    pub simulation_speed: f32,
    pub rendering_enabled: bool,
    pub last_tick_time_ms: f32,
    pub actual_ticks_per_sec: f32,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            hovered_creature_id: None,
            selected_creature_id: None,
            stats_panel_width: 320.0,
            creature_count_history: VecDeque::new(),
            births_history: VecDeque::new(),
            mean_hp_history: VecDeque::new(),
            last_update_tick: 0,
            update_interval: 10, // Sample every 10 ticks
            save_requested: false,
            load_requested: false,
            reset_requested: false,
            spawn_requested: false,
            spawn_count: 50,
            paused: false,
            status_message: None,
            simulation_speed: 1.0, // One tick per frame
            rendering_enabled: true,
            last_tick_time_ms: 0.0,
            actual_ticks_per_sec: 0.0,
        }
    }

    pub fn clear_history(&mut self) {
        self.creature_count_history.clear();
        self.births_history.clear();
        self.mean_hp_history.clear();
        self.last_update_tick = 0;
        self.hovered_creature_id = None;
        self.selected_creature_id = None;
    }

    pub fn update_history(&mut self, simulation: &Simulation) {
        let tick = simulation.ticks();
        if tick < self.last_update_tick + self.update_interval {
            return;
        }
        self.last_update_tick = tick;

        let summary = simulation.summary();
        let births: usize = simulation
            .census()
            .recent
            .iter()
            .rev()
            .take(self.update_interval as usize)
            .map(|report| report.births())
            .sum();

        push_bounded(&mut self.creature_count_history, (tick as f64, summary.population as f64));
        push_bounded(&mut self.births_history, (tick as f64, births as f64));
        if summary.population > 0 {
            push_bounded(&mut self.mean_hp_history, (tick as f64, summary.mean_hp));
        }
    }
}

fn push_bounded(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &mut UIState, simulation: &Simulation) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        // Right-side stats panel
        super::stats::draw_stats_panel(egui_ctx, state, simulation);

        super::events::draw_events_panel(egui_ctx, simulation);

        // Detail panel - show selected creature, or hovered if nothing selected
        let display_id = state.selected_creature_id.or(state.hovered_creature_id);
        if let Some(id) = display_id {
            if let Some(creature) = simulation.creature(id) {
                super::creatures::draw_creature_detail_panel(
                    egui_ctx,
                    creature,
                    simulation.params().max_hp,
                    state.selected_creature_id.is_some(),
                );
            } else if state.selected_creature_id == Some(id) {
                // Selected creature died, clear selection
                state.selected_creature_id = None;
            }
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
