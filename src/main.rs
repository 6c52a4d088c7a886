use gridlife::simulation::ecosystem::Simulation;
use gridlife::simulation::error::Result;
use gridlife::simulation::params::Params;
use gridlife::simulation::snapshot::PopulationSnapshot;
use macroquad::prelude::*;

mod graphics;
mod ui;

const SNAPSHOT_FILE: &str = "gridlife_snapshot.json";
const PARAMS_FILE: &str = "gridlife_params.json";

fn start_simulation(params: &Params) -> Result<Simulation> {
    let mut simulation = Simulation::new(params.clone())?;
    let spawned = simulation.spawn_random_creatures(params.initial_creatures)?;
    log::info!(
        "started {}x{} simulation with {spawned} creatures",
        params.width,
        params.height
    );
    Ok(simulation)
}

fn save_simulation(simulation: &Simulation) -> Result<()> {
    simulation.params().save_to_file(PARAMS_FILE)?;
    simulation.snapshot().save_to_file(SNAPSHOT_FILE)
}

fn load_simulation(simulation: &mut Simulation) -> Result<usize> {
    let snapshot = PopulationSnapshot::load_from_file(SNAPSHOT_FILE)?;
    simulation.restore(&snapshot)
}

#[macroquad::main("Gridlife")]
async fn main() {
    env_logger::init();

    let mut params = Params::load_from_file(PARAMS_FILE).unwrap_or_default();
    let mut simulation: Option<Simulation> = None;
    let mut ui_state = ui::UIState::new();
    let mut tick_budget = 0.0_f32;
    let mut halted = false;

    loop {
        let Some(sim) = simulation.as_mut() else {
            if ui::draw_genesis_screen(&mut params) {
                match start_simulation(&params) {
                    Ok(started) => {
                        ui_state.clear_history();
                        ui_state.status_message = None;
                        halted = false;
                        simulation = Some(started);
                    }
                    Err(e) => log::error!("cannot start simulation: {e}"),
                }
            }
            next_frame().await;
            continue;
        };

        // Handle UI requests
        if ui_state.save_requested {
            ui_state.save_requested = false;
            ui_state.status_message = Some(match save_simulation(sim) {
                Ok(()) => format!("Saved {} genomes to {SNAPSHOT_FILE}", sim.len()),
                Err(e) => format!("Save failed: {e}"),
            });
        }
        if ui_state.load_requested {
            ui_state.load_requested = false;
            ui_state.status_message = Some(match load_simulation(sim) {
                Ok(restored) => format!("Restored {restored} genomes"),
                Err(e) => format!("Load failed: {e}"),
            });
        }
        if ui_state.spawn_requested {
            ui_state.spawn_requested = false;
            ui_state.status_message = Some(match sim.spawn_random_creatures(ui_state.spawn_count) {
                Ok(spawned) => format!("Spawned {spawned} creatures"),
                Err(e) => format!("Spawn failed: {e}"),
            });
        }
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            simulation = None;
            next_frame().await;
            continue;
        }

        // Advance the simulation
        if !ui_state.paused && !halted {
            tick_budget += ui_state.simulation_speed;
            let started = get_time();
            let mut ticks_run = 0;
            while tick_budget >= 1.0 {
                tick_budget -= 1.0;
                if let Err(e) = sim.tick() {
                    log::error!("simulation halted at tick {}: {e}", sim.ticks());
                    ui_state.status_message = Some(format!("Simulation halted: {e}"));
                    halted = true;
                    break;
                }
                ticks_run += 1;
            }
            if ticks_run > 0 {
                let elapsed = (get_time() - started) as f32;
                ui_state.last_tick_time_ms = elapsed * 1000.0 / ticks_run as f32;
            }
            ui_state.actual_ticks_per_sec = ticks_run as f32 / get_frame_time().max(f32::EPSILON);
            ui_state.update_history(sim);
        }

        clear_background(BLACK);

        let view = graphics::GridView::fit(sim.grid(), ui_state.stats_panel_width);
        let (mouse_x, mouse_y) = mouse_position();
        let over_grid = mouse_x < screen_width() - ui_state.stats_panel_width;
        ui_state.hovered_creature_id = view
            .cell_at(mouse_x, mouse_y)
            .filter(|_| over_grid)
            .and_then(|(x, y)| sim.creature_at(x, y))
            .map(|creature| creature.id);
        if over_grid && is_mouse_button_pressed(MouseButton::Left) {
            ui_state.selected_creature_id = ui_state.hovered_creature_id;
        }

        if ui_state.rendering_enabled {
            graphics::draw_cells(sim, view);
            graphics::draw_creatures(
                sim,
                view,
                ui_state.selected_creature_id.or(ui_state.hovered_creature_id),
            );
        }

        ui::draw_ui(&mut ui_state, sim);
        ui::process_egui();

        next_frame().await;
    }
}
