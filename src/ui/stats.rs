use gridlife::simulation::ecosystem::Simulation;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, simulation: &Simulation) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            // Save/Load/Reset buttons
            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    state.save_requested = true;
                }
                if ui.button("📂 Load").clicked() {
                    state.load_requested = true;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut state.spawn_count).range(1..=1000));
                if ui.button("🐣 Spawn").clicked() {
                    state.spawn_requested = true;
                }
            });

            // Rendering toggle
            ui.horizontal(|ui| {
                let button_text = if state.rendering_enabled {
                    "🎨 Rendering: ON"
                } else {
                    "🎨 Rendering: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
            });

            // Show status message if any
            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            // Simulation speed slider
            ui.label("Simulation Speed");
            ui.add(egui::Slider::new(&mut state.simulation_speed, 0.1..=50.0).text("ticks/frame"));
            ui.label(format!("Ticks/sec: {:.1}", state.actual_ticks_per_sec));
            ui.label(format!("Tick time: {:.2}ms", state.last_tick_time_ms));

            ui.separator();

            let summary = simulation.summary();
            let params = simulation.params();
            ui.label(format!("Tick: {}", simulation.ticks()));
            ui.label(format!(
                "Grid: {}x{}",
                simulation.grid().width(),
                simulation.grid().height()
            ));
            ui.label(format!("Creatures: {}", summary.population));
            ui.label(format!("Food: {:.1}", summary.total_food));

            ui.separator();

            let census = simulation.census();
            ui.collapsing("Totals", |ui| {
                let totals = &census.totals;
                ui.label(format!("Births (split): {}", totals.split_births));
                ui.label(format!("Births (pair): {}", totals.pair_births));
                ui.label(format!("Pairings: {}", totals.pairings));
                ui.label(format!("Fights: {}", totals.fights));
                ui.label(format!("Starved: {}", totals.starved));
                ui.label(format!("Died of age: {}", totals.died_of_age));
            });
            ui.label(format!(
                "Recent avg per tick: births {:.2}, deaths {:.2}, fights {:.2}",
                census.avg_births(),
                census.avg_deaths(),
                census.avg_fights()
            ));

            ui.separator();

            // Creature statistics
            if summary.population > 0 {
                ui.heading("Creature Stats");

                let max_age = simulation.creatures().map(|c| c.age).max().unwrap_or(0);

                ui.label(format!("Avg Age: {:.1}", summary.mean_age));
                ui.label(format!("Max Age: {} / {}", max_age, params.max_age));
                ui.label(format!("Avg HP: {:.2} / {:.1}", summary.mean_hp, params.max_hp));
                ui.label(format!("Avg Colour: {:.3}", summary.mean_color));

                ui.separator();
            }

            // Combined population plot (shown even when no creatures exist)
            ui.heading("Population Over Time");
            draw_population_plot(ui, &state.creature_count_history, &state.births_history);

            ui.separator();

            ui.heading("Average HP Over Time");
            draw_time_series_plot(ui, "mean_hp_plot", &state.mean_hp_history, "Tick", "HP");
        });
}

fn draw_time_series_plot(
    ui: &mut egui::Ui,
    id: &str,
    data: &VecDeque<(f64, f64)>,
    x_label: &str,
    y_label: &str,
) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points);

    Plot::new(id)
        .height(150.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("{}: {:.0}\n{}: {:.2}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn draw_population_plot(
    ui: &mut egui::Ui,
    creature_data: &VecDeque<(f64, f64)>,
    births_data: &VecDeque<(f64, f64)>,
) {
    if creature_data.is_empty() && births_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if !creature_data.is_empty() {
                let points: PlotPoints = creature_data.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Creatures");
                plot_ui.line(line);
            }

            if !births_data.is_empty() {
                let points: PlotPoints = births_data.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Births");
                plot_ui.line(line);
            }
        });
}
