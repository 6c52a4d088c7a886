use gridlife::simulation::params::Params;
use egui_macroquad::egui;
use macroquad::prelude::*;

pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Gridlife - Configuration");
                ui.add_space(10.0);

                ui.collapsing("World Parameters", |ui| {
                    ui.add(egui::Slider::new(&mut params.width, 10..=400).text("Grid Width"));
                    ui.add(egui::Slider::new(&mut params.height, 10..=400).text("Grid Height"));
                    ui.add(
                        egui::Slider::new(&mut params.food_color_smoothness, 1.0..=100.0)
                            .text("Food Colour Smoothness"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.max_cell_food, 0.5..=20.0)
                            .text("Max Food per Cell"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.food_per_cell_per_tick, 0.0..=2.0)
                            .text("Food Growth per Tick"),
                    );
                });

                ui.collapsing("Creature Parameters", |ui| {
                    ui.add(egui::Slider::new(&mut params.max_hp, 1.0..=50.0).text("Max HP"));
                    ui.add(
                        egui::Slider::new(&mut params.hp_decay_per_tick, 0.0..=1.0)
                            .text("HP Decay per Tick"),
                    );
                    ui.add(egui::Slider::new(&mut params.max_age, 10..=100_000).text("Max Age"));
                    ui.add(
                        egui::Slider::new(&mut params.appropriateness_scale, 0.1..=8.0)
                            .text("Food Colour Selectivity"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.age_feeding_exponent, 0.0..=2.0)
                            .text("Age Feeding Falloff"),
                    );
                });

                ui.collapsing("Reproduction", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.split_threshold, 0.1..=1.0)
                            .text("Split Threshold (x Max HP)"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.pair_threshold, 0.0..=1.0)
                            .text("Pair Threshold (x Max HP)"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.mutation_rate, 0.0..=0.5)
                            .text("Mutation Rate"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.color_drift, 0.0..=0.5).text("Colour Drift"),
                    );
                });

                ui.collapsing("Brain Architecture", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.hidden_neurons, 1..=32)
                            .text("Hidden Neurons"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.initial_weight_scale, 0.01..=2.0)
                            .text("Initial Weight Scale"),
                    );
                });

                ui.collapsing("Population Parameters", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.initial_creatures, 0..=5000)
                            .text("Initial Creatures"),
                    );
                    ui.checkbox(&mut params.verbose, "Log events to the console");
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Start Simulation").clicked() {
                        start_simulation = true;
                    }
                    ui.label("Configure parameters above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    start_simulation
}
