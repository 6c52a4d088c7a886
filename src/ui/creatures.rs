use gridlife::simulation::brain::Net;
use gridlife::simulation::creature::Creature;
use egui_macroquad::egui;
use ndarray::Array2;

const WEIGHT_CELL_SIZE: f32 = 10.0;

pub(super) fn draw_creature_detail_panel(
    egui_ctx: &egui::Context,
    creature: &Creature,
    max_hp: f64,
    is_selected: bool,
) {
    let short_id: String = creature.id.to_string().chars().take(8).collect();
    let title = if is_selected {
        format!("Creature {short_id} [SELECTED]")
    } else {
        format!("Creature {short_id} (hover)")
    };

    egui::Window::new(title)
        .id(egui::Id::new("creature_detail"))
        .default_pos([20.0, 20.0])
        .resizable(true)
        .show(egui_ctx, |ui| {
            if is_selected {
                ui.label("Click elsewhere to deselect");
                ui.separator();
            }
            ui.label(format!("HP: {:.2} / {:.1}", creature.hp, max_hp));
            ui.label(format!("Age: {}", creature.age));
            ui.label(format!("Position: ({}, {})", creature.x(), creature.y()));
            ui.horizontal(|ui| {
                ui.label(format!("Colour: {:.3}", creature.color));
                let (rect, _) = ui.allocate_exact_size(egui::vec2(30.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, inferno_colormap(creature.color as f32));
            });

            ui.separator();

            ui.heading("Movement Decider");
            draw_net(ui, creature.movement.net());

            ui.separator();

            ui.heading("Interaction Decider");
            draw_net(ui, creature.interaction.net());
        });
}

fn draw_net(ui: &mut egui::Ui, net: &Net) {
    let shape = net.shape();
    ui.label(format!("Shape: {shape}"));
    ui.label(format!("Total Parameters: {}", net.to_flat_vector().len()));
    ui.label("Rows: hidden neurons; columns: input then output weights");
    draw_weight_grid(ui, &weight_matrix(net), WEIGHT_CELL_SIZE);
}

/// One row per hidden neuron, input weights followed by output weights.
fn weight_matrix(net: &Net) -> Array2<f64> {
    let shape = net.shape();
    Array2::from_shape_fn((shape.hidden, shape.inputs + shape.outputs), |(row, col)| {
        let neuron = &net.hidden()[row];
        if col < shape.inputs {
            neuron.weights_input()[col]
        } else {
            neuron.weights_output()[col - shape.inputs]
        }
    })
}

/// Inferno colormap similar to matplotlib's inferno
/// Maps a value from 0.0 to 1.0 to a color from dark purple/black to yellow/white
fn inferno_colormap(t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);

    // Inferno colormap approximation (dark purple -> red -> orange -> yellow)
    let r = if t < 0.5 {
        (t * 2.0 * 100.0) as u8
    } else {
        (100.0 + (t - 0.5) * 2.0 * 155.0) as u8
    };

    let g = if t < 0.25 {
        0
    } else if t < 0.75 {
        ((t - 0.25) * 2.0 * 200.0) as u8
    } else {
        (200.0 + (t - 0.75) * 4.0 * 55.0) as u8
    };

    let b = if t < 0.33 {
        (50.0 + t * 3.0 * 100.0) as u8
    } else if t < 0.66 {
        (150.0 - (t - 0.33) * 3.0 * 100.0) as u8
    } else {
        (50.0 - (t - 0.66) * 3.0 * 50.0) as u8
    };

    egui::Color32::from_rgb(r, g, b)
}

/// Draws a weight matrix as a colored grid
fn draw_weight_grid(ui: &mut egui::Ui, weights: &Array2<f64>, cell_size: f32) {
    let (rows, cols) = weights.dim();

    let (response, painter) = ui.allocate_painter(
        egui::vec2((cols as f32) * cell_size, (rows as f32) * cell_size),
        egui::Sense::hover(),
    );

    for ((i, j), &weight) in weights.indexed_iter() {
        // Squash into [0, 1] so small weights still show contrast
        let normalized = f64::midpoint(weight.tanh(), 1.0) as f32;
        let color = inferno_colormap(normalized);

        let rect = egui::Rect::from_min_size(
            response.rect.min + egui::vec2(j as f32 * cell_size, i as f32 * cell_size),
            egui::vec2(cell_size, cell_size),
        );
        painter.rect_filled(rect, 0.0, color);
    }
}
