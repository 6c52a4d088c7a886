use gridlife::simulation::creature::CreatureId;
use gridlife::simulation::ecosystem::Simulation;
use gridlife::simulation::grid::Grid;
use macroquad::prelude::*;

/// Maps grid cells onto the part of the window left of the stats panel.
#[derive(Debug, Clone, Copy)]
pub struct GridView {
    origin_x: f32,
    origin_y: f32,
    cell_size: f32,
    columns: usize,
    rows: usize,
}

impl GridView {
    pub fn fit(grid: &Grid, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let available_h = screen_height();
        let cell_size = (available_w / grid.width() as f32).min(available_h / grid.height() as f32);

        Self {
            origin_x: (available_w - cell_size * grid.width() as f32) / 2.0,
            origin_y: (available_h - cell_size * grid.height() as f32) / 2.0,
            cell_size,
            columns: grid.width(),
            rows: grid.height(),
        }
    }

    fn to_screen(self, x: usize, y: usize) -> (f32, f32) {
        (
            self.origin_x + x as f32 * self.cell_size,
            self.origin_y + y as f32 * self.cell_size,
        )
    }

    /// Grid cell under a screen position.
    pub fn cell_at(self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let gx = ((screen_x - self.origin_x) / self.cell_size).floor();
        let gy = ((screen_y - self.origin_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (gx, gy) = (gx as usize, gy as usize);
        (gx < self.columns && gy < self.rows).then_some((gx, gy))
    }
}

/// Colour for a value in `[0, 1]`, blue through green to red.
fn palette(value: f64) -> Color {
    let t = value.clamp(0.0, 1.0) as f32;
    Color::new(t, 1.0 - (2.0 * t - 1.0).abs(), 1.0 - t, 1.0)
}

pub fn draw_cells(simulation: &Simulation, view: GridView) {
    let grid = simulation.grid();
    let max_food = simulation.params().max_cell_food.max(f64::EPSILON);

    for cell in grid.cells() {
        let (sx, sy) = view.to_screen(cell.x, cell.y);
        let color = if grid.is_interior(cell.x, cell.y) {
            // darker cells hold less food
            let shade = 0.25 + 0.75 * (cell.food_amount / max_food).clamp(0.0, 1.0) as f32;
            let base = palette(cell.food_color);
            Color::new(base.r * shade, base.g * shade, base.b * shade, 1.0)
        } else {
            DARKGRAY
        };
        draw_rectangle(sx, sy, view.cell_size, view.cell_size, color);
    }
}

pub fn draw_creatures(simulation: &Simulation, view: GridView, highlighted: Option<CreatureId>) {
    let max_hp = simulation.params().max_hp;
    let radius = view.cell_size * 0.4;

    for creature in simulation.creatures() {
        let (sx, sy) = view.to_screen(creature.x(), creature.y());
        let (cx, cy) = (sx + view.cell_size / 2.0, sy + view.cell_size / 2.0);

        draw_circle(cx, cy, radius, palette(creature.color));
        draw_circle_lines(cx, cy, radius, 1.0, BLACK);

        // health bar, only when cells are large enough to read it
        if view.cell_size >= 8.0 {
            let bar_width = view.cell_size * 0.8;
            let bar_height = (view.cell_size * 0.1).max(1.0);
            let bar_x = cx - bar_width / 2.0;
            let bar_y = sy;
            draw_rectangle(bar_x, bar_y, bar_width, bar_height, Color::from_rgba(100, 100, 100, 200));
            draw_rectangle(
                bar_x,
                bar_y,
                bar_width * (creature.hp / max_hp).clamp(0.0, 1.0) as f32,
                bar_height,
                Color::from_rgba(255, 0, 0, 255),
            );
        }

        if highlighted == Some(creature.id) {
            draw_rectangle_lines(sx, sy, view.cell_size, view.cell_size, 2.0, WHITE);
        }
    }
}
