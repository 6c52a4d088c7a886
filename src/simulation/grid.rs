//! The grid the creatures live on.
//!
//! A dense, row-major array of [`Cell`]s. Each cell carries a food amount,
//! a static food colour generated from a smooth noise field, and a
//! non-owning handle to the creature standing on it. Creatures themselves are
//! owned by the engine.

use noise::{NoiseFn, Perlin};

use super::creature::CreatureId;

/// One grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Food available, in `[0, max_cell_food]`.
    pub food_amount: f64,
    /// Terrain colour of the food in `[0, 1]`; never changes.
    pub food_color: f64,
    occupant: Option<CreatureId>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new(x: usize, y: usize, food_amount: f64, food_color: f64) -> Self {
        Self {
            x,
            y,
            food_amount,
            food_color,
            occupant: None,
        }
    }

    /// Creature standing here, if any.
    pub fn occupant(&self) -> Option<CreatureId> {
        self.occupant
    }

    /// Whether a creature stands here.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(super) fn set_occupant(&mut self, occupant: Option<CreatureId>) {
        self.occupant = occupant;
    }
}

/// Fixed-size grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid whose food colours follow a Perlin noise field.
    ///
    /// `smoothness` divides the cell coordinates before sampling; larger
    /// values give wider patches of similar colour. Every cell starts with
    /// `initial_food`.
    pub fn new(width: usize, height: usize, smoothness: f64, seed: u32, initial_food: f64) -> Self {
        let noise = Perlin::new(seed);
        Self::from_fn(width, height, |x, y| {
            let sample = noise.get([x as f64 / smoothness, y as f64 / smoothness]);
            let color = ((sample + 1.0) / 2.0).clamp(0.0, 1.0);
            (initial_food, color)
        })
    }

    /// Creates a grid with the same food colour and amount everywhere.
    pub fn uniform(width: usize, height: usize, food_color: f64, food_amount: f64) -> Self {
        Self::from_fn(width, height, |_, _| (food_amount, food_color))
    }

    /// Creates a grid from a function returning `(food_amount, food_color)`
    /// for each cell.
    pub fn from_fn(width: usize, height: usize, mut init: impl FnMut(usize, usize) -> (f64, f64)) -> Self {
        let cells = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                let (food_amount, food_color) = init(x, y);
                Cell::new(x, y, food_amount, food_color)
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| self.cell(x, y))
    }

    pub(super) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * self.width + x]
    }

    pub(super) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Whether `(x, y)` lies inside the border ring, i.e. in
    /// `[1, width - 2] x [1, height - 2]`.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }

    /// Coordinates of the square `[x - r, x + r] x [y - r, y + r]`, clipped to
    /// the grid, in row-major order.
    pub fn coords_in_radius(&self, x: usize, y: usize, radius: usize) -> Vec<(usize, usize)> {
        let x_from = x.saturating_sub(radius);
        let x_to = (x + radius).min(self.width.saturating_sub(1));
        let y_from = y.saturating_sub(radius);
        let y_to = (y + radius).min(self.height.saturating_sub(1));

        (y_from..=y_to)
            .flat_map(|cy| (x_from..=x_to).map(move |cx| (cx, cy)))
            .collect()
    }

    /// Cells of the square of radius `radius` around `(x, y)`, clipped to the
    /// grid, in row-major order.
    pub fn cells_in_radius(&self, x: usize, y: usize, radius: usize) -> Vec<&Cell> {
        self.coords_in_radius(x, y, radius)
            .into_iter()
            .map(|(cx, cy)| self.cell(cx, cy))
            .collect()
    }

    /// Sum of food over all cells.
    pub fn total_food(&self) -> f64 {
        self.cells.iter().map(|cell| cell.food_amount).sum()
    }
}
