#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use gridlife::simulation::grid::Grid;

#[test]
fn test_interior_excludes_border_ring() {
    let grid = Grid::uniform(5, 4, 0.5, 1.0);

    assert!(grid.is_interior(1, 1));
    assert!(grid.is_interior(3, 2));
    assert!(!grid.is_interior(0, 1));
    assert!(!grid.is_interior(4, 1));
    assert!(!grid.is_interior(1, 0));
    assert!(!grid.is_interior(1, 3));
    assert!(!grid.is_interior(10, 10));
}

#[test]
fn test_neighbourhood_is_row_major() {
    let grid = Grid::uniform(5, 5, 0.5, 1.0);

    let coords = grid.coords_in_radius(2, 2, 1);

    assert_eq!(
        coords,
        vec![
            (1, 1),
            (2, 1),
            (3, 1),
            (1, 2),
            (2, 2),
            (3, 2),
            (1, 3),
            (2, 3),
            (3, 3)
        ]
    );
}

#[test]
fn test_neighbourhood_is_clipped_at_edges() {
    let grid = Grid::uniform(4, 4, 0.5, 1.0);

    assert_eq!(
        grid.coords_in_radius(0, 0, 1),
        vec![(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(grid.coords_in_radius(3, 3, 1).len(), 4);
    assert_eq!(grid.coords_in_radius(3, 1, 1).len(), 6);
}

#[test]
fn test_cells_know_their_coordinates() {
    let grid = Grid::from_fn(6, 3, |x, y| (x as f64, y as f64 / 10.0));

    for cell in grid.cells() {
        assert_eq!(cell.food_amount, cell.x as f64);
        assert_eq!(cell.food_color, cell.y as f64 / 10.0);
        assert!(!cell.is_occupied());
    }
    assert_eq!(grid.cell(4, 2).x, 4);
    assert_eq!(grid.cell(4, 2).y, 2);
    assert!(grid.get(6, 0).is_none());
    assert!(grid.get(0, 3).is_none());
}

#[test]
fn test_noise_grid_colours_in_unit_range() {
    let grid = Grid::new(40, 30, 10.0, 42, 4.0);

    assert_eq!(grid.cells().len(), 40 * 30);
    for cell in grid.cells() {
        assert!((0.0..=1.0).contains(&cell.food_color));
        assert_eq!(cell.food_amount, 4.0);
    }
    assert_eq!(grid.total_food(), 4.0 * 40.0 * 30.0);
}

#[test]
fn test_noise_grid_is_deterministic_per_seed() {
    let a = Grid::new(20, 20, 5.0, 7, 1.0);
    let b = Grid::new(20, 20, 5.0, 7, 1.0);

    assert_eq!(a.cells(), b.cells());
}
