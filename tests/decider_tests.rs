#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use gridlife::simulation::brain::{Net, Neuron};
use gridlife::simulation::creature::Creature;
use gridlife::simulation::decider::{
    InteractAction, InteractionDecider, MoveAction, MovementDecider, NEIGHBORHOOD_CELLS,
};
use gridlife::simulation::entropy::Entropy;
use gridlife::simulation::error::SimError;
use gridlife::simulation::grid::{Cell, Grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Replays a fixed list of draws.
struct Scripted {
    values: Vec<f64>,
    next: usize,
}

impl Entropy for Scripted {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

fn single_neuron_net(weights_input: Vec<f64>, weights_output: Vec<f64>) -> Net {
    let (inputs, outputs) = (weights_input.len(), weights_output.len());
    Net::new(inputs, outputs, vec![Neuron::new(weights_input, weights_output)]).unwrap()
}

fn food_seeking_movement(action_index: usize) -> MovementDecider {
    // Noise weight 0, colour-distance weights 0, food-amount weights 1
    let weights_input = (0..MovementDecider::INPUTS)
        .map(|i| if i > 0 && i % 2 == 0 { 1.0 } else { 0.0 })
        .collect();
    let mut weights_output = vec![0.0; MovementDecider::OUTPUTS];
    weights_output[action_index] = 1.0;
    MovementDecider::from_net(single_neuron_net(weights_input, weights_output)).unwrap()
}

#[test]
fn test_input_counts() {
    assert_eq!(NEIGHBORHOOD_CELLS, 9);
    assert_eq!(MovementDecider::INPUTS, 19);
    assert_eq!(MovementDecider::OUTPUTS, 5);
    assert_eq!(InteractionDecider::INPUTS, 3);
    assert_eq!(InteractionDecider::OUTPUTS, 3);
}

#[test]
fn test_move_deltas() {
    assert_eq!(MoveAction::Nothing.delta(), (0, 0));
    assert_eq!(MoveAction::Up.delta(), (0, -1));
    assert_eq!(MoveAction::Down.delta(), (0, 1));
    assert_eq!(MoveAction::Left.delta(), (-1, 0));
    assert_eq!(MoveAction::Right.delta(), (1, 0));
}

#[test]
fn test_all_equal_outputs_pick_first_action() {
    let mut entropy = Scripted {
        values: vec![0.9],
        next: 0,
    };
    let grid = Grid::uniform(3, 3, 0.5, 1.0);
    let cells: Vec<&Cell> = grid.cells_in_radius(1, 1, 1);

    let movement = MovementDecider::from_net(single_neuron_net(
        vec![0.0; MovementDecider::INPUTS],
        vec![0.0; MovementDecider::OUTPUTS],
    ))
    .unwrap();
    let action = movement.decide(0.3, &cells, &mut entropy).unwrap();
    assert_eq!(action, MoveAction::Nothing);

    let interaction = InteractionDecider::from_net(single_neuron_net(vec![0.0; 3], vec![0.0; 3])).unwrap();
    let other = Creature::new(5.0, 0.5, movement, interaction.clone());
    let action = interaction.decide(&other, &mut entropy).unwrap();
    assert_eq!(action, InteractAction::Nothing);
}

#[test]
fn test_tie_between_later_outputs_picks_lowest_index() {
    let mut entropy = Scripted {
        values: vec![0.5],
        next: 0,
    };
    // Attack and Pair share the maximum
    let interaction =
        InteractionDecider::from_net(single_neuron_net(vec![0.0, 1.0, 0.0], vec![0.0, 1.0, 1.0])).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let other = Creature::new(
        4.0,
        0.5,
        MovementDecider::new_random(2, 0.1, &mut rng),
        interaction.clone(),
    );

    assert_eq!(interaction.decide(&other, &mut entropy).unwrap(), InteractAction::Attack);
}

#[test]
fn test_movement_follows_food() {
    let mut entropy = Scripted {
        values: vec![0.1],
        next: 0,
    };
    let grid = Grid::uniform(5, 5, 0.5, 2.0);
    let cells = grid.cells_in_radius(2, 2, 1);

    let left = food_seeking_movement(3);
    assert_eq!(left.decide(0.5, &cells, &mut entropy).unwrap(), MoveAction::Left);

    let down = food_seeking_movement(2);
    assert_eq!(down.decide(0.5, &cells, &mut entropy).unwrap(), MoveAction::Down);
}

#[test]
fn test_movement_sees_colour_distance() {
    let mut entropy = Scripted {
        values: vec![0.5],
        next: 0,
    };
    // Only the colour distance of the first cell matters; Up when positive
    let mut weights_input = vec![0.0; MovementDecider::INPUTS];
    weights_input[1] = 1.0;
    let movement = MovementDecider::from_net(single_neuron_net(weights_input, vec![0.0, 1.0, 0.0, 0.0, 0.0])).unwrap();
    let grid = Grid::uniform(3, 3, 0.2, 0.0);
    let cells = grid.cells_in_radius(1, 1, 1);

    assert_eq!(movement.decide(0.9, &cells, &mut entropy).unwrap(), MoveAction::Up);
    // Same colour as the food: no signal, first action wins
    assert_eq!(movement.decide(0.2, &cells, &mut entropy).unwrap(), MoveAction::Nothing);
}

#[test]
fn test_interaction_reads_neighbour_hp() {
    let mut entropy = Scripted {
        values: vec![0.5],
        next: 0,
    };
    // Pairs with healthy neighbours, attacks sick ones
    let interaction =
        InteractionDecider::from_net(single_neuron_net(vec![0.0, 1.0, 0.0], vec![0.0, -1.0, 1.0])).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let movement = MovementDecider::new_random(2, 0.1, &mut rng);

    let healthy = Creature::new(5.0, 0.5, movement.clone(), interaction.clone());
    assert_eq!(interaction.decide(&healthy, &mut entropy).unwrap(), InteractAction::Pair);

    let sick = Creature::new(-1.0, 0.5, movement, interaction.clone());
    assert_eq!(interaction.decide(&sick, &mut entropy).unwrap(), InteractAction::Attack);
}

#[test]
fn test_from_net_rejects_wrong_shape() {
    let net = single_neuron_net(vec![0.0; 3], vec![0.0; 3]);

    let result = MovementDecider::from_net(net.clone());
    assert!(matches!(result, Err(SimError::ShapeMismatch { .. })));

    assert!(InteractionDecider::from_net(net).is_ok());
}

#[test]
fn test_short_neighbourhood_is_an_error() {
    let mut entropy = Scripted {
        values: vec![0.5],
        next: 0,
    };
    let grid = Grid::uniform(3, 3, 0.5, 1.0);
    // Corner: only four cells
    let cells = grid.cells_in_radius(0, 0, 1);
    let movement = food_seeking_movement(1);

    let result = movement.decide(0.5, &cells, &mut entropy);

    assert!(matches!(result, Err(SimError::InputLength { expected: 19, .. })));
}

#[test]
fn test_merge_and_mutate_keep_shape() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = MovementDecider::new_random(6, 0.1, &mut rng);
    let b = MovementDecider::new_random(6, 0.1, &mut rng);

    let child = a.merge(&b, 0.02, &mut rng).unwrap();
    assert_eq!(child.net().shape(), MovementDecider::shape(6));

    let mutant = a.mutated(0.02, &mut rng);
    assert_eq!(mutant.net().shape(), MovementDecider::shape(6));

    let c = MovementDecider::new_random(4, 0.1, &mut rng);
    assert!(a.merge(&c, 0.02, &mut rng).is_err());
}
