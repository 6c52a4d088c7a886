#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use gridlife::simulation::brain::{Net, NetShape, Neuron};
use gridlife::simulation::error::SimError;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn constant_net(inputs: usize, hidden: usize, outputs: usize, weight: f64) -> Net {
    let neurons = (0..hidden)
        .map(|_| Neuron::new(vec![weight; inputs], vec![weight; outputs]))
        .collect();
    Net::new(inputs, outputs, neurons).unwrap()
}

#[test]
fn test_evaluate_known_weights() {
    let net = Net::new(2, 2, vec![Neuron::new(vec![1.0, 0.0], vec![1.0, -1.0])]).unwrap();

    let outputs = net.evaluate(&[0.5, 9.0]).unwrap();

    let expected = 0.5_f64.tanh();
    assert!((outputs[0] - expected).abs() < 1e-12);
    assert!((outputs[1] + expected).abs() < 1e-12);
}

#[test]
fn test_evaluate_sums_hidden_neurons() {
    let net = Net::new(
        1,
        1,
        vec![
            Neuron::new(vec![1.0], vec![2.0]),
            Neuron::new(vec![-1.0], vec![3.0]),
        ],
    )
    .unwrap();

    let outputs = net.evaluate(&[0.3]).unwrap();

    let expected = 2.0 * 0.3_f64.tanh() + 3.0 * (-0.3_f64).tanh();
    assert!((outputs[0] - expected).abs() < 1e-12);
}

#[test]
fn test_evaluate_is_pure() {
    let mut rng = StdRng::seed_from_u64(3);
    let shape = NetShape {
        inputs: 4,
        hidden: 6,
        outputs: 3,
    };
    let net = Net::new_random(shape, 1.0, &mut rng);
    let inputs = [0.1, -0.4, 0.9, 2.0];

    let first = net.evaluate(&inputs).unwrap();
    let second = net.evaluate(&inputs).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_random_weights_within_scale() {
    let mut rng = StdRng::seed_from_u64(11);
    let shape = NetShape {
        inputs: 19,
        hidden: 8,
        outputs: 5,
    };
    let net = Net::new_random(shape, 0.1, &mut rng);

    assert_eq!(net.shape(), shape);
    assert_eq!(net.to_flat_vector().len(), 8 * (19 + 5));
    assert!(net.to_flat_vector().iter().all(|w| (-0.1..0.1).contains(w)));
}

#[test]
fn test_evaluate_rejects_wrong_input_length() {
    let net = constant_net(3, 2, 3, 0.5);

    let result = net.evaluate(&[1.0, 2.0]);

    assert!(matches!(
        result,
        Err(SimError::InputLength {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_new_rejects_mismatched_neuron() {
    let neurons = vec![
        Neuron::new(vec![0.0; 3], vec![0.0; 2]),
        Neuron::new(vec![0.0; 3], vec![0.0; 4]),
    ];

    let result = Net::new(3, 2, neurons);

    assert!(matches!(
        result,
        Err(SimError::NeuronShape {
            index: 1,
            layer: "output",
            expected: 2,
            actual: 4
        })
    ));
}

#[test]
fn test_crossover_without_mutation_splices_halves() {
    let mut rng = StdRng::seed_from_u64(5);
    let first = constant_net(3, 4, 2, 1.0);
    let second = constant_net(3, 4, 2, 2.0);

    let child = Net::crossover(&first, &second, 0.0, &mut rng).unwrap();

    assert_eq!(child.shape(), first.shape());
    assert_eq!(child.hidden()[0], first.hidden()[0]);
    assert_eq!(child.hidden()[1], first.hidden()[1]);
    assert_eq!(child.hidden()[2], second.hidden()[2]);
    assert_eq!(child.hidden()[3], second.hidden()[3]);
}

#[test]
fn test_crossover_odd_hidden_count_favours_second_parent() {
    let mut rng = StdRng::seed_from_u64(5);
    let first = constant_net(2, 3, 2, 1.0);
    let second = constant_net(2, 3, 2, 2.0);

    let child = Net::crossover(&first, &second, 0.0, &mut rng).unwrap();

    assert_eq!(child.hidden()[0], first.hidden()[0]);
    assert_eq!(child.hidden()[1], second.hidden()[1]);
    assert_eq!(child.hidden()[2], second.hidden()[2]);
}

#[test]
fn test_crossover_with_single_neuron_takes_second_parent() {
    let mut rng = StdRng::seed_from_u64(5);
    let first = constant_net(2, 1, 2, 1.0);
    let second = constant_net(2, 1, 2, 2.0);

    let child = Net::crossover(&first, &second, 0.0, &mut rng).unwrap();

    assert_eq!(child, second);
}

#[test]
fn test_crossover_rejects_shape_mismatch() {
    let mut rng = StdRng::seed_from_u64(5);
    let first = constant_net(3, 4, 2, 1.0);
    let second = constant_net(3, 5, 2, 1.0);

    let result = Net::crossover(&first, &second, 0.1, &mut rng);

    assert!(matches!(result, Err(SimError::ShapeMismatch { .. })));
}

#[test]
fn test_mutation_stays_within_rate() {
    let mut rng = StdRng::seed_from_u64(9);
    let parent = constant_net(4, 3, 2, 0.5);

    let child = parent.mutated(0.05, &mut rng);

    assert_eq!(child.shape(), parent.shape());
    assert_ne!(child, parent);
    for (before, after) in parent.to_flat_vector().iter().zip(child.to_flat_vector()) {
        assert!((after - before).abs() <= 0.05 + 1e-12);
    }
    // The parent is untouched
    assert!(parent.to_flat_vector().iter().all(|w| *w == 0.5));
}

#[test]
fn test_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(21);
    let net = Net::new_random(
        NetShape {
            inputs: 3,
            hidden: 4,
            outputs: 3,
        },
        1.0,
        &mut rng,
    );

    let json = serde_json::to_string(&net).unwrap();
    let restored: Net = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.shape(), net.shape());
    assert_eq!(restored, net);
    assert!(json.contains("\"hidden_count\":4"));
}

#[test]
fn test_deserialize_rejects_hidden_count_mismatch() {
    let json = r#"{
        "input_count": 1,
        "hidden_count": 2,
        "output_count": 1,
        "hidden": [{ "weights_input": [0.5], "weights_output": [1.0] }]
    }"#;

    let result: Result<Net, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn test_deserialize_rejects_wrong_weight_count() {
    let json = r#"{
        "input_count": 2,
        "hidden_count": 1,
        "output_count": 1,
        "hidden": [{ "weights_input": [0.5], "weights_output": [1.0] }]
    }"#;

    let result: Result<Net, _> = serde_json::from_str(json);

    assert!(result.is_err());
}
