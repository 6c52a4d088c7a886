#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use gridlife::simulation::ecosystem::Simulation;
use gridlife::simulation::error::SimError;
use gridlife::simulation::grid::Grid;
use gridlife::simulation::params::Params;
use gridlife::simulation::snapshot::PopulationSnapshot;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

fn create_test_params() -> Params {
    Params {
        width: 20,
        height: 20,
        hidden_neurons: 4,
        seed: Some(3),
        ..Params::default()
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gridlife_{}_{name}.json", std::process::id()))
}

fn populated_simulation(creatures: usize) -> Simulation {
    let mut simulation = Simulation::new(create_test_params()).unwrap();
    simulation.spawn_random_creatures(creatures).unwrap();
    simulation
}

#[test]
fn test_params_save_and_load() {
    let path = temp_path("params");
    let params = create_test_params();

    params.save_to_file(&path).unwrap();
    let loaded = Params::load_from_file(&path).unwrap();

    assert_eq!(loaded, params);
    fs::remove_file(&path).ok();
}

#[test]
fn test_params_missing_fields_use_defaults() {
    let path = temp_path("partial_params");
    fs::write(&path, r#"{ "width": 40, "max_hp": 20.0 }"#).unwrap();

    let loaded = Params::load_from_file(&path).unwrap();

    assert_eq!(loaded.width, 40);
    assert_eq!(loaded.max_hp, 20.0);
    assert_eq!(loaded.height, Params::default().height);
    assert_eq!(loaded.hidden_neurons, Params::default().hidden_neurons);
    fs::remove_file(&path).ok();
}

#[test]
fn test_params_load_rejects_invalid_values() {
    let path = temp_path("invalid_params");
    fs::write(&path, r#"{ "hidden_neurons": 0 }"#).unwrap();

    let result = Params::load_from_file(&path);

    assert!(matches!(result, Err(SimError::InvalidParams(_))));
    fs::remove_file(&path).ok();
}

#[test]
fn test_params_reject_max_hp_below_one() {
    let params = Params {
        max_hp: 0.5,
        width: 5,
        height: 5,
        ..create_test_params()
    };

    assert!(matches!(params.validate(), Err(SimError::InvalidParams(_))));
    assert!(matches!(Simulation::new(params), Err(SimError::InvalidParams(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = PopulationSnapshot::load_from_file(temp_path("does_not_exist"));

    assert!(matches!(result, Err(SimError::Io(_))));
}

#[test]
fn test_snapshot_save_and_restore() {
    let path = temp_path("snapshot");
    let original = populated_simulation(25);

    let snapshot = original.snapshot();
    assert_eq!(snapshot.genomes.len(), 25);
    assert_eq!(snapshot.tick, 0);
    assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.saved_at).is_ok());

    snapshot.save_to_file(&path).unwrap();
    let loaded = PopulationSnapshot::load_from_file(&path).unwrap();
    assert_eq!(loaded.genomes.len(), 25);

    let mut restored = Simulation::with_grid(
        create_test_params(),
        Grid::uniform(20, 20, 0.5, 4.0),
        StdRng::seed_from_u64(8),
    )
    .unwrap();
    assert_eq!(restored.restore(&loaded).unwrap(), 25);
    assert_eq!(restored.len(), 25);
    restored.verify_occupancy().unwrap();

    // Genomes come back in order; positions and HP are fresh
    for (genome, creature) in snapshot.genomes.iter().zip(restored.creatures()) {
        assert!((creature.color - genome.color).abs() < 1e-12);
        assert_eq!(creature.movement.net(), &genome.movement);
        assert_eq!(creature.interaction.net(), &genome.interaction);
        assert_eq!(creature.age, 0);
        assert!(creature.hp >= 5.0 && creature.hp <= 10.0);
    }

    fs::remove_file(&path).ok();
}

#[test]
fn test_restored_population_keeps_running() {
    let mut original = populated_simulation(40);
    for _ in 0..10 {
        original.tick().unwrap();
    }
    let snapshot = original.snapshot();
    assert_eq!(snapshot.tick, 10);

    let mut restored = Simulation::new(create_test_params()).unwrap();
    restored.restore(&snapshot).unwrap();
    for _ in 0..10 {
        restored.tick().unwrap();
        restored.verify_occupancy().unwrap();
    }
}

#[test]
fn test_restore_stops_when_grid_is_full() {
    let snapshot = populated_simulation(10).snapshot();
    let params = Params {
        width: 4,
        height: 4,
        ..create_test_params()
    };
    let mut small = Simulation::new(params).unwrap();

    assert_eq!(small.restore(&snapshot).unwrap(), 4);
    assert_eq!(small.len(), 4);
}

#[test]
fn test_restore_rejects_mismatched_hidden_layer() {
    let snapshot = populated_simulation(5).snapshot();
    let params = Params {
        hidden_neurons: 6,
        ..create_test_params()
    };
    let mut other = Simulation::new(params).unwrap();

    let result = other.restore(&snapshot);

    assert!(matches!(result, Err(SimError::ShapeMismatch { .. })));
    assert!(other.is_empty());
}

#[test]
fn test_load_rejects_corrupted_network() {
    let path = temp_path("corrupted");
    let snapshot = populated_simulation(2).snapshot();
    let mut json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
    json["genomes"][0]["movement"]["hidden_count"] = serde_json::json!(99);
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

    let result = PopulationSnapshot::load_from_file(&path);

    assert!(matches!(result, Err(SimError::Serde(_))));
    fs::remove_file(&path).ok();
}
