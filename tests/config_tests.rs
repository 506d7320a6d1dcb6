//! Configuration integration tests: environment and file initialization
//! feeding into `IntVector::with_config`.

use int_vector::config::{Config, VectorConfig};
use int_vector::IntVector;
use std::env;
use tempfile::tempdir;

#[test]
fn test_env_config_drives_vector() {
    env::set_var("ITEST_ENV_VECTOR_INITIAL_CAPACITY", "3");
    env::set_var("ITEST_ENV_VECTOR_MAX_CAPACITY", "6");

    let config = VectorConfig::from_env_with_prefix("ITEST_ENV_").unwrap();
    let mut vec = IntVector::with_config(&config).unwrap();
    assert_eq!(vec.capacity(), 3);
    assert_eq!(vec.max_capacity(), 6);

    for i in 0..6 {
        vec.push(i).unwrap();
    }
    assert_eq!(vec.capacity(), 6);
    assert!(vec.push(6).is_err());

    env::remove_var("ITEST_ENV_VECTOR_INITIAL_CAPACITY");
    env::remove_var("ITEST_ENV_VECTOR_MAX_CAPACITY");
}

#[test]
fn test_file_config_drives_vector() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    VectorConfig::preallocated_preset(16).save_to_file(&path).unwrap();
    let config = VectorConfig::load_from_file(&path).unwrap();

    let vec = IntVector::with_config(&config).unwrap();
    assert_eq!(vec.capacity(), 16);
    assert!(vec.is_empty());
}

#[test]
fn test_saved_file_is_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    VectorConfig::compact_preset(32).save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["initial_capacity"], 0);
    assert_eq!(value["max_capacity"], 32);
}
