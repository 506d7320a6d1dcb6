//! Integration tests for IntVector
//!
//! Exercises the public API end to end: the append/search/sort scenario, the
//! growth policy, configured growth limits and the demo entry point.

use int_vector::config::VectorConfig;
use int_vector::demo::{run_demo, DemoIndices, DEMO_VALUES};
use int_vector::error::{Result, VectorError};
use int_vector::IntVector;

fn build(values: &[i32]) -> Result<IntVector> {
    let mut vec = IntVector::new();
    for &value in values {
        vec.push(value)?;
    }
    Ok(vec)
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let mut vec = build(&[3, 1, 4, 1])?;
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.search_unsorted(1), 1);

    vec.sort();
    assert_eq!(vec.as_slice(), &[1, 1, 3, 4]);
    assert_eq!(vec.search_unsorted(1), 0);
    assert_eq!(vec.search_sorted(1), 0);
    assert_eq!(vec.search_sorted(5), 4);
    assert_eq!(vec.search_sorted(0), 0);
    Ok(())
}

#[test]
fn test_append_order_preserved_across_growth() -> Result<()> {
    let mut vec = IntVector::new();
    for i in 0..1000 {
        vec.push(i * 3 - 500)?;
        assert!(vec.capacity() >= vec.len());
    }

    assert_eq!(vec.len(), 1000);
    assert_eq!(vec.capacity(), 1024);
    for i in 0..1000 {
        assert_eq!(vec.get(i as usize), Some(i * 3 - 500));
    }
    Ok(())
}

#[test]
fn test_capacity_is_power_of_two_from_empty() -> Result<()> {
    let mut vec = IntVector::new();
    for n in 1..=300usize {
        vec.push(n as i32)?;
        assert_eq!(vec.capacity(), n.next_power_of_two());
    }
    Ok(())
}

#[test]
fn test_sort_idempotent() -> Result<()> {
    let mut vec = build(&[9, -2, 7, 7, 0, -2, 5])?;
    vec.sort();
    let once = vec.clone();
    vec.sort();
    assert_eq!(vec, once);
    assert!(vec.is_sorted());
    Ok(())
}

#[test]
fn test_search_sorted_with_duplicates() -> Result<()> {
    let vec = build(&[1, 2, 2, 2, 3, 5, 5, 8])?;
    assert_eq!(vec.search_sorted(2), 1);
    assert_eq!(vec.search_sorted(5), 5);
    assert_eq!(vec.search_sorted(4), 5);
    assert_eq!(vec.search_sorted(8), 7);
    assert_eq!(vec.search_sorted(9), 8);
    assert_eq!(vec.search_sorted(i32::MIN), 0);
    Ok(())
}

#[test]
fn test_search_unsorted_sentinel() -> Result<()> {
    let vec = build(&[10, 20, 30])?;
    assert_eq!(vec.search_unsorted(40), vec.len());
    assert_eq!(vec.search_unsorted(30), 2);
    Ok(())
}

#[test]
fn test_single_element() -> Result<()> {
    let mut vec = build(&[42])?;
    vec.sort();
    assert_eq!(vec.search_sorted(41), 0);
    assert_eq!(vec.search_sorted(42), 0);
    assert_eq!(vec.search_sorted(43), 1);
    assert_eq!(vec.search_unsorted(42), 0);
    Ok(())
}

#[test]
fn test_configured_limit() -> Result<()> {
    let mut vec = IntVector::with_config(&VectorConfig::compact_preset(8))?;
    for i in 0..8 {
        vec.push(i)?;
    }
    assert_eq!(vec.capacity(), 8);

    match vec.push(8) {
        Err(VectorError::OutOfMemory { size }) => assert_eq!(size, 16 * std::mem::size_of::<i32>()),
        other => panic!("expected out of memory, got {:?}", other),
    }
    assert_eq!(vec.len(), 8);
    assert_eq!(vec.search_unsorted(8), 8);
    Ok(())
}

#[test]
fn test_limit_not_power_of_two() -> Result<()> {
    let mut vec = IntVector::with_config(&VectorConfig::compact_preset(5))?;
    for i in 0..4 {
        vec.push(i)?;
    }
    // 4 -> 8 would pass the limit of 5
    assert!(vec.push(4).is_err());
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_extend_stops_at_limit() -> Result<()> {
    let mut vec = IntVector::with_config(&VectorConfig::compact_preset(4))?;
    let err = vec.extend_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap_err();
    assert_eq!(err.category(), "memory");
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_preallocated_config() -> Result<()> {
    let mut vec = IntVector::with_config(&VectorConfig::preallocated_preset(100))?;
    assert_eq!(vec.capacity(), 100);
    assert!(vec.is_empty());

    vec.extend_from_slice(&[5; 100])?;
    assert_eq!(vec.capacity(), 100);
    vec.push(5)?;
    assert_eq!(vec.capacity(), 200);
    Ok(())
}

#[test]
fn test_invalid_config_rejected() {
    let config = VectorConfig {
        initial_capacity: 9,
        max_capacity: 3,
    };
    let err = IntVector::with_config(&config).unwrap_err();
    assert!(matches!(err, VectorError::Configuration { .. }));
}

#[test]
fn test_release_and_reconstruct() -> Result<()> {
    let vec = build(&[1, 2, 3, 4, 5])?;
    assert_eq!(vec.capacity(), 8);
    vec.release();

    let fresh = IntVector::new();
    assert_eq!(fresh.len(), 0);
    assert_eq!(fresh.capacity(), 0);
    assert_eq!(fresh, IntVector::new());
    Ok(())
}

#[test]
fn test_clones_do_not_share_storage() -> Result<()> {
    let mut a = build(&[4, 3, 2, 1])?;
    let b = a.clone();
    a.sort();
    a.push(0)?;

    assert_eq!(a.as_slice(), &[1, 2, 3, 4, 0]);
    assert_eq!(b.as_slice(), &[4, 3, 2, 1]);
    Ok(())
}

#[test]
fn test_shared_behind_mutex() -> Result<()> {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(IntVector::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    shared.lock().unwrap().push(t * 100 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut vec = shared.lock().unwrap();
    assert_eq!(vec.len(), 400);
    vec.sort();
    assert_eq!(vec.as_slice(), (0..400).collect::<Vec<i32>>().as_slice());
    Ok(())
}

#[test]
fn test_demo_sequence() -> Result<()> {
    let mut out = Vec::new();
    let indices = run_demo(&mut out)?;

    assert_eq!(DEMO_VALUES, [3, 1, 4, 1]);
    assert_eq!(indices, DemoIndices { index: 0, index2: 0 });
    assert_eq!(String::from_utf8(out).unwrap(), "Index: 0, Index2: 0\n");
    Ok(())
}
