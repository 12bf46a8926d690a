use std::collections::BTreeSet;

use paste::paste;
use probetable::{
    ConfigError, InsertError, InsertOutcome, Probing, Slot, Table, ValueError,
    MAX_INITIAL_CAPACITY,
};
use rand::prelude::*;
use rand_pcg::Pcg64;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario_table() -> Table {
    let mut table = Table::builder(10)
        .load_factor_threshold(0.75)
        .name("scenario")
        .build()
        .expect("valid configuration");

    for v in [3u64, 5, 4, 15, 14, 25, 35, 45] {
        assert_eq!(table.insert(v), Ok(InsertOutcome::Inserted));
    }
    table
}

fn occupied_slots(table: &Table) -> usize {
    table.slots().iter().filter(|s| s.is_occupied()).count()
}

#[test]
fn placements_before_first_resize() {
    init_logger();

    let mut table = Table::new(10, 0.75).unwrap();
    for v in [3u64, 5, 4, 15, 14, 25, 35] {
        table.insert(v).unwrap();
    }

    assert_eq!(table.capacity(), 10);
    assert_eq!(table.len(), 7);
    assert_eq!(table.load_factor(), 0.7);
    for (index, value) in [(3, 3), (4, 4), (5, 5), (6, 15), (7, 14), (8, 25), (9, 35)] {
        assert_eq!(table.slot(index), Some(Slot::Occupied(value)));
    }
    assert!(table.needs_resize());
}

#[test]
fn eighth_insert_resizes_first() {
    init_logger();

    let table = scenario_table();

    assert_eq!(table.capacity(), 20);
    assert_eq!(table.len(), 8);
    assert_eq!(table.load_factor(), 0.4);
    assert_eq!(table.contains(45u64), Ok(true));
    // 45 is placed against the grown table: 5 and 6 are taken by 5 and 25.
    assert_eq!(table.slot(7), Some(Slot::Occupied(45)));
    assert_eq!(table.values(), vec![3, 4, 5, 14, 15, 25, 35, 45]);
    assert_eq!(
        table.to_string(),
        "Table(capacity=20, count=8, load_factor=0.400)"
    );
}

#[test]
fn delete_leaves_tombstone() {
    init_logger();

    let mut table = scenario_table();

    assert_eq!(table.delete(15u64), Ok(true));
    assert_eq!(table.contains(15u64), Ok(false));
    assert_eq!(table.len(), 7);

    let stats = table.stats();
    assert_eq!(stats.tombstone_slots(), 1);
    assert_eq!(stats.count(), 7);
    assert_eq!(stats.capacity(), 20);
    assert_eq!(stats.empty_slots(), 12);
    assert_eq!(stats.values(), &[3, 4, 5, 14, 25, 35, 45]);

    // 35 was placed behind 15 and must still be found.
    assert_eq!(table.contains(35u64), Ok(true));
    assert_eq!(table.delete(15u64), Ok(false));
}

#[test]
fn invalid_values_are_rejected() {
    init_logger();

    let mut table = scenario_table();

    assert_eq!(
        table.insert(-1i64),
        Err(InsertError::Value(ValueError::Negative(-1)))
    );
    assert_eq!(
        table.insert(3.5f64),
        Err(InsertError::Value(ValueError::NotAnInteger(3.5)))
    );
    assert_eq!(
        table.insert(None::<u64>),
        Err(InsertError::Value(ValueError::Missing))
    );
    assert_eq!(table.len(), 8);
    assert_eq!(table.capacity(), 20);

    // Integral floats are ordinary keys.
    assert_eq!(table.insert(3.0f64), Ok(InsertOutcome::Duplicate));
}

#[test]
fn invalid_configuration_is_rejected() {
    assert_eq!(Table::new(0, 0.75).unwrap_err(), ConfigError::ZeroCapacity);
    assert_eq!(
        Table::new(MAX_INITIAL_CAPACITY + 1, 0.75).unwrap_err(),
        ConfigError::CapacityTooLarge {
            capacity: MAX_INITIAL_CAPACITY + 1,
            max: MAX_INITIAL_CAPACITY,
        }
    );
    assert_eq!(
        Table::new(10, 0.0).unwrap_err(),
        ConfigError::InvalidLoadFactor(0.0)
    );
    assert!(Table::new(MAX_INITIAL_CAPACITY, 1.0).is_ok());
}

#[test]
fn growth_is_not_capped_by_construction_ceiling() {
    let mut table = Table::new(MAX_INITIAL_CAPACITY, 1.0).unwrap();
    for v in 0..=MAX_INITIAL_CAPACITY as u64 {
        table.insert(v).unwrap();
    }
    assert_eq!(table.capacity(), 2 * MAX_INITIAL_CAPACITY);
    assert_eq!(table.len(), MAX_INITIAL_CAPACITY + 1);

    let mut table = Table::new(4, 0.5).unwrap();
    for v in 0u64..100 {
        table.insert(v).unwrap();
    }
    assert_eq!(table.capacity(), 256);
}

#[test]
fn cluster_report_after_scenario() {
    init_logger();

    let mut table = scenario_table();

    let report = table.cluster_report();
    assert_eq!(report.cluster_count(), 2);
    assert_eq!(report.max_cluster_size(), 5);
    assert_eq!(report.avg_cluster_size(), 4.0);
    assert_eq!(report.clusters()[0].positions(), &[3, 4, 5, 6, 7]);
    assert_eq!(report.clusters()[1].positions(), &[14, 15, 16]);

    // A tombstone still lengthens its run.
    table.delete(15u64).unwrap();
    assert_eq!(table.cluster_report(), report);

    table.clear();
    let report = table.cluster_report();
    assert_eq!(report.cluster_count(), 0);
    assert_eq!(report.avg_cluster_size(), 0.0);
}

fn insert_or_skip_full(
    table: &mut Table,
    value: u64,
    probing: Probing,
) -> Option<InsertOutcome> {
    match table.insert(value) {
        Ok(outcome) => Some(outcome),
        // Quadratic probing does not cover every slot of a doubled table.
        Err(InsertError::Full { .. }) if probing == Probing::Quadratic => None,
        Err(e) => panic!("unexpected insert error: {e}"),
    }
}

macro_rules! generate_property_tests {
    ($name:ident, $probing:expr) => {
        paste! {
            #[test]
            fn [<round_trip_ $name>]() {
                init_logger();

                let probing = $probing;
                let mut table = Table::builder(11).probing(probing).build().unwrap();
                let mut rng = Pcg64::seed_from_u64(7);

                for _ in 0..500 {
                    let v = rng.gen_range(0..10_000u64);
                    if insert_or_skip_full(&mut table, v, probing).is_none() {
                        continue;
                    }
                    assert_eq!(table.contains(v), Ok(true));
                    assert_eq!(table.delete(v), Ok(true));
                    assert_eq!(table.contains(v), Ok(false));
                }
                assert!(table.is_empty());
            }

            #[test]
            fn [<uniqueness_ $name>]() {
                let probing = $probing;
                let mut table = Table::builder(11).probing(probing).build().unwrap();

                for v in 0u64..20 {
                    insert_or_skip_full(&mut table, v, probing);
                }
                let count = table.len();
                for v in table.values() {
                    assert_eq!(table.insert(v), Ok(InsertOutcome::Duplicate));
                }
                assert_eq!(table.len(), count);

                let mut values = table.slots().iter().filter_map(Slot::value).collect::<Vec<_>>();
                let n = values.len();
                values.sort_unstable();
                values.dedup();
                assert_eq!(values.len(), n);
            }

            #[test]
            fn [<resize_preserves_membership_ $name>]() {
                init_logger();

                let probing = $probing;
                let mut table = Table::builder(3)
                    .load_factor_threshold(0.6)
                    .probing(probing)
                    .build()
                    .unwrap();
                let mut rng = Pcg64::seed_from_u64(0xDEAD_BEEF);
                let mut live = BTreeSet::new();

                for _ in 0..2_000 {
                    let v = rng.gen_range(0..5_000u64);
                    let capacity = table.capacity();

                    if rng.gen_bool(0.25) {
                        assert_eq!(table.delete(v), Ok(live.remove(&v)));
                        continue;
                    }
                    match insert_or_skip_full(&mut table, v, probing) {
                        Some(outcome) => assert_eq!(outcome.is_inserted(), live.insert(v)),
                        None => continue,
                    }

                    if table.capacity() != capacity {
                        assert_eq!(table.capacity(), capacity * 2);
                        assert_eq!(table.stats().tombstone_slots(), 0);
                        for &x in &live {
                            assert_eq!(table.contains(x), Ok(true), "{x} lost by resize");
                        }
                    }
                }
            }

            #[test]
            fn [<count_and_cluster_bounds_ $name>]() {
                let probing = $probing;
                let mut table = Table::builder(5).probing(probing).build().unwrap();
                let mut rng = Pcg64::seed_from_u64(99);

                for _ in 0..3_000 {
                    let v = rng.gen_range(0..400u64);
                    if rng.gen_bool(0.55) {
                        insert_or_skip_full(&mut table, v, probing);
                    } else {
                        table.delete(v).unwrap();
                    }

                    assert_eq!(table.len(), occupied_slots(&table));

                    let report = table.cluster_report();
                    assert!(report.max_cluster_size() <= table.capacity());
                    assert!(report.cluster_count() <= table.capacity());
                    let filled: usize = report.clusters().iter().map(|c| c.size()).sum();
                    let stats = table.stats();
                    assert_eq!(filled, stats.count() + stats.tombstone_slots());
                    assert_eq!(filled + stats.empty_slots(), stats.capacity());
                }
            }
        }
    };
}

generate_property_tests!(linear, Probing::Linear);
generate_property_tests!(quadratic, Probing::Quadratic);
