//! End-to-end scenarios for network setup, lookup, and allocation, driven
//! through the public library surface with seeded RNGs.

use rand::rngs::StdRng;
use rand::SeedableRng;

use velonet::error::NetworkError;
use velonet::registry::{NetworkRegistry, SetupPlan};
use velonet::station::StationKindFilter;

fn plan(name: &str, stations: usize, slots: usize, bikes: usize) -> SetupPlan {
    SetupPlan {
        name: name.to_string(),
        station_count: stations,
        slots_per_station: slots,
        side_km: 10.0,
        bike_count: bikes,
    }
}

#[test]
fn paris_scenario_places_five_bikes_across_three_stations() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(2024);

    let network = registry
        .setup_network(&plan("Paris", 3, 2, 5), &mut rng)
        .expect("setup within capacity succeeds");

    assert_eq!(network.stations().len(), 3);
    let mut total = 0;
    for station in network.stations() {
        assert_eq!(station.slot_count(), 2);
        assert!(station.bicycle_count() <= 2);
        total += station.bicycle_count();
    }
    assert_eq!(total, 5);
}

#[test]
fn duplicate_name_with_different_case_is_rejected() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(2024);
    registry
        .setup_network(&plan("Paris", 3, 2, 5), &mut rng)
        .unwrap();

    let err = registry
        .setup_network(&plan("paris", 1, 1, 0), &mut rng)
        .unwrap_err();
    assert_eq!(err, NetworkError::DuplicateName("paris".to_string()));
    assert_eq!(registry.networks().len(), 1);
}

#[test]
fn lyon_scenario_fails_with_capacity_details_and_registers_nothing() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(2024);

    let err = registry
        .setup_network(&plan("Lyon", 2, 1, 5), &mut rng)
        .unwrap_err();

    assert_eq!(
        err,
        NetworkError::NotEnoughSlots {
            requested: 5,
            available: 2
        }
    );
    assert!(matches!(
        registry.find_by_name("Lyon").unwrap_err(),
        NetworkError::NameNotFound(_)
    ));
}

#[test]
fn kind_partition_covers_all_stations() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(11);
    let network = registry
        .setup_network(&plan("Paris", 20, 3, 30), &mut rng)
        .unwrap();

    let all = network.stations_of_kind(StationKindFilter::All);
    let standard = network.stations_of_kind(StationKindFilter::Standard);
    let plus = network.stations_of_kind(StationKindFilter::Plus);

    assert_eq!(all.len(), 20);
    assert_eq!(all.len(), standard.len() + plus.len());
    for station in standard.iter().chain(plus.iter()) {
        assert!(all.iter().any(|s| s.id() == station.id()));
    }
}

#[test]
fn unknown_kind_string_is_rejected_at_the_boundary() {
    let err = "bogus".parse::<StationKindFilter>().unwrap_err();
    assert_eq!(err, NetworkError::UnsupportedKind("bogus".to_string()));
}

#[test]
fn station_lookup_round_trips_through_network_and_registry() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(5);
    registry.setup_network(&plan("Paris", 4, 2, 3), &mut rng).unwrap();
    registry.setup_network(&plan("Lyon", 4, 2, 3), &mut rng).unwrap();

    let network = registry.find_by_name("Lyon").unwrap();
    for station in network.stations() {
        let id = station.id();
        assert_eq!(network.find_station_by_id(id).unwrap().id(), id);
        assert_eq!(registry.find_station_by_id(id).unwrap().id(), id);
    }
}

#[test]
fn ids_are_unique_across_networks_stations_and_bicycles() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(99);
    registry.setup_network(&plan("Paris", 3, 2, 4), &mut rng).unwrap();
    registry.setup_network(&plan("Lyon", 3, 2, 4), &mut rng).unwrap();

    let mut seen = std::collections::HashSet::new();
    for network in registry.networks() {
        assert!(seen.insert(network.id()));
        for station in network.stations() {
            assert!(seen.insert(station.id()));
        }
    }
}

#[test]
fn seeded_setups_are_reproducible() {
    let build = || {
        let mut registry = NetworkRegistry::new();
        let mut rng = StdRng::seed_from_u64(1234);
        registry.setup_network(&plan("Paris", 5, 4, 12), &mut rng).unwrap();
        registry
            .networks()
            .iter()
            .flat_map(|n| n.stations().iter())
            .map(|s| (s.id(), s.kind(), s.bicycle_count()))
            .collect::<Vec<_>>()
    };

    assert_eq!(build(), build());
}

#[test]
fn setup_with_zero_bikes_leaves_every_slot_free() {
    let mut registry = NetworkRegistry::new();
    let mut rng = StdRng::seed_from_u64(8);
    let network = registry.setup_network(&plan("Nice", 2, 3, 0), &mut rng).unwrap();
    assert_eq!(network.bicycle_count(), 0);
    assert_eq!(network.free_slot_count(), 6);
}
