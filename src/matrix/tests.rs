use super::*;
use std::sync::Arc;

use crate::dataset::SourceRecord;
use crate::geocode::{Coordinate, ResolvedRecord};

fn resolved(name: &str, lat: f64, lon: f64) -> ResolvedRecord {
    ResolvedRecord {
        record: Arc::new(SourceRecord::new(vec![name.to_string()])),
        coordinate: Coordinate::new(lat, lon),
    }
}

const VENICE: Coordinate = Coordinate {
    lat: 45.4408,
    lon: 12.3155,
};
const PADUA: Coordinate = Coordinate {
    lat: 45.4064,
    lon: 11.8768,
};

#[test]
fn test_venice_padua_fixture() {
    let km = haversine_km(VENICE, PADUA);
    assert!((km - 36.2).abs() < 0.5, "got {km}");
}

#[test]
fn test_haversine_is_symmetric() {
    assert_eq!(haversine_km(VENICE, PADUA), haversine_km(PADUA, VENICE));
}

#[test]
fn test_zero_distance_for_identical_points() {
    assert_eq!(haversine_km(VENICE, VENICE), 0.0);
}

#[test]
fn test_distance_is_rounded_to_two_decimals() {
    let km = haversine_km(VENICE, PADUA);
    assert_eq!(km, round_2dp(km));
}

#[test]
fn test_pair_count_is_full_cross_product() {
    let requesters = vec![
        resolved("r1", 45.0, 11.0),
        resolved("r2", 45.1, 11.1),
        resolved("r3", 45.2, 11.2),
    ];
    let providers = vec![resolved("p1", 45.0, 11.0), resolved("p2", 46.0, 12.0)];

    let pairs = build(&requesters, &providers);

    assert_eq!(pairs.len(), 6);
    assert!(pairs.iter().all(|p| p.route_km.is_none()));
}

#[test]
fn test_pairs_are_sorted_ascending() {
    let requesters = vec![resolved("r", 45.4408, 12.3155)];
    let providers = vec![
        resolved("far", 41.9, 12.5),
        resolved("near", 45.44, 12.32),
        resolved("mid", 45.4064, 11.8768),
    ];

    let pairs = build(&requesters, &providers);

    assert_eq!(pairs[0].provider.record.field(0), Some("near"));
    assert_eq!(pairs[1].provider.record.field(0), Some("mid"));
    assert_eq!(pairs[2].provider.record.field(0), Some("far"));
    assert!(pairs[0].great_circle_km <= pairs[1].great_circle_km);
    assert!(pairs[1].great_circle_km <= pairs[2].great_circle_km);
}

#[test]
fn test_ties_keep_enumeration_order() {
    // Two providers at the same coordinate tie exactly; enumeration order
    // (provider input order) must survive the stable sort.
    let requesters = vec![resolved("r", 45.0, 11.0)];
    let providers = vec![resolved("first", 45.5, 11.5), resolved("second", 45.5, 11.5)];

    let pairs = build(&requesters, &providers);

    assert_eq!(pairs[0].great_circle_km, pairs[1].great_circle_km);
    assert_eq!(pairs[0].provider.record.field(0), Some("first"));
    assert_eq!(pairs[1].provider.record.field(0), Some("second"));
}

#[test]
fn test_empty_sides_produce_empty_matrix() {
    let some = vec![resolved("r", 45.0, 11.0)];
    assert!(build(&[], &some).is_empty());
    assert!(build(&some, &[]).is_empty());
}
