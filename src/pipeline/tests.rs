use super::*;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::config::Config;
use crate::dataset::{Dataset, DatasetRole};
use crate::geocode::{Coordinate, MockGeocodeProvider};
use crate::progress::{NullProgress, Phase, ProgressSink};
use crate::refine::MockRoutingProvider;

const VENICE: Coordinate = Coordinate {
    lat: 45.4408,
    lon: 12.3155,
};
const PADUA: Coordinate = Coordinate {
    lat: 45.4064,
    lon: 11.8768,
};
const VERONA: Coordinate = Coordinate {
    lat: 45.4384,
    lon: 10.9916,
};

fn fast_config() -> Config {
    Config {
        min_call_interval: Duration::from_millis(1),
        ..Default::default()
    }
}

fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

fn requesters() -> Dataset {
    dataset(
        &["Name", "Addr"],
        &[
            &["Anna", "venezia"],
            &["Bruno", ""],
            &["Carla", "via sconosciuta 1"],
        ],
    )
}

fn providers() -> Dataset {
    dataset(
        &["Facility", "Address", "Phone"],
        &[&["Padova", "padova", "049"], &["Verona", "verona", "045"]],
    )
}

fn geocoder() -> MockGeocodeProvider {
    MockGeocodeProvider::new()
        .with_coordinate("venezia", VENICE)
        .with_coordinate("padova", PADUA)
        .with_coordinate("verona", VERONA)
}

struct PhaseRecorder(Vec<Phase>);

impl ProgressSink for PhaseRecorder {
    fn phase(&mut self, phase: Phase) {
        self.0.push(phase);
    }
    fn record(&mut self, _index: usize, _total: usize, _address: &str) {}
}

#[tokio::test]
async fn test_run_partitions_records_and_ranks_pairs() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let outcome = pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            false,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    // Anna resolved; Bruno blank (skipped); Carla unresolvable.
    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.requester_errors.len(), 1);
    assert_eq!(outcome.requester_errors[0].address, "via sconosciuta 1");
    assert!(outcome.provider_errors.is_empty());

    // Venice is nearer to Padua than to Verona.
    assert_eq!(outcome.pairs[0].provider.record.field(0), Some("Padova"));
    assert_eq!(outcome.pairs[1].provider.record.field(0), Some("Verona"));
    assert!(outcome.pairs[0].great_circle_km < outcome.pairs[1].great_circle_km);
}

#[tokio::test]
async fn test_phases_are_reported_in_order() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());
    let mut recorder = PhaseRecorder(Vec::new());

    pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            true,
            &mut recorder,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        recorder.0,
        vec![
            Phase::ResolvingRequesters,
            Phase::ResolvingProviders,
            Phase::ComputingDistances,
            Phase::RefiningRoutes,
        ]
    );
}

#[tokio::test]
async fn test_refinement_is_skipped_unless_requested() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            false,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(router.call_count(), 0);
}

#[tokio::test]
async fn test_refinement_fills_route_distances() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new()
        .with_route(VENICE, PADUA, 39.5)
        .with_route(VENICE, VERONA, 120.0);
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let outcome = pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            true,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.pairs[0].route_km, Some(39.5));
    assert_eq!(outcome.pairs[1].route_km, Some(120.0));
    assert_eq!(router.call_count(), 2);
}

#[tokio::test]
async fn test_shared_query_across_datasets_geocodes_once() {
    // The same address text in both datasets must hit the shared cache.
    let geocoder = MockGeocodeProvider::new().with_coordinate("padova", PADUA);
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let reqs = dataset(&["Addr"], &[&["padova"]]);
    let provs = dataset(&["Addr"], &[&["padova"]]);

    let outcome = pipeline
        .run(
            &reqs,
            0,
            &provs,
            0,
            false,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.pairs.len(), 1);
    assert_eq!(geocoder.call_count(), 1);
}

#[tokio::test]
async fn test_invalid_column_is_rejected_before_any_call() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let result = pipeline
        .run(
            &requesters(),
            7,
            &providers(),
            1,
            false,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::InvalidColumn {
            role: DatasetRole::Requester,
            index: 7,
            width: 2
        })
    ));
    assert_eq!(geocoder.call_count(), 0);
}

#[tokio::test]
async fn test_cancellation_surfaces_as_pipeline_error() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());
    let cancel = CancelToken::new();
    cancel.cancel();

    let result = pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            false,
            &mut NullProgress,
            &cancel,
        )
        .await;

    assert!(matches!(result, Err(PipelineError::Cancelled)));
}

#[tokio::test]
async fn test_ranked_table_shapes_headers_and_rows() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new().with_route(VENICE, PADUA, 39.5);
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let reqs = requesters();
    let provs = providers();
    let outcome = pipeline
        .run(&reqs, 1, &provs, 1, true, &mut NullProgress, &CancelToken::new())
        .await
        .unwrap();

    let (headers, rows) = outcome.ranked_table(reqs.headers(), provs.headers(), true);

    assert_eq!(
        headers,
        ["Name", "Addr", "Facility", "Address", "Phone", "Km", "Route Km"]
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Anna");
    assert_eq!(rows[0][2], "Padova");
    assert_eq!(rows[0][6], "39.50");
    // Verona pair failed to route: empty cell, ranked after the routed pair.
    assert_eq!(rows[1][6], "");
}

#[tokio::test]
async fn test_error_table_preserves_verbatim_address() {
    let geocoder = geocoder();
    let router = MockRoutingProvider::new();
    let pipeline = Pipeline::new(&geocoder, &router, &fast_config());

    let outcome = pipeline
        .run(
            &requesters(),
            1,
            &providers(),
            1,
            false,
            &mut NullProgress,
            &CancelToken::new(),
        )
        .await
        .unwrap();

    let (headers, rows) = outcome.error_table();

    assert_eq!(headers, ["Dataset", "Address", "Record"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "requester");
    assert_eq!(rows[0][1], "via sconosciuta 1");
    assert_eq!(rows[0][2], "Carla | via sconosciuta 1");
}
