//! Cross-module tests for the dimensioning library
//!
//! Drives the engine end to end the way the request boundary does, and
//! checks the serde shaping the boundary relies on.

use crate::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn dimensioning_request() -> DimensioningRequest {
    DimensioningRequest {
        subscriber_count: 1000,
        simultaneous_call_fraction: 0.1,
        mean_call_duration_seconds: 180.0,
        codec: "G.711".to_string(),
        available_bandwidth_mbps: 10.0,
        target_gos: 0.01,
    }
}

#[test]
fn test_dimensioning_end_to_end() {
    init_tracing();
    let engine = DimensioningEngine::new();
    let report = engine.compute_dimensioning(&dimensioning_request()).unwrap();

    // 1000 subscribers at 10% for 180 s -> 100 calls, 5 E
    assert_eq!(report.traffic_erlangs, 5.0);
    assert_eq!(report.simultaneous_calls, 100.0);

    // 5 E at 1% GOS is the classic 11-circuit trunk table entry
    assert_eq!(report.circuits_required, 11);
    assert_eq!(report.trunks_required, 11);
    assert!(report.gos_achieved <= 0.01);
    assert!(report.gos_target_met);

    // 100 calls of 80 kbps G.711 -> 8 Mbps, inside the 10 Mbps budget
    assert_eq!(report.per_call_bandwidth_kbps, 80.0);
    assert_eq!(report.bandwidth_consumed_mbps, 8.0);
    assert_eq!(report.available_bandwidth_mbps, 10.0);
    assert!(report.capacity_sufficient);

    assert_eq!(report.codec.name, "G.711");
    assert_eq!(report.codec.voice_bitrate_kbps, 64.0);
}

#[test]
fn test_dimensioning_insufficient_bandwidth() {
    let engine = DimensioningEngine::new();
    let mut request = dimensioning_request();
    request.available_bandwidth_mbps = 5.0;

    let report = engine.compute_dimensioning(&request).unwrap();
    assert_eq!(report.bandwidth_consumed_mbps, 8.0);
    assert!(!report.capacity_sufficient);
}

#[test]
fn test_dimensioning_compact_codec_fits() {
    let engine = DimensioningEngine::new();
    let mut request = dimensioning_request();
    request.codec = "G.729".to_string();
    request.available_bandwidth_mbps = 5.0;

    let report = engine.compute_dimensioning(&request).unwrap();
    // Same offered traffic, same circuit count, a third of the bandwidth
    assert_eq!(report.circuits_required, 11);
    assert_eq!(report.per_call_bandwidth_kbps, 24.0);
    assert_eq!(report.bandwidth_consumed_mbps, 2.4);
    assert!(report.capacity_sufficient);
}

#[test]
fn test_dimensioning_reports_unreachable_gos() {
    let engine = DimensioningEngine::new();
    let request = DimensioningRequest {
        // 2000 E cannot meet 1% blocking within the 1000-circuit ceiling
        subscriber_count: 40_000,
        simultaneous_call_fraction: 0.25,
        mean_call_duration_seconds: 720.0,
        codec: "G.729".to_string(),
        available_bandwidth_mbps: 1000.0,
        target_gos: 0.01,
    };

    let report = engine.compute_dimensioning(&request).unwrap();
    assert_eq!(report.traffic_erlangs, 2000.0);
    assert_eq!(report.circuits_required, DEFAULT_MAX_CIRCUITS);
    assert!(report.gos_achieved > 0.01);
    assert!(!report.gos_target_met);
}

#[test]
fn test_quality_through_engine() {
    init_tracing();
    let engine = DimensioningEngine::new();
    let assessment = engine
        .compute_quality(&QualityRequest {
            latency_ms: 20.0,
            jitter_ms: 5.0,
            loss_fraction: 0.01,
            codec: "Opus".to_string(),
        })
        .unwrap();

    // R = 88.0 - 0 - 0.5 - 0.95
    assert!((assessment.r_factor - 86.55).abs() < 1e-12);
    assert_eq!(assessment.quality_tier, QualityTier::Excellent);
}

#[test]
fn test_list_codecs() {
    let engine = DimensioningEngine::new();
    let codecs = engine.list_codecs();
    assert_eq!(codecs.len(), 4);

    let g711 = codecs.iter().find(|c| c.name == "G.711").unwrap();
    assert_eq!(g711.voice_bitrate_kbps, 64.0);
    assert_eq!(g711.bandwidth_per_call_kbps, 80.0);
    assert_eq!(g711.description, "G.711 - 64 kbps");

    let g729 = codecs.iter().find(|c| c.name == "G.729").unwrap();
    assert_eq!(g729.bandwidth_per_call_kbps, 24.0);
    assert_eq!(g729.description, "G.729 - 8 kbps");
}

#[test]
fn test_unknown_codec_fails_on_every_entry_point() {
    let engine = DimensioningEngine::new();

    let mut request = dimensioning_request();
    request.codec = "iLBC".to_string();
    assert_eq!(
        engine.compute_dimensioning(&request).unwrap_err(),
        DimensioningError::unsupported_codec("iLBC")
    );

    assert_eq!(
        engine
            .compute_quality(&QualityRequest {
                latency_ms: 0.0,
                jitter_ms: 0.0,
                loss_fraction: 0.0,
                codec: "iLBC".to_string(),
            })
            .unwrap_err(),
        DimensioningError::unsupported_codec("iLBC")
    );
}

#[test]
fn test_engine_with_custom_catalog() {
    let catalog = CodecCatalog::empty().with_profile("G.711", CodecProfile::new(64.0, 160, 20.0, 40));
    let engine = DimensioningEngine::with_catalog(catalog);

    assert_eq!(engine.list_codecs().len(), 1);
    assert!(engine.compute_dimensioning(&dimensioning_request()).is_ok());
}

#[test]
fn test_report_serialization_shape() {
    let engine = DimensioningEngine::new();
    let report = engine.compute_dimensioning(&dimensioning_request()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["traffic_erlangs"], 5.0);
    assert_eq!(json["circuits_required"], 11);
    assert_eq!(json["capacity_sufficient"], true);
    assert_eq!(json["codec"]["name"], "G.711");
    assert_eq!(json["codec"]["bandwidth_per_call_kbps"], 80.0);
}

#[test]
fn test_assessment_serialization_shape() {
    let engine = DimensioningEngine::new();
    let assessment = engine
        .compute_quality(&QualityRequest {
            latency_ms: 0.0,
            jitter_ms: 0.0,
            loss_fraction: 0.0,
            codec: "G.711".to_string(),
        })
        .unwrap();

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["r_factor"], 93.2);
    assert_eq!(json["quality_tier"], "Excellent");

    // Requests deserialize from the wire shape the boundary uses
    let request: QualityRequest = serde_json::from_str(
        r#"{"latency_ms": 30.0, "jitter_ms": 4.0, "loss_fraction": 0.005, "codec": "G.722"}"#,
    )
    .unwrap();
    assert_eq!(request.codec, "G.722");
}
