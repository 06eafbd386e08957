//! Dimensioning engine: the operations exposed to the boundary layer
//!
//! Composes the traffic model, the Erlang-B engine, and the codec catalog
//! into a trunk-group dimensioning report, and fronts the quality
//! estimator for per-call assessments. The surrounding request layer is
//! expected to have parsed and typed its inputs; the engine still rejects
//! out-of-range values rather than coercing them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{CodecCatalog, CodecProfileProvider};
use crate::erlang::{blocking_probability, min_circuits_for_gos, DEFAULT_MAX_CIRCUITS};
use crate::error::Result;
use crate::quality::{CallQualityEstimator, QualityAssessment};
use crate::traffic::traffic_erlangs;

/// Inputs for a trunk-group dimensioning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensioningRequest {
    /// Number of subscribers homed on the trunk group
    pub subscriber_count: u32,
    /// Fraction of subscribers in a call simultaneously, in `(0, 1]`
    pub simultaneous_call_fraction: f64,
    /// Mean call holding time in seconds
    pub mean_call_duration_seconds: f64,
    /// Codec carried on the trunks
    pub codec: String,
    /// Bandwidth available to the trunk group in Mbit/s
    pub available_bandwidth_mbps: f64,
    /// Target grade of service (blocking probability), in `(0, 1]`
    pub target_gos: f64,
}

/// Inputs for a call-quality assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRequest {
    /// One-way latency in milliseconds
    pub latency_ms: f64,
    /// Jitter in milliseconds
    pub jitter_ms: f64,
    /// Packet loss as a fraction in `[0, 1]` (not a percentage)
    pub loss_fraction: f64,
    /// Codec in use
    pub codec: String,
}

/// Codec details echoed into a dimensioning report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSummary {
    /// Codec name
    pub name: String,
    /// Raw voice bitrate in kbit/s
    pub voice_bitrate_kbps: f64,
    /// On-wire bandwidth per call in kbit/s
    pub bandwidth_per_call_kbps: f64,
}

/// Result of a trunk-group dimensioning run
///
/// All numeric fields are exact; rounding for display belongs to the
/// boundary layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensioningReport {
    /// Offered traffic in Erlangs
    pub traffic_erlangs: f64,
    /// Circuits needed to meet the target GOS (or the search ceiling)
    pub circuits_required: u32,
    /// Trunks to provision, identical to `circuits_required`
    pub trunks_required: u32,
    /// Blocking probability achieved at `circuits_required`
    pub gos_achieved: f64,
    /// False when the search clamped at its ceiling without reaching the
    /// target GOS
    pub gos_target_met: bool,
    /// Expected number of simultaneous calls
    pub simultaneous_calls: f64,
    /// On-wire bandwidth per call in kbit/s
    pub per_call_bandwidth_kbps: f64,
    /// Total bandwidth consumed by the simultaneous calls in Mbit/s
    pub bandwidth_consumed_mbps: f64,
    /// Bandwidth available to the trunk group, echoed from the request
    pub available_bandwidth_mbps: f64,
    /// Whether the available bandwidth covers the consumed bandwidth
    pub capacity_sufficient: bool,
    /// Details of the codec used for the bandwidth figures
    pub codec: CodecSummary,
}

/// One entry of the supported-codec listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecDescriptor {
    /// Codec name
    pub name: String,
    /// Raw voice bitrate in kbit/s
    pub voice_bitrate_kbps: f64,
    /// On-wire bandwidth per call in kbit/s
    pub bandwidth_per_call_kbps: f64,
    /// Human-readable summary, e.g. `"G.711 - 64 kbps"`
    pub description: String,
}

/// Stateless computation engine over a codec catalog
///
/// Safe to share across threads and requests: the catalog is read-only
/// after construction and every operation is a pure function of its
/// inputs.
#[derive(Debug, Clone)]
pub struct DimensioningEngine {
    catalog: CodecCatalog,
}

impl DimensioningEngine {
    /// Create an engine over the built-in codec catalog
    pub fn new() -> Self {
        Self::with_catalog(CodecCatalog::new())
    }

    /// Create an engine over a caller-supplied catalog
    pub fn with_catalog(catalog: CodecCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog backing this engine
    pub fn catalog(&self) -> &CodecCatalog {
        &self.catalog
    }

    /// Size a trunk group and check bandwidth capacity
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedCodec` for unknown codec names and
    /// `InvalidParameter` for out-of-range numeric inputs; no partial
    /// report is produced.
    pub fn compute_dimensioning(&self, request: &DimensioningRequest) -> Result<DimensioningReport> {
        let traffic = traffic_erlangs(
            request.subscriber_count,
            request.simultaneous_call_fraction,
            request.mean_call_duration_seconds,
        )?;
        let profile = self.catalog.profile_for(&request.codec)?;

        let circuits_required =
            min_circuits_for_gos(traffic, request.target_gos, DEFAULT_MAX_CIRCUITS)?;
        let gos_achieved = blocking_probability(traffic, circuits_required);
        let gos_target_met = gos_achieved <= request.target_gos;

        let per_call_bandwidth_kbps = profile.bandwidth_per_call_kbps();
        let simultaneous_calls =
            f64::from(request.subscriber_count) * request.simultaneous_call_fraction;
        let bandwidth_consumed_mbps = simultaneous_calls * per_call_bandwidth_kbps / 1000.0;
        let capacity_sufficient = bandwidth_consumed_mbps <= request.available_bandwidth_mbps;

        debug!(
            traffic = traffic.erlangs(),
            circuits_required,
            gos_achieved,
            bandwidth_consumed_mbps,
            capacity_sufficient,
            "computed trunk dimensioning"
        );

        Ok(DimensioningReport {
            traffic_erlangs: traffic.erlangs(),
            circuits_required,
            trunks_required: circuits_required,
            gos_achieved,
            gos_target_met,
            simultaneous_calls,
            per_call_bandwidth_kbps,
            bandwidth_consumed_mbps,
            available_bandwidth_mbps: request.available_bandwidth_mbps,
            capacity_sufficient,
            codec: CodecSummary {
                name: request.codec.clone(),
                voice_bitrate_kbps: profile.voice_bitrate_kbps,
                bandwidth_per_call_kbps: per_call_bandwidth_kbps,
            },
        })
    }

    /// Estimate perceived call quality for one impairment scenario
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`CallQualityEstimator::estimate`](crate::quality::CallQualityEstimator::estimate).
    pub fn compute_quality(&self, request: &QualityRequest) -> Result<QualityAssessment> {
        CallQualityEstimator::new(&self.catalog).estimate(
            request.latency_ms,
            request.jitter_ms,
            request.loss_fraction,
            &request.codec,
        )
    }

    /// Enumerate the supported codecs with their derived bandwidth
    pub fn list_codecs(&self) -> Vec<CodecDescriptor> {
        self.catalog
            .list_profiles()
            .into_iter()
            .map(|(name, profile, bandwidth_per_call_kbps)| CodecDescriptor {
                name: name.to_string(),
                voice_bitrate_kbps: profile.voice_bitrate_kbps,
                bandwidth_per_call_kbps,
                description: format!("{} - {} kbps", name, profile.voice_bitrate_kbps),
            })
            .collect()
    }
}

impl Default for DimensioningEngine {
    fn default() -> Self {
        Self::new()
    }
}
