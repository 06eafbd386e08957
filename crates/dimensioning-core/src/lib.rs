//! # Dimensioning-Core: Trunk Sizing and Call-Quality Estimation
//!
//! This library provides the numeric engine behind voice-network capacity
//! planning: offered-traffic calculation, the Erlang-B blocking model and
//! its inverse (circuit sizing), codec bandwidth derivation, and a
//! simplified E-model estimator for perceived call quality (MOS).
//!
//! Everything here is a pure function over immutable inputs. There is no
//! I/O, no shared mutable state, and no blocking operation; the engine is
//! safe to call concurrently from any number of request handlers. The
//! HTTP/validation boundary is an external caller that supplies typed
//! numeric parameters and shapes the resulting reports.
//!
//! ## Components
//!
//! - [`CodecCatalog`]: extensible table of codec bitstream parameters
//! - [`traffic_erlangs`]: subscriber behavior to offered traffic
//! - [`blocking_probability`] / [`min_circuits_for_gos`]: Erlang-B model
//! - [`CallQualityEstimator`]: impairments to R-factor and MOS
//! - [`DimensioningEngine`]: the three operations composed for a caller
//!
//! ## Usage
//!
//! ```rust
//! use dimensioning_core::{DimensioningEngine, DimensioningRequest};
//!
//! let engine = DimensioningEngine::new();
//! let report = engine.compute_dimensioning(&DimensioningRequest {
//!     subscriber_count: 1000,
//!     simultaneous_call_fraction: 0.1,
//!     mean_call_duration_seconds: 180.0,
//!     codec: "G.711".to_string(),
//!     available_bandwidth_mbps: 10.0,
//!     target_gos: 0.01,
//! })?;
//!
//! assert_eq!(report.traffic_erlangs, 5.0);
//! assert_eq!(report.circuits_required, 11);
//! assert!(report.capacity_sufficient);
//! # Ok::<(), dimensioning_core::DimensioningError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod engine;
pub mod erlang;
pub mod error;
pub mod quality;
pub mod traffic;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use codec::{CodecCatalog, CodecProfile, CodecProfileProvider};
pub use engine::{
    CodecDescriptor, CodecSummary, DimensioningEngine, DimensioningReport, DimensioningRequest,
    QualityRequest,
};
pub use erlang::{blocking_probability, min_circuits_for_gos, DEFAULT_MAX_CIRCUITS};
pub use error::{DimensioningError, Result};
pub use quality::{CallQualityEstimator, QualityAssessment, QualityTier};
pub use traffic::{traffic_erlangs, TrafficIntensity};

/// Version information for the dimensioning library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
