//! Call-quality estimation (simplified E-model)
//!
//! Derives an R-factor from network impairments and maps it onto a Mean
//! Opinion Score. The impairment terms are deliberate simplifications of
//! ITU-T G.107, kept bit-for-bit compatible with the deployed estimator
//! rather than corrected toward the standard:
//!
//! - the latency term is discontinuous at 150 ms (the two branches do
//!   not meet there),
//! - jitter contributes a flat `0.1 / ms`,
//! - loss contributes `95 * loss_fraction`.
//!
//! Loss is a *fraction* in `[0, 1]`, never a percentage. Boundaries that
//! speak percentages must divide by 100 before calling in, or the loss
//! impairment comes out 100x too large.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::CodecProfileProvider;
use crate::error::{require_non_negative, Result};

/// Base R-factor for codecs without a dedicated entry
///
/// Only reachable for codecs registered into the catalog beyond the
/// built-in four.
const DEFAULT_BASE_R_FACTOR: f64 = 85.0;

/// Intrinsic codec quality as a base R-factor
fn base_r_factor(codec: &str) -> f64 {
    match codec {
        "G.711" => 93.2,
        "G.729" => 83.0,
        "G.722" => 92.0,
        "Opus" => 88.0,
        _ => DEFAULT_BASE_R_FACTOR,
    }
}

/// Latency impairment Id
///
/// Zero up to and including 150 ms, then jumps: the branches do not meet
/// at the boundary. Preserved as-is for compatibility.
fn latency_impairment(latency_ms: f64) -> f64 {
    if latency_ms <= 150.0 {
        0.0
    } else {
        0.024 * latency_ms + 0.11 * (latency_ms - 177.3)
    }
}

/// Jitter impairment, linear approximation
fn jitter_impairment(jitter_ms: f64) -> f64 {
    jitter_ms * 0.1
}

/// Packet-loss impairment Ie, loss given as a fraction
fn loss_impairment(loss_fraction: f64) -> f64 {
    95.0 * loss_fraction
}

/// Map an R-factor onto the 1..5 MOS scale
fn mos_from_r_factor(r_factor: f64) -> f64 {
    let mos = if r_factor < 0.0 {
        1.0
    } else if r_factor > 100.0 {
        4.5
    } else {
        1.0 + 0.035 * r_factor + 7e-6 * r_factor * (r_factor - 60.0) * (100.0 - r_factor)
    };
    mos.clamp(1.0, 5.0)
}

/// Perceived-quality band derived from MOS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    /// MOS >= 4.0
    Excellent,
    /// MOS >= 3.5
    Good,
    /// MOS >= 3.0
    Acceptable,
    /// MOS >= 2.0
    Poor,
    /// Everything below
    Bad,
}

impl QualityTier {
    /// Determine the quality tier from a MOS score
    pub fn from_mos(mos: f64) -> Self {
        match mos {
            mos if mos >= 4.0 => Self::Excellent,
            mos if mos >= 3.5 => Self::Good,
            mos if mos >= 3.0 => Self::Acceptable,
            mos if mos >= 2.0 => Self::Poor,
            _ => Self::Bad,
        }
    }
}

/// Estimated call quality for one impairment scenario
///
/// A derived value object: computed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Mean Opinion Score, clamped to `[1.0, 5.0]`
    pub mos: f64,
    /// Underlying transmission rating factor (may be negative)
    pub r_factor: f64,
    /// Band the MOS falls into
    pub quality_tier: QualityTier,
}

/// Stateless per-call quality estimator
///
/// Validates codec names against a [`CodecProfileProvider`] so that an
/// unknown codec fails instead of silently scoring with a default.
pub struct CallQualityEstimator<P: CodecProfileProvider> {
    profiles: P,
}

impl<P: CodecProfileProvider> CallQualityEstimator<P> {
    /// Create an estimator over the given profile source
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }

    /// Estimate call quality for the given impairments and codec
    ///
    /// `loss_fraction` is a fraction in `[0, 1]`, not a percentage.
    ///
    /// # Errors
    ///
    /// Fails with [`UnsupportedCodec`](crate::DimensioningError::UnsupportedCodec)
    /// for unknown codec names and
    /// [`InvalidParameter`](crate::DimensioningError::InvalidParameter)
    /// for negative impairment inputs.
    pub fn estimate(
        &self,
        latency_ms: f64,
        jitter_ms: f64,
        loss_fraction: f64,
        codec: &str,
    ) -> Result<QualityAssessment> {
        require_non_negative("latency_ms", latency_ms)?;
        require_non_negative("jitter_ms", jitter_ms)?;
        require_non_negative("loss_fraction", loss_fraction)?;
        self.profiles.profile_for(codec)?;

        let r0 = base_r_factor(codec);
        let r_factor = r0
            - latency_impairment(latency_ms)
            - jitter_impairment(jitter_ms)
            - loss_impairment(loss_fraction);
        let mos = mos_from_r_factor(r_factor);
        let quality_tier = QualityTier::from_mos(mos);

        debug!(codec, r_factor, mos, ?quality_tier, "estimated call quality");

        Ok(QualityAssessment {
            mos,
            r_factor,
            quality_tier,
        })
    }
}
