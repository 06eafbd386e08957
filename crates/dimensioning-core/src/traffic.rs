//! Offered-traffic model
//!
//! Converts subscriber counts and call behavior into an offered traffic
//! intensity in Erlangs: `A = N * p * t / 3600` for `N` subscribers, a
//! simultaneous-call fraction `p`, and a mean call duration of `t` seconds.

use std::fmt;

use crate::error::{require_positive, DimensioningError, Result};

/// Offered traffic intensity in Erlangs
///
/// A dimensionless non-negative quantity: the average number of
/// simultaneous calls offered to the trunk group. Derived per request,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrafficIntensity(f64);

impl TrafficIntensity {
    /// Wrap a raw Erlang value
    ///
    /// # Errors
    ///
    /// Returns [`DimensioningError::InvalidParameter`] for negative or
    /// non-finite values.
    pub fn new(erlangs: f64) -> Result<Self> {
        if erlangs.is_finite() && erlangs >= 0.0 {
            Ok(Self(erlangs))
        } else {
            Err(DimensioningError::invalid_parameter(
                "traffic_erlangs",
                erlangs,
                "must be finite and non-negative",
            ))
        }
    }

    /// Zero offered traffic
    pub const ZERO: TrafficIntensity = TrafficIntensity(0.0);

    /// The traffic value in Erlangs
    pub fn erlangs(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TrafficIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} E", self.0)
    }
}

/// Compute offered traffic from subscriber behavior
///
/// `simultaneous_call_fraction` is typically in `(0, 1]` but the model
/// deliberately does not cap it: callers that express it as a percentage
/// or model overload scenarios own that semantic. All three inputs must
/// be strictly positive.
///
/// # Errors
///
/// Returns [`DimensioningError::InvalidParameter`] when any input is
/// zero, negative, or non-finite.
pub fn traffic_erlangs(
    subscriber_count: u32,
    simultaneous_call_fraction: f64,
    mean_call_duration_seconds: f64,
) -> Result<TrafficIntensity> {
    if subscriber_count == 0 {
        return Err(DimensioningError::invalid_parameter(
            "subscriber_count",
            0.0,
            "must be positive",
        ));
    }
    require_positive("simultaneous_call_fraction", simultaneous_call_fraction)?;
    require_positive("mean_call_duration_seconds", mean_call_duration_seconds)?;

    let simultaneous_calls = f64::from(subscriber_count) * simultaneous_call_fraction;
    TrafficIntensity::new(simultaneous_calls * mean_call_duration_seconds / 3600.0)
}
