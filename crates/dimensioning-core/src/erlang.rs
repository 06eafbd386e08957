//! Erlang-B blocking model
//!
//! Blocking probability for a lossy (no-queue) trunk group with `C`
//! circuits offered `A` Erlangs, and the inverse search that sizes a
//! trunk group against a target grade of service.
//!
//! ## Numerical stability
//!
//! The closed form `(A^C / C!) / Σ A^i / i!` overflows f64 factorials
//! beyond ~170 circuits. Both directions therefore use the recurrence
//!
//! ```text
//! B(0) = 1
//! B(n) = A * B(n-1) / (n + A * B(n-1))
//! ```
//!
//! which is exact in the same arithmetic and stable for trunk groups in
//! the hundreds of circuits.

use tracing::trace;

use crate::error::{DimensioningError, Result};
use crate::traffic::TrafficIntensity;

/// Ceiling for the inverse circuit search
pub const DEFAULT_MAX_CIRCUITS: u32 = 1000;

/// Probability that a call offered to `circuits` circuits is blocked
///
/// Boundary cases are defined, not errors: zero circuits block every
/// call (returns `1.0`), and zero offered traffic is never blocked on a
/// non-empty trunk group (returns `0.0`). The result is always in
/// `[0, 1]` and non-increasing in `circuits` for fixed traffic.
pub fn blocking_probability(traffic: TrafficIntensity, circuits: u32) -> f64 {
    if circuits == 0 {
        return 1.0;
    }

    let a = traffic.erlangs();
    let mut b = 1.0;
    for n in 1..=circuits {
        b = (a * b) / (f64::from(n) + a * b);
    }
    b
}

/// Smallest circuit count whose blocking probability meets `target_gos`
///
/// Ascending linear search over `1..=max_circuits`; because blocking is
/// non-increasing in circuits, the first count at or below the target is
/// also the minimum. If the target is unreachable within `max_circuits`
/// the ceiling itself is returned rather than an error; callers decide
/// whether that degraded answer is acceptable (see
/// [`gos_target_met`](crate::engine::DimensioningReport::gos_target_met)).
///
/// # Errors
///
/// Returns [`DimensioningError::InvalidParameter`] when `target_gos` is
/// outside `(0, 1]` or `max_circuits` is zero.
pub fn min_circuits_for_gos(
    traffic: TrafficIntensity,
    target_gos: f64,
    max_circuits: u32,
) -> Result<u32> {
    if !(target_gos > 0.0 && target_gos <= 1.0) {
        return Err(DimensioningError::invalid_parameter(
            "target_gos",
            target_gos,
            "must be in (0, 1]",
        ));
    }
    if max_circuits == 0 {
        return Err(DimensioningError::invalid_parameter(
            "max_circuits",
            0.0,
            "must be positive",
        ));
    }

    // Single pass of the recurrence doubles as the search: B after n
    // steps is exactly blocking_probability(traffic, n).
    let a = traffic.erlangs();
    let mut b = 1.0;
    for n in 1..=max_circuits {
        b = (a * b) / (f64::from(n) + a * b);
        if b <= target_gos {
            trace!(circuits = n, blocking = b, "gos target reached");
            return Ok(n);
        }
    }

    trace!(
        max_circuits,
        blocking = b,
        "gos target unreachable, clamping"
    );
    Ok(max_circuits)
}
