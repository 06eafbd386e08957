//! Codec catalog and per-call bandwidth derivation
//!
//! A [`CodecProfile`] describes how a voice codec packetizes audio for
//! transport. The built-in table covers the codecs deployed on the trunk
//! groups we dimension (G.711, G.729, G.722, Opus), but the catalog is an
//! ordinary extensible mapping: new codecs can be registered without
//! touching any engine code. Components that only need lookups depend on
//! the [`CodecProfileProvider`] trait rather than the concrete catalog.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::{DimensioningError, Result};

/// Transport parameters for a single voice codec
///
/// All values describe one direction of one call. Bandwidth math is kept
/// exact; rounding for display is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecProfile {
    /// Raw voice bitrate in kbit/s, before packet overhead
    pub voice_bitrate_kbps: f64,
    /// RTP payload size per packet in bytes
    pub payload_bytes: u32,
    /// Packetization interval in milliseconds
    pub packetization_interval_ms: f64,
    /// Per-packet header overhead in bytes
    pub header_bytes: u32,
}

impl CodecProfile {
    /// Create a new codec profile
    pub fn new(
        voice_bitrate_kbps: f64,
        payload_bytes: u32,
        packetization_interval_ms: f64,
        header_bytes: u32,
    ) -> Self {
        Self {
            voice_bitrate_kbps,
            payload_bytes,
            packetization_interval_ms,
            header_bytes,
        }
    }

    /// On-wire bandwidth consumed by one call, in kbit/s
    ///
    /// `((payload + headers) * 8) / interval_seconds / 1000`, computed
    /// without any rounding.
    pub fn bandwidth_per_call_kbps(&self) -> f64 {
        let packet_bits = f64::from(self.payload_bytes + self.header_bytes) * 8.0;
        let interval_seconds = self.packetization_interval_ms / 1000.0;
        packet_bits / interval_seconds / 1000.0
    }
}

/// Read-only source of codec profiles
///
/// This is the seam between the catalog and the components that consume
/// it; the estimator and the dimensioning engine accept any provider.
pub trait CodecProfileProvider {
    /// Look up the profile for a codec name
    ///
    /// # Errors
    ///
    /// Returns [`DimensioningError::UnsupportedCodec`] when the name is
    /// absent from the mapping.
    fn profile_for(&self, name: &str) -> Result<&CodecProfile>;

    /// Names of all known codecs, in stable order
    fn profile_names(&self) -> Vec<&str>;

    /// On-wire bandwidth for one call of the named codec, in kbit/s
    fn bandwidth_per_call_kbps(&self, name: &str) -> Result<f64> {
        Ok(self.profile_for(name)?.bandwidth_per_call_kbps())
    }
}

impl<T: CodecProfileProvider + ?Sized> CodecProfileProvider for &T {
    fn profile_for(&self, name: &str) -> Result<&CodecProfile> {
        (**self).profile_for(name)
    }

    fn profile_names(&self) -> Vec<&str> {
        (**self).profile_names()
    }
}

/// Built-in codec table
///
/// Header overhead is IP (20) + UDP (8) + RTP (12) = 40 bytes for every
/// entry; all four codecs packetize on a 20 ms interval.
static BUILTIN_PROFILES: LazyLock<BTreeMap<String, CodecProfile>> = LazyLock::new(|| {
    let mut table = BTreeMap::new();
    table.insert("G.711".to_string(), CodecProfile::new(64.0, 160, 20.0, 40));
    table.insert("G.729".to_string(), CodecProfile::new(8.0, 20, 20.0, 40));
    table.insert("G.722".to_string(), CodecProfile::new(64.0, 160, 20.0, 40));
    table.insert("Opus".to_string(), CodecProfile::new(32.0, 80, 20.0, 40));
    table
});

/// Extensible mapping from codec name to [`CodecProfile`]
///
/// Immutable after construction in normal use: the process builds the
/// catalog once at startup and every computation reads from it without
/// coordination.
#[derive(Debug, Clone)]
pub struct CodecCatalog {
    profiles: BTreeMap<String, CodecProfile>,
}

impl CodecCatalog {
    /// Create a catalog pre-populated with the built-in codecs
    pub fn new() -> Self {
        Self {
            profiles: BUILTIN_PROFILES.clone(),
        }
    }

    /// Create a catalog with no entries
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Register a codec profile, replacing any existing entry of that name
    pub fn register(&mut self, name: impl Into<String>, profile: CodecProfile) {
        self.profiles.insert(name.into(), profile);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_profile(mut self, name: impl Into<String>, profile: CodecProfile) -> Self {
        self.register(name, profile);
        self
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no codecs are registered
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Enumerate all codecs with their derived per-call bandwidth
    pub fn list_profiles(&self) -> Vec<(&str, &CodecProfile, f64)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile, profile.bandwidth_per_call_kbps()))
            .collect()
    }
}

impl Default for CodecCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecProfileProvider for CodecCatalog {
    fn profile_for(&self, name: &str) -> Result<&CodecProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| DimensioningError::unsupported_codec(name))
    }

    fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}
