//! Loading events - native-to-application event shapes
//!
//! The native side emits two distinct event kinds while a product loads.
//! Both are folded into one [`LoadingStatus`] shape for the host application.

use serde::{Deserialize, Serialize};

/// Unified loading state handed to the host's loader callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingStatus {
    /// Whether a loading indicator should be visible
    pub show: bool,
    /// Percentage in 0..=100
    pub progress: u8,
}

impl LoadingStatus {
    pub fn in_progress(progress: u8) -> Self {
        Self {
            show: true,
            progress: progress.min(100),
        }
    }

    /// Loading is over; the native payload is never consulted.
    pub fn complete() -> Self {
        Self {
            show: false,
            progress: 100,
        }
    }
}

/// Payload of the "loading progress" event.
///
/// Native bridges send `progress` as whatever number type their platform
/// uses: integers, floats, or unsigned values past `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressPayload {
    pub progress: serde_json::Number,
}

/// Reasons a progress payload could not be used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("progress payload is malformed: {0}")]
    Malformed(String),
    #[error("progress is not a finite number: {0}")]
    NotFinite(serde_json::Number),
}

/// Result of decoding a progress payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedProgress {
    pub status: LoadingStatus,
    /// The number as the native side sent it
    pub raw: serde_json::Number,
    /// The raw value had to be rounded or clamped into 0..=100
    pub adjusted: bool,
}

impl ProgressPayload {
    pub fn decode(payload: &serde_json::Value) -> Result<DecodedProgress, PayloadError> {
        let parsed = ProgressPayload::deserialize(payload)
            .map_err(|e| PayloadError::Malformed(e.to_string()))?;
        let raw = parsed.progress;

        let (progress, adjusted) = if let Some(value) = raw.as_i64() {
            let clamped = value.clamp(0, 100);
            (clamped, clamped != value)
        } else if raw.as_u64().is_some() {
            // Only integers above i64::MAX get here
            (100, true)
        } else {
            let value = raw
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PayloadError::NotFinite(raw.clone()))?;
            let clamped = value.round().clamp(0.0, 100.0);
            (clamped as i64, clamped != value)
        };

        Ok(DecodedProgress {
            // Clamped to 0..=100 above, so the cast cannot truncate
            status: LoadingStatus::in_progress(progress as u8),
            raw,
            adjusted,
        })
    }
}
