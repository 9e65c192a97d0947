//! Constants shared across the e2e suite.

pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// GTSRB class index of the stop sign.
pub const STOP_CLASS_INDEX: usize = 12;
pub const STOP_LABEL: &str = "Stop";

/// Confidence the fake scorer assigns to the stop class.
pub const STOP_CONFIDENCE: f32 = 0.94;

/// Bytes the fake speech engine emits in place of real MP3 audio.
pub const FAKE_MP3_BYTES: &[u8] = b"ID3\x04\x00fake advisory audio";
