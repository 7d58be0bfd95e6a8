//! Audio analysis stand-in.
//!
//! No speech or emotion model sits behind this: every call waits `SIMULATED_DELAY`
//! and returns the same canned strings, whatever audio was sent. The delay is kept
//! so existing clients see the latency they were built against.

use std::time::Duration;

use tracing::warn;

pub const SIMULATED_DELAY: Duration = Duration::from_millis(2500);

pub const SIMULATED_TRANSCRIPTION: &str =
    "This is a simulated transcription. Audio processing is not implemented yet.";

pub const SIMULATED_EMOTION: &str = "Neutral (simulated)";

#[derive(Debug, Clone, PartialEq)]
pub struct AudioAnalysis {
    pub transcription: &'static str,
    pub emotion: &'static str,
}

pub async fn simulate_analysis(audio_data: Option<&str>) -> AudioAnalysis {
    if audio_data.map_or(true, str::is_empty) {
        warn!("Audio analysis called without audio data; returning simulated result");
    }

    tokio::time::sleep(SIMULATED_DELAY).await;

    AudioAnalysis {
        transcription: SIMULATED_TRANSCRIPTION,
        emotion: SIMULATED_EMOTION,
    }
}
