//! Core configuration.

use serde::{Deserialize, Serialize};

/// Playback timing configuration consumed by [`crate::AnimationPlayer`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Seconds per discrete animation frame. Tunable at runtime via
    /// `AnimationPlayer::set_frame_duration`.
    pub frame_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_duration: 0.16,
        }
    }
}
