//! Frame-stepping playback driver.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{AnimationSet, RepeatMode};
use crate::ids::AnimationIndex;
use crate::plan::Plan;
use crate::sync::SyncKey;

/// The minimal per-character mutable state: the active node and the current
/// frame within it. Created at spawn, stepped once per tick, destroyed with
/// the character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackInstance {
    pub node: AnimationIndex,
    pub frame: u32,
}

impl PlaybackInstance {
    pub fn new(node: AnimationIndex) -> Self {
        Self { node, frame: 0 }
    }
}

/// Fixed-duration frame ticker plus plan-consuming state advance.
///
/// `forward_time` latches at most one boundary crossing per call: a delta
/// spanning several frame durations still advances playback by a single frame
/// on the following `forward_animation`. Known limitation, kept for
/// determinism under stalls rather than corrected.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    local_time: f32,
    frame_duration: f32,
    crossed_boundary: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AnimationPlayer {
    pub fn new(cfg: Config) -> Self {
        Self {
            local_time: 0.0,
            frame_duration: sanitize_duration(cfg.frame_duration),
            crossed_boundary: false,
        }
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Change the seconds-per-frame pacing at runtime. Non-positive or
    /// non-finite values fall back to the default.
    pub fn set_frame_duration(&mut self, seconds: f32) {
        self.frame_duration = sanitize_duration(seconds);
    }

    /// Whether the last `forward_time` call crossed a frame boundary.
    pub fn crossed_boundary(&self) -> bool {
        self.crossed_boundary
    }

    /// Accumulate elapsed time and latch whether a frame boundary was
    /// crossed. The remainder is carried via float modulo instead of a hard
    /// reset so no time is lost under variable tick rates.
    pub fn forward_time(&mut self, delta_seconds: f32) {
        self.crossed_boundary = false;
        self.local_time += delta_seconds;
        if self.local_time > self.frame_duration {
            self.crossed_boundary = true;
            self.local_time %= self.frame_duration;
        }
    }

    /// Advance the instance by at most one frame, consuming the plan head
    /// when its gate matches.
    ///
    /// On a crossed boundary the current frame advances per the state's
    /// repeat policy (`Loop` wraps, `Once` clamps at the last frame). Then,
    /// if the plan head's sync key is `Immediate` or equals the newly
    /// advanced frame, playback jumps to the head's node at frame 0 and the
    /// head is popped — one hop per matching boundary. Without a crossing the
    /// instance and plan are returned untouched.
    ///
    /// The plan head is expected to be one hop from the instance's current
    /// node (plans are built that way and replaced whole on replanning); an
    /// instance node outside `states` is a programming error and panics.
    pub fn forward_animation(
        &self,
        instance: PlaybackInstance,
        plan: &mut Plan,
        states: &AnimationSet,
    ) -> PlaybackInstance {
        if !self.crossed_boundary {
            return instance;
        }

        let state = &states[instance.node];
        let mut next = instance;
        next.frame = match state.repeat {
            RepeatMode::Loop => (instance.frame + 1) % state.frame_count,
            RepeatMode::Once => (instance.frame + 1).min(state.frame_count - 1),
        };

        if let Some(head) = plan.front() {
            let gate_open = match head.sync {
                SyncKey::Immediate => true,
                SyncKey::Frame(frame) => frame == next.frame,
            };
            if gate_open {
                plan.pop_front();
                next.node = head.node;
                next.frame = 0;
            }
        }

        next
    }
}

fn sanitize_duration(seconds: f32) -> f32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        Config::default().frame_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_requires_more_than_one_frame_duration() {
        let mut player = AnimationPlayer::new(Config {
            frame_duration: 0.16,
        });
        player.forward_time(0.16);
        assert!(!player.crossed_boundary());
        player.forward_time(0.01);
        assert!(player.crossed_boundary());
    }

    #[test]
    fn remainder_carries_across_calls() {
        let mut player = AnimationPlayer::default();
        player.forward_time(0.20);
        assert!(player.crossed_boundary());
        // ~0.04s carried over; another 0.13s tips the next boundary even
        // though 0.13 < 0.16 on its own.
        player.forward_time(0.13);
        assert!(player.crossed_boundary());
    }

    #[test]
    fn bad_frame_duration_falls_back_to_default() {
        let mut player = AnimationPlayer::default();
        player.set_frame_duration(0.0);
        assert!(player.frame_duration() > 0.0);
        player.set_frame_duration(f32::NAN);
        assert!(player.frame_duration() > 0.0);
    }
}
