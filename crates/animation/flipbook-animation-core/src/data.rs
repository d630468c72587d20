//! Static animation state table.
//!
//! Loaded once at startup and read-only afterwards. The table is injected
//! into the graph and player rather than held as a global so both stay
//! independently testable; the renderer's frame rectangles remain external
//! and are addressed through [`FrameKey::frame_index`].

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::ids::AnimationIndex;

/// Repeat policy once a clip reaches its last frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    Once,
    Loop,
}

/// Horizontal mirroring the renderer applies when drawing a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFlip {
    #[default]
    None,
    Horizontal,
}

/// Per-display-frame metadata. `frame_index` addresses the renderer's static
/// frame table (source rectangles live with the renderer, not here).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameKey {
    pub frame_index: u32,
    #[serde(default = "default_key_duration")]
    pub duration: u32,
    #[serde(default)]
    pub flip: FrameFlip,
}

fn default_key_duration() -> u32 {
    1
}

/// One named animation clip. Immutable after load; its index is its position
/// in the owning [`AnimationSet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    pub name: String,
    pub frame_count: u32,
    pub repeat: RepeatMode,
    /// Optional per-frame display metadata; empty when the host keeps its own
    /// frame table.
    #[serde(default)]
    pub keys: Vec<FrameKey>,
}

/// Arena-style state table keyed by [`AnimationIndex`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSet {
    states: Vec<AnimationState>,
}

impl AnimationSet {
    pub fn new(states: Vec<AnimationState>) -> Self {
        Self { states }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: AnimationIndex) -> Option<&AnimationState> {
        self.states.get(index.as_usize())
    }

    pub fn frame_count(&self, index: AnimationIndex) -> Option<u32> {
        self.get(index).map(|s| s.frame_count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationState> {
        self.states.iter()
    }

    /// Validate basic invariants (non-zero frame counts, key tables matching
    /// their frame counts when present).
    pub fn validate_basic(&self) -> Result<(), String> {
        for state in &self.states {
            if state.frame_count == 0 {
                return Err(format!("state '{}' must have at least one frame", state.name));
            }
            if !state.keys.is_empty() && state.keys.len() != state.frame_count as usize {
                return Err(format!(
                    "state '{}' declares {} frames but {} keys",
                    state.name,
                    state.frame_count,
                    state.keys.len()
                ));
            }
        }
        Ok(())
    }
}

/// Direct indexing is reserved for indices that passed registration; an
/// out-of-range index here is corrupted data and panics.
impl Index<AnimationIndex> for AnimationSet {
    type Output = AnimationState;

    fn index(&self, index: AnimationIndex) -> &AnimationState {
        &self.states[index.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, frames: u32) -> AnimationState {
        AnimationState {
            name: name.to_string(),
            frame_count: frames,
            repeat: RepeatMode::Loop,
            keys: Vec::new(),
        }
    }

    #[test]
    fn validate_rejects_zero_frames() {
        let set = AnimationSet::new(vec![state("idle", 0)]);
        assert!(set.validate_basic().is_err());
    }

    #[test]
    fn validate_rejects_key_count_mismatch() {
        let mut bad = state("idle", 2);
        bad.keys = vec![FrameKey {
            frame_index: 0,
            duration: 1,
            flip: FrameFlip::None,
        }];
        let set = AnimationSet::new(vec![bad]);
        assert!(set.validate_basic().is_err());
    }

    #[test]
    fn lookup_by_index() {
        let set = AnimationSet::new(vec![state("idle", 8), state("walk", 8)]);
        assert!(set.validate_basic().is_ok());
        assert_eq!(set.frame_count(AnimationIndex(1)), Some(8));
        assert_eq!(set.get(AnimationIndex(2)), None);
        assert_eq!(set[AnimationIndex(0)].name, "idle");
    }
}
