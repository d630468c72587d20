//! Identifiers for core entities.

use serde::{Deserialize, Serialize};

/// Dense index into the animation state table.
///
/// Indices are assigned at registration time and double as the arena slot for
/// per-node transition lists, so they stay small and contiguous. All
/// operations after name registration speak indices only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimationIndex(pub u32);

impl AnimationIndex {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for AnimationIndex {
    fn from(raw: u32) -> Self {
        AnimationIndex(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let idx = AnimationIndex::from(7);
        assert_eq!(idx, AnimationIndex(7));
        assert_eq!(idx.as_usize(), 7);
    }
}
