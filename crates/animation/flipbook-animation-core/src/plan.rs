//! Planned walk through the transition graph.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::ids::AnimationIndex;
use crate::sync::SyncKey;

/// One hop of a plan: the node to enter next, paired with the sync key of the
/// transition entering it. The key is evaluated against the frame of the node
/// being left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceItem {
    pub node: AnimationIndex,
    pub sync: SyncKey,
}

/// Ordered hops from a start state to a target state, excluding the start
/// node itself.
///
/// The player pops items from the front as frame boundaries match, so an
/// in-flight plan is shared mutable state across ticks, not copied per call.
/// The only way to change direction mid-walk is to plan again and replace the
/// stored plan outright; unconsumed hops are simply discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    items: VecDeque<SequenceItem>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SequenceItem>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<SequenceItem> {
        self.items.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<SequenceItem> {
        self.items.pop_front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceItem> {
        self.items.iter()
    }
}

impl FromIterator<SequenceItem> for Plan {
    fn from_iter<I: IntoIterator<Item = SequenceItem>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
