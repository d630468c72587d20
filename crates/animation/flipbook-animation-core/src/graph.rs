//! Transition graph: named states, gated edges, and minimum-hop planning.

use std::collections::VecDeque;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::AnimationSet;
use crate::error::GraphError;
use crate::ids::AnimationIndex;
use crate::plan::{Plan, SequenceItem};
use crate::player::PlaybackInstance;
use crate::sync::{SyncBehavior, SyncKey};

/// A directed, gated edge. The sync key was resolved from its authored
/// [`SyncBehavior`] at registration time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub to: AnimationIndex,
    pub sync: SyncKey,
}

/// Registry of named animation states plus their outgoing transitions.
///
/// Built once at load time and read-only afterwards, so a single graph can be
/// shared across any number of characters without synchronization. Parallel
/// edges between the same ordered pair are allowed; the first one registered
/// wins during planning.
#[derive(Clone, Debug, Default)]
pub struct TransitionGraph {
    states: AnimationSet,
    names: HashMap<String, AnimationIndex>,
    /// Outgoing transitions per node, in registration order.
    transitions: Vec<Vec<Transition>>,
}

impl TransitionGraph {
    pub fn new(states: AnimationSet) -> Self {
        let transitions = vec![Vec::new(); states.len()];
        Self {
            states,
            names: HashMap::new(),
            transitions,
        }
    }

    /// The injected read-only state table.
    pub fn states(&self) -> &AnimationSet {
        &self.states
    }

    /// Register a name for a state-table slot. Registering a name twice is a
    /// static data bug and fails.
    pub fn add_node(&mut self, name: &str, index: AnimationIndex) -> Result<(), GraphError> {
        if index.as_usize() >= self.states.len() {
            return Err(GraphError::IndexOutOfRange {
                index: index.0,
                len: self.states.len(),
            });
        }
        match self.names.entry(name.to_string()) {
            hashbrown::hash_map::Entry::Occupied(_) => Err(GraphError::DuplicateNode {
                name: name.to_string(),
            }),
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(index);
                Ok(())
            }
        }
    }

    /// Append a directed edge to the source node's outgoing list. `LastFrame`
    /// sync is resolved against the source state's frame count here, so the
    /// tick hot path only ever compares resolved keys.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        sync: SyncBehavior,
    ) -> Result<(), GraphError> {
        let from = self.node_index(from)?;
        let to = self.node_index(to)?;
        let key = sync.resolve(self.states[from].frame_count);
        self.transitions[from.as_usize()].push(Transition { to, sync: key });
        Ok(())
    }

    /// Resolve a registered name to its index.
    pub fn node_index(&self, name: &str) -> Result<AnimationIndex, GraphError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode {
                name: name.to_string(),
            })
    }

    /// Outgoing transitions of a node, in registration order.
    pub fn transitions_from(&self, node: AnimationIndex) -> &[Transition] {
        self.transitions
            .get(node.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn node_name(&self, index: AnimationIndex) -> String {
        self.names
            .iter()
            .find(|(_, i)| **i == index)
            .map(|(n, _)| n.clone())
            .unwrap_or_else(|| format!("#{}", index.0))
    }

    /// Minimum-hop plan from the instance's current state to `target`.
    ///
    /// Every edge counts as one hop; between equal-length paths the tie-break
    /// is search order, which follows registration order. The returned plan
    /// excludes the start node. A self-target yields the single item
    /// `{ target, Immediate }`; an unreachable target is a typed failure, not
    /// an empty plan.
    pub fn find_sequence(
        &self,
        instance: &PlaybackInstance,
        target: &str,
    ) -> Result<Plan, GraphError> {
        let target_index = self.node_index(target)?;
        let start = instance.node;
        let nodes = self.transitions.len();
        if start.as_usize() >= nodes {
            return Err(GraphError::IndexOutOfRange {
                index: start.0,
                len: nodes,
            });
        }
        if target_index == start {
            return Ok(Plan::from_items([SequenceItem {
                node: target_index,
                sync: SyncKey::Immediate,
            }]));
        }

        // Breadth-first search over unit-weight edges. Each node records the
        // predecessor and the edge that first discovered it, so backtracking
        // needs no rescan of the transition table.
        let mut entered: Vec<Option<(AnimationIndex, SyncKey)>> = vec![None; nodes];
        let mut seen = vec![false; nodes];
        let mut queue = VecDeque::new();
        seen[start.as_usize()] = true;
        queue.push_back(start);

        'search: while let Some(node) = queue.pop_front() {
            for transition in &self.transitions[node.as_usize()] {
                let slot = transition.to.as_usize();
                if seen[slot] {
                    continue;
                }
                seen[slot] = true;
                entered[slot] = Some((node, transition.sync));
                if transition.to == target_index {
                    break 'search;
                }
                queue.push_back(transition.to);
            }
        }

        if !seen[target_index.as_usize()] {
            return Err(GraphError::Unreachable {
                from: self.node_name(start),
                to: target.to_string(),
            });
        }

        let mut hops = Vec::new();
        let mut current = target_index;
        while let Some((previous, sync)) = entered[current.as_usize()] {
            hops.push(SequenceItem {
                node: current,
                sync,
            });
            current = previous;
        }
        hops.reverse();
        Ok(Plan::from_items(hops))
    }
}
