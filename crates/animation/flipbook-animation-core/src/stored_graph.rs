//! StoredGraph JSON loader.
//!
//! Loads a state/transition table from a JSON document so shipping content
//! stays out of the binary. States are registered in declaration order
//! (index = position in the array) and transitions in declaration order,
//! which also fixes the planning tie-break.

use serde::Deserialize;

use crate::data::{AnimationSet, AnimationState, FrameFlip, FrameKey, RepeatMode};
use crate::error::GraphError;
use crate::graph::TransitionGraph;
use crate::ids::AnimationIndex;
use crate::sync::SyncBehavior;

/// Parse a StoredGraph-style JSON document into a fully built
/// [`TransitionGraph`].
pub fn parse_stored_graph_json(s: &str) -> Result<TransitionGraph, GraphError> {
    let sg: StoredGraph = serde_json::from_str(s).map_err(|e| GraphError::Parse {
        reason: e.to_string(),
    })?;

    let mut states = Vec::with_capacity(sg.states.len());
    for st in &sg.states {
        states.push(AnimationState {
            name: st.name.clone(),
            frame_count: st.frames,
            repeat: st.repeat,
            keys: st
                .keys
                .iter()
                .map(|k| FrameKey {
                    frame_index: k.frame,
                    duration: k.duration,
                    flip: k.flip,
                })
                .collect(),
        });
    }
    let set = AnimationSet::new(states);
    set.validate_basic()
        .map_err(|reason| GraphError::Parse { reason })?;

    let mut graph = TransitionGraph::new(set);
    for (i, st) in sg.states.iter().enumerate() {
        graph.add_node(&st.name, AnimationIndex(i as u32))?;
    }
    for tr in &sg.transitions {
        graph.add_transition(&tr.from, &tr.to, tr.sync)?;
    }
    Ok(graph)
}

#[derive(Debug, Deserialize)]
struct StoredGraph {
    states: Vec<RawState>,
    #[serde(default)]
    transitions: Vec<RawTransition>,
}

#[derive(Debug, Deserialize)]
struct RawState {
    name: String,
    frames: u32,
    #[serde(default = "default_repeat")]
    repeat: RepeatMode,
    #[serde(default)]
    keys: Vec<RawKey>,
}

fn default_repeat() -> RepeatMode {
    RepeatMode::Once
}

#[derive(Debug, Deserialize)]
struct RawKey {
    frame: u32,
    #[serde(default = "default_key_duration")]
    duration: u32,
    #[serde(default)]
    flip: FrameFlip,
}

fn default_key_duration() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct RawTransition {
    from: String,
    to: String,
    #[serde(default)]
    sync: SyncBehavior,
}
