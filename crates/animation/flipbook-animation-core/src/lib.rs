//! Flipbook animation transition core (engine-agnostic).
//!
//! A directed graph of named animation states connected by gated transitions,
//! a minimum-hop planner that turns "play X" requests into an ordered walk
//! through intermediate states, and a frame-stepping player that consumes the
//! planned walk one frame boundary at a time.
//!
//! Rendering, input and physics live with the host. They only ever read the
//! current `(node, frame)` pair to decide what to draw, feed elapsed time into
//! the player once per tick, and swap in freshly planned walks when gameplay
//! asks for a different state.

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod ids;
pub mod plan;
pub mod player;
pub mod stored_graph;
pub mod sync;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use data::{AnimationSet, AnimationState, FrameFlip, FrameKey, RepeatMode};
pub use error::GraphError;
pub use graph::{Transition, TransitionGraph};
pub use ids::AnimationIndex;
pub use plan::{Plan, SequenceItem};
pub use player::{AnimationPlayer, PlaybackInstance};
pub use stored_graph::parse_stored_graph_json;
pub use sync::{SyncBehavior, SyncKey};
