//! Error types for graph construction and planning.
//!
//! Configuration errors (duplicate or unknown names, out-of-range indices)
//! surface at load time; the per-tick player functions never fail.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GraphError {
    /// A node name was registered twice.
    #[error("node already registered: {name}")]
    DuplicateNode { name: String },

    /// A transition or query referenced a name that was never registered.
    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    /// A registered index does not address the state table.
    #[error("animation index {index} out of range (state table holds {len})")]
    IndexOutOfRange { index: u32, len: usize },

    /// No transition path exists between the two states.
    #[error("no transition path from '{from}' to '{to}'")]
    Unreachable { from: String, to: String },

    /// Stored graph document failed to parse or validate.
    #[error("stored graph error: {reason}")]
    Parse { reason: String },
}
