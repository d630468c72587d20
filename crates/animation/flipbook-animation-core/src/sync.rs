//! Transition gating: authored sync behavior and its resolved key form.

use serde::{Deserialize, Serialize};

/// How a transition is allowed to fire, as authored at graph-build time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SyncBehavior {
    /// Eligible only when playback is exactly at this frame of the source
    /// state.
    OnFrame { frame: u32 },
    /// Eligible on the last frame of the source state; resolved to a concrete
    /// frame number at registration time.
    LastFrame,
    /// Eligible on the very next frame boundary regardless of current frame.
    Immediate,
}

impl Default for SyncBehavior {
    fn default() -> Self {
        SyncBehavior::Immediate
    }
}

/// Resolved gate compared on the tick hot path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncKey {
    Immediate,
    Frame(u32),
}

impl SyncBehavior {
    /// Collapse to the key form. `LastFrame` needs the source state's frame
    /// count; this runs once per registered transition, never per tick.
    pub fn resolve(self, source_frame_count: u32) -> SyncKey {
        match self {
            SyncBehavior::OnFrame { frame } => SyncKey::Frame(frame),
            SyncBehavior::LastFrame => SyncKey::Frame(source_frame_count.saturating_sub(1)),
            SyncBehavior::Immediate => SyncKey::Immediate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_last_frame_uses_source_frame_count() {
        assert_eq!(SyncBehavior::LastFrame.resolve(8), SyncKey::Frame(7));
        assert_eq!(SyncBehavior::LastFrame.resolve(1), SyncKey::Frame(0));
    }

    #[test]
    fn resolve_keeps_explicit_frame_and_immediate() {
        assert_eq!(SyncBehavior::OnFrame { frame: 3 }.resolve(8), SyncKey::Frame(3));
        assert_eq!(SyncBehavior::Immediate.resolve(8), SyncKey::Immediate);
    }

    #[test]
    fn authored_form_parses_from_tagged_json() {
        let on_frame: SyncBehavior = serde_json::from_str(r#"{"type":"onFrame","frame":2}"#).unwrap();
        assert_eq!(on_frame, SyncBehavior::OnFrame { frame: 2 });
        let last: SyncBehavior = serde_json::from_str(r#"{"type":"lastFrame"}"#).unwrap();
        assert_eq!(last, SyncBehavior::LastFrame);
    }
}
