/// Relationship between a branch tip and its upstream, as reported by
/// `%(upstream:trackshort)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackState {
    #[default]
    InSync,
    Ahead,
    Behind,
    Diverged,
}

impl TrackState {
    pub fn is_ahead(&self) -> bool {
        matches!(self, TrackState::Ahead | TrackState::Diverged)
    }

    pub fn is_behind(&self) -> bool {
        matches!(self, TrackState::Behind | TrackState::Diverged)
    }
}

impl From<&str> for TrackState {
    // `=` (in sync) and an empty indicator (no upstream) both mean neither
    fn from(indicator: &str) -> Self {
        match indicator {
            ">" => TrackState::Ahead,
            "<" => TrackState::Behind,
            "<>" => TrackState::Diverged,
            _ => TrackState::InSync,
        }
    }
}
