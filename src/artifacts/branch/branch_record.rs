use crate::artifacts::branch::track_state::TrackState;
use crate::errors::GasError;

/// Separates the fields of one branch record. Refnames and relative dates can
/// never contain it; subjects are split off last so they are safe regardless.
pub const FIELD_DELIMITER: char = '\0';

/// [`FIELD_DELIMITER`] as a `%xx` escape understood by `git --format`.
pub const FIELD_DELIMITER_ESCAPE: &str = "%00";

/// Per-branch fields requested from `git branch --format`, in record order.
pub const LISTING_FORMAT: [&str; FIELD_COUNT] = [
    "%(HEAD)",
    "%(refname:short)",
    "%(upstream:trackshort)",
    "%(upstream:short)",
    "%(authordate:relative)",
    "%(contents:subject)",
];

const FIELD_COUNT: usize = 6;
const CURRENT_MARKER: &str = "*";

/// One decoded line of the branch listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub is_current: bool,
    pub name: String,
    pub track_state: TrackState,
    pub upstream: String,
    pub author_date: String,
    pub subject: String,
}

impl BranchRecord {
    pub fn decode(line: &str) -> Result<Self, GasError> {
        let fields = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect::<Vec<_>>();

        let [marker, name, track, upstream, author_date, subject] = fields[..] else {
            return Err(GasError::MalformedRecord {
                record: line.to_string(),
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let is_current = match marker.trim() {
            CURRENT_MARKER => true,
            "" => false,
            other => {
                return Err(GasError::MalformedMarker {
                    record: line.to_string(),
                    marker: other.to_string(),
                });
            }
        };

        Ok(BranchRecord {
            is_current,
            name: name.to_string(),
            track_state: TrackState::from(track),
            upstream: upstream.to_string(),
            author_date: author_date.to_string(),
            subject: subject.to_string(),
        })
    }

    /// Decodes every non-blank line of a listing, failing on the first
    /// malformed one.
    pub fn decode_listing(listing: &str) -> Result<Vec<Self>, GasError> {
        listing
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::decode)
            .collect()
    }
}
