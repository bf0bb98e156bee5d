use chrono::Utc;
use uuid::Uuid;

use crate::modules::commitments::models::Commitment;

/// Collision-resistant recurrence group id. The format is opaque to callers;
/// millisecond timestamp plus a random suffix keeps concurrent expansions
/// from ever colliding.
pub fn new_group_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("grp_{}_{}", millis, &suffix[..8])
}

/// Result of one recurrence expansion: the sibling drafts sharing a fresh
/// group id. An empty draft list is a valid outcome (every candidate date
/// fell past the year-end cap), not an error.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub group_id: String,
    pub drafts: Vec<Commitment>,
}

impl Expansion {
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn draft_ids(&self) -> Vec<String> {
        self.drafts.iter().map(|d| d.id.clone()).collect()
    }
}

/// What the transition manager did for one periodicity edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Periodicity did not change; nothing to do
    Unchanged,
    /// One-off became a series: siblings created and the anchor stamped with
    /// the group id. `group_id` is `None` when the year-end cap left nothing
    /// to create (the anchor stays ungrouped).
    Expanded {
        group_id: Option<String>,
        created: usize,
    },
    /// Series collapsed back to a one-off: every other member deleted.
    /// `legacy_fallback` flags the ambiguous field-equality lookup used for
    /// records that predate group ids.
    Collapsed {
        deleted: usize,
        legacy_fallback: bool,
    },
}
