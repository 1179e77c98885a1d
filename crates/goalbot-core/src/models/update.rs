use serde::{Deserialize, Serialize};

/// A dated free-text journal entry attached to one goal.
///
/// Immutable once created: updates are only appended, or dropped wholesale
/// when their goal is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub goal: String,
    /// Calendar date the entry is for, `YYYY-MM-DD`.
    pub date: String,
    pub text: String,
    /// Insertion timestamp at second precision; breaks ordering ties
    /// between entries logged on the same date.
    pub created_at: String,
}
