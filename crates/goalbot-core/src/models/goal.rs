use serde::{Deserialize, Serialize};

/// A named objective the user journals against.
///
/// Identity is the name itself — goals are deduplicated case-insensitively
/// at creation and carry no surrogate id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub status: GoalStatus,
}

/// Lifecycle status of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Inactive,
}
