//! Selection of the journal updates that ground a generated response.

use crate::models::Update;

/// How many prior updates feed a daily-feedback or ask prompt.
pub const GOAL_CONTEXT_LIMIT: usize = 6;

/// How many updates across all goals feed a progress summary.
pub const SUMMARY_CONTEXT_LIMIT: usize = 30;

/// The `n` most recent updates for one goal (exact name match), newest
/// first.
///
/// Date is the primary key and `created_at` breaks ties between entries on
/// the same date, so a same-day entry logged later outranks one logged
/// earlier. Both keys compare as strings; `YYYY-MM-DD` dates sort
/// chronologically that way.
pub fn recent_for_goal(updates: &[Update], goal: &str, n: usize) -> Vec<Update> {
    let mut items: Vec<Update> = updates.iter().filter(|u| u.goal == goal).cloned().collect();
    items.sort_by(|a, b| {
        (b.date.as_str(), b.created_at.as_str()).cmp(&(a.date.as_str(), a.created_at.as_str()))
    });
    items.truncate(n);
    items
}

/// Context selection for prompt assembly: same ordering as
/// [`recent_for_goal`]. Never returns more than `n` items, never an item
/// for a different goal.
pub fn choose_context(updates: &[Update], goal: &str, n: usize) -> Vec<Update> {
    recent_for_goal(updates, goal, n)
}

/// The `n` most recently logged updates across every goal, ordered purely
/// by `created_at` descending (not by entry date).
pub fn recent_across_goals(updates: &[Update], n: usize) -> Vec<Update> {
    let mut items: Vec<Update> = updates.to_vec();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(n);
    items
}
