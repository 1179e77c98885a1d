//! The persisted aggregate and its in-memory operations.
//!
//! Operations mutate the owned [`Document`] only; persisting the result is
//! the caller's job. Expected conditions (duplicate goal, blank text,
//! unknown goal) come back as `bool` returns or silent no-ops, never as
//! errors.

use serde::{Deserialize, Serialize};

use crate::models::{AiEvent, EventKind, Goal, GoalRef, GoalStatus, Update};
use crate::time::now_ts;

/// The entire persisted state: goals, journal updates, and the AI audit
/// log.
///
/// All three collections default to empty so a document missing a key
/// (older versions, hand edits) still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub updates: Vec<Update>,
    #[serde(default)]
    pub ai_events: Vec<AiEvent>,
}

impl Document {
    /// Add a goal with `Active` status. Returns `false` (document
    /// untouched) when the trimmed name is empty or already exists under
    /// any casing.
    pub fn add_goal(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let lowered = name.to_lowercase();
        if self.goals.iter().any(|g| g.name.to_lowercase() == lowered) {
            return false;
        }
        self.goals.push(Goal {
            name: name.to_string(),
            status: GoalStatus::Active,
        });
        true
    }

    /// Remove the goal and cascade: drop every update and every event
    /// tagged to it by exact name. Events that apply to all goals are
    /// exempt. Cascade matching is exact-case even though creation dedupes
    /// case-insensitively.
    pub fn remove_goal(&mut self, name: &str) {
        self.goals.retain(|g| g.name != name);
        self.updates.retain(|u| u.goal != name);
        self.ai_events.retain(|a| !a.goal.is_goal(name));
    }

    /// Set the status of the first goal whose name matches exactly.
    /// Returns `false` (silently, no error) when no goal matches.
    pub fn set_goal_status(&mut self, name: &str, status: GoalStatus) -> bool {
        match self.goals.iter_mut().find(|g| g.name == name) {
            Some(goal) => {
                goal.status = status;
                true
            }
            None => false,
        }
    }

    /// Names of active goals, in insertion order.
    pub fn active_goals(&self) -> Vec<String> {
        self.goals_with_status(GoalStatus::Active)
    }

    /// Names of inactive goals, in insertion order.
    pub fn inactive_goals(&self) -> Vec<String> {
        self.goals_with_status(GoalStatus::Inactive)
    }

    fn goals_with_status(&self, status: GoalStatus) -> Vec<String> {
        self.goals
            .iter()
            .filter(|g| g.status == status)
            .map(|g| g.name.clone())
            .collect()
    }

    pub fn has_goal(&self, name: &str) -> bool {
        self.goals.iter().any(|g| g.name == name)
    }

    /// Append a journal update stamped with the current time. Returns
    /// `false` (nothing appended) when the trimmed text is empty.
    pub fn log_update(&mut self, goal: &str, date: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.updates.push(Update {
            goal: goal.to_string(),
            date: date.to_string(),
            text: text.to_string(),
            created_at: now_ts(),
        });
        true
    }

    /// Append an audit record of one generation interaction. `context` is
    /// projected down to the `{date, text}` snapshots the prompt carried.
    pub fn log_ai_event(
        &mut self,
        event_type: EventKind,
        goal: GoalRef,
        user_text: &str,
        prompt: &str,
        answer: &str,
        context: &[Update],
    ) {
        self.ai_events.push(AiEvent {
            event_type,
            goal,
            user_text: user_text.to_string(),
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            context: context.iter().map(Into::into).collect(),
            created_at: now_ts(),
        });
    }
}
