use serde::{Deserialize, Serialize};

use super::update::Update;

/// Which interaction produced an [`AiEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    DailyFeedback,
    AskAnswer,
    ProgressSummary,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DailyFeedback => "daily_feedback",
            EventKind::AskAnswer => "ask_answer",
            EventKind::ProgressSummary => "progress_summary",
        }
    }
}

/// String an all-goals event carries in the persisted document.
pub const ALL_GOALS_SENTINEL: &str = "ALL_GOALS";

/// The goal an [`AiEvent`] applies to: one named goal, or the whole
/// journal (progress summaries).
///
/// Serialized as a plain string for compatibility with the on-disk
/// document; `AllGoals` maps to [`ALL_GOALS_SENTINEL`] and back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalRef {
    Goal(String),
    AllGoals,
}

impl From<String> for GoalRef {
    fn from(s: String) -> Self {
        if s == ALL_GOALS_SENTINEL {
            GoalRef::AllGoals
        } else {
            GoalRef::Goal(s)
        }
    }
}

impl From<GoalRef> for String {
    fn from(r: GoalRef) -> Self {
        match r {
            GoalRef::Goal(name) => name,
            GoalRef::AllGoals => ALL_GOALS_SENTINEL.to_string(),
        }
    }
}

impl GoalRef {
    /// True when this event belongs to the named goal (exact match).
    pub fn is_goal(&self, name: &str) -> bool {
        matches!(self, GoalRef::Goal(g) if g == name)
    }

    pub fn as_str(&self) -> &str {
        match self {
            GoalRef::Goal(name) => name,
            GoalRef::AllGoals => ALL_GOALS_SENTINEL,
        }
    }
}

/// The `{date, text}` projection of an update, exactly as a prompt
/// rendered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnippet {
    pub date: String,
    pub text: String,
}

impl From<&Update> for ContextSnippet {
    fn from(u: &Update) -> Self {
        Self {
            date: u.date.clone(),
            text: u.text.clone(),
        }
    }
}

/// Append-only audit record of one generation-backend interaction.
///
/// Captures the exact prompt sent, the answer received (possibly a
/// degraded placeholder), and the context the prompt was built from.
/// Never mutated; cascade-deleted with its goal, except events that apply
/// to all goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiEvent {
    pub event_type: EventKind,
    pub goal: GoalRef,
    pub user_text: String,
    pub prompt: String,
    pub answer: String,
    pub context: Vec<ContextSnippet>,
    pub created_at: String,
}
