pub mod event;
pub mod goal;
pub mod update;

pub use event::{AiEvent, ContextSnippet, EventKind, GoalRef, ALL_GOALS_SENTINEL};
pub use goal::{Goal, GoalStatus};
pub use update::Update;
