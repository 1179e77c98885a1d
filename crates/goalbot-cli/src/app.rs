//! Application context: the owned document, the store handle, and the
//! generation client threaded through every operation.
//!
//! Mutations persist immediately — every successful change rewrites the
//! whole document through the store. Generation flows log an AiEvent with
//! the exact context the prompt carried, whether the call succeeded or
//! came back degraded.

use eyre::Result;

use goalbot_core::context::{
    choose_context, recent_across_goals, recent_for_goal, GOAL_CONTEXT_LIMIT,
    SUMMARY_CONTEXT_LIMIT,
};
use goalbot_core::document::Document;
use goalbot_core::models::{EventKind, GoalRef, GoalStatus};
use goalbot_core::prompt;
use goalbot_ollama::client::OllamaClient;
use goalbot_store::store::JsonStore;

pub struct App {
    store: JsonStore,
    pub doc: Document,
    llm: OllamaClient,
}

impl App {
    pub fn open(store: JsonStore, llm: OllamaClient) -> Result<Self> {
        let doc = store.load()?;
        Ok(Self { store, doc, llm })
    }

    pub fn add_goal(&mut self, name: &str) -> Result<bool> {
        let added = self.doc.add_goal(name);
        if added {
            self.store.save(&self.doc)?;
        }
        Ok(added)
    }

    pub fn remove_goal(&mut self, name: &str) -> Result<()> {
        self.doc.remove_goal(name);
        self.store.save(&self.doc)?;
        Ok(())
    }

    pub fn set_goal_status(&mut self, name: &str, status: GoalStatus) -> Result<bool> {
        let updated = self.doc.set_goal_status(name, status);
        if updated {
            self.store.save(&self.doc)?;
        }
        Ok(updated)
    }

    pub fn save_update(&mut self, goal: &str, date: &str, text: &str) -> Result<bool> {
        let saved = self.doc.log_update(goal, date, text);
        if saved {
            self.store.save(&self.doc)?;
        }
        Ok(saved)
    }

    /// Save a daily entry and get feedback on it. Returns `None` without
    /// touching the document or the endpoint when the text is blank.
    /// The context window includes the entry just saved.
    pub fn daily_feedback(
        &mut self,
        goal: &str,
        date: &str,
        text: &str,
    ) -> Result<Option<String>> {
        if !self.save_update(goal, date, text)? {
            return Ok(None);
        }
        let context = recent_for_goal(&self.doc.updates, goal, GOAL_CONTEXT_LIMIT);
        let prompt = prompt::build_daily_prompt(goal, date, &context, text.trim());
        let answer = self.llm.generate(&prompt).into_text();
        self.doc.log_ai_event(
            EventKind::DailyFeedback,
            GoalRef::Goal(goal.to_string()),
            text.trim(),
            &prompt,
            &answer,
            &context,
        );
        self.store.save(&self.doc)?;
        Ok(Some(answer))
    }

    /// Answer a free-form question about one goal, grounded in its recent
    /// updates.
    pub fn ask(&mut self, goal: &str, question: &str) -> Result<String> {
        let context = choose_context(&self.doc.updates, goal, GOAL_CONTEXT_LIMIT);
        let prompt = prompt::build_ask_prompt(goal, question, &context);
        let answer = self.llm.generate(&prompt).into_text();
        self.doc.log_ai_event(
            EventKind::AskAnswer,
            GoalRef::Goal(goal.to_string()),
            question,
            &prompt,
            &answer,
            &context,
        );
        self.store.save(&self.doc)?;
        Ok(answer)
    }

    /// Progress report across every goal, logged under the all-goals
    /// marker.
    pub fn progress_summary(&mut self) -> Result<String> {
        let context = recent_across_goals(&self.doc.updates, SUMMARY_CONTEXT_LIMIT);
        let prompt = prompt::build_summary_prompt(&context);
        let answer = self.llm.generate(&prompt).into_text();
        self.doc.log_ai_event(
            EventKind::ProgressSummary,
            GoalRef::AllGoals,
            "",
            &prompt,
            &answer,
            &context,
        );
        self.store.save(&self.doc)?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::path::Path;
    use std::time::Duration;

    use tempfile::tempdir;

    use goalbot_core::models::{EventKind, GoalRef};
    use goalbot_ollama::client::{OllamaClient, OllamaConfig};
    use goalbot_store::store::JsonStore;

    use super::App;

    /// App whose generation endpoint refuses connections, so every
    /// generate comes back as the degraded placeholder.
    fn offline_app(dir: &Path) -> App {
        let store = JsonStore::new(dir.join("goalbot.json"));
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let llm = OllamaClient::new(OllamaConfig {
            url: format!("http://{addr}/api/generate"),
            timeout: Duration::from_millis(300),
            ..OllamaConfig::default()
        });
        App::open(store, llm).unwrap()
    }

    #[test]
    fn ask_logs_event_with_context_even_when_generation_fails() {
        let dir = tempdir().unwrap();
        let mut app = offline_app(dir.path());
        assert!(app
            .save_update("Exercise consistently", "2026-01-01", "ran 5k")
            .unwrap());

        let answer = app.ask("Exercise consistently", "why am I stuck?").unwrap();
        assert!(answer.contains("Ollama error"));

        assert_eq!(app.doc.ai_events.len(), 1);
        let event = &app.doc.ai_events[0];
        assert_eq!(event.event_type, EventKind::AskAnswer);
        assert_eq!(event.goal, GoalRef::Goal("Exercise consistently".to_string()));
        assert_eq!(event.user_text, "why am I stuck?");
        assert_eq!(event.context.len(), 1);
        assert_eq!(event.context[0].text, "ran 5k");
        assert_eq!(event.answer, answer);
    }

    #[test]
    fn daily_feedback_rejects_blank_text_without_generating() {
        let dir = tempdir().unwrap();
        let mut app = offline_app(dir.path());

        let outcome = app
            .daily_feedback("Improve sleep routine", "2026-01-01", "   ")
            .unwrap();
        assert!(outcome.is_none());
        assert!(app.doc.updates.is_empty());
        assert!(app.doc.ai_events.is_empty());
    }

    #[test]
    fn daily_feedback_saves_update_and_logs_event() {
        let dir = tempdir().unwrap();
        let mut app = offline_app(dir.path());

        let outcome = app
            .daily_feedback("Improve sleep routine", "2026-01-01", "in bed by ten")
            .unwrap();
        assert!(outcome.is_some());

        assert_eq!(app.doc.updates.len(), 1);
        assert_eq!(app.doc.ai_events.len(), 1);
        let event = &app.doc.ai_events[0];
        assert_eq!(event.event_type, EventKind::DailyFeedback);
        // today's entry is part of the context window
        assert!(event.context.iter().any(|c| c.text == "in bed by ten"));
    }

    #[test]
    fn progress_summary_logs_under_all_goals() {
        let dir = tempdir().unwrap();
        let mut app = offline_app(dir.path());
        app.save_update("Improve sleep routine", "2026-01-01", "slept well")
            .unwrap();

        app.progress_summary().unwrap();

        let event = &app.doc.ai_events[0];
        assert_eq!(event.event_type, EventKind::ProgressSummary);
        assert_eq!(event.goal, GoalRef::AllGoals);
        assert!(event.user_text.is_empty());
        assert_eq!(event.context.len(), 1);
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut app = offline_app(dir.path());
            assert!(app.add_goal("Read more").unwrap());
            assert!(app.save_update("Read more", "2026-01-01", "two chapters").unwrap());
        }

        let doc = JsonStore::new(dir.path().join("goalbot.json")).load().unwrap();
        assert!(doc.goals.iter().any(|g| g.name == "Read more"));
        assert_eq!(doc.updates.len(), 1);
    }
}
