//! Merged history feed: journal updates and AI events in one stream.

use goalbot_core::document::Document;
use goalbot_core::models::{AiEvent, Update};

/// One entry in the merged feed.
#[derive(Debug, Clone)]
pub enum FeedItem {
    Update(Update),
    Ai(AiEvent),
}

impl FeedItem {
    pub fn created_at(&self) -> &str {
        match self {
            FeedItem::Update(u) => &u.created_at,
            FeedItem::Ai(a) => &a.created_at,
        }
    }

    fn goal(&self) -> &str {
        match self {
            FeedItem::Update(u) => &u.goal,
            FeedItem::Ai(a) => a.goal.as_str(),
        }
    }

    /// Text the history search runs over: entry text or answer, the user
    /// input, and the event kind tag.
    fn search_blob(&self) -> String {
        match self {
            FeedItem::Update(u) => u.text.to_lowercase(),
            FeedItem::Ai(a) => {
                format!("{} {} {}", a.answer, a.user_text, a.event_type.as_str()).to_lowercase()
            }
        }
    }
}

/// Build the merged feed, newest first, optionally filtered to one goal
/// (exact match; the all-goals marker counts as a goal here) and to items
/// containing `query` case-insensitively.
pub fn build_feed(doc: &Document, goal: Option<&str>, query: Option<&str>) -> Vec<FeedItem> {
    let mut feed: Vec<FeedItem> = doc
        .updates
        .iter()
        .cloned()
        .map(FeedItem::Update)
        .chain(doc.ai_events.iter().cloned().map(FeedItem::Ai))
        .collect();
    feed.sort_by(|a, b| b.created_at().cmp(a.created_at()));

    if let Some(goal) = goal {
        feed.retain(|item| item.goal() == goal);
    }
    if let Some(query) = query {
        let q = query.trim().to_lowercase();
        if !q.is_empty() {
            feed.retain(|item| item.search_blob().contains(&q));
        }
    }
    feed
}
