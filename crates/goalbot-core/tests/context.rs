use goalbot_core::context::{choose_context, recent_across_goals, recent_for_goal};
use goalbot_core::models::Update;

fn update(goal: &str, date: &str, text: &str, created_at: &str) -> Update {
    Update {
        goal: goal.to_string(),
        date: date.to_string(),
        text: text.to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn same_date_ties_break_on_created_at() {
    let updates = vec![
        update("Exercise", "2026-01-01", "morning run", "2026-01-01T10:00:00"),
        update("Exercise", "2026-01-01", "evening stretch", "2026-01-01T10:05:00"),
    ];
    let recent = recent_for_goal(&updates, "Exercise", 1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].text, "evening stretch");
}

#[test]
fn date_outranks_created_at() {
    // a backfilled entry for a later date beats an earlier date logged later
    let updates = vec![
        update("Exercise", "2026-01-02", "backfilled entry", "2026-01-01T08:00:00"),
        update("Exercise", "2026-01-01", "logged afterwards", "2026-01-03T09:00:00"),
    ];
    let recent = recent_for_goal(&updates, "Exercise", 2);
    assert_eq!(recent[0].date, "2026-01-02");
    assert_eq!(recent[1].date, "2026-01-01");
}

#[test]
fn never_more_than_n_and_never_another_goal() {
    let mut updates = Vec::new();
    for day in 1..=9 {
        updates.push(update(
            "Exercise",
            &format!("2026-01-0{day}"),
            "run",
            &format!("2026-01-0{day}T08:00:00"),
        ));
    }
    updates.push(update("Sleep", "2026-01-05", "nap", "2026-01-05T14:00:00"));

    let ctx = choose_context(&updates, "Exercise", 6);
    assert_eq!(ctx.len(), 6);
    assert!(ctx.iter().all(|u| u.goal == "Exercise"));
    assert_eq!(ctx[0].date, "2026-01-09");
}

#[test]
fn unknown_goal_yields_empty_context() {
    let updates = vec![update("Exercise", "2026-01-01", "run", "2026-01-01T08:00:00")];
    assert!(choose_context(&updates, "Piano", 6).is_empty());
}

#[test]
fn across_goals_orders_by_created_at_only() {
    let updates = vec![
        update("Sleep", "2026-01-05", "later date, older stamp", "2026-01-01T08:00:00"),
        update("Exercise", "2026-01-01", "earlier date, newer stamp", "2026-01-06T08:00:00"),
    ];
    let recent = recent_across_goals(&updates, 30);
    assert_eq!(recent[0].text, "earlier date, newer stamp");
}

#[test]
fn across_goals_caps_at_n() {
    let updates: Vec<Update> = (0..40)
        .map(|i| update("G", "2026-01-01", "x", &format!("2026-01-01T00:00:{i:02}")))
        .collect();
    assert_eq!(recent_across_goals(&updates, 30).len(), 30);
}
