use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{bail, Result};

mod app;
mod date;
mod history;

use goalbot_core::models::GoalStatus;
use goalbot_ollama::client::{OllamaClient, OllamaConfig, DEFAULT_MODEL, DEFAULT_URL};
use goalbot_store::store::JsonStore;

use app::App;
use history::FeedItem;

#[derive(Parser)]
#[command(
    name = "goalbot",
    about = "Goal journaling with supportive feedback from a local Ollama model"
)]
struct Cli {
    /// Path to the JSON document (default: the per-user data directory).
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Generation endpoint URL.
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,

    /// Model tag to generate with.
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List goals with their status.
    Goals,
    /// Add a new goal.
    Add { name: String },
    /// Remove a goal and everything logged against it.
    Remove { name: String },
    /// Set a goal active or inactive.
    Status { name: String, status: StatusArg },
    /// Log a daily update and get feedback on it.
    Log {
        goal: String,
        text: String,
        /// Entry date, YYYY-MM-DD (default: today).
        #[arg(long)]
        date: Option<String>,
    },
    /// Ask a question grounded in your saved updates for one goal.
    Ask { goal: String, question: String },
    /// Progress summary across all goals.
    Summary,
    /// Show saved updates and AI responses, newest first.
    History {
        /// Only items for this goal.
        #[arg(long)]
        goal: Option<String>,
        /// Only items containing this text.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Inactive,
}

impl From<StatusArg> for GoalStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => GoalStatus::Active,
            StatusArg::Inactive => GoalStatus::Inactive,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let data_file = match cli.data_file {
        Some(path) => path,
        None => default_data_file()?,
    };
    let store = JsonStore::new(data_file);
    tracing::debug!(path = %store.path().display(), "using data file");
    let llm = OllamaClient::new(OllamaConfig {
        url: cli.url,
        model: cli.model,
        ..OllamaConfig::default()
    });
    let mut app = App::open(store, llm)?;

    match cli.command {
        Command::Goals => {
            let active = app.doc.active_goals();
            let inactive = app.doc.inactive_goals();
            if active.is_empty() && inactive.is_empty() {
                println!("No goals yet. Add one with `goalbot add <name>`.");
            }
            for name in active {
                println!("active    {name}");
            }
            for name in inactive {
                println!("inactive  {name}");
            }
        }
        Command::Add { name } => {
            if app.add_goal(&name)? {
                println!("Added \"{}\".", name.trim());
            } else {
                bail!("enter a new goal name (it may already exist)");
            }
        }
        Command::Remove { name } => {
            app.remove_goal(&name)?;
            println!("Removed \"{name}\" and everything logged against it.");
        }
        Command::Status { name, status } => {
            if app.set_goal_status(&name, status.into())? {
                println!("Updated \"{name}\".");
            }
        }
        Command::Log { goal, text, date } => {
            require_goal(&app, &goal)?;
            let date = match date {
                Some(d) => date::normalize_date(&d)?,
                None => today(),
            };
            match app.daily_feedback(&goal, &date, &text)? {
                Some(answer) => println!("Saved.\n\n{answer}"),
                None => bail!("write an update first"),
            }
        }
        Command::Ask { goal, question } => {
            require_goal(&app, &goal)?;
            if question.trim().is_empty() {
                bail!("type a question first");
            }
            println!("{}", app.ask(&goal, question.trim())?);
        }
        Command::Summary => {
            println!("{}", app.progress_summary()?);
        }
        Command::History { goal, search } => {
            let feed = history::build_feed(&app.doc, goal.as_deref(), search.as_deref());
            println!("{} item(s).", feed.len());
            for item in feed {
                match item {
                    FeedItem::Update(u) => {
                        println!("\n[update] {} — {}", u.date, u.goal);
                        println!("{}", u.text);
                    }
                    FeedItem::Ai(a) => {
                        println!("\n[ai:{}] {}", a.event_type.as_str(), a.goal.as_str());
                        if !a.user_text.is_empty() {
                            println!("> {}", a.user_text);
                        }
                        println!("{}", a.answer);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Updates and questions must reference an existing goal; the document
/// itself does not police references.
fn require_goal(app: &App, goal: &str) -> Result<()> {
    if !app.doc.has_goal(goal) {
        bail!("no goal named \"{goal}\" — run `goalbot goals` to see what exists");
    }
    Ok(())
}

fn default_data_file() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("goalbot").join("goalbot.json"))
}

fn today() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}
