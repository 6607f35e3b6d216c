//! Daily Wordle - CLI
//!
//! One shared word per calendar day, played in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{run_simple, run_status},
    config::Config,
    core::ScoringRule,
    game::{GameContext, GameStore, Notice, Session},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    storage::{FileStorage, MemoryStorage, Storage},
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the saved game (overrides config)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Dictionary file: JSON array or one word per line
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Candidate word file: JSON array or one word per line
    #[arg(long, global = true)]
    candidates: Option<PathBuf>,

    /// Play as if today were this date (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Feedback rule: naive (default) or standard
    #[arg(short, long, global = true)]
    scoring: Option<ScoringRule>,

    /// Random word, kept in memory only
    #[arg(short, long, global = true)]
    practice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show today's saved game without changing it
    Status,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(dir) = &self.state_dir {
            config.state_dir.clone_from(dir);
        }
        if let Some(path) = &self.dictionary {
            config.dictionary = Some(path.clone());
        }
        if let Some(path) = &self.candidates {
            config.candidates = Some(path.clone());
        }
        if let Some(rule) = self.scoring {
            config.scoring = rule;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let log_target = match command {
        Commands::Play => LogTarget::File(&config.log_file),
        Commands::Simple | Commands::Status => LogTarget::Stderr,
    };
    let installed = logging::init(&config.log_filter, log_target)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    if !installed {
        eprintln!("logging was already initialised; keeping the existing subscriber");
    }

    let today = cli.date.unwrap_or_else(|| Utc::now().date_naive());
    info!(%today, scoring = %config.scoring, practice = cli.practice, "starting");

    match command {
        Commands::Status => {
            let store = GameStore::new(FileStorage::new(&config.state_dir));
            run_status(&store, today)?;
            Ok(())
        }
        Commands::Play | Commands::Simple => {
            let tui = matches!(command, Commands::Play);
            if cli.practice {
                let context = config.build_context(MemoryStorage::new())?;
                run_practice(context, today, tui)
            } else {
                let context = config.build_context(FileStorage::new(&config.state_dir))?;
                run_daily(context, today, tui)
            }
        }
    }
}

fn run_daily<S: Storage>(context: GameContext<S>, today: NaiveDate, tui: bool) -> Result<()> {
    let (session, notice) = Session::start(context, today).inspect_err(|err| {
        error!(error = %err, "could not start today's game");
    })?;
    run_session(session, notice, tui)
}

fn run_practice<S: Storage>(context: GameContext<S>, today: NaiveDate, tui: bool) -> Result<()> {
    let session = Session::practice(context, today, &mut rand::rng()).inspect_err(|err| {
        error!(error = %err, "could not start a practice game");
    })?;
    run_session(session, None, tui)
}

fn run_session<S: Storage>(
    mut session: Session<S>,
    notice: Option<Notice>,
    tui: bool,
) -> Result<()> {
    if tui {
        run_tui(App::new(session, notice))
    } else {
        run_simple(&mut session, notice.as_ref())
    }
}
