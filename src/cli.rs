//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use cleanmate::config::Config;
use cleanmate::output::OutputMode;
use cleanmate::storage::FileStore;

/// cleanmate - Simplify your cleaning routine
#[derive(Parser, Debug)]
#[command(
    name = "cleanmate",
    version,
    about = "Simplify your cleaning routine",
    long_about = "Schedule cleaning tasks, tick them off, and get a tip of the day.\n\n\
                  Tasks and the theme preference are kept in ~/.cleanmate/data unless\n\
                  --data-dir or ~/.cleanmate/config.toml point elsewhere."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding tasks and preferences
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task name (what needs cleaning)
        name: Option<String>,

        /// Use a template instead of a name (template name or number)
        #[arg(short, long, conflicts_with = "name")]
        template: Option<String>,

        /// Due date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        due: Option<String>,
    },

    /// List tasks
    List {
        /// Show only tasks that are not done
        #[arg(long, conflicts_with = "done")]
        pending: bool,

        /// Show only tasks that are done
        #[arg(long)]
        done: bool,
    },

    /// Mark a task as done
    Done {
        /// Task ID
        id: u64,
    },

    /// List task templates
    Templates,

    /// Show or toggle the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Show the tip of the day
    Tip,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load();
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir());
    log::debug!("Using data directory {}", data_dir.display());
    let ctx = Context::new(config, FileStore::new(data_dir), output_mode);

    match cli.command {
        Some(Command::Add {
            name,
            template,
            due,
        }) => commands::add(&ctx, name.as_deref(), template.as_deref(), due.as_deref()),
        Some(Command::List { pending, done }) => commands::list(&ctx, pending, done),
        Some(Command::Done { id }) => commands::done(&ctx, id),
        Some(Command::Templates) => commands::templates(&ctx),
        Some(Command::Theme { action }) => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => commands::theme_show(&ctx),
            ThemeAction::Toggle => commands::theme_toggle(&ctx),
        },
        Some(Command::Tip) => commands::tip(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("cleanmate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => commands::dashboard(&ctx),
    }
}
