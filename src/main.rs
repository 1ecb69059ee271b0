//! cinema-session - CLI entry point
//!
//! Opens a session from configuration, fixtures and durable storage, runs a
//! single operation against it, and prints the resulting snapshot as JSON.
//! Only visited tabs outlive the process, so every invocation is a fresh
//! session that remembers which tabs were opened before.

use cinema_session::config::schema::Config;
use cinema_session::config::{default, loader::ConfigLoader, xdg};
use cinema_session::{logging, open_session, CancelOutcome, SessionStore};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Cinema session state manager
#[derive(Parser)]
#[command(name = "cinema-session")]
#[command(version, about = "Cinema session notification, watchlist and booking state")]
struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/cinema-session/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixture JSON file, overriding the configured one
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Storage directory, overriding the configured one
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cinema-session CLI
#[derive(Subcommand)]
enum Commands {
    /// Print the current snapshot
    Snapshot,

    /// Mark a tab as visited
    Visit {
        /// Tab id (notifications, movie-notifications, watchlist, cancelled, ...)
        tab: String,
    },

    /// Mark a notification feed as read
    MarkRead {
        /// Which feed
        feed: Feed,
    },

    /// Add a movie to the watchlist
    Watch {
        movie_id: String,
        title: String,
        poster: String,
    },

    /// Remove a watchlist item by item id
    Unwatch {
        /// Watchlist item id
        id: String,
    },

    /// Cancel a booking
    Cancel {
        /// Booking id
        booking_id: String,
    },

    /// Reset the session to its fixtures and forget visited tabs
    Reset,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Notification feeds.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Feed {
    /// Generic notification feed
    Generic,
    /// Movie-release notification feed
    Movies,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        return run_config_command(action, cli.config.as_deref());
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.logging.level);

    let mut store = match open_session(&config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(message) = apply(&mut store, cli.command) {
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    match serde_json::to_string_pretty(&store.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, cinema_session::config::error::ConfigError> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(fixtures) = &cli.fixtures {
        config.fixtures.path = fixtures.to_string_lossy().into_owned();
    }
    if let Some(dir) = &cli.storage_dir {
        config.storage.dir = dir.to_string_lossy().into_owned();
    }
    Ok(config)
}

/// Runs one session command. No-op outcomes are noted on stderr, not failures.
fn apply(store: &mut SessionStore, command: Commands) -> Result<(), String> {
    match command {
        Commands::Snapshot => {}
        Commands::Visit { tab } => {
            store.mark_tab_as_visited(&tab).map_err(|e| e.to_string())?;
        }
        Commands::MarkRead { feed } => match feed {
            Feed::Generic => store.mark_notifications_as_read(),
            Feed::Movies => store.mark_movie_notifications_as_read(),
        },
        Commands::Watch {
            movie_id,
            title,
            poster,
        } => {
            if store.add_to_watchlist(&movie_id, &title, &poster).is_none() {
                eprintln!("'{movie_id}' is already on the watchlist");
            }
        }
        Commands::Unwatch { id } => {
            if store.remove_from_watchlist(&id).is_none() {
                eprintln!("No watchlist item '{id}'");
            }
        }
        Commands::Cancel { booking_id } => match store.cancel_booking(&booking_id) {
            CancelOutcome::Cancelled => {}
            CancelOutcome::AlreadyCancelled => {
                eprintln!("Booking '{booking_id}' is already cancelled")
            }
            CancelOutcome::NotFound => eprintln!("No booking '{booking_id}'"),
        },
        Commands::Reset => store.reset_all_notifications(),
        Commands::Config { .. } => {}
    }
    Ok(())
}

fn run_config_command(action: &ConfigAction, explicit: Option<&std::path::Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => {
            let created = match explicit {
                Some(path) => default::create_config_at(path, *force).map(|()| path.to_path_buf()),
                None => default::create_default_config(*force),
            };
            created.map(|path| println!("Created configuration at {}", path.display()))
        }
        ConfigAction::Path => {
            let path = explicit
                .map(|p| p.to_path_buf())
                .unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load(explicit).map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
