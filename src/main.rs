//! Binary entrypoint for Facility Black.
//!
//! Commands:
//! - `play [--seed <n>] [--fast] [--script <file>]` - play a session (default)
//! - `init` - write a starter `facility-black.toml`
//! - `map` - print the facility layout as JSON
//!
//! See the library crate docs for module-level details: `facility_black::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader};

use facility_black::config::{Config, DEFAULT_CONFIG_PATH};
use facility_black::console::{Pacing, TerminalConsole};
use facility_black::game::{Console, Ending, Game, GameError, RoomGraph};

#[derive(Parser)]
#[command(name = "facility-black")]
#[command(about = "Escape an underground facility haunted by a rogue AI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session
    Play {
        /// Seed the random source for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print instantly instead of character by character
        #[arg(short, long)]
        fast: bool,

        /// Read actions and answers from a file, one per line
        #[arg(long)]
        script: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Print the facility layout as JSON
    Map,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        fast: false,
        script: None,
    });

    // Init writes the config, so there is nothing to load yet. A missing
    // file means defaults; a broken one stops here with the parse error.
    let pre_config = match command {
        Commands::Init => None,
        _ => Config::load_optional(&cli.config)?,
    };
    init_logging(&pre_config, cli.verbose);

    match command {
        Commands::Play { seed, fast, script } => {
            if pre_config.is_none() {
                warn!("No config file at {}; using defaults", cli.config);
            }
            let config = pre_config.unwrap_or_default();
            let seed = seed.or(config.game.seed);
            let pacing = if fast {
                Pacing::instant()
            } else {
                Pacing::from_config(&config.display)
            };
            let mut game = Game::new(seed)?;
            info!(
                "Starting Facility Black v{} (seed {:?})",
                env!("CARGO_PKG_VERSION"),
                seed
            );

            let outcome = match script {
                Some(path) => {
                    let reader = BufReader::new(File::open(&path)?);
                    let mut console = TerminalConsole::new(reader, io::stdout(), Pacing::instant())
                        .echo_input(true);
                    play(&mut game, &mut console, config.game.show_intro)
                }
                None => {
                    let mut console = TerminalConsole::stdio(pacing);
                    play(&mut game, &mut console, config.game.show_intro)
                }
            };

            match outcome {
                Ok(ending) => info!(
                    "Session finished after {} turns: {:?}",
                    game.turn(),
                    ending
                ),
                Err(GameError::InputClosed) => {
                    info!("Input closed on turn {}; leaving the facility", game.turn());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Configuration file created at {}", cli.config);
        }
        Commands::Map => {
            let rooms = RoomGraph::facility();
            println!("{}", serde_json::to_string_pretty(&rooms.layout())?);
        }
    }

    Ok(())
}

fn play(game: &mut Game, console: &mut dyn Console, show_intro: bool) -> Result<Ending, GameError> {
    if show_intro {
        game.intro(console)?;
    }
    game.run(console)
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file_path())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        builder.format(move |_fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            // Game text owns the terminal; records only go to the file.
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{} [{}] {}", ts, record.level(), record.args());
            }
            Ok(())
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
