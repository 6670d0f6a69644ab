//! Binary entrypoint for the Truth or Fake? CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--stats]` - play in the terminal
//! - `fetch` - ask the advice endpoint for one slip and print it
//! - `init` - write a starter `config.toml`
//! - `fixtures` - list the fabricated advice currently in use
//!
//! See the library crate docs for module-level details: `truthorfake::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write as _;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use truthorfake::advice::{AdviceClient, AdviceSource, FixtureSet};
use truthorfake::config::Config;
use truthorfake::game::GameController;
use truthorfake::metrics;
use truthorfake::terminal::{help_text, parse_command, render_history, render_screen, PlayerCommand};

#[derive(Parser)]
#[command(name = "truthorfake")]
#[command(about = "Guess whether a piece of advice is real or made up")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path; defaults apply when the file does not exist
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Seed for the coin flips and fixture picks (reproducible rounds)
        #[arg(long)]
        seed: Option<u64>,
        /// Print play counters on exit
        #[arg(long)]
        stats: bool,
    },
    /// Fetch one piece of real advice and print it
    Fetch,
    /// Write a default configuration file
    Init,
    /// List the fabricated advice in use
    Fixtures,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(&None, cli.verbose);
        if Path::new(&cli.config).exists() {
            warn!("Refusing to overwrite existing {}", cli.config);
            println!("{} already exists; leaving it untouched.", cli.config);
            return Ok(());
        }
        Config::create_default(&cli.config).await?;
        println!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    let config = load_config(&cli.config).await?;
    init_logging(&Some(config.clone()), cli.verbose);

    match cli.command {
        Commands::Play { seed, stats } => {
            info!("Starting Truth or Fake? v{}", env!("CARGO_PKG_VERSION"));
            play(&config, seed).await?;
            let snap = metrics::snapshot();
            info!("Session stats: {}", snap.summary_line());
            if stats {
                println!("{}", snap.summary_line());
            }
        }
        Commands::Fetch => {
            let client = AdviceClient::new(config.advice.clone());
            match client.fetch_advice().await {
                Ok(advice) => println!("{}", advice),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Fixtures => {
            let fixtures = load_fixtures(&config).await?;
            for (idx, advice) in fixtures.iter().enumerate() {
                println!("{:>3}) {}", idx + 1, advice);
            }
        }
        Commands::Init => unreachable!("handled above"),
    }

    Ok(())
}

async fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Config::load(path).await
    } else {
        Ok(Config::default())
    }
}

async fn load_fixtures(config: &Config) -> Result<FixtureSet> {
    match &config.advice.fixtures_file {
        Some(path) => Ok(FixtureSet::load(path).await?),
        None => Ok(FixtureSet::builtin()),
    }
}

async fn play(config: &Config, seed: Option<u64>) -> Result<()> {
    let rules = config.game.score_rules()?;
    let fixtures = load_fixtures(config).await?;
    let rng = match seed {
        Some(seed) => {
            info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let client = AdviceClient::new(config.advice.clone());
    let mut game = GameController::new(client, fixtures, rng)
        .with_rules(rules)
        .with_fallback(config.advice.fallback_advice.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print!("{}", render_screen(game.state()));
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_command(&line) {
            Some(PlayerCommand::Start) => game.start_game().await,
            Some(PlayerCommand::Reset) => game.reset_game().await,
            Some(PlayerCommand::GuessTrue) => game.guess(true).await,
            Some(PlayerCommand::GuessFake) => game.guess(false).await,
            Some(PlayerCommand::History) => {
                print!("{}", render_history(&game.state().history));
                continue;
            }
            Some(PlayerCommand::Help) => {
                println!("{}", help_text());
                continue;
            }
            Some(PlayerCommand::Quit) => break,
            None => {
                if !line.trim().is_empty() {
                    println!("Unknown command. Type HELP for the list.");
                }
                continue;
            }
        }
        for notice in game.take_notifications() {
            println!("{}", notice);
        }
        print!("{}", render_screen(game.state()));
    }
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
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
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // The game owns the terminal; only echo logs when stderr is a TTY
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty && record.level() <= log::Level::Warn {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
