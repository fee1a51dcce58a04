//! Treasure Hunter
//!
//! Main entry point for the text game.

use std::io;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use th_cli::{Driver, Theme};
use th_core::{Game, GameMode, GameRng};

/// Treasure Hunter
#[derive(Parser, Debug)]
#[command(name = "treasure-hunter")]
#[command(author, version, about = "Treasure Hunter - cross the wilds and collect every treasure", long_about = None)]
struct Args {
    /// Hunter name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Game mode (easy/normal/hard/test/samurai, or its first letter)
    #[arg(short = 'm', long = "mode")]
    mode: Option<String>,

    /// Seed for a reproducible game
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder.filter_level(level);
    // RUST_LOG wins over -v
    builder.parse_default_env();
    builder.target(Target::Stderr);
    let _ = builder.try_init();
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("game seed {}", rng.seed());

    let theme = if args.no_color || !atty::is(atty::Stream::Stdout) {
        Theme::plain()
    } else {
        Theme::colored()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), theme);

    let mode = args.mode.as_deref().map(GameMode::from_answer);
    let Some((name, mode)) = driver.welcome(args.name, mode)? else {
        return Ok(());
    };

    let mut game = Game::new(name, mode, rng);
    let end = driver.run(&mut game)?;
    log::info!(
        "session ended ({:?}) after {} towns with {} gold",
        end,
        game.towns_visited(),
        game.hunter().gold()
    );
    Ok(())
}
