use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_arena::ai::{Agent, MinimaxAgent, OneStepLookaheadAgent, RandomAgent};
use connect_arena::arena::{Arena, TextRenderer};
use connect_arena::config::AppConfig;
use connect_arena::game::ConnectFour;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Random,
    Lookahead,
    Minimax,
}

/// Pit two Connect Four agents against each other.
#[derive(Parser)]
#[command(name = "connect-arena", about = "Run a seat-balanced Connect Four tournament")]
struct Cli {
    /// Agent A
    #[arg(long, value_enum, default_value = "minimax")]
    player_one: AgentKind,

    /// Agent B
    #[arg(long, value_enum, default_value = "random")]
    player_two: AgentKind,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games (must be even)
    #[arg(short = 'n', long)]
    games: Option<usize>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// RNG seed for randomized agents
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board before every move
    #[arg(short, long)]
    verbose: bool,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_default_config: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn build_agent(kind: AgentKind, config: &AppConfig, seed: u64) -> Box<dyn Agent<ConnectFour>> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::from_seed(seed)),
        AgentKind::Lookahead => Box::new(OneStepLookaheadAgent::from_seed(seed)),
        AgentKind::Minimax => Box::new(MinimaxAgent::from_config(&config.search)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    initialize_logging(cli.log_level);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.arena.verbose |= cli.verbose;
    config.validate().context("invalid configuration")?;

    let seed = config.arena.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        seed,
        games = config.arena.games,
        depth = config.search.depth,
        "starting tournament"
    );

    let game = ConnectFour::new(config.board).context("invalid board configuration")?;
    let mut arena = Arena::new(game);
    if config.arena.verbose {
        arena = arena.with_renderer(Box::new(TextRenderer::stdout()));
    }

    let mut agent_a = build_agent(cli.player_one, &config, rng.random());
    let mut agent_b = build_agent(cli.player_two, &config, rng.random());

    let report = arena
        .play_tournament(agent_a.as_mut(), agent_b.as_mut(), config.arena.games)
        .context("tournament aborted")?;

    let tally = report.tally;
    println!(
        "{} (A) vs {} (B) over {} games",
        agent_a.name(),
        agent_b.name(),
        tally.total()
    );
    println!(
        "  A wins: {:>4} ({:.1}%)",
        tally.agent_a_wins,
        100.0 * tally.a_win_rate()
    );
    println!(
        "  B wins: {:>4} ({:.1}%)",
        tally.agent_b_wins,
        100.0 * tally.b_win_rate()
    );
    println!(
        "  draws:  {:>4} ({:.1}%)",
        tally.draws,
        100.0 * tally.draw_rate()
    );
    for (half, seats) in report.halves.iter().enumerate() {
        let first = if half == 0 { agent_a.name() } else { agent_b.name() };
        println!(
            "  {first} moving first: first seat {}, second seat {}, draws {}",
            seats.first_seat_wins, seats.second_seat_wins, seats.draws
        );
    }

    Ok(())
}
