//! Wheel Spin - Main Binary
//!
//! Play against two computer contestants in the terminal, or let three
//! computers play each other for testing and tuning.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::path::{Path, PathBuf};
use wheel_spin::{
    core::Player,
    game::{
        create_computer_players, input::presets, ComputerController, GameConfig, GameSession,
        InteractiveController, LineInput, LogPresenter, OutputFormat, Seats, VerbosityLevel,
    },
    loader::{load_config, GameData},
    ui::TextPresenter,
    Result,
};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

/// Game log line format
#[derive(Debug, Clone, Copy)]
struct LogFormatArg(OutputFormat);

impl std::str::FromStr for LogFormatArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormatArg(OutputFormat::Text)),
            "json" => Ok(LogFormatArg(OutputFormat::Json)),
            _ => Err(format!("invalid log format '{s}' (expected: text, json)")),
        }
    }
}

impl From<LogFormatArg> for OutputFormat {
    fn from(arg: LogFormatArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "wheel")]
#[command(about = "Wheel Spin - a word puzzle game show in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against two computer contestants
    Play {
        /// Your name (asked for if not given)
        #[arg(long)]
        name: Option<String>,

        /// A line about yourself (asked for if not given)
        #[arg(long)]
        bio: Option<String>,

        /// Computer difficulty, 1-10 (asked for if not given)
        #[arg(long, short = 'd', value_parser = clap::value_parser!(u8).range(1..=10))]
        difficulty: Option<u8>,

        /// Number of rounds
        #[arg(long, short = 'r', default_value_t = 3)]
        rounds: u32,

        /// Set random seed for a repeatable game
        #[arg(long)]
        seed: Option<u64>,

        /// Directory with puzzles.json, characters.csv, prizes.csv and wheel.csv
        /// (default: built-in data)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// JSON file overriding rule settings
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Do not pause after host lines
        #[arg(long)]
        no_pacing: bool,

        /// Clear the terminal before each frame
        #[arg(long)]
        clear: bool,

        /// Verbosity level for the game log (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "silent", short = 'v')]
        verbosity: VerbosityArg,

        /// Game log line format (text or json)
        #[arg(long, default_value = "text")]
        log_format: LogFormatArg,
    },

    /// Let three computer contestants play each other
    Sim {
        /// Number of rounds
        #[arg(long, short = 'r', default_value_t = 3)]
        rounds: u32,

        /// Random seed for deterministic games
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Computer difficulty, 1-10
        #[arg(
            long,
            short = 'd',
            default_value_t = 5,
            value_parser = clap::value_parser!(u8).range(1..=10)
        )]
        difficulty: u8,

        /// Directory with game data files (default: built-in data)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// JSON file overriding rule settings
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// End a round with no winner after this many turn changes
        #[arg(long, default_value_t = 500)]
        max_turns: u32,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Game log line format (text or json)
        #[arg(long, default_value = "text")]
        log_format: LogFormatArg,

        /// Print the final standings as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            bio,
            difficulty,
            rounds,
            seed,
            data_dir,
            config,
            no_pacing,
            clear,
            verbosity,
            log_format,
        } => {
            let data = load_data(data_dir.as_deref()).await?;
            let config = load_rules(config.as_deref()).await?;
            let profile = Profile { name, bio, difficulty };
            let log = LogSettings { verbosity, log_format };
            run_play(data, config, profile, rounds, seed, !no_pacing, clear, log)?
        }
        Commands::Sim {
            rounds,
            seed,
            difficulty,
            data_dir,
            config,
            max_turns,
            verbosity,
            log_format,
            json,
        } => {
            let data = load_data(data_dir.as_deref()).await?;
            let config = load_rules(config.as_deref()).await?.with_max_turns(max_turns);
            let log = LogSettings { verbosity, log_format };
            run_sim(data, config, rounds, seed, difficulty, log, json)?
        }
    }

    Ok(())
}

async fn load_data(dir: Option<&Path>) -> Result<GameData> {
    match dir {
        Some(dir) => GameData::load_dir(dir).await,
        None => GameData::builtin(),
    }
}

async fn load_rules(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => load_config(path).await,
        None => Ok(GameConfig::default()),
    }
}

/// Logger settings shared by both subcommands
struct LogSettings {
    verbosity: VerbosityArg,
    log_format: LogFormatArg,
}

impl LogSettings {
    fn apply(self, session: &mut GameSession) {
        let logger = session.logger_mut();
        logger.set_verbosity(self.verbosity.into());
        logger.set_output_format(self.log_format.into());
    }
}

/// Contestant details given on the command line; gaps are asked for
struct Profile {
    name: Option<String>,
    bio: Option<String>,
    difficulty: Option<u8>,
}

impl Profile {
    /// Fill in anything missing by asking on stdin
    fn complete(self) -> Result<(String, String, u8)> {
        let mut input = LineInput::stdio();

        let name = match self.name {
            Some(name) => name,
            None => {
                println!("What's your name, contestant?");
                input.read(&presets::name())?
            }
        };
        let bio = match self.bio {
            Some(bio) => bio,
            None => {
                println!("Tell us a little about yourself, {name}.");
                input.read(&presets::bio())?
            }
        };
        let difficulty = match self.difficulty {
            Some(d) => d,
            None => {
                println!("How tough should your opponents be? (1-10)");
                // Validated as a number in range, so the parse cannot fail
                input.read(&presets::difficulty())?.parse().unwrap_or(5)
            }
        };
        Ok((name, bio, difficulty))
    }
}

#[allow(clippy::too_many_arguments)]
fn run_play(
    data: GameData,
    config: GameConfig,
    profile: Profile,
    rounds: u32,
    seed: Option<u64>,
    pacing: bool,
    clear: bool,
    log: LogSettings,
) -> Result<()> {
    let (name, bio, difficulty) = profile.complete()?;

    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    };
    let mut players = vec![Player::human(name.as_str(), bio)];
    players.extend(create_computer_players(
        &data.characters,
        2,
        difficulty,
        &mut rng,
    )?);

    let mut session = GameSession::new(players, data.puzzles, data.wheel, config)?;
    log.apply(&mut session);
    let (mut cpu1, mut cpu2) = match seed {
        Some(seed) => {
            session.seed_rng(seed);
            (
                ComputerController::with_seed(difficulty, seed.wrapping_add(1)),
                ComputerController::with_seed(difficulty, seed.wrapping_add(2)),
            )
        }
        None => {
            session.seed_from_entropy();
            (
                ComputerController::new(difficulty),
                ComputerController::new(difficulty),
            )
        }
    };

    let mut human = InteractiveController::stdio();
    let mut seats: Seats = [&mut human, &mut cpu1, &mut cpu2];
    let mut presenter = TextPresenter::stdout()
        .with_pacing(pacing)
        .with_clear_screen(clear);

    let summary = session.play_game(rounds, &mut seats, &mut presenter)?;

    println!();
    for player in &summary.players {
        println!(
            "  {:<14} ${:<8} ({} round(s) won)",
            player.name, player.total_score, player.rounds_won
        );
    }
    Ok(())
}

fn run_sim(
    data: GameData,
    config: GameConfig,
    rounds: u32,
    seed: u64,
    difficulty: u8,
    log: LogSettings,
    json: bool,
) -> Result<()> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let players = create_computer_players(&data.characters, 3, difficulty, &mut rng)?;

    let mut session = GameSession::new(players, data.puzzles, data.wheel, config)?;
    session.seed_rng(seed);
    log.apply(&mut session);

    let mut cpu0 = ComputerController::with_seed(difficulty, seed.wrapping_add(1));
    let mut cpu1 = ComputerController::with_seed(difficulty, seed.wrapping_add(2));
    let mut cpu2 = ComputerController::with_seed(difficulty, seed.wrapping_add(3));
    let mut seats: Seats = [&mut cpu0, &mut cpu1, &mut cpu2];

    let start = std::time::Instant::now();
    let summary = session.play_game(rounds, &mut seats, &mut LogPresenter)?;
    let duration = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\n=== Game Over ===");
        println!("Rounds played: {}", summary.rounds_played);
        for player in &summary.players {
            println!(
                "  {}: ${} cash, {} prize(s), score ${}",
                player.name,
                player.total_cash,
                player.prizes.len(),
                player.total_score
            );
        }
        eprintln!("  (Game time: {:.2}ms)", duration.as_secs_f64() * 1000.0);
    }
    Ok(())
}
