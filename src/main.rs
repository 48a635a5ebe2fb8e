use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use othello_canon::ai::state_encoding::canonical_position_counts;
use othello_canon::ai::{Agent, MinimaxAgent, RandomAgent, SearchConfig};
use othello_canon::config::AppConfig;
use othello_canon::game::{play_game, Action, GameState, MoveRecord, Player};
use othello_canon::hash;
use othello_canon::logging::init_logging;
use othello_canon::symmetry::canonicalize;

/// Othello with a minimax opponent and symmetry-canonical position hashes.
#[derive(Parser)]
#[command(name = "othello", about = "Play, self-play and replay Othello games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Override board size
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Override search depth
    #[arg(long, global = true)]
    depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game, printing the board after every move
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        dark: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
        light: PlayerKind,
    },
    /// Play minimax against random for a number of games
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        /// Write one CSV row per game (winner, score, move record)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay move records from a CSV written by `selfplay`
    Replay {
        input: PathBuf,
        /// Print the final board of every game
        #[arg(long)]
        boards: bool,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Minimax,
}

/// One CSV row per finished game.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct GameRow {
    game: usize,
    winner: String,
    black: usize,
    white: usize,
    record: String,
}

#[derive(Debug, Default, serde::Serialize)]
struct SelfPlaySummary {
    games: usize,
    minimax_wins: usize,
    random_wins: usize,
    draws: usize,
    average_placements: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::DefaultConfig = cli.command {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.game.size = size;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("validating command-line overrides")?;

    // Dropping the handle stops file logging.
    let _logger = init_logging(&config.logging).context("starting logger")?;

    match cli.command {
        Command::Play { dark, light } => run_play(&config, dark, light),
        Command::Selfplay {
            games,
            output,
            json,
        } => run_selfplay(&config, games, output, json),
        Command::Replay { input, boards } => run_replay(&config, &input, boards),
        Command::DefaultConfig => Ok(()),
    }
}

/// Reads moves from stdin, re-prompting until a legal one is entered.
struct HumanAgent;

impl Agent for HumanAgent {
    fn select_action(&mut self, state: &GameState) -> Action {
        let legal = state.legal_actions();
        if legal == [Action::Pass] {
            println!("{} has no legal move and passes.", state.current_player().name());
            return Action::Pass;
        }
        loop {
            print!("{} to move (row,col): ", state.current_player().name());
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // EOF: give up the move, which play_game rejects.
                Ok(0) | Err(_) => return Action::Pass,
                Ok(_) => {}
            }
            match line.parse::<Action>() {
                Ok(action) if legal.contains(&action) => return action,
                Ok(action) => println!("{action} is not legal here"),
                Err(e) => println!("{e}"),
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Prints the position before delegating to the wrapped agent.
struct Narrated(Box<dyn Agent>);

impl Agent for Narrated {
    fn select_action(&mut self, state: &GameState) -> Action {
        let (black, white) = state.board().score();
        println!("\n{}black {black}  white {white}", state.board());
        let action = self.0.select_action(state);
        println!("{} ({}) plays {action}", state.current_player().name(), self.0.name());
        action
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

fn make_agent(kind: PlayerKind, search: &SearchConfig) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanAgent),
        PlayerKind::Random => match search.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        PlayerKind::Minimax => Box::new(MinimaxAgent::from_config(search)),
    }
}

/// Search settings for one side of one game, with a distinct seed per side.
fn seeded(search: &SearchConfig, game: usize, side: Player) -> SearchConfig {
    let offset = (game as u64) * 4 + if side == Player::Dark { 0 } else { 2 };
    SearchConfig {
        seed: search.seed.map(|seed| seed.wrapping_add(offset)),
        ..search.clone()
    }
}

fn run_play(config: &AppConfig, dark: PlayerKind, light: PlayerKind) -> Result<()> {
    let mut dark = Narrated(make_agent(dark, &seeded(&config.search, 0, Player::Dark)));
    let mut light = Narrated(make_agent(light, &seeded(&config.search, 0, Player::Light)));
    let summary = play_game(config.game.size, &mut dark, &mut light).context("playing game")?;

    let (black, white) = summary.final_board.score();
    println!("\n{}", summary.final_board);
    match summary.winner() {
        Some(player) => println!("{} wins {black}-{white}", player.name()),
        None => println!("Draw {black}-{white}"),
    }
    println!("record: {}", summary.record());
    Ok(())
}

fn run_selfplay(
    config: &AppConfig,
    games: usize,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if games == 0 {
        bail!("--games must be > 0");
    }
    let mut writer = match &output {
        Some(path) => Some(
            csv::Writer::from_path(path)
                .with_context(|| format!("creating {}", path.display()))?,
        ),
        None => None,
    };

    let mut summary = SelfPlaySummary {
        games,
        ..Default::default()
    };
    let mut placements = 0;
    for game in 0..games {
        // Minimax alternates colours so both openings are covered.
        let minimax_side = if game % 2 == 0 { Player::Dark } else { Player::Light };
        let mut minimax = MinimaxAgent::from_config(&seeded(&config.search, game, minimax_side));
        let mut random = make_agent(
            PlayerKind::Random,
            &seeded(&config.search, game, minimax_side.other()),
        );
        let result = match minimax_side {
            Player::Dark => play_game(config.game.size, &mut minimax, random.as_mut()),
            Player::Light => play_game(config.game.size, random.as_mut(), &mut minimax),
        }
        .with_context(|| format!("playing game {game}"))?;

        match result.winner() {
            Some(player) if player == minimax_side => summary.minimax_wins += 1,
            Some(_) => summary.random_wins += 1,
            None => summary.draws += 1,
        }
        placements += result.placements();

        if let Some(writer) = writer.as_mut() {
            let (black, white) = result.final_board.score();
            writer.serialize(GameRow {
                game,
                winner: result.winner().map_or("draw", Player::name).to_string(),
                black,
                white,
                record: result.record().to_string(),
            })?;
        }
    }
    if let Some(mut writer) = writer {
        writer.flush()?;
    }
    summary.average_placements = placements as f64 / games as f64;

    info!(
        "self-play finished: minimax {} / random {} / draws {}",
        summary.minimax_wins, summary.random_wins, summary.draws
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games: minimax won {}, random won {}, {} draws ({:.1} moves per game)",
            summary.games,
            summary.minimax_wins,
            summary.random_wins,
            summary.draws,
            summary.average_placements
        );
    }
    Ok(())
}

fn run_replay(config: &AppConfig, input: &Path, show_boards: bool) -> Result<()> {
    let size = config.game.size;
    let mut reader =
        csv::Reader::from_path(input).with_context(|| format!("opening {}", input.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: GameRow = row.with_context(|| format!("reading {}", input.display()))?;
        let record: MoveRecord = row
            .record
            .parse()
            .with_context(|| format!("parsing record of game {}", row.game))?;
        let boards = record
            .replay(size)
            .with_context(|| format!("replaying game {}", row.game))?;
        let Some(last) = boards.last() else {
            println!("game {}: empty record", row.game);
            continue;
        };

        let canonical = canonicalize(last);
        let (black, white) = last.score();
        if (black, white) != (row.black, row.white) {
            bail!(
                "game {}: replay scores {black}-{white}, file says {}-{}",
                row.game,
                row.black,
                row.white
            );
        }
        println!(
            "game {}: {black}-{white} hash {} canonical {}",
            row.game,
            hash::encode(last),
            hash::encode(&canonical.board)
        );
        if show_boards {
            println!("{last}");
        }
        records.push(record);
    }

    let counts = canonical_position_counts(&records, size)?;
    let total: usize = counts.values().sum();
    println!(
        "{} games, {total} positions, {} distinct up to symmetry",
        records.len(),
        counts.len()
    );
    Ok(())
}
