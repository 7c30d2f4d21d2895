//! Headless match runner
//!
//! Drives the simulation from a fixed frame clock with no window: two AI
//! paddles play (or one AI against a scripted keyboard player), the restart
//! button is pressed after each match, and the results are logged.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{
    Config, Control, InputFrame, KeyState, Match, MatchSnapshot, Phase, RestartEdge, Side,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerSide {
    Left,
    Right,
}

impl From<PlayerSide> for Side {
    fn from(side: PlayerSide) -> Self {
        match side {
            PlayerSide::Left => Side::Left,
            PlayerSide::Right => Side::Right,
        }
    }
}

#[derive(Parser)]
#[command(name = "headless")]
#[command(about = "Run table-tennis matches without a window", long_about = None)]
struct Cli {
    /// JSON config file; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for serves and AI noise (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of matches to play back to back
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Give up on a match after this many ticks
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,

    /// Left AI difficulty in [0, 1]
    #[arg(long, default_value_t = 0.35)]
    left_difficulty: f32,

    /// Right AI difficulty in [0, 1]
    #[arg(long, default_value_t = 0.25)]
    right_difficulty: f32,

    /// Replace one AI with a scripted keyboard player
    #[arg(long, value_enum)]
    scripted: Option<PlayerSide>,

    /// Print each final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Plays a human paddle by pressing and releasing the arrow keys to chase
/// the ball, as a person at the keyboard would.
struct ScriptedPlayer {
    side: Side,
    keys: KeyState,
}

impl ScriptedPlayer {
    fn new(side: Side) -> Self {
        Self {
            side,
            keys: KeyState::default(),
        }
    }

    /// Update the held keys from what is on screen and build this tick's input
    fn input(&mut self, snapshot: &MatchSnapshot) -> InputFrame {
        let paddle = snapshot.paddle(self.side);
        let deadzone = paddle.height / 4.0;
        let offset = snapshot.ball.pos.y - paddle.y;

        if offset < -deadzone {
            self.keys.key_up("ArrowDown");
            self.keys.key_down("ArrowUp");
        } else if offset > deadzone {
            self.keys.key_up("ArrowUp");
            self.keys.key_down("ArrowDown");
        } else {
            self.keys.key_up("ArrowUp");
            self.keys.key_up("ArrowDown");
        }

        InputFrame::new().with_intent(self.side, self.keys.intent())
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Config::from_json(&json).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Config::default(),
    };

    config.left = Control::Ai {
        difficulty: cli.left_difficulty,
    };
    config.right = Control::Ai {
        difficulty: cli.right_difficulty,
    };
    match cli.scripted {
        Some(PlayerSide::Left) => config.left = Control::Human,
        Some(PlayerSide::Right) => config.right = Control::Human,
        None => {}
    }
    Ok(config)
}

/// Tick until the match ends or the limit is hit. Returns true if it ended.
fn play(game: &mut Match, max_ticks: u64, player: &mut Option<ScriptedPlayer>) -> bool {
    while game.tick_count() < max_ticks {
        let input = match player.as_mut() {
            Some(player) => player.input(&game.snapshot()),
            None => InputFrame::new(),
        };
        let events = game.tick(&input);
        if events.left_scored || events.right_scored {
            let score = game.score();
            log::debug!("tick {}: {} - {}", game.tick_count(), score.left, score.right);
        }
        if game.phase() == Phase::MatchOver {
            return true;
        }
    }
    false
}

/// Press and release the restart button the way a player would
fn press_restart(game: &mut Match, button: &mut RestartEdge) {
    for down in [true, true, false] {
        let input = InputFrame {
            restart: button.sample(down),
            ..InputFrame::new()
        };
        if game.phase() == Phase::MatchOver {
            game.tick(&input);
        }
    }
}

fn start_match(config: &Config, seed: Option<u64>) -> Result<Match> {
    let game = match seed {
        Some(seed) => Match::with_seed(config.clone(), seed),
        None => Match::new(config.clone()),
    };
    game.context("cannot start match")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut game = start_match(&config, cli.seed)?;
    let mut player = cli.scripted.map(|side| ScriptedPlayer::new(side.into()));
    log::info!(
        "Playing {} match(es), difficulty {} vs {}",
        cli.matches,
        cli.left_difficulty,
        cli.right_difficulty
    );

    let mut button = RestartEdge::new();
    let mut wins = [0u32; 2];

    for n in 1..=cli.matches {
        let finished = play(&mut game, cli.max_ticks, &mut player);
        let score = game.score();

        match game.winner() {
            Some(winner) if finished => {
                wins[winner as usize] += 1;
                println!(
                    "match {}: {:?} wins {} - {} ({} ticks)",
                    n,
                    winner,
                    score.left,
                    score.right,
                    game.tick_count()
                );
            }
            _ => {
                log::warn!("Match {} hit the {} tick limit", n, cli.max_ticks);
                println!(
                    "match {}: unfinished {} - {} ({} ticks)",
                    n,
                    score.left,
                    score.right,
                    game.tick_count()
                );
            }
        }

        if cli.json {
            println!("{}", serde_json::to_string(&game.snapshot())?);
        }

        if n < cli.matches {
            if finished {
                press_restart(&mut game, &mut button);
            } else {
                // An unfinished match cannot be restarted; start over
                game = start_match(&config, cli.seed.map(|seed| seed.wrapping_add(n as u64)))?;
            }
        }
    }

    println!("left {} - right {}", wins[0], wins[1]);
    Ok(())
}
