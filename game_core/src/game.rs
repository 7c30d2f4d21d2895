//! Match controller
//!
//! Owns the world (both paddles and the ball), the score and the
//! rally/match-over state machine:
//!
//! - `Rallying` --point--> `Rallying` (score, re-serve)
//! - `Rallying` --score reaches `win_score`--> `MatchOver`
//! - `MatchOver` --restart trigger--> `Rallying` (everything rebuilt)
//!
//! While `MatchOver`, physics is frozen and only the restart trigger is read.

use glam::Vec2;
use hecs::World;

use crate::systems::check_scoring;
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, InputFrame,
    MatchSnapshot, Outcome, Paddle, PaddleView, Phase, Score, Side,
};

pub struct Match {
    world: World,
    config: Config,
    score: Score,
    phase: Phase,
    winner: Option<Side>,
    events: Events,
    rng: GameRng,
    tick: u64,
}

impl Match {
    /// Start a match with an entropy-seeded serve RNG
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a match with a fixed seed (repeatable serves and AI noise)
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejecting match config: {}", err);
            return Err(err);
        }

        let mut game = Self {
            world: World::new(),
            config,
            score: Score::new(),
            phase: Phase::Rallying,
            winner: None,
            events: Events::new(),
            rng,
            tick: 0,
        };
        game.spawn();
        Ok(game)
    }

    /// Rebuild paddles and ball from scratch
    fn spawn(&mut self) {
        self.world.clear();
        create_paddle(&mut self.world, Side::Left, &self.config);
        create_paddle(&mut self.world, Side::Right, &self.config);
        let ball = Ball::serve(&self.config, &mut self.rng);
        create_ball(&mut self.world, ball);
    }

    /// Full reinitialization: paddles, ball, score and phase.
    /// Only a finished match can be restarted; returns whether it was.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::MatchOver {
            log::debug!("Ignoring restart while rallying");
            return false;
        }
        self.spawn();
        self.score = Score::new();
        self.phase = Phase::Rallying;
        self.winner = None;
        self.tick = 0;
        self.events.restarted = true;
        log::info!("Match restarted");
        true
    }

    /// Advance one frame using this tick's input snapshot
    pub fn tick(&mut self, input: &InputFrame) -> &Events {
        self.events.clear();

        if self.phase == Phase::MatchOver {
            if input.restart {
                self.restart();
            }
            return &self.events;
        }

        let outcome = step(
            &mut self.world,
            &self.config,
            input,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
        self.apply_outcome(outcome);

        &self.events
    }

    /// Interpret a ball outcome: credit the point, re-serve, check for a winner.
    /// Ignored once the match is over.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        if self.phase == Phase::MatchOver {
            return;
        }

        check_scoring(
            &mut self.world,
            outcome,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &self.config,
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.phase = Phase::MatchOver;
            self.winner = Some(winner);
            self.events.match_over = true;
            log::info!(
                "{:?} wins {} - {} after {} ticks",
                winner,
                self.score.left,
                self.score.right,
                self.tick
            );
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Physics ticks since the match (re)started
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.config.center(), Vec2::ZERO, self.config.ball_radius))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
            .unwrap_or_else(|| Paddle::new(side, &self.config))
    }

    fn paddle_view(&self, side: Side) -> PaddleView {
        let paddle = self.paddle(side);
        PaddleView {
            side,
            x: paddle.x,
            y: paddle.y,
            width: self.config.paddle_width,
            height: self.config.paddle_height,
            control: paddle.control,
        }
    }

    /// Render-ready state for the current tick
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            tick: self.tick,
            ball: self.ball().view(),
            left: self.paddle_view(Side::Left),
            right: self.paddle_view(Side::Right),
            score: self.score,
            phase: self.phase,
            winner: self.winner,
        }
    }
}
