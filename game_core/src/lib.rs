pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod paddle;
pub mod params;
pub mod physics;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use paddle::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of table-tennis physics and return the ball's outcome.
///
/// Scoring is left to the caller so the outcome can be interpreted against
/// the match state.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputFrame,
    events: &mut Events,
    rng: &mut GameRng,
) -> Outcome {
    // AI observes the ball as it was at the end of the previous tick
    let Some(ball) = ball_view(world) else {
        return Outcome::None; // No ball in world
    };

    // 1. Move paddles from intents / AI policy
    move_paddles(world, input, &ball, config, rng);

    // 2. Move ball and resolve walls and paddles
    check_collisions(world, config, events)
}

/// Snapshot of the (single) ball, if spawned
pub fn ball_view(world: &World) -> Option<BallView> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.view())
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
