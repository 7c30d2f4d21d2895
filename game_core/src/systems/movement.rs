use crate::{BallView, Config, GameRng, InputFrame, Paddle};
use hecs::World;

/// Move both paddles: humans from this tick's intents, AI from `ball`
pub fn move_paddles(
    world: &mut World,
    input: &InputFrame,
    ball: &BallView,
    config: &Config,
    rng: &mut GameRng,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let intent = input.intent(paddle.side);
        paddle.update(intent, ball, config, rng);
    }
}
