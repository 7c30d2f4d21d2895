use crate::{Ball, Config, Events, GameRng, Outcome, Score};
use hecs::World;

/// Credit a point and re-serve. Paddles stay where they are.
pub fn check_scoring(
    world: &mut World,
    outcome: Outcome,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let Outcome::Scored(side) = outcome else {
        return;
    };

    score.increment(side);
    events.record_score(side);
    log::debug!(
        "{:?} scored, {} - {}",
        side,
        score.left,
        score.right
    );

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
    }
}
