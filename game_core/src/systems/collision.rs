use crate::{Ball, Config, Events, Outcome, Paddle, Side};
use hecs::World;

/// Advance the ball against both paddles and report whether it left the table
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) -> Outcome {
    // Copy paddles out first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    let left = paddles.iter().find(|p| p.side == Side::Left);
    let right = paddles.iter().find(|p| p.side == Side::Right);
    let (Some(left), Some(right)) = (left, right) else {
        return Outcome::None; // Paddles not spawned yet
    };

    let mut outcome = Outcome::None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        outcome = ball.update(left, right, config, events);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        (world, config, Events::new())
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        let face = config.paddle_x(Side::Left) + config.paddle_width / 2.0;
        create_ball(
            &mut world,
            Ball::new(Vec2::new(face + 12.0, 250.0), Vec2::new(-6.0, 0.0), 10.0),
        );

        let outcome = check_collisions(&mut world, &config, &mut events);

        assert_eq!(outcome, Outcome::None);
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        }
    }

    #[test]
    fn test_ball_exit_reports_score() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(2.0, 120.0), Vec2::new(-6.0, 0.0), 10.0),
        );

        let outcome = check_collisions(&mut world, &config, &mut events);

        assert_eq!(outcome, Outcome::Scored(Side::Right));
    }

    #[test]
    fn test_no_collision_without_paddles() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(2.0, 120.0), Vec2::new(-6.0, 0.0), 10.0),
        );

        // Should not panic or move anything
        let outcome = check_collisions(&mut world, &config, &mut events);

        assert_eq!(outcome, Outcome::None);
        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(2.0, 120.0));
        }
    }
}
