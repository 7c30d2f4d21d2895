use glam::Vec2;
use rand::Rng;

use crate::physics::{contact_offset, rebound_x, reflect_vertical, serve_velocity, spin_velocity};
use crate::{BallView, Config, Events, GameRng, Outcome, Paddle, Side};

/// Ball component - the table-tennis ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per tick
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// A freshly served ball at the table centre
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(config.center(), Vec2::ZERO, config.ball_radius);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to centre with a random serve angle toward either side
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();

        let max_angle = config.serve_angle_max_deg;
        let mut angle: f32 = rng.0.gen_range(-max_angle..=max_angle);
        if rng.0.gen_bool(0.5) {
            angle += 180.0;
        }

        self.vel = serve_velocity(
            angle,
            config.ball_speed_x,
            config.ball_speed_y_max,
            config.serve_damping,
        );
    }

    pub fn view(&self) -> BallView {
        BallView {
            pos: self.pos,
            vel: self.vel,
            radius: self.radius,
        }
    }

    /// Advance one tick against both paddles
    pub fn update(
        &mut self,
        left: &Paddle,
        right: &Paddle,
        config: &Config,
        events: &mut Events,
    ) -> Outcome {
        self.pos += self.vel;

        if self.bounce_off_walls(config) {
            events.ball_hit_wall = true;
        }

        for paddle in [left, right] {
            if self.deflect_off_paddle(paddle, config) {
                events.ball_hit_paddle = true;
            }
        }

        if self.pos.x < 0.0 {
            Outcome::Scored(Side::Right)
        } else if self.pos.x > config.arena_width {
            Outcome::Scored(Side::Left)
        } else {
            Outcome::None
        }
    }

    /// Bounce off the top/bottom of the band, clamping back inside it.
    /// Only a ball heading out of the band is reflected.
    fn bounce_off_walls(&mut self, config: &Config) -> bool {
        let top = config.band_top + self.radius;
        let bottom = config.band_bottom - self.radius;
        if self.pos.y > top && self.pos.y < bottom {
            return false;
        }

        let outward = (self.pos.y <= top && self.vel.y < 0.0)
            || (self.pos.y >= bottom && self.vel.y > 0.0);
        if outward {
            self.vel = reflect_vertical(self.vel);
        }
        self.pos.y = self.pos.y.clamp(top, bottom);
        outward
    }

    /// Leading-edge rectangle test against a paddle face.
    ///
    /// Only a ball moving toward the paddle can be deflected, so a contact is
    /// never processed twice on consecutive ticks.
    fn deflect_off_paddle(&mut self, paddle: &Paddle, config: &Config) -> bool {
        let half_height = config.paddle_height / 2.0;
        let face = paddle.face_x(config);

        let reached_face = match paddle.side {
            Side::Left => self.pos.x - self.radius <= face,
            Side::Right => self.pos.x + self.radius >= face,
        };
        let within_paddle =
            self.pos.y >= paddle.y - half_height && self.pos.y <= paddle.y + half_height;

        if !(reached_face && within_paddle && paddle.side.is_incoming(self.vel.x)) {
            return false;
        }

        // Uncapped by default: each volley compounds the horizontal speed
        self.vel.x = rebound_x(
            self.vel.x,
            config.ball_speed_increase,
            config.max_ball_speed_x,
        );
        let rel_y = contact_offset(self.pos.y, paddle.y, half_height);
        self.vel.y = spin_velocity(rel_y, config.ball_speed_y_max);

        // Snap just outside the face
        self.pos.x = face - paddle.side.incoming_sign() * self.radius;
        true
    }
}
