//! Stateless geometry helpers for serves, bounces and paddle spin.

use glam::Vec2;

/// Decompose a serve angle into a velocity.
///
/// The horizontal component keeps a fixed magnitude and only takes its sign
/// from the angle; the vertical component scales with `sin(angle)` and is
/// damped. The result is deliberately not a normalized direction.
pub fn serve_velocity(angle_deg: f32, speed_x: f32, speed_y_max: f32, damping: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(
        speed_x * rad.cos().signum(),
        speed_y_max * rad.sin() * damping,
    )
}

/// Mirror velocity off a horizontal wall
pub fn reflect_vertical(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}

/// Reverse horizontal velocity and amplify it, optionally capped
pub fn rebound_x(vx: f32, speed_increase: f32, max_speed: Option<f32>) -> f32 {
    let speed = vx.abs() * speed_increase;
    let speed = match max_speed {
        Some(max) => speed.min(max),
        None => speed,
    };
    -vx.signum() * speed
}

/// Contact offset from paddle centre: -1 at the top edge, 1 at the bottom
pub fn contact_offset(ball_y: f32, paddle_y: f32, paddle_half_height: f32) -> f32 {
    (ball_y - paddle_y) / paddle_half_height
}

/// Vertical velocity imparted by an off-centre hit
pub fn spin_velocity(rel_y: f32, speed_y_max: f32) -> f32 {
    rel_y * speed_y_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_velocity_keeps_horizontal_magnitude() {
        for angle in [-45.0, -10.0, 0.0, 30.0, 45.0] {
            let vel = serve_velocity(angle, 6.0, 8.0, 0.8);
            assert_eq!(vel.x, 6.0, "angle {} should serve right", angle);
        }
        for angle in [135.0, 180.0, 200.0, 225.0] {
            let vel = serve_velocity(angle, 6.0, 8.0, 0.8);
            assert_eq!(vel.x, -6.0, "angle {} should serve left", angle);
        }
    }

    #[test]
    fn test_serve_velocity_damps_vertical() {
        let vel = serve_velocity(45.0, 6.0, 8.0, 0.8);
        let expected = 8.0 * std::f32::consts::FRAC_1_SQRT_2 * 0.8;
        assert!((vel.y - expected).abs() < 1e-5);
        // Not a unit-vector decomposition
        assert!((vel.length() - 6.0).abs() > 0.1);
    }

    #[test]
    fn test_reflect_vertical() {
        let vel = reflect_vertical(Vec2::new(3.0, -4.0));
        assert_eq!(vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_rebound_x_reverses_and_amplifies() {
        assert!((rebound_x(-6.0, 1.05, None) - 6.3).abs() < 1e-5);
        assert!((rebound_x(6.0, 1.05, None) + 6.3).abs() < 1e-5);
    }

    #[test]
    fn test_rebound_x_respects_cap() {
        assert_eq!(rebound_x(-10.0, 1.05, Some(10.0)), 10.0);
        assert_eq!(rebound_x(10.0, 1.05, Some(10.0)), -10.0);
    }

    #[test]
    fn test_contact_offset_and_spin() {
        assert_eq!(contact_offset(250.0, 250.0, 50.0), 0.0);
        assert_eq!(contact_offset(200.0, 250.0, 50.0), -1.0);
        assert_eq!(contact_offset(275.0, 250.0, 50.0), 0.5);
        assert_eq!(spin_velocity(0.5, 8.0), 4.0);
        assert_eq!(spin_velocity(-1.0, 8.0), -8.0);
    }
}
