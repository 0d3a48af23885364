use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::{BallConfig, ConfigError, GameRng, Params, Player, Side, Table};

/// Wrap any angle into [0, 2π)
pub fn normalize_direction(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// What the ball touched during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub paddle: Option<Side>,
    pub wall: bool,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub radius: f32,
    pub direction: f32, // Heading in radians from +X
    pub speed: f32,
    pub direction_max: f32,
    pub color: u32,
}

impl Ball {
    pub fn new(
        config: &BallConfig,
        table: &Table,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate(table.size())?;
        let mut ball = Self {
            center: Vec2::ZERO,
            radius: config.radius,
            direction: 0.0,
            speed: config.speed,
            direction_max: config.direction_max,
            color: config.color,
        };
        ball.initialize(table, rng);
        Ok(ball)
    }

    /// Serve from the net at a random height and heading
    ///
    /// The heading is spread over `[-direction_max, direction_max]` and is
    /// left unnormalized until the first contact.
    pub fn initialize(&mut self, table: &Table, rng: &mut GameRng) {
        let y = spread(rng, table.size().y - 4.0 * self.radius);
        self.center = Vec2::new(0.0, y);
        self.direction = spread(rng, 2.0 * self.direction_max);
    }

    /// Advance one frame and resolve contacts against both paddles and the walls.
    ///
    /// Every test runs against the displacement of this frame; a paddle and a
    /// wall contact can both apply in the same call.
    pub fn update(&mut self, dt: f32, left: &Player, right: &Player, table: &Table) -> Contacts {
        let mut contacts = Contacts::default();

        let covered = self.speed * dt;
        let displacement = Vec2::new(
            covered * self.direction.cos(),
            covered * self.direction.sin(),
        );
        self.center += displacement;

        if displacement.x < 0.0 && self.overlaps(left) {
            self.direction = normalize_direction(PI - self.direction);
            self.center.x = push_out(left.center.x + left.half_size.x + self.radius, 1.0);
            contacts.paddle = Some(Side::Left);
            debug!(x = self.center.x, direction = self.direction, "ball hit left paddle");
        }

        if displacement.x > 0.0 && self.overlaps(right) {
            self.direction = normalize_direction(PI - self.direction);
            self.center.x = push_out(right.center.x - right.half_size.x - self.radius, -1.0);
            contacts.paddle = Some(Side::Right);
            debug!(x = self.center.x, direction = self.direction, "ball hit right paddle");
        }

        let half = table.half_extent();
        let past_bottom = self.center.y - self.radius <= -half.y;
        let past_top = self.center.y + self.radius >= half.y;
        if (displacement.y < 0.0 && past_bottom) || (displacement.y > 0.0 && past_top) {
            self.direction = normalize_direction(-self.direction);

            if past_bottom {
                self.center.y = push_out(-half.y + self.radius, 1.0);
            } else if past_top {
                self.center.y = push_out(half.y - self.radius, -1.0);
            }
            contacts.wall = true;
            debug!(y = self.center.y, direction = self.direction, "ball hit wall");
        }

        contacts
    }

    pub fn position(&self) -> Vec2 {
        self.center
    }

    /// Bounding box of the ball against the paddle's box, on both axes
    fn overlaps(&self, paddle: &Player) -> bool {
        self.center.x - self.radius <= paddle.center.x + paddle.half_size.x
            && self.center.x + self.radius >= paddle.center.x - paddle.half_size.x
            && self.center.y - self.radius <= paddle.center.y + paddle.half_size.y
            && self.center.y + self.radius >= paddle.center.y - paddle.half_size.y
    }
}

/// Move `edge` strictly past itself in the `outward` direction (±1)
///
/// The offset is `CONTACT_EPSILON` or one f32 step at `edge`, whichever is
/// larger, so it never rounds away on large tables.
fn push_out(edge: f32, outward: f32) -> f32 {
    edge + outward * Params::CONTACT_EPSILON.max(edge.abs() * f32::EPSILON)
}

/// Uniform value in [-extent/2, extent/2]
fn spread(rng: &mut GameRng, extent: f32) -> f32 {
    let half = extent / 2.0;
    if half > 0.0 {
        rng.0.gen_range(-half..=half)
    } else {
        0.0
    }
}
