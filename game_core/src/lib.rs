//! Frame-stepped Pong: a table, two paddles and a ball.
//!
//! Entities live in a [`hecs::World`]; each frame [`step`] runs the systems
//! in a fixed order so the ball always collides with this frame's paddles.

pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod player;
pub mod resources;
pub mod systems;
pub mod table;

pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use player::*;
pub use resources::*;
pub use systems::*;
pub use table::*;

use hecs::World;

/// Run one frame of the Pong simulation
///
/// Order: paddles, then ball, then scoring, then transforms.
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &GameConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let dt = time.dt.min(config.max_dt);
    let frame = Time::new(dt, time.now + dt);

    // Clear events at start of frame
    events.clear();

    // 1. Move paddles based on held keys
    move_paddles(world, &frame);

    // 2. Move ball and resolve paddle/wall contacts
    move_ball(world, &frame, table, events);

    // 3. Check scoring (ball left the table)
    check_scoring(world, table, events, rng);

    // 4. Publish positions to the renderer
    sync_transforms(world);

    time.now += dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    config: &PlayerConfig,
    table: &Table,
) -> Result<hecs::Entity, ConfigError> {
    let player = Player::new(config, table)?;
    let transform = Transform {
        position: player.position(),
    };
    Ok(world.spawn((player, config.key_codes.clone(), transform)))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &BallConfig,
    table: &Table,
    rng: &mut GameRng,
) -> Result<hecs::Entity, ConfigError> {
    let ball = Ball::new(config, table, rng)?;
    let transform = Transform {
        position: ball.position(),
    };
    Ok(world.spawn((ball, transform)))
}
