use hecs::World;

use crate::{Ball, Events, Player, Side, Table, Time};

/// Apply paddle movement based on held keys
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.update(time.dt);
    }
}

/// Move the ball and resolve its contacts against this frame's paddles
pub fn move_ball(world: &mut World, time: &Time, table: &Table, events: &mut Events) {
    // Copy paddles out first so the ball query can borrow the world mutably
    let Some((left, right)) = find_paddles(world) else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let contacts = ball.update(time.dt, &left, &right, table);
        if contacts.paddle.is_some() {
            events.ball_hit_paddle = true;
        }
        if contacts.wall {
            events.ball_hit_wall = true;
        }
    }
}

/// Snapshot of the (left, right) paddles, if both exist
pub fn find_paddles(world: &World) -> Option<(Player, Player)> {
    let mut left = None;
    let mut right = None;
    for (_entity, player) in world.query::<&Player>().iter() {
        match player.side {
            Side::Left => left = Some(*player),
            Side::Right => right = Some(*player),
        }
    }
    Some((left?, right?))
}
