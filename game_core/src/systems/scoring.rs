use hecs::World;
use tracing::debug;

use crate::{Ball, Events, GameRng, Player, Side, Table};

/// Award a point once the ball has fully left the table, then serve again
pub fn check_scoring(world: &mut World, table: &Table, events: &mut Events, rng: &mut GameRng) {
    let half_width = table.half_extent().x;
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.center.x + ball.radius < -half_width {
            scorer = Some(Side::Right);
        } else if ball.center.x - ball.radius > half_width {
            scorer = Some(Side::Left);
        } else {
            continue;
        }
        ball.initialize(table, rng);
    }

    let Some(side) = scorer else {
        return;
    };

    for (_entity, player) in world.query_mut::<&mut Player>() {
        if player.side == side {
            player.add_point();
            debug!(?side, score = player.score, "point scored");
        }
    }

    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
}

/// First side to reach `win_score`, if any
pub fn winner(world: &World, win_score: u32) -> Option<Side> {
    world
        .query::<&Player>()
        .iter()
        .find(|(_e, player)| player.score >= win_score)
        .map(|(_e, player)| player.side)
}
