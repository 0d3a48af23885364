use hecs::World;

use crate::{find_paddles, Ball, PaddleInput, Side};

/// Calculate AI input for the paddle on `side`
///
/// Strategy:
/// 1. If the ball is heading towards us, predict the intercept y.
/// 2. If the intercept is outside a deadzone around the paddle centre, move there.
/// 3. If the ball is heading away, drift back to the middle to cover the most area.
pub fn ai_input(world: &World, side: Side) -> PaddleInput {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);
    let paddle = find_paddles(world).map(|(left, right)| match side {
        Side::Left => left,
        Side::Right => right,
    });

    let (Some(ball), Some(paddle)) = (ball, paddle) else {
        return PaddleInput::default();
    };

    let vel = ball.speed * glam::Vec2::new(ball.direction.cos(), ball.direction.sin());
    let approaching = match side {
        Side::Left => vel.x < 0.0,
        Side::Right => vel.x > 0.0,
    };

    let target_y = if approaching {
        let time_to_reach = (paddle.center.x - ball.center.x) / vel.x;
        (ball.center.y + vel.y * time_to_reach).clamp(paddle.lower, paddle.upper)
    } else {
        0.0
    };

    let diff = target_y - paddle.center.y;
    let deadzone = paddle.half_size.y * 0.3;
    PaddleInput::new(diff > deadzone, diff < -deadzone)
}
