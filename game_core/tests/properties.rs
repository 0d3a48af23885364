use game_core::*;
use glam::Vec2;
use proptest::prelude::*;
use std::f32::consts::{PI, TAU};

fn arena() -> (Table, Player, Player) {
    let config = GameConfig::new();
    let table = Table::new(&config.table).unwrap();
    let left = Player::new(&config.left, &table).unwrap();
    let right = Player::new(&config.right, &table).unwrap();
    (table, left, right)
}

fn ball_at(center: Vec2, direction: f32) -> Ball {
    let config = BallConfig::default();
    Ball {
        center,
        radius: config.radius,
        direction,
        speed: config.speed,
        direction_max: config.direction_max,
        color: config.color,
    }
}

proptest! {
    #[test]
    fn normalized_direction_is_in_range(angle in -1000.0f32..1000.0) {
        let d = normalize_direction(angle);
        prop_assert!((0.0..TAU).contains(&d));
    }

    #[test]
    fn paddle_stays_within_bounds(
        start in -0.85f32..0.85,
        frames in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.5), 1..50),
    ) {
        let (_table, mut player, _) = arena();
        player.center.y = start;
        for (up, down, dt) in frames {
            player.set_input(up, down);
            player.update(dt);
            prop_assert!(player.lower <= player.center.y && player.center.y <= player.upper);
        }
    }

    #[test]
    fn ball_stays_between_walls(
        x in -1.3f32..1.3,
        y in -0.97f32..0.97,
        direction in -10.0f32..10.0,
        dts in prop::collection::vec(0.0f32..0.05, 1..100),
    ) {
        let (table, left, right) = arena();
        let half = table.half_extent();
        let mut ball = ball_at(Vec2::new(x, y), direction);
        for dt in dts {
            let contacts = ball.update(dt, &left, &right, &table);
            prop_assert!(ball.center.y >= -half.y - 1e-4 && ball.center.y <= half.y + 1e-4);
            if contacts.paddle.is_some() || contacts.wall {
                prop_assert!((0.0..TAU).contains(&ball.direction));
            }
            if ball.center.x.abs() > half.x {
                break;
            }
        }
    }

    #[test]
    fn left_paddle_reflection_law(dy in -0.1f32..0.1, direction in (0.6 * PI)..(1.4 * PI)) {
        let (table, left, right) = arena();
        let start = Vec2::new(left.center.x + left.half_size.x + 0.03, left.center.y + dy);
        let mut ball = ball_at(start, direction);

        let contacts = ball.update(0.02, &left, &right, &table);

        prop_assert_eq!(contacts.paddle, Some(Side::Left));
        prop_assert_eq!(ball.direction, normalize_direction(PI - direction));
        prop_assert!(ball.center.x > left.center.x + left.half_size.x + ball.radius);
    }
}
