use hecs::World;

use crate::{Ball, Player, Transform};

/// Copy logical centres into the renderable handles
pub fn sync_transforms(world: &mut World) {
    for (_entity, (player, transform)) in world.query_mut::<(&Player, &mut Transform)>() {
        transform.position = player.position();
    }
    for (_entity, (ball, transform)) in world.query_mut::<(&Ball, &mut Transform)>() {
        transform.position = ball.position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameConfig, GameRng, Table};
    use glam::Vec2;

    #[test]
    fn test_transforms_follow_entities() {
        let config = GameConfig::new();
        let table = Table::new(&config.table).unwrap();
        let mut world = World::new();
        let paddle = create_paddle(&mut world, &config.left, &table).unwrap();
        let ball = create_ball(&mut world, &config.ball, &table, &mut GameRng::default()).unwrap();

        world.get::<&mut Player>(paddle).unwrap().center.y = 0.25;
        world.get::<&mut Ball>(ball).unwrap().center = Vec2::new(0.5, -0.5);
        sync_transforms(&mut world);

        assert_eq!(world.get::<&Transform>(paddle).unwrap().position.y, 0.25);
        assert_eq!(
            world.get::<&Transform>(ball).unwrap().position,
            Vec2::new(0.5, -0.5)
        );
    }
}
