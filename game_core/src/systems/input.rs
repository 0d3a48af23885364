//! Keyboard input handling

use hecs::World;

use crate::{KeyCodes, Player};

/// Record a key press or release on the paddle bound to `key`.
///
/// Returns false when no paddle uses the key.
pub fn handle_key(world: &mut World, key: &str, pressed: bool) -> bool {
    for (_entity, (player, keys)) in world.query_mut::<(&mut Player, &KeyCodes)>() {
        if key == keys.up {
            player.input.up = pressed;
            return true;
        }
        if key == keys.down {
            player.input.down = pressed;
            return true;
        }
    }
    false
}

/// Release every held key, e.g. when the window loses focus
pub fn release_all(world: &mut World) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.set_input(false, false);
    }
}
