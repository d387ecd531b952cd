//! Per-tick velocity and position update.

use crate::types::{Body, Intents, PhysicsConfig};

/// Advance `body` by one tick of movement.
///
/// Horizontal velocity is set, not accelerated. A jump is only honoured while
/// grounded. Gravity always applies; the resolver zeroes it on contact.
/// `grounded` is cleared so the resolver can re-derive it from this tick's contacts.
pub fn integrate(body: &mut Body, intents: Intents, cfg: &PhysicsConfig) {
    body.vel.x = if intents.left {
        -cfg.move_speed
    } else if intents.right {
        cfg.move_speed
    } else {
        0.0
    };

    if intents.jump && body.grounded {
        body.vel.y = cfg.jump_velocity;
    }

    body.vel.y += cfg.gravity;
    body.pos += body.vel;
    body.grounded = false;
}
