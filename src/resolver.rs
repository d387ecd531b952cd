//! Contact resolution against solids, then pickup and goal detection.

use glam::Vec2;
use log::{debug, info, trace};

use crate::api::NarrowphaseApi;
use crate::hud;
use crate::narrowphase::Narrowphase;
use crate::types::*;
use crate::world::World;

/// Offset from the body's top-left corner to where pickup messages appear.
const MESSAGE_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

/// Correct `body` for platform, ground and wall contact.
///
/// Platforms are processed in order, landing before ceiling; the last
/// contact wins. The ground plane runs after every platform.
pub fn resolve_solids(body: &mut Body, platforms: &[Platform], cfg: &PhysicsConfig) {
    for (i, platform) in platforms.iter().enumerate() {
        if let Some(pos) = Narrowphase::sweep_landing(body.rect(), body.vel, platform.rect) {
            trace!("landed on platform {i} at y={}", pos.y);
            body.pos = pos;
            body.vel.y = 0.0;
            body.grounded = true;
        }
        // Sees the velocity left by a landing above. Does not touch grounded.
        if let Some(pos) = Narrowphase::sweep_ceiling(body.rect(), body.vel, platform.rect) {
            trace!("hit underside of platform {i} at y={}", pos.y);
            body.pos = pos;
            body.vel.y = 0.0;
        }
    }

    if body.pos.y >= cfg.ground_level {
        body.pos.y = cfg.ground_level;
        body.vel.y = 0.0;
        body.grounded = true;
    }

    body.pos.x = body.pos.x.max(0.0).min(cfg.max_x());
}

/// Score overlapped collectibles and check the goal against the resolved body.
///
/// Nothing triggers once the session is finished.
pub fn detect_pickups(body: &Body, world: &mut World, stats: &mut Stats) -> Vec<Event> {
    let mut events = Vec::new();
    if stats.goal_reached() {
        return events;
    }
    let player = body.rect();
    let anchor = body.pos + MESSAGE_OFFSET;

    for index in 0..world.collectibles.len() {
        let item = &world.collectibles[index];
        if item.collected || !Narrowphase::overlap_rect_rect(player, item.rect) {
            continue;
        }
        let points = item.value;
        world.collectibles[index].collected = true;
        stats.score = stats.score.saturating_add(points);

        let (collected, total) = world.progress();
        let message = world.collectibles[index]
            .message
            .clone()
            .unwrap_or_else(|| hud::pickup_phrase(collected).to_string());
        debug!("collected item {index} (+{points}, score {}, {collected}/{total})", stats.score);
        events.push(Event::ItemCollected {
            index,
            points,
            message,
            collected,
            total,
            anchor,
        });
    }

    if let Some(goal) = &world.goal {
        if Narrowphase::overlap_rect_rect(player, goal.rect) {
            info!("goal reached with score {} after {}s", stats.score, stats.elapsed);
            stats.phase = Phase::Finished;
            events.push(Event::GoalReached {
                message: goal.message.clone(),
                anchor,
            });
        }
    }

    events
}
