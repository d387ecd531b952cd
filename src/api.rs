use glam::Vec2;

use crate::session::RenderState;
use crate::types::*;
use crate::world::World;

/// Public API contract for a single play session.
pub trait SessionApi {
    /// Construct a session at the spawn point with every collectible available.
    fn new(cfg: PhysicsConfig, world: World) -> Self
    where
        Self: Sized;

    // --- Frame lifecycle ---------------------------------------------------

    /// Run one tick: integrate, resolve solids, then pickups and goal.
    /// Returns the events triggered this tick, in order.
    fn tick(&mut self, intents: Intents) -> Vec<Event>;

    /// Return to the initial state: spawn position, score and clock zeroed,
    /// every collectible available again, phase `Idle`.
    fn reset(&mut self);

    // --- Session clock -----------------------------------------------------

    /// Feed host frame time (seconds). Returns whole seconds added to elapsed.
    fn advance_clock(&mut self, dt: f32) -> u32;

    /// One tick of an external 1 Hz timer.
    fn clock_second(&mut self);

    // --- Render surface ----------------------------------------------------

    /// Everything the presentation layer needs after a tick.
    fn snapshot(&self) -> RenderState;

    fn body(&self) -> &Body;

    fn world(&self) -> &World;

    fn stats(&self) -> &Stats;

    fn config(&self) -> &PhysicsConfig;
}

/// Narrowphase primitive tests over top-left rectangles.
pub trait NarrowphaseApi {
    // Overlaps --------------------------------------------------------------

    /// Strict AABB overlap; touching edges do not count.
    fn overlap_rect_rect(a: Rect, b: Rect) -> bool;

    /// Strict overlap of the x-intervals only.
    fn overlap_x(a: Rect, b: Rect) -> bool;

    // Sweeps (vertical, previous edge inferred from velocity) ---------------

    /// Bottom edge of `a` crossed `b`'s top edge during a move of `vel`.
    /// Returns the corrected top-left position of `a`.
    fn sweep_landing(a: Rect, vel: Vec2, b: Rect) -> Option<Vec2>;

    /// Top edge of `a` crossed `b`'s bottom edge during a move of `vel`.
    /// Returns the corrected top-left position of `a`.
    fn sweep_ceiling(a: Rect, vel: Vec2, b: Rect) -> Option<Vec2>;
}
