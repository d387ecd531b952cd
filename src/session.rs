use glam::Vec2;
use log::info;
use serde::Serialize;

use crate::api::SessionApi;
use crate::clock::SessionClock;
use crate::error::LayoutError;
use crate::hud;
use crate::integrator::integrate;
use crate::resolver::{detect_pickups, resolve_solids};
use crate::types::*;
use crate::world::World;

/// One play-through of a world: the body, the layout and the score/clock.
pub struct Session {
    cfg: PhysicsConfig,
    frame_counter: u32,

    body: Body,
    world: World,
    stats: Stats,
    clock: SessionClock,
}

/// Everything the presentation layer needs after a tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderState {
    pub frame: u32,
    pub player: Vec2,
    pub grounded: bool,
    /// Parallel to `World::collectibles`; collected ones are hidden.
    pub collected: Vec<bool>,
    pub goal_reached: bool,
    pub running: bool,
    pub score: u32,
    pub elapsed: u32,
    pub tracked_collected: usize,
    pub tracked_total: usize,
    pub progress: f32,
}

impl RenderState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Session {
    /// Like `SessionApi::new`, but rejects a config or layout that fails validation.
    pub fn try_new(cfg: PhysicsConfig, world: World) -> Result<Self, LayoutError> {
        cfg.validate()?;
        world.validate()?;
        Ok(<Self as SessionApi>::new(cfg, world))
    }
}

impl SessionApi for Session {
    fn new(cfg: PhysicsConfig, mut world: World) -> Self {
        world.restore_collectibles();
        let body = Body::at(cfg.spawn, cfg.player_size);
        Self {
            cfg,
            frame_counter: 0,
            body,
            world,
            stats: Stats::default(),
            clock: SessionClock::default(),
        }
    }

    fn tick(&mut self, mut intents: Intents) -> Vec<Event> {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let mut events = Vec::new();

        if intents.reset {
            self.reset();
            events.push(Event::SessionReset);
            return events;
        }

        match self.stats.phase {
            Phase::Idle if intents.moving() => {
                info!("session started at frame {}", self.frame_counter);
                self.stats.phase = Phase::Running;
                events.push(Event::SessionStarted);
            }
            Phase::Finished => {
                intents.left = false;
                intents.right = false;
            }
            _ => {}
        }

        integrate(&mut self.body, intents, &self.cfg);
        resolve_solids(&mut self.body, &self.world.platforms, &self.cfg);
        events.extend(detect_pickups(&self.body, &mut self.world, &mut self.stats));
        events
    }

    fn reset(&mut self) {
        info!(
            "session reset (score {}, elapsed {}s)",
            self.stats.score, self.stats.elapsed
        );
        self.body = Body::at(self.cfg.spawn, self.cfg.player_size);
        self.world.restore_collectibles();
        self.stats = Stats::default();
        self.clock.reset();
    }

    fn advance_clock(&mut self, dt: f32) -> u32 {
        if !self.stats.running() {
            self.clock.reset();
            return 0;
        }
        let secs = self.clock.accumulate(dt);
        self.stats.elapsed = self.stats.elapsed.saturating_add(secs);
        secs
    }

    fn clock_second(&mut self) {
        if self.stats.running() {
            self.stats.elapsed = self.stats.elapsed.saturating_add(1);
        }
    }

    fn snapshot(&self) -> RenderState {
        let (tracked_collected, tracked_total) = self.world.progress();
        RenderState {
            frame: self.frame_counter,
            player: self.body.pos,
            grounded: self.body.grounded,
            collected: self.world.collectibles.iter().map(|c| c.collected).collect(),
            goal_reached: self.stats.goal_reached(),
            running: self.stats.running(),
            score: self.stats.score,
            elapsed: self.stats.elapsed,
            tracked_collected,
            tracked_total,
            progress: hud::progress_percent(tracked_collected, tracked_total),
        }
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn world(&self) -> &World {
        &self.world
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn config(&self) -> &PhysicsConfig {
        &self.cfg
    }
}
