use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Axis-aligned rectangle anchored at its top-left corner (y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub(crate) fn check(&self, what: &'static str) -> Result<(), LayoutError> {
        if !(self.pos.is_finite() && self.size.is_finite()) {
            return Err(LayoutError::NonFinite { what });
        }
        if self.size.x < 0.0 || self.size.y < 0.0 {
            return Err(LayoutError::NegativeSize { what });
        }
        Ok(())
    }
}

/// The player's moving body.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
}

impl Body {
    /// A body at rest at `pos`, not yet grounded.
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Static solid the body can stand on or bump its head against.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

/// Pickup worth `value` points, scored at most once per session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub value: u32,
    /// Fixed pickup text. `None` uses the rotating water-can phrases.
    #[serde(default)]
    pub message: Option<String>,
    /// Counts toward the progress bar.
    #[serde(default = "default_tracked")]
    pub tracked: bool,
    #[serde(skip)]
    pub collected: bool,
}

fn default_tracked() -> bool {
    true
}

impl Collectible {
    /// Water can: 100 points, tracked, rotating phrase.
    pub fn water_can(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, 20.0, 24.0),
            value: 100,
            message: None,
            tracked: true,
            collected: false,
        }
    }

    /// The big water bottle: 1000 points, not tracked.
    pub fn water_bottle(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, 24.0, 36.0),
            value: 1000,
            message: Some("💧 You found the big water!".to_string()),
            tracked: false,
            collected: false,
        }
    }
}

/// Terminal target of the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
    #[serde(default = "default_goal_message")]
    pub message: String,
}

fn default_goal_message() -> String {
    "🎉 You did it! Everyone has water!".to_string()
}

impl Goal {
    pub fn door(rect: Rect) -> Self {
        Self {
            rect,
            message: default_goal_message(),
        }
    }
}

/// Snapshot of abstract input for one tick. `jump` and `reset` are press edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reset: bool,
}

impl Intents {
    pub fn moving(&self) -> bool {
        self.left || self.right
    }
}

/// Session lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the first movement intent.
    #[default]
    Idle,
    Running,
    /// Goal reached; nothing scores until reset.
    Finished,
}

/// Score and clock bookkeeping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub score: u32,
    /// Whole seconds.
    pub elapsed: u32,
    pub phase: Phase,
}

impl Stats {
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn goal_reached(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// Lifecycle event emitted by a tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// First movement intent of the session.
    SessionStarted,
    ItemCollected {
        /// Index into `World::collectibles`.
        index: usize,
        points: u32,
        message: String,
        /// Tracked collectibles picked up so far, including this one.
        collected: usize,
        total: usize,
        /// Where to show the message.
        anchor: Vec2,
    },
    GoalReached {
        message: String,
        anchor: Vec2,
    },
    SessionReset,
}

/// Physics constants and world bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every tick (px/tick²).
    pub gravity: f32,
    /// Horizontal speed while a direction is held (px/tick).
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_velocity: f32,
    /// Highest permitted top-left y of the body.
    pub ground_level: f32,
    pub world_width: f32,
    pub player_size: Vec2,
    pub spawn: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            move_speed: 4.0,
            jump_velocity: -14.0,
            ground_level: 370.0,
            world_width: 800.0,
            player_size: Vec2::new(30.0, 30.0),
            spawn: Vec2::new(50.0, 0.0),
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) config; missing fields keep their defaults.
    pub fn from_json(src: &str) -> Result<Self, LayoutError> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let scalars = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("jump_velocity", self.jump_velocity),
            ("ground_level", self.ground_level),
            ("world_width", self.world_width),
        ];
        for (what, v) in scalars {
            if !v.is_finite() {
                return Err(LayoutError::NonFinite { what });
            }
        }
        if !self.spawn.is_finite() {
            return Err(LayoutError::NonFinite { what: "spawn" });
        }
        Rect { pos: Vec2::ZERO, size: self.player_size }.check("player_size")?;
        if self.player_size.x > self.world_width {
            return Err(LayoutError::PlayerTooWide {
                player: self.player_size.x,
                world: self.world_width,
            });
        }
        Ok(())
    }

    /// Largest permitted x of the body's left edge. Never below 0, so a
    /// player wider than the world is pinned at the left wall.
    pub fn max_x(&self) -> f32 {
        (self.world_width - self.player_size.x).max(0.0)
    }
}
