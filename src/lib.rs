//! platcore: headless platformer core (fixed-step physics, swept platform contact, pickups)

pub mod types;
pub mod api;
pub mod error;
pub mod world;
pub mod narrowphase;
pub mod integrator;
pub mod resolver;
pub mod session;
pub mod clock;
pub mod input;
pub mod hud;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::LayoutError;
pub use crate::world::World;
pub use crate::session::{RenderState, Session};
pub use crate::input::InputState;
