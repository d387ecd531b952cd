use thiserror::Error;

/// Rejected physics config or world layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("malformed layout json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{what} is not finite")]
    NonFinite { what: &'static str },

    #[error("{what} has a negative size")]
    NegativeSize { what: &'static str },

    #[error("player width {player} does not fit in world width {world}")]
    PlayerTooWide { player: f32, world: f32 },
}
