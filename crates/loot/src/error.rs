//! Error types for chest configuration and placement.

/// Invalid chest settings. Raised once at startup, never during a wave.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveCost { name: &'static str, value: f32 },
    #[error(
        "chest difficulty value minus the cheaper reward value must be positive, got {value}"
    )]
    NonPositiveChestDivisor { value: f32 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("I/O while reading chest settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}

/// Why a spawn point could not be sampled.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no floor anchor known; has the room-ready event been delivered?")]
    NoFloorAnchor,
    #[error("no room is currently loaded")]
    NoRoom,
}
