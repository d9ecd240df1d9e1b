use thiserror::Error;

/// Failures that stop a game from being constructed.
///
/// Running out of projectile slots or failing to find an enemy shooter are
/// normal gameplay and never show up here.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not allocate game state: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
