//! Module errors

use std::path::PathBuf;
use thiserror::Error;

use common::SessionPhase;
use sampler_rs::SamplerError;
use transmitter_rs::TransmitError;

/// Lifecycle command that was refused.
pub type Command = &'static str;

#[derive(Error, Debug)]
pub enum SessionError {
    /// `start` while running or `stop` while idle. Nothing was changed.
    #[error("cannot {attempted} a session that is {from}")]
    InvalidStateTransition {
        from: SessionPhase,
        attempted: Command,
    },

    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("transmitter error: {0}")]
    Transmit(#[from] TransmitError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
