pub mod config;
pub use config::{Config, DisplayConfig, ExportConfig, InputConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Hist256Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: cannot parse {text:?} as an integer: {message}")]
    Parse {
        line: usize,
        text: String,
        message: String,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Hist256Error>;
