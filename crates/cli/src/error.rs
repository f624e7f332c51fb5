use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load config: {0}")]
    Config(#[from] config::Error),

    #[error("Failed to check processes: {0}")]
    Scan(#[from] procscan::Error),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}
