use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("failed to read driver track: {0}")]
    Io(#[from] io::Error),
    #[error("invalid driver track document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("driver track contains no positions")]
    EmptyTrack,
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
}
