use std::{fs::File, io::Read, path::Path};

use shared::{Coordinate, Driver, DriverTrack};

use crate::error::TrackError;

/// A validated driver track. Construction guarantees at least one recorded
/// position, so the first/last lookups backing the journey markers cannot go
/// out of range.
#[derive(Debug, Clone)]
pub struct Journey {
    track: DriverTrack,
}

impl Journey {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrackError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, TrackError> {
        let track: DriverTrack = serde_json::from_reader(reader)?;
        Self::from_track(track)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TrackError> {
        let track: DriverTrack = serde_json::from_str(raw)?;
        Self::from_track(track)
    }

    pub fn from_track(track: DriverTrack) -> Result<Self, TrackError> {
        if track.positions.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        Ok(Self { track })
    }

    pub fn driver(&self) -> &Driver {
        &self.track.driver
    }

    pub fn positions(&self) -> &[Coordinate] {
        &self.track.positions
    }

    /// First recorded position, where the journey-start marker sits.
    pub fn start(&self) -> &Coordinate {
        &self.track.positions[0]
    }

    /// Last recorded position, where the journey-end marker sits.
    pub fn end(&self) -> &Coordinate {
        &self.track.positions[self.track.positions.len() - 1]
    }
}
