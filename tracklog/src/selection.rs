use serde::Serialize;
use shared::{Coordinate, Driver};

use crate::time::display_timestamp;

/// Which waypoint the popup is showing, if any. A marker click always
/// overwrites the current value without an intermediate deselect; only an
/// explicit popup dismissal clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Selected(Coordinate),
}

impl Selection {
    pub fn select(&mut self, waypoint: Coordinate) {
        *self = Selection::Selected(waypoint);
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn waypoint(&self) -> Option<&Coordinate> {
        match self {
            Selection::None => None,
            Selection::Selected(waypoint) => Some(waypoint),
        }
    }
}

/// Text shown in the popup for a selected waypoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupContent {
    pub driver_name: String,
    pub device: String,
    pub phone: String,
    pub timestamp: String,
}

impl PopupContent {
    pub fn new(driver: &Driver, waypoint: &Coordinate) -> Self {
        Self {
            driver_name: driver.name.clone(),
            device: driver.device_label(),
            phone: driver.phone.display(),
            timestamp: display_timestamp(&waypoint.timestamp),
        }
    }
}
