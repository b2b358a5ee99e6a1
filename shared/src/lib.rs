use serde::{Deserialize, Serialize};

/// A single position sample from the driver's recorded log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
}

impl Coordinate {
    /// Synthetic entry heading the pin sequence: the null island with a
    /// timestamp no recorded sample carries.
    pub fn sentinel() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            timestamp: "none".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub national_number: String,
    pub country_calling_code: String,
}

impl Phone {
    /// Calling code, dash, national number: "1-5551234".
    pub fn display(&self) -> String {
        format!("{}-{}", self.country_calling_code, self.national_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: Phone,
    pub os: String,
    pub version: String,
}

impl Driver {
    /// "iOS v17" style label for the driver's device.
    pub fn device_label(&self) -> String {
        format!("{} v{}", self.os, self.version)
    }
}

/// The whole input document: one driver, one ordered position log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverTrack {
    pub driver: Driver,
    pub positions: Vec<Coordinate>,
}
