use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::TrackError;
use crate::track::Journey;
use shared::Coordinate;

/// Encode the full journey as a base64-wrapped GPX 1.1 document with one
/// track segment, one track point per recorded sample.
pub fn track_gpx_base64(journey: &Journey) -> Result<String, TrackError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some("driver-journey-tracker".into()),
        ..Default::default()
    };
    let mut track = Track {
        name: Some(journey.driver().name.clone()),
        ..Default::default()
    };

    let mut segment = TrackSegment::new();
    for waypoint in journey.positions().iter().map(to_waypoint) {
        segment.points.push(waypoint);
    }
    track.segments.push(segment);
    gpx.tracks.push(track);

    let mut buffer = Vec::new();
    gpx::write(&gpx, &mut buffer)?;
    Ok(BASE64.encode(buffer))
}

/// The journey as a `data:` URL usable as a download link, no server round
/// trip involved.
pub fn track_gpx_data_url(journey: &Journey) -> Result<String, TrackError> {
    Ok(format!(
        "data:application/gpx+xml;base64,{}",
        track_gpx_base64(journey)?
    ))
}

fn to_waypoint(coord: &Coordinate) -> Waypoint {
    let mut waypoint = Waypoint::new(Point::new(coord.longitude, coord.latitude));
    // Track points with an unparseable timestamp keep their place in the
    // segment, they just carry no <time>.
    waypoint.time = OffsetDateTime::parse(&coord.timestamp, &Rfc3339)
        .ok()
        .map(Into::into);
    waypoint
}
