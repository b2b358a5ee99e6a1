use shared::Coordinate;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Total length of the recorded trajectory, summed over consecutive samples.
pub fn track_distance_km(positions: &[Coordinate]) -> f64 {
    positions.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}

pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
