use crate::user::GeoPoint;

/// Mean Earth radius used for every distance and radius conversion
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle angle between two points, in radians (unit sphere).
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`, `c = 2·atan2(√a, √(1−a))`
pub fn central_angle(p: GeoPoint, q: GeoPoint) -> f64 {
    let lat1 = p.lat.to_radians();
    let lon1 = p.lon.to_radians();
    let lat2 = q.lat.to_radians();
    let lon2 = q.lon.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine distance in kilometers
pub fn haversine_km(p: GeoPoint, q: GeoPoint) -> f64 {
    EARTH_RADIUS_KM * central_angle(p, q)
}
