use tracing::debug;

use crate::clusterer::{
    dbscan::dbscan,
    error::ClusterError,
    haversine::{EARTH_RADIUS_KM, central_angle},
    types::ClusterResult,
};
use crate::user::{UserRecord, prepare_locations};

/// Neighborhood size (self included) for a user to seed a cluster
pub const MIN_SAMPLES: usize = 2;

/// Default neighbor radius in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 1.0;

/// Group users whose positions are density-reachable within `max_distance_km`.
///
/// Users without a usable coordinate pair are skipped. The radius is converted
/// to an angle (`max_distance_km / 6371`) and compared against the central
/// angle between points. Users that reach nobody are dropped as noise.
pub fn cluster_by_location(
    users: &[UserRecord],
    max_distance_km: f64,
) -> Result<Vec<ClusterResult>, ClusterError> {
    if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
        return Err(ClusterError::InvalidParameter {
            name: "max_distance_km",
            message: "must be a positive, finite distance",
        });
    }

    let prepared = prepare_locations(users);
    debug!(
        valid = prepared.len(),
        excluded = prepared.excluded,
        "prepared users for location clustering"
    );

    if prepared.len() < 2 {
        return Ok(Vec::new());
    }

    let eps = max_distance_km / EARTH_RADIUS_KM;
    let points = prepared.features();
    let labels = dbscan(points.len(), MIN_SAMPLES, |i, j| {
        central_angle(*points[i], *points[j]) <= eps
    });

    let clusters = ClusterResult::from_labels(&prepared.ids(), &labels);
    debug!(eps, clusters = clusters.len(), "location clustering finished");

    Ok(clusters)
}
