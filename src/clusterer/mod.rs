mod centroid;
mod dbscan;
mod error;
mod geo;
mod haversine;
mod interest;
mod kmeans;
mod similarity;
mod types;


pub use centroid::compute_centroid;
pub use dbscan::dbscan;
pub use error::ClusterError;
pub use geo::{DEFAULT_MAX_DISTANCE_KM, MIN_SAMPLES, cluster_by_location};
pub use haversine::{EARTH_RADIUS_KM, central_angle, haversine_km};
pub use interest::{DEFAULT_N_CLUSTERS, DEFAULT_TOP_N, cluster_by_interest, find_similar_users};
pub use kmeans::{KMeans, KMeansFit};
pub use similarity::{cosine_similarity, squared_euclidean};
pub use types::{ClusterResult, MIN_CLUSTER_SIZE};
