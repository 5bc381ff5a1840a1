// Public API exports
pub mod clusterer;
pub mod payload;
pub mod response;
pub mod server;
pub mod user;
pub mod vectorizer;

// Re-export main types for convenience
pub use user::{
    GeoPoint, Location, Prepared, UserFeature, UserId, UserRecord, prepare_interests,
    prepare_locations,
};

pub use clusterer::{
    ClusterError, ClusterResult, cluster_by_interest, cluster_by_location, find_similar_users,
    haversine_km,
};

pub use response::{ClusterResponse, ClusterType, ValidationError, format_response, validate};

pub use vectorizer::{TfidfMatrix, TfidfVectorizer};

pub use server::{ServerConfig, router, serve};
