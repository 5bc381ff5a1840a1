use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clusterer::ClusterResult;

pub const NO_CLUSTERS_MESSAGE: &str = "No clusters found. Need at least 2 users with valid data.";

/// Which dimension a clustering pass groups users on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Location,
    Interest,
}

impl ClusterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterType::Location => "location",
            ClusterType::Interest => "interest",
        }
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope returned to callers of either clustering pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<ClusterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_clusters: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub clusters: Vec<ClusterResult>,
}

impl ClusterResponse {
    /// Failed envelope carrying a human-readable reason
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            cluster_type: None,
            total_clusters: None,
            message: Some(message.into()),
            clusters: Vec::new(),
        }
    }
}

/// Wrap clustering output. An empty list becomes a failure envelope.
pub fn format_response(clusters: Vec<ClusterResult>, cluster_type: ClusterType) -> ClusterResponse {
    if clusters.is_empty() {
        return ClusterResponse::failure(NO_CLUSTERS_MESSAGE);
    }

    ClusterResponse {
        success: true,
        cluster_type: Some(cluster_type),
        total_clusters: Some(clusters.len()),
        message: None,
        clusters,
    }
}
