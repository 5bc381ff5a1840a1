use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::clusterer::{
    ClusterError, ClusterResult, DEFAULT_MAX_DISTANCE_KM, DEFAULT_N_CLUSTERS, DEFAULT_TOP_N,
    cluster_by_interest, cluster_by_location, find_similar_users,
};
use crate::response::{ClusterResponse, ClusterType, format_response, validate};
use crate::user::{UserId, UserRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// Neighbor radius in kilometers
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterestRequest {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default = "default_n_clusters")]
    pub n_clusters: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarRequest {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub success: bool,
    pub user_ids: Vec<UserId>,
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

fn default_n_clusters() -> usize {
    DEFAULT_N_CLUSTERS
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ML Service is running" }))
}

pub async fn describe() -> impl IntoResponse {
    Json(json!({
        "message": "ML Service is working correctly",
        "endpoints": {
            "location_clustering": "/api/cluster/location",
            "interest_clustering": "/api/cluster/interest",
            "similar_users": "/api/similar",
        }
    }))
}

pub async fn cluster_location(Json(req): Json<LocationRequest>) -> Response {
    let max_distance = req.max_distance;
    run_clustering(ClusterType::Location, req.users, move |users| {
        cluster_by_location(users, max_distance)
    })
    .await
}

pub async fn cluster_interest(Json(req): Json<InterestRequest>) -> Response {
    let n_clusters = req.n_clusters;
    run_clustering(ClusterType::Interest, req.users, move |users| {
        cluster_by_interest(users, n_clusters)
    })
    .await
}

pub async fn similar_users(Json(req): Json<SimilarRequest>) -> Response {
    let SimilarRequest {
        interests,
        users,
        top_n,
    } = req;
    let candidates = users.len();

    let ranked =
        tokio::task::spawn_blocking(move || find_similar_users(&interests, &users, top_n)).await;

    match ranked {
        Ok(user_ids) => {
            info!(candidates, matches = user_ids.len(), "similar users ranked");
            Json(SimilarResponse {
                success: true,
                user_ids,
            })
            .into_response()
        }
        Err(e) => {
            error!("similarity ranking task failed: {e}");
            internal_error(e)
        }
    }
}

/// Validate, cluster and wrap: 400 on rejected input, 500 on algorithm failure.
///
/// The clustering pass runs on the blocking pool so large batches do not
/// stall the async workers.
async fn run_clustering<F>(
    cluster_type: ClusterType,
    users: Vec<UserRecord>,
    cluster: F,
) -> Response
where
    F: FnOnce(&[UserRecord]) -> Result<Vec<ClusterResult>, ClusterError> + Send + 'static,
{
    if let Err(e) = validate(&users, cluster_type) {
        warn!(%cluster_type, users = users.len(), "rejected clustering request: {e}");
        return (
            StatusCode::BAD_REQUEST,
            Json(ClusterResponse::failure(e.to_string())),
        )
            .into_response();
    }

    let n_users = users.len();
    let outcome = tokio::task::spawn_blocking(move || cluster(&users)).await;

    match outcome {
        Ok(Ok(clusters)) => {
            info!(
                %cluster_type,
                users = n_users,
                clusters = clusters.len(),
                "clustering finished"
            );
            (StatusCode::OK, Json(format_response(clusters, cluster_type))).into_response()
        }
        Ok(Err(e)) => {
            error!(%cluster_type, "clustering failed: {e}");
            internal_error(e)
        }
        Err(e) => {
            error!(%cluster_type, "clustering task failed: {e}");
            internal_error(e)
        }
    }
}

fn internal_error(e: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": e.to_string() })),
    )
        .into_response()
}
