use std::cmp::Ordering;

use tracing::debug;

use crate::clusterer::{
    error::ClusterError, kmeans::KMeans, similarity::cosine_similarity, types::ClusterResult,
};
use crate::user::{UserId, UserRecord, prepare_interests};
use crate::vectorizer::TfidfVectorizer;

pub const DEFAULT_N_CLUSTERS: usize = 3;
pub const DEFAULT_TOP_N: usize = 5;

const KMEANS_SEED: u64 = 42;
const KMEANS_RESTARTS: usize = 10;

/// Partition users into at most `n_clusters` groups of shared interests.
///
/// Only users with non-empty interest text take part. `n_clusters` is clamped
/// to the number of such users; below 2 nothing is returned. Labels holding a
/// single user are dropped. Fails with [`ClusterError::EmptyVocabulary`] when
/// no interest yields a single term.
pub fn cluster_by_interest(
    users: &[UserRecord],
    n_clusters: usize,
) -> Result<Vec<ClusterResult>, ClusterError> {
    let prepared = prepare_interests(users);
    debug!(
        valid = prepared.len(),
        excluded = prepared.excluded,
        "prepared users for interest clustering"
    );

    if prepared.len() < 2 {
        return Ok(Vec::new());
    }

    let k = n_clusters.min(prepared.len());
    if k < 2 {
        return Ok(Vec::new());
    }

    let matrix = TfidfVectorizer::default().fit_transform(&prepared.features());
    if matrix.dim() == 0 {
        return Err(ClusterError::EmptyVocabulary);
    }

    let fit = KMeans::new(k)
        .with_seed(KMEANS_SEED)
        .with_n_init(KMEANS_RESTARTS)
        .fit(&matrix.rows)?;

    debug!(
        k,
        terms = matrix.dim(),
        inertia = fit.inertia,
        iterations = fit.iterations,
        "k-means finished"
    );

    let labels: Vec<Option<usize>> = fit.labels.into_iter().map(Some).collect();
    Ok(ClusterResult::from_labels(&prepared.ids(), &labels))
}

/// Rank `all_users` by interest similarity to `interests`.
///
/// Returns at most `top_n` ids, most similar first. Candidates sharing no
/// weighted term with the query (similarity <= 0) are never returned.
pub fn find_similar_users<S: AsRef<str>>(
    interests: &[S],
    all_users: &[UserRecord],
    top_n: usize,
) -> Vec<UserId> {
    if interests.is_empty() || all_users.is_empty() {
        return Vec::new();
    }

    let candidates = prepare_interests(all_users);
    if candidates.is_empty() {
        return Vec::new();
    }

    let query = interests
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let mut docs: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
    docs.push(&query);
    docs.extend(candidates.valid.iter().map(|c| c.feature.as_str()));

    let matrix = TfidfVectorizer::default().fit_transform(&docs);
    let Some((query_row, candidate_rows)) = matrix.rows.split_first() else {
        return Vec::new();
    };

    let mut scored: Vec<(&UserId, f64)> = candidates
        .valid
        .iter()
        .zip(candidate_rows)
        .map(|(c, row)| (&c.user_id, cosine_similarity(query_row, row)))
        .collect();

    // Stable sort keeps input order among ties
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(top_n)
        .filter(|&(_, similarity)| similarity > 0.0)
        .map(|(id, _)| id.clone())
        .collect()
}
