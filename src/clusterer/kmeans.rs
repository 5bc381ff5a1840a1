use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::clusterer::{
    centroid::compute_centroid, error::ClusterError, similarity::squared_euclidean,
};

/// K-means with k-means++ seeding and restarts.
///
/// Every restart draws from one seeded stream, so a given configuration
/// always produces the same fit for the same input.
#[derive(Debug, Clone)]
pub struct KMeans {
    pub k: usize,
    /// Independent restarts; the lowest-inertia run is kept
    pub n_init: usize,
    pub max_iters: usize,
    /// Convergence threshold on centroid movement, relative to data variance
    pub tol: f64,
    pub seed: u64,
}

/// Outcome of the best restart
#[derive(Debug, Clone)]
pub struct KMeansFit {
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    /// Sum of squared distances from each point to its centroid
    pub inertia: f64,
    pub iterations: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            n_init: 10,
            max_iters: 300,
            tol: 1e-4,
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit, ClusterError> {
        if data.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        if self.k == 0 || self.k > data.len() {
            return Err(ClusterError::InvalidClusterCount {
                requested: self.k,
                n_items: data.len(),
            });
        }
        if self.n_init == 0 || self.max_iters == 0 {
            return Err(ClusterError::InvalidParameter {
                name: "n_init/max_iters",
                message: "must be at least 1",
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let tol = scaled_tolerance(data, self.tol);

        let mut best: Option<KMeansFit> = None;
        for run in 0..self.n_init {
            let fit = self.fit_once(data, tol, &mut rng);
            trace!(run, inertia = fit.inertia, iterations = fit.iterations, "k-means restart");

            if best.as_ref().map_or(true, |b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        best.ok_or(ClusterError::EmptyInput)
    }

    fn fit_once(&self, data: &[Vec<f64>], tol: f64, rng: &mut ChaCha8Rng) -> KMeansFit {
        let mut centroids = init_plus_plus(data, self.k, rng);
        let mut labels = vec![usize::MAX; data.len()];
        let mut iterations = 0;

        for _ in 0..self.max_iters {
            iterations += 1;

            if !assign(data, &centroids, &mut labels) {
                break; // converged
            }

            let shift = update_centroids(data, &labels, &mut centroids);
            if shift <= tol {
                break;
            }
        }

        // Labels must reflect the final centroids
        assign(data, &centroids, &mut labels);

        let inertia = data
            .iter()
            .zip(&labels)
            .map(|(point, &c)| squared_euclidean(point, &centroids[c]))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
            iterations,
        }
    }
}

/// k-means++: first center uniform, the rest sampled proportionally to D²
fn init_plus_plus(data: &[Vec<f64>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let n = data.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(data[rng.gen_range(0..n)].clone());

    let mut closest: Vec<f64> = data
        .iter()
        .map(|p| squared_euclidean(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().sum();

        // All points coincide with a center: fall back to a uniform pick
        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = closest.iter().rposition(|&d| d > 0.0).unwrap_or(n - 1);
            for (i, &d) in closest.iter().enumerate() {
                if d > 0.0 && target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            rng.gen_range(0..n)
        };

        let center = data[next].clone();
        for (d, p) in closest.iter_mut().zip(data) {
            *d = d.min(squared_euclidean(p, &center));
        }
        centroids.push(center);
    }

    centroids
}

/// Nearest-centroid assignment. Returns whether any label changed.
fn assign(data: &[Vec<f64>], centroids: &[Vec<f64>], labels: &mut [usize]) -> bool {
    let mut changed = false;

    for (point, label) in data.iter().zip(labels.iter_mut()) {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (c, center) in centroids.iter().enumerate() {
            let d = squared_euclidean(point, center);
            if d < best_dist {
                best_dist = d;
                best = c;
            }
        }

        if *label != best {
            changed = true;
            *label = best;
        }
    }

    changed
}

/// Move every non-empty cluster's centroid to its members' mean.
/// Returns the total squared centroid movement.
fn update_centroids(data: &[Vec<f64>], labels: &[usize], centroids: &mut [Vec<f64>]) -> f64 {
    let mut shift = 0.0;

    for (c, centroid) in centroids.iter_mut().enumerate() {
        let members: Vec<&[f64]> = data
            .iter()
            .zip(labels)
            .filter(|&(_, &l)| l == c)
            .map(|(p, _)| p.as_slice())
            .collect();

        // Empty clusters keep their previous center
        if !members.is_empty() {
            let next = compute_centroid(&members);
            shift += squared_euclidean(centroid, &next);
            *centroid = next;
        }
    }

    shift
}

/// `tol` times the mean per-feature variance of `data`
fn scaled_tolerance(data: &[Vec<f64>], tol: f64) -> f64 {
    let dim = data.first().map_or(0, Vec::len);
    if dim == 0 {
        return 0.0;
    }

    let n = data.len() as f64;
    let rows: Vec<&[f64]> = data.iter().map(Vec::as_slice).collect();
    let mean = compute_centroid(&rows);

    let total_variance: f64 = (0..dim)
        .map(|j| data.iter().map(|p| (p[j] - mean[j]).powi(2)).sum::<f64>() / n)
        .sum();

    tol * total_variance / dim as f64
}
