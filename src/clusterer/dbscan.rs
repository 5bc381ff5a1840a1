use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Label {
    Undefined,
    Noise,
    Cluster(usize),
}

/// Runs DBSCAN over `n` points.
///
/// # Parameters
/// - `n`: number of points, addressed by index
/// - `min_pts`: minimum neighborhood size (the point itself included) for a
///   point to be core
/// - `is_neighbor`: whether two points lie within the radius
///
/// # Returns
/// One label per point: `Some(cluster)` with clusters numbered from 0 in
/// discovery order, or `None` for noise. Points are scanned in index order
/// and a border point joins the first cluster that reaches it.
pub fn dbscan(
    n: usize,
    min_pts: usize,
    is_neighbor: impl Fn(usize, usize) -> bool,
) -> Vec<Option<usize>> {
    let range_query =
        |idx: usize| -> Vec<usize> { (0..n).filter(|&j| is_neighbor(idx, j)).collect() };

    let mut labels = vec![Label::Undefined; n];
    let mut next_cluster = 0;

    for i in 0..n {
        if labels[i] != Label::Undefined {
            continue;
        }

        let neighbors = range_query(i);
        if neighbors.len() < min_pts {
            labels[i] = Label::Noise;
            continue;
        }

        let cluster = next_cluster;
        next_cluster += 1;
        labels[i] = Label::Cluster(cluster);

        let mut seed: VecDeque<usize> = neighbors.into_iter().filter(|&j| j != i).collect();
        while let Some(q) = seed.pop_front() {
            match labels[q] {
                // Border point previously marked as noise
                Label::Noise => labels[q] = Label::Cluster(cluster),
                Label::Cluster(_) => {}
                Label::Undefined => {
                    labels[q] = Label::Cluster(cluster);

                    let q_neighbors = range_query(q);
                    if q_neighbors.len() >= min_pts {
                        seed.extend(q_neighbors);
                    }
                }
            }
        }
    }

    labels
        .into_iter()
        .map(|label| match label {
            Label::Cluster(c) => Some(c),
            Label::Undefined | Label::Noise => None,
        })
        .collect()
}
