/// Component-wise mean of `vectors`. Empty input yields an empty vector.
pub fn compute_centroid(vectors: &[&[f64]]) -> Vec<f64> {
    let Some(first) = vectors.first() else {
        return Vec::new();
    };
    let mut out = vec![0.0; first.len()];

    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }

    let n = vectors.len() as f64;
    for x in out.iter_mut() {
        *x /= n;
    }

    out
}
