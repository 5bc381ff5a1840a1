use std::collections::HashMap;

use super::tokenize::tokenize;

/// Vocabulary cap used by the interest pipeline
pub const DEFAULT_MAX_FEATURES: usize = 50;

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Weights use the smoothed form `idf(t) = ln((1 + n) / (1 + df(t))) + 1`,
/// rows are L2-normalized. When the corpus holds more distinct terms than
/// `max_features`, the most frequent terms across the whole corpus are kept.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    pub max_features: usize,
}

/// Dense document-term matrix produced by [`TfidfVectorizer::fit_transform`]
#[derive(Debug, Clone, Default)]
pub struct TfidfMatrix {
    /// Column terms, sorted alphabetically
    pub vocabulary: Vec<String>,
    /// IDF weight per column
    pub idf: Vec<f64>,
    /// One L2-normalized row per input document
    pub rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Learn the vocabulary from `docs` and return their weighted vectors
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> TfidfMatrix {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d.as_ref())).collect();

        let vocabulary = self.select_vocabulary(&tokenized);
        let columns: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        // Document frequency over the retained terms
        let mut df = vec![0usize; vocabulary.len()];
        let mut counts: Vec<Vec<f64>> = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut row = vec![0.0; vocabulary.len()];
            for token in tokens {
                if let Some(&col) = columns.get(token.as_str()) {
                    row[col] += 1.0;
                }
            }
            for (col, &count) in row.iter().enumerate() {
                if count > 0.0 {
                    df[col] += 1;
                }
            }
            counts.push(row);
        }

        let n = docs.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|mut row| {
                for (value, weight) in row.iter_mut().zip(&idf) {
                    *value *= weight;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        TfidfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Rank terms by total corpus count (ties alphabetical), cap, then sort
    fn select_vocabulary(&self, tokenized: &[Vec<String>]) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for token in tokenized.iter().flatten() {
            *totals.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl TfidfMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }
}

fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
