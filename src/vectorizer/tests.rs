use super::*;

fn norm(row: &[f64]) -> f64 {
    row.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[test]
fn test_vocabulary_is_sorted() {
    let docs = ["reading chess", "running football"];
    let matrix = TfidfVectorizer::default().fit_transform(&docs);

    assert_eq!(matrix.vocabulary, vec!["chess", "football", "reading", "running"]);
    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.dim(), 4);
}

#[test]
fn test_rows_are_unit_length() {
    let docs = ["chess reading", "chess chess poker", "football"];
    let matrix = TfidfVectorizer::default().fit_transform(&docs);

    for row in &matrix.rows {
        assert!((norm(row) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_smoothed_idf() {
    let docs = ["apple banana", "apple"];
    let matrix = TfidfVectorizer::default().fit_transform(&docs);

    // apple appears everywhere, banana in one of two docs
    assert!((matrix.idf[0] - 1.0).abs() < 1e-12);
    assert!((matrix.idf[1] - (1.5f64.ln() + 1.0)).abs() < 1e-12);

    let row = &matrix.rows[0];
    assert!((row[1] / row[0] - matrix.idf[1]).abs() < 1e-9);
    assert_eq!(matrix.rows[1][1], 0.0);
}

#[test]
fn test_max_features_keeps_most_frequent_terms() {
    let docs = ["alpha alpha beta", "gamma"];
    let matrix = TfidfVectorizer::new(2).fit_transform(&docs);

    // beta and gamma tie on count, beta wins alphabetically
    assert_eq!(matrix.vocabulary, vec!["alpha", "beta"]);
    assert!(matrix.rows[1].iter().all(|&x| x == 0.0));
}

#[test]
fn test_term_frequency_weighting() {
    let docs = ["chess chess go", "go"];
    let matrix = TfidfVectorizer::default().fit_transform(&docs);

    let chess = matrix.vocabulary.iter().position(|t| t == "chess").unwrap();
    let go = matrix.vocabulary.iter().position(|t| t == "go").unwrap();
    assert!(matrix.rows[0][chess] > matrix.rows[0][go]);
}

#[test]
fn test_empty_corpus() {
    let docs: Vec<String> = vec![];
    let matrix = TfidfVectorizer::default().fit_transform(&docs);
    assert!(matrix.is_empty());
    assert_eq!(matrix.dim(), 0);
}
