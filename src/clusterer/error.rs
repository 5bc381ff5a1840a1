use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },

    #[error("empty vocabulary: no interest contains a term of two or more characters")]
    EmptyVocabulary,

    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount { requested: usize, n_items: usize },
}
