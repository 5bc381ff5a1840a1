mod envelope;
mod validate;


pub use envelope::{ClusterResponse, ClusterType, NO_CLUSTERS_MESSAGE, format_response};
pub use validate::{ValidationError, validate};
