use thiserror::Error;

use super::envelope::ClusterType;
use crate::user::UserRecord;

/// Reasons a batch cannot be clustered at all
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No users provided")]
    NoUsers,

    #[error("Need at least 2 users for clustering")]
    TooFewUsers,

    #[error("Need at least 2 users with valid location data")]
    TooFewLocations,

    #[error("Need at least 2 users with interests")]
    TooFewInterests,
}

/// Gate a batch before clustering it by `cluster_type`
pub fn validate(users: &[UserRecord], cluster_type: ClusterType) -> Result<(), ValidationError> {
    if users.is_empty() {
        return Err(ValidationError::NoUsers);
    }

    if users.len() < 2 {
        return Err(ValidationError::TooFewUsers);
    }

    match cluster_type {
        ClusterType::Location => {
            let valid = users.iter().filter(|u| u.coordinates().is_some()).count();
            if valid < 2 {
                return Err(ValidationError::TooFewLocations);
            }
        }
        ClusterType::Interest => {
            let valid = users.iter().filter(|u| u.has_interests()).count();
            if valid < 2 {
                return Err(ValidationError::TooFewInterests);
            }
        }
    }

    Ok(())
}
