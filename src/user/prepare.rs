use super::id::UserId;
use super::record::{GeoPoint, UserRecord};

/// A user id paired with the feature a clustering pass consumes
#[derive(Debug, Clone, PartialEq)]
pub struct UserFeature<T> {
    pub user_id: UserId,
    pub feature: T,
}

/// Outcome of the filtering step that runs before any algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<T> {
    /// Usable records, in input order
    pub valid: Vec<UserFeature<T>>,
    /// Number of records dropped for missing or degenerate data
    pub excluded: usize,
}

impl<T> Prepared<T> {
    fn from_users<'a>(
        users: &'a [UserRecord],
        extract: impl Fn(&'a UserRecord) -> Option<T>,
    ) -> Self {
        let valid: Vec<UserFeature<T>> = users
            .iter()
            .filter_map(|user| {
                extract(user).map(|feature| UserFeature {
                    user_id: user.user_id.clone(),
                    feature,
                })
            })
            .collect();

        let excluded = users.len() - valid.len();
        Self { valid, excluded }
    }

    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    pub fn ids(&self) -> Vec<&UserId> {
        self.valid.iter().map(|f| &f.user_id).collect()
    }

    pub fn features(&self) -> Vec<&T> {
        self.valid.iter().map(|f| &f.feature).collect()
    }
}

/// Keep users with a usable coordinate pair
pub fn prepare_locations(users: &[UserRecord]) -> Prepared<GeoPoint> {
    Prepared::from_users(users, UserRecord::coordinates)
}

/// Keep users whose joined interest text is non-empty
pub fn prepare_interests(users: &[UserRecord]) -> Prepared<String> {
    Prepared::from_users(users, UserRecord::interest_text)
}
