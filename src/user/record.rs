use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A user as submitted by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque identifier (`_id` on the wire)
    #[serde(rename = "_id", alias = "user_id", alias = "id")]
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

/// GeoJSON-style point. `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl UserRecord {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// Attach a position given as latitude/longitude degrees
    pub fn with_position(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(Location {
            kind: Some("Point".to_string()),
            coordinates: vec![lon, lat],
        });
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = Some(interests.into_iter().map(Into::into).collect());
        self
    }

    /// Usable position of this user, if any.
    ///
    /// A coordinate of exactly `0.0` is treated as missing, so genuine points on
    /// the equator or the prime meridian are excluded as well. Non-finite
    /// values and sequences that are not a pair are also rejected.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        let location = self.location.as_ref()?;
        let &[lon, lat] = location.coordinates.as_slice() else {
            return None;
        };

        if lon == 0.0 || lat == 0.0 || !lon.is_finite() || !lat.is_finite() {
            return None;
        }

        Some(GeoPoint::new(lat, lon))
    }

    /// Whether the record carries at least one interest tag
    pub fn has_interests(&self) -> bool {
        self.interests.as_ref().is_some_and(|tags| !tags.is_empty())
    }

    /// Interest tags joined with single spaces, `None` when that text is empty
    pub fn interest_text(&self) -> Option<String> {
        let text = self.interests.as_ref()?.join(" ");
        (!text.is_empty()).then_some(text)
    }
}
