mod id;
mod prepare;
mod record;


pub use id::UserId;
pub use prepare::{Prepared, UserFeature, prepare_interests, prepare_locations};
pub use record::{GeoPoint, Location, UserRecord};
