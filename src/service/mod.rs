pub mod auth;
pub mod cryptids;
pub mod sightings;
pub mod users;
pub mod validation;

pub use cryptids::CryptidService;
pub use sightings::{SightingFilter, SightingService};
pub use users::{UserCascade, UserService};
pub use validation::{FieldRule, Format, Validate};
