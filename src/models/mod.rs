//! Persistent rows, one struct per table. Constraints live in the DDL (see `migration`).

mod cryptid;
mod sighting;
mod user;

pub use cryptid::Cryptid;
pub use sighting::Sighting;
pub use user::User;
