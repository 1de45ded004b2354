//! Transfer schemas: `*Create` and `*Update` bodies accepted by the API, `*Out` shapes returned by it.
//!
//! Update bodies are partial patches: an absent (or `null`) field leaves the stored value unchanged.

mod cryptid;
mod sighting;
mod timestamp;
mod user;

pub use cryptid::{CryptidCreate, CryptidOut, CryptidUpdate};
pub use sighting::{SightingCreate, SightingOut, SightingUpdate};
pub use user::{TokenRequest, TokenResponse, UserCreate, UserOut, UserUpdate};
