//! Safe SQL assembly: identifiers are fixed in code, values are always bound parameters.

mod builder;
pub use builder::*;
