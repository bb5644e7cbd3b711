//! A three-dimensional vector value type with the standard vector-algebra
//! operations and an optional magnitude clamp.

pub mod error;
pub mod vector;

pub use error::Error;
pub use vector::Vector3;
