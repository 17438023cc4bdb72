pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{BodySeed, SimConfig};
pub use constants::*;
pub use error::InvalidInput;
pub use types::{Body, Vec3};
