pub mod cadence;
pub mod config;

pub use cadence::{Cadence, ParseCadenceError};
pub use config::GenerationConfig;
