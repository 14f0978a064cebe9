pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod sampler;
pub mod simulation;

pub use error::{Result, SimError};
