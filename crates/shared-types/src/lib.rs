pub mod config;
pub mod error;

// TARCZA domain modules (canonical locations for all portal domain types)
pub mod initiative;
pub mod kudos;
pub mod models;
pub mod reports;
pub mod training;

pub use config::*;
pub use error::*;

// Re-export all domain types
pub use initiative::*;
pub use kudos::*;
pub use models::*;
pub use reports::*;
pub use training::*;
