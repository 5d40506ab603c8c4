pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod matcher;
pub mod runner;
pub mod suite;

// Re-export commonly used types
pub use error::{Result, RestcheckError};
