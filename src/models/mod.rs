pub mod body;
pub mod config;

pub use body::*;
pub use config::*;
