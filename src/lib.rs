pub mod application;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;

pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;
