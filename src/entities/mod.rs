pub mod family;
pub mod vehicle;

pub use vehicle::*;
