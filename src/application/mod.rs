mod fleet;
mod vehicle;

pub use fleet::FleetApplication;
pub use vehicle::VehicleApplication;
