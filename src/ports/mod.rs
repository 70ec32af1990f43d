// src/ports/mod.rs

pub use family_factory::AbstractVehicleFactory;
pub use vehicle_factory::VehicleFactory;

pub mod family_factory;
pub mod vehicle_factory;
