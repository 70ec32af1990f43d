// src/factories/mod.rs

mod family_factory;
mod vehicle_factory;

pub use family_factory::{CheapVehicleFactory, LuxuryVehicleFactory, for_variant};
pub use vehicle_factory::{CarFactory, TruckFactory, create_vehicle};
