// src/factories/vehicle_factory.rs

use crate::{Car, Truck, Vehicle, VehicleKind, ports::VehicleFactory};

/// Factory that always produces a [`Car`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CarFactory;

impl VehicleFactory for CarFactory {
    type Product = Car;

    fn create(&self) -> Car {
        log::trace!("CarFactory creating car");
        Car::new()
    }
}

/// Factory that always produces a [`Truck`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    type Product = Truck;

    fn create(&self) -> Truck {
        log::trace!("TruckFactory creating truck");
        Truck::new()
    }
}

/// Creates a fresh vehicle of `kind` through its factory.
///
/// # Arguments
/// * `kind` - Which factory to use
///
/// # Returns
/// * `Box<dyn Vehicle>` - New vehicle with its wheels not yet fitted
///
/// # Examples
/// ```
/// use vehicle_factories::{Car, Vehicle, VehicleKind, factories::create_vehicle};
///
/// let mut vehicle = create_vehicle(VehicleKind::Car);
/// assert_eq!(vehicle.wheels(), None);
/// assert!(vehicle.downcast_ref::<Car>().is_some());
///
/// vehicle.change_wheels("truck_wheels");
/// assert_eq!(vehicle.wheels(), Some("car_wheels"));
/// ```
pub fn create_vehicle(kind: VehicleKind) -> Box<dyn Vehicle> {
    match kind {
        VehicleKind::Car => CarFactory.create_boxed(),
        VehicleKind::Truck => TruckFactory.create_boxed(),
    }
}
