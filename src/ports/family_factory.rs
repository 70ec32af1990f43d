use crate::Variant;
use crate::entities::family::{Car, Truck};

/// Creates a matching car and truck of a single [`Variant`].
pub trait AbstractVehicleFactory {
    fn variant(&self) -> Variant;

    fn create_car(&self) -> Box<dyn Car>;

    fn create_truck(&self) -> Box<dyn Truck>;
}

impl<F: AbstractVehicleFactory + ?Sized> AbstractVehicleFactory for Box<F> {
    fn variant(&self) -> Variant {
        (**self).variant()
    }

    fn create_car(&self) -> Box<dyn Car> {
        (**self).create_car()
    }

    fn create_truck(&self) -> Box<dyn Truck> {
        (**self).create_truck()
    }
}
