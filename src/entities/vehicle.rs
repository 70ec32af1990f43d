use crate::{VehicleBody, VehicleKind};
use std::any::Any;

/// Product created by a [`VehicleFactory`](crate::ports::VehicleFactory).
///
/// `Vehicle` is only a capability; every value behind it is a concrete
/// [`Car`] or [`Truck`].
pub trait Vehicle: Any {
    fn kind(&self) -> VehicleKind;

    fn body(&self) -> &VehicleBody;

    /// Fits the wheels of the concrete type. The requested value is not used.
    fn change_wheels(&mut self, requested: &str);

    fn as_any(&self) -> &dyn Any;

    fn wheels(&self) -> Option<&str> {
        self.body().wheels()
    }

    fn color(&self) -> Option<&str> {
        self.body().color()
    }
}

impl dyn Vehicle {
    /// Returns the concrete product if it is a `T`.
    pub fn downcast_ref<T: Vehicle>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    body: VehicleBody,
}

impl Car {
    pub const WHEELS: &'static str = "car_wheels";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn change_wheels(&mut self, requested: &str) {
        self.body.fit_wheels(requested, Self::WHEELS);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Truck {
    body: VehicleBody,
}

impl Truck {
    pub const WHEELS: &'static str = "truck_wheels";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn change_wheels(&mut self, requested: &str) {
        self.body.fit_wheels(requested, Self::WHEELS);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_wheels_ignores_request() {
        let mut car = Car::new();
        car.change_wheels("racing_slicks");
        assert_eq!(car.wheels(), Some("car_wheels"));

        let mut truck = Truck::new();
        truck.change_wheels("");
        assert_eq!(truck.wheels(), Some("truck_wheels"));
        assert_eq!(truck.color(), None);
    }

    #[test]
    fn test_downcast_through_trait_object() {
        let vehicle: Box<dyn Vehicle> = Box::new(Truck::new());
        assert_eq!(vehicle.kind(), VehicleKind::Truck);
        assert!(vehicle.downcast_ref::<Truck>().is_some());
        assert!(vehicle.downcast_ref::<Car>().is_none());
    }
}
