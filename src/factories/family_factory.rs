// src/factories/family_factory.rs

use crate::{
    Variant,
    entities::family::{Car, CheapCar, CheapTruck, LuxuryCar, LuxuryTruck, Truck},
    ports::AbstractVehicleFactory,
};

/// Produces the cheap line of cars and trucks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapVehicleFactory;

impl AbstractVehicleFactory for CheapVehicleFactory {
    fn variant(&self) -> Variant {
        Variant::Cheap
    }

    fn create_car(&self) -> Box<dyn Car> {
        log::trace!("CheapVehicleFactory creating car");
        Box::new(CheapCar::new())
    }

    fn create_truck(&self) -> Box<dyn Truck> {
        log::trace!("CheapVehicleFactory creating truck");
        Box::new(CheapTruck::new())
    }
}

/// Produces the luxury line of cars and trucks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuxuryVehicleFactory;

impl AbstractVehicleFactory for LuxuryVehicleFactory {
    fn variant(&self) -> Variant {
        Variant::Luxury
    }

    fn create_car(&self) -> Box<dyn Car> {
        log::trace!("LuxuryVehicleFactory creating car");
        Box::new(LuxuryCar::new())
    }

    fn create_truck(&self) -> Box<dyn Truck> {
        log::trace!("LuxuryVehicleFactory creating truck");
        Box::new(LuxuryTruck::new())
    }
}

/// Returns the factory that produces the `variant` product line.
///
/// Every variant maps to exactly one factory, and every product that factory
/// creates carries the same variant.
///
/// # Arguments
/// * `variant` - Product line to build
///
/// # Returns
/// * `Box<dyn AbstractVehicleFactory>` - Factory for `variant`
///
/// # Examples
/// ```
/// use vehicle_factories::entities::family::Truck;
/// use vehicle_factories::{AbstractVehicleFactory, Variant, factories::for_variant};
///
/// let factory = for_variant(Variant::Luxury);
/// let mut truck = factory.create_truck();
/// truck.change_wheels("cheap_truck_wheels");
///
/// assert_eq!(factory.variant(), Variant::Luxury);
/// assert_eq!(truck.wheels(), Some("luxury_truck_wheels"));
/// ```
pub fn for_variant(variant: Variant) -> Box<dyn AbstractVehicleFactory> {
    match variant {
        Variant::Cheap => Box::new(CheapVehicleFactory),
        Variant::Luxury => Box::new(LuxuryVehicleFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_never_mix_variants() {
        for variant in Variant::ALL {
            let factory = for_variant(variant);
            assert_eq!(factory.variant(), variant);

            let mut car = factory.create_car();
            let mut truck = factory.create_truck();
            assert_eq!(car.variant(), variant);
            assert_eq!(truck.variant(), variant);

            car.change_wheels("");
            truck.change_wheels("");
            assert_eq!(car.wheels().unwrap(), format!("{}_car_wheels", variant));
            assert_eq!(truck.wheels().unwrap(), format!("{}_truck_wheels", variant));
        }
    }

    #[test]
    fn test_concrete_types() {
        let car = LuxuryVehicleFactory.create_car();
        assert!(car.downcast_ref::<LuxuryCar>().is_some());
        assert!(car.downcast_ref::<CheapCar>().is_none());

        let truck = CheapVehicleFactory.create_truck();
        assert!(truck.downcast_ref::<CheapTruck>().is_some());
        assert_eq!(truck.wheels(), None);
    }
}
