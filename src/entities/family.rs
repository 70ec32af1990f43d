//! Car and truck product lines, each offered in a cheap and a luxury variant.
//!
//! A family factory only ever hands out products of one [`Variant`], so a
//! luxury car never ships alongside a cheap truck.

use crate::{Variant, VehicleBody};
use std::any::Any;

pub trait Car: Any {
    fn variant(&self) -> Variant;

    fn body(&self) -> &VehicleBody;

    /// Fits the wheels of the variant. The requested value is not used.
    fn change_wheels(&mut self, requested: &str);

    fn as_any(&self) -> &dyn Any;

    fn wheels(&self) -> Option<&str> {
        self.body().wheels()
    }

    fn color(&self) -> Option<&str> {
        self.body().color()
    }
}

pub trait Truck: Any {
    fn variant(&self) -> Variant;

    fn body(&self) -> &VehicleBody;

    /// Fits the wheels of the variant. The requested value is not used.
    fn change_wheels(&mut self, requested: &str);

    fn as_any(&self) -> &dyn Any;

    fn wheels(&self) -> Option<&str> {
        self.body().wheels()
    }

    fn color(&self) -> Option<&str> {
        self.body().color()
    }
}

impl dyn Car {
    pub fn downcast_ref<T: Car>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl dyn Truck {
    pub fn downcast_ref<T: Truck>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

macro_rules! family_product {
    ($name:ident, $line:ident, $variant:expr, $wheels:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            body: VehicleBody,
        }

        impl $name {
            pub const WHEELS: &'static str = $wheels;

            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $line for $name {
            fn variant(&self) -> Variant {
                $variant
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
    };
}

family_product!(LuxuryCar, Car, Variant::Luxury, "luxury_car_wheels");
family_product!(CheapCar, Car, Variant::Cheap, "cheap_car_wheels");
family_product!(LuxuryTruck, Truck, Variant::Luxury, "luxury_truck_wheels");
family_product!(CheapTruck, Truck, Variant::Cheap, "cheap_truck_wheels");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_fits_its_own_wheels() {
        let mut cars: Vec<Box<dyn Car>> =
            vec![Box::new(CheapCar::new()), Box::new(LuxuryCar::new())];
        for car in cars.iter_mut() {
            assert_eq!(car.wheels(), None);
            car.change_wheels("whatever");
        }
        assert_eq!(cars[0].wheels(), Some("cheap_car_wheels"));
        assert_eq!(cars[1].wheels(), Some("luxury_car_wheels"));

        let mut trucks: Vec<Box<dyn Truck>> =
            vec![Box::new(CheapTruck::new()), Box::new(LuxuryTruck::new())];
        for truck in trucks.iter_mut() {
            truck.change_wheels("whatever");
        }
        assert_eq!(trucks[0].wheels(), Some("cheap_truck_wheels"));
        assert_eq!(trucks[1].wheels(), Some("luxury_truck_wheels"));
    }

    #[test]
    fn test_wheels_carry_variant_tag() {
        let mut car = LuxuryCar::new();
        car.change_wheels("cheap_car_wheels");
        let wheels = car.wheels().unwrap();
        assert!(wheels.starts_with(&car.variant().to_string()));
        assert_eq!(car.color(), None);
    }
}
