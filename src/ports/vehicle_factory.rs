use crate::Vehicle;

/// Creates one fixed kind of [`Vehicle`].
///
/// Construction is rarely the only job of a factory; the provided methods are
/// where business logic that should stay independent of the concrete product
/// lives.
pub trait VehicleFactory {
    type Product: Vehicle;

    fn create(&self) -> Self::Product;

    fn create_boxed(&self) -> Box<dyn Vehicle> {
        Box::new(self.create())
    }

    fn wheels_characteristics(&self) -> &'static str {
        "business logic method example"
    }
}
