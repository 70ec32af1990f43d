use crate::{
    FactoryError, FleetConfig, Variant,
    entities::family::{Car, Truck},
    factories,
    ports::AbstractVehicleFactory,
};

/// Client of an [`AbstractVehicleFactory`].
///
/// The factory is chosen once, at construction, so every car and truck the
/// application creates belongs to the same variant. Creating a product again
/// replaces the one held before.
pub struct FleetApplication<F = Box<dyn AbstractVehicleFactory>>
where
    F: AbstractVehicleFactory,
{
    factory: F,
    car: Option<Box<dyn Car>>,
    truck: Option<Box<dyn Truck>>,
}

impl FleetApplication {
    /// Builds an application from a configuration value.
    ///
    /// The factory is chosen here and kept for the lifetime of the application.
    ///
    /// # Arguments
    /// * `factory_config` - `"cheap"` or `"luxury"`, in any letter case
    ///
    /// # Returns
    /// * `Ok(FleetApplication)` - Application bound to the matching factory
    /// * `Err(FactoryError::UnknownVariant)` - `factory_config` names no variant
    ///
    /// # Examples
    /// ```
    /// use vehicle_factories::entities::family::Car;
    /// use vehicle_factories::{Variant, application::FleetApplication};
    ///
    /// let mut app = FleetApplication::new("cheap").unwrap();
    /// app.create_car().change_wheels("ignored");
    /// assert_eq!(app.car().unwrap().wheels(), Some("cheap_car_wheels"));
    /// assert_eq!(app.variant(), Variant::Cheap);
    ///
    /// assert!(FleetApplication::new("unknown").is_err());
    /// ```
    pub fn new(factory_config: &str) -> Result<Self, FactoryError> {
        let factory = Self::choose_factory(factory_config)?;
        Ok(Self::with_factory(factory))
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self::with_factory(factories::for_variant(variant))
    }

    pub fn from_config(config: &FleetConfig) -> Self {
        Self::with_variant(config.variant)
    }

    /// Maps a configuration value to its factory.
    pub fn choose_factory(
        factory_config: &str,
    ) -> Result<Box<dyn AbstractVehicleFactory>, FactoryError> {
        let variant = Variant::try_from(factory_config).inspect_err(|_| {
            log::warn!("rejecting unknown factory config '{}'", factory_config);
        })?;
        log::debug!("chose {} vehicle factory", variant);
        Ok(factories::for_variant(variant))
    }
}

impl<F> FleetApplication<F>
where
    F: AbstractVehicleFactory,
{
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            car: None,
            truck: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.factory.variant()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn create_car(&mut self) -> &mut dyn Car {
        let car = self.factory.create_car();
        &mut **self.car.insert(car)
    }

    pub fn create_truck(&mut self) -> &mut dyn Truck {
        let truck = self.factory.create_truck();
        &mut **self.truck.insert(truck)
    }

    pub fn car(&self) -> Option<&dyn Car> {
        self.car.as_deref()
    }

    pub fn car_mut(&mut self) -> Option<&mut dyn Car> {
        match self.car.as_mut() {
            Some(car) => Some(&mut **car),
            None => None,
        }
    }

    pub fn truck(&self) -> Option<&dyn Truck> {
        self.truck.as_deref()
    }

    pub fn truck_mut(&mut self) -> Option<&mut dyn Truck> {
        match self.truck.as_mut() {
            Some(truck) => Some(&mut **truck),
            None => None,
        }
    }
}
