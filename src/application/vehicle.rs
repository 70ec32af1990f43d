use crate::{FactoryError, Vehicle, VehicleConfig, VehicleKind, factories};

/// Client of the vehicle factories that holds at most one vehicle.
#[derive(Default)]
pub struct VehicleApplication {
    vehicle: Option<Box<dyn Vehicle>>,
}

impl VehicleApplication {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an application holding the vehicle named in `config`, if any.
    pub fn from_config(config: &VehicleConfig) -> Self {
        let mut app = Self::new();
        if let Some(kind) = config.vehicle {
            app.choose(kind);
        }
        app
    }

    /// Creates the vehicle named by `vehicle_config` (`"car"` or `"truck"`).
    ///
    /// An unknown value is rejected and the current vehicle is kept.
    pub fn choose_vehicle(
        &mut self,
        vehicle_config: &str,
    ) -> Result<&mut dyn Vehicle, FactoryError> {
        let kind = VehicleKind::try_from(vehicle_config).inspect_err(|_| {
            log::warn!("rejecting unknown vehicle config '{}'", vehicle_config);
        })?;
        Ok(self.choose(kind))
    }

    pub fn choose(&mut self, kind: VehicleKind) -> &mut dyn Vehicle {
        log::debug!("creating {} through its factory", kind);
        &mut **self.vehicle.insert(factories::create_vehicle(kind))
    }

    pub fn vehicle(&self) -> Option<&dyn Vehicle> {
        self.vehicle.as_deref()
    }

    pub fn vehicle_mut(&mut self) -> Option<&mut dyn Vehicle> {
        match self.vehicle.as_mut() {
            Some(vehicle) => Some(&mut **vehicle),
            None => None,
        }
    }
}
