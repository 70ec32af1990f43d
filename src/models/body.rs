/// Mutable attributes shared by every vehicle product.
///
/// Both fields start unset. `wheels` is filled in by a product's
/// `change_wheels`; nothing in the crate ever assigns `color`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleBody {
    pub wheels: Option<String>,
    pub color: Option<String>,
}

impl VehicleBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wheels(&self) -> Option<&str> {
        self.wheels.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Overwrites the wheels with `fitted`, logging the request it replaced.
    pub(crate) fn fit_wheels(&mut self, requested: &str, fitted: &'static str) {
        if requested != fitted {
            log::debug!("ignoring requested wheels '{}', fitting '{}'", requested, fitted);
        }
        self.wheels = Some(fitted.to_string());
    }
}
