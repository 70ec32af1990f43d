use crate::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product family produced by an abstract vehicle factory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    #[serde(rename = "cheap")]
    Cheap,
    #[serde(rename = "luxury")]
    Luxury,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Cheap, Variant::Luxury];

    pub fn is_cheap(&self) -> bool {
        matches!(self, Self::Cheap)
    }

    pub fn is_luxury(&self) -> bool {
        matches!(self, Self::Luxury)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cheap => write!(f, "cheap"),
            Self::Luxury => write!(f, "luxury"),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "cheap" => Ok(Self::Cheap),
            "luxury" => Ok(Self::Luxury),
            _ => Err(FactoryError::unknown_variant(value)),
        }
    }
}

impl FromStr for Variant {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Concrete product picked by the factory-method application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "truck")]
    Truck,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Car, VehicleKind::Truck];
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

impl TryFrom<&str> for VehicleKind {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "truck" => Ok(Self::Truck),
            _ => Err(FactoryError::unknown_kind(value)),
        }
    }
}

impl FromStr for VehicleKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Configuration of the abstract-factory application, usually loaded from
/// a TOML document such as `variant = "luxury"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub variant: Variant,
}

impl FleetConfig {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, FactoryError> {
        let config = toml::from_str(source)?;
        Ok(config)
    }
}

/// Configuration of the factory-method application. An empty document is
/// valid and names no vehicle.
///
/// ```toml
/// vehicle = "truck"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleConfig {
    #[serde(default)]
    pub vehicle: Option<VehicleKind>,
}

impl VehicleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicle(mut self, vehicle: VehicleKind) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, FactoryError> {
        let config = toml::from_str(source)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!(Variant::try_from("cheap").unwrap(), Variant::Cheap);
        assert_eq!("Luxury".parse::<Variant>().unwrap(), Variant::Luxury);
        assert!(Variant::try_from(" luxury ").is_err());
        assert_eq!(
            Variant::try_from("premium"),
            Err(FactoryError::UnknownVariant("premium".to_string()))
        );
    }

    #[test]
    fn test_vehicle_kind_parsing() {
        assert_eq!(VehicleKind::try_from("car").unwrap(), VehicleKind::Car);
        assert_eq!("TRUCK".parse::<VehicleKind>().unwrap(), VehicleKind::Truck);
        assert!(VehicleKind::try_from("boat").is_err());
        assert!(VehicleKind::try_from("").is_err());
        assert!(VehicleKind::try_from("car ").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
        for kind in VehicleKind::ALL {
            assert_eq!(kind.to_string().parse::<VehicleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_variant_predicates() {
        assert!(Variant::Cheap.is_cheap());
        assert!(!Variant::Cheap.is_luxury());
        assert!(Variant::Luxury.is_luxury());
    }

    #[test]
    fn test_fleet_config_from_toml() {
        let config = FleetConfig::from_toml_str("variant = \"luxury\"").unwrap();
        assert_eq!(config, FleetConfig::new(Variant::Luxury));

        let result = FleetConfig::from_toml_str("vehicle = \"car\"");
        assert!(matches!(result, Err(FactoryError::ConfigError(_))));
    }

    #[test]
    fn test_vehicle_config_from_toml() {
        let config = VehicleConfig::from_toml_str("vehicle = \"car\"").unwrap();
        assert_eq!(config, VehicleConfig::new().with_vehicle(VehicleKind::Car));

        let config = VehicleConfig::from_toml_str("").unwrap();
        assert_eq!(config.vehicle, None);

        let result = VehicleConfig::from_toml_str("vehicle = \"boat\"");
        assert!(matches!(result, Err(FactoryError::ConfigError(_))));
    }

    #[test]
    fn test_config_rejects_unknown_variant() {
        let result = FleetConfig::from_toml_str("variant = \"premium\"");
        assert!(matches!(result, Err(FactoryError::ConfigError(_))));
    }
}
