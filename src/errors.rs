use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown vehicle variant `{0}`. Use 'cheap' or 'luxury'")]
    UnknownVariant(String),

    #[error("Unknown vehicle kind `{0}`. Use 'car' or 'truck'")]
    UnknownVehicleKind(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl FactoryError {
    pub fn unknown_variant<S: Into<String>>(value: S) -> Self {
        Self::UnknownVariant(value.into())
    }

    pub fn unknown_kind<S: Into<String>>(value: S) -> Self {
        Self::UnknownVehicleKind(value.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<toml::de::Error> for FactoryError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
