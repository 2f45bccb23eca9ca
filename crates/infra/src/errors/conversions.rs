//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use piiguard_domain::PiiGuardError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PiiGuardError);

impl From<InfraError> for PiiGuardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PiiGuardError> for InfraError {
    fn from(value: PiiGuardError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPiiGuardError {
    fn into_piiguard(self) -> PiiGuardError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PiiGuardError */
/* -------------------------------------------------------------------------- */

impl IntoPiiGuardError for IoError {
    fn into_piiguard(self) -> PiiGuardError {
        match self.kind() {
            ErrorKind::NotFound => PiiGuardError::Config(format!("config file not found: {self}")),
            ErrorKind::PermissionDenied => {
                PiiGuardError::Config(format!("config file not readable: {self}"))
            }
            ErrorKind::InvalidData => {
                PiiGuardError::Config(format!("config file is not valid UTF-8: {self}"))
            }
            _ => PiiGuardError::Internal(format!("failed to read config file: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_piiguard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / toml::de::Error → PiiGuardError */
/* -------------------------------------------------------------------------- */

impl IntoPiiGuardError for JsonError {
    fn into_piiguard(self) -> PiiGuardError {
        PiiGuardError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_piiguard())
    }
}

impl IntoPiiGuardError for TomlError {
    fn into_piiguard(self) -> PiiGuardError {
        PiiGuardError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_piiguard())
    }
}
