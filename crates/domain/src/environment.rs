use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Parameters handed to the host's "apply environment" effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub strength: f32,
    /// Rotation around the vertical axis, in radians.
    pub rotation: f32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            strength: 1.0,
            rotation: 0.0,
        }
    }
}

impl EnvironmentSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.strength.is_finite() {
            return Err(DomainError::NonFiniteEnvironmentParam("strength"));
        }
        if !self.rotation.is_finite() {
            return Err(DomainError::NonFiniteEnvironmentParam("rotation"));
        }
        Ok(())
    }
}
