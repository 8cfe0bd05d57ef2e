//! Registration engine configuration.

use serde::Deserialize;

use super::ValidationError;

/// Default number of registrations allowed per (course, week) bucket.
pub const DEFAULT_CAPACITY_CEILING: u32 = 6;

/// Configuration for the admission decision engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Maximum registrations per (course, week) bucket for collective
    /// courses. Individual lessons ignore this.
    #[serde(default = "default_capacity_ceiling")]
    pub capacity_ceiling: u32,
}

fn default_capacity_ceiling() -> u32 {
    DEFAULT_CAPACITY_CEILING
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            capacity_ceiling: DEFAULT_CAPACITY_CEILING,
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity_ceiling == 0 {
            return Err(ValidationError::InvalidCapacityCeiling);
        }
        Ok(())
    }
}
