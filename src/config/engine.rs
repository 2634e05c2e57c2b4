//! Transition engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tuning for the event-handling pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// How many times a compare-and-set that lost a race is retried
    /// before the event is rejected as a conflict.
    #[serde(default = "default_cas_retry_limit")]
    pub cas_retry_limit: u32,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cas_retry_limit == 0 {
            return Err(ValidationError::InvalidRetryLimit);
        }
        if self.cas_retry_limit > 10 {
            return Err(ValidationError::RetryLimitTooLarge);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cas_retry_limit: default_cas_retry_limit(),
        }
    }
}

fn default_cas_retry_limit() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_three_retries() {
        assert_eq!(EngineConfig::default().cas_retry_limit, 3);
    }

    #[test]
    fn zero_retries_is_invalid() {
        let config = EngineConfig { cas_retry_limit: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_retry_limit_is_invalid() {
        let config = EngineConfig {
            cas_retry_limit: 50,
        };
        assert!(config.validate().is_err());
    }
}
